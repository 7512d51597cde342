// Start of file: /src/catalog/mod.rs

/*
* In-memory fixture catalog standing in for a real database backend.
*/

pub mod fixtures;
pub mod model;

pub use fixtures::Catalog;
pub use model::{Connection, Identity, Instance, InstanceStatus, Region, RegionStatus};

// End of file: /src/catalog/mod.rs
