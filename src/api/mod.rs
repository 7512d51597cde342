// Start of file: /src/api/mod.rs

/*
* HTTP surface: instance routes, tenant middleware and the fallback.
*/

pub mod fallback;
pub mod instances;
pub mod middleware;

// End of file: /src/api/mod.rs
