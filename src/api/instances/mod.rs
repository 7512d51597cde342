/*
* Instance API endpoints: list, get, create, update and delete
* over the fixture catalog.
*/

pub mod handler;
pub mod routes;
pub mod validation;

pub use routes::instance_routes;
