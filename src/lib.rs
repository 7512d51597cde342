// Library root for the mock managed-database control plane API

pub mod api;
pub mod catalog;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::catalog::Catalog;
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::utils::response_handler::ApiError;
