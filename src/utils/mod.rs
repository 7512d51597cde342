// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules like error handling,
    * response types and request logging.
*/

pub mod error_handler;
pub mod request_logger;
pub mod response_handler;

pub use response_handler::{json_response, ApiError};

// End of file: /src/utils/mod.rs
