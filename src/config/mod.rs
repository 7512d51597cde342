// Start of file: /src/config/mod.rs

/*
* Environment variables and the application state built from them.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
