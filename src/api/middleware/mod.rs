pub mod tenant;

pub use tenant::{authorize, tenant_auth_middleware};
