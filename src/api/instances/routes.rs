// Instance route definitions

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::api::middleware::tenant_auth_middleware;
use crate::config::state::AppState;
use super::handler;

pub const INSTANCES_PATH: &str = "/instances";
pub const INSTANCE_PATH_PREFIX: &str = "/instances/";

/// Creates router with all instance endpoints, every one behind tenant authorization
pub fn instance_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            INSTANCES_PATH,
            get(handler::list_instances_handler).post(handler::create_instance_handler),
        )
        .route(
            "/instances/{id}",
            get(handler::get_instance_handler)
                .patch(handler::update_instance_handler)
                .delete(handler::delete_instance_handler),
        )
        .route_layer(from_fn_with_state(state, tenant_auth_middleware))
}
