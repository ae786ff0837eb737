pub mod health;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::require_auth;
use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Bearer token required; the middleware inserts the AuthUser extension.
    let protected = Router::new()
        .route("/api/jobs/create", post(handlers::handle_create))
        .route("/api/jobs/my-jobs", get(handlers::handle_my_jobs))
        .route("/api/jobs/:id", put(handlers::handle_update))
        .route("/api/jobs/:id", delete(handlers::handle_delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/jobs/all-jobs", get(handlers::handle_all_jobs))
        .route("/api/jobs/:id", get(handlers::handle_get_job))
        .merge(protected)
        .with_state(state)
}
