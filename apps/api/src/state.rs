use sqlx::PgPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The pool is the only process-wide handle to the store; it is created on
/// startup and dropped on shutdown, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}
