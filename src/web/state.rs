use sqlx::PgPool;
use std::sync::Arc;

use newsdesk::config::Settings;
use newsdesk::services::AdminCredentials;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub credentials: AdminCredentials,
    pub rate_limiter: Arc<RateLimiter>,
    pub settings: Settings,
}
