use axum::Json;

use crate::models::legal::LegalConfig;

/// GET /api/config
/// Returns the legal constants used by the simulation frontend.
pub async fn get_config() -> Json<LegalConfig> {
    Json(LegalConfig::current())
}
