use crate::infrastructure::config::{app_env, has_database_url};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnv {
    pub app_env: String,
    pub has_database_url: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub env: HealthEnv,
}

/// Static self-report; does not probe the database.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        env: HealthEnv {
            app_env: app_env(),
            has_database_url: has_database_url(),
        },
    })
}
