pub mod health;
pub mod http_handlers;

use actix_web::{error, web, HttpResponse};

/// Registers every API route under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(http_handlers::list_posts))
                    .route("", web::post().to(http_handlers::create_post))
                    .route("/{id}", web::get().to(http_handlers::get_post))
                    .route("/{id}", web::put().to(http_handlers::update_post))
                    .route("/{id}", web::delete().to(http_handlers::delete_post)),
            ),
    );
}

// Malformed bodies get the same `{"error": ...}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!("Rejected request body: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
