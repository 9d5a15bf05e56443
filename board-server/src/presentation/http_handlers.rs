use crate::application::BoardService;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::DomainError;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

// Структура для ответа об успешном удалении
#[derive(serde::Serialize)]
struct MessageResponse {
    message: &'static str,
}

// Преобразование DomainError в HttpResponse.
// Для 5xx клиент получает только общее сообщение, детали уходят в лог.
fn error_to_response(err: DomainError, failure_message: &str) -> HttpResponse {
    let status_code = err.to_status_code();

    match status_code {
        400 => HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() })),
        404 => HttpResponse::NotFound().json(serde_json::json!({ "error": err.to_string() })),
        _ => {
            tracing::error!("{}: {}", failure_message, err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": failure_message }))
        }
    }
}

pub async fn list_posts(board_service: web::Data<Arc<BoardService>>) -> impl Responder {
    tracing::info!("Listing posts");

    match board_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err, "Failed to fetch posts"),
    }
}

pub async fn get_post(
    board_service: web::Data<Arc<BoardService>>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Getting post with id={}", post_id);

    match board_service.get_post(&post_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err, "Failed to fetch post"),
    }
}

pub async fn create_post(
    board_service: web::Data<Arc<BoardService>>,
    post_data: web::Json<CreatePostRequest>,
) -> impl Responder {
    tracing::info!("Creating post");

    match board_service.create_post(post_data.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err, "Failed to create post"),
    }
}

pub async fn update_post(
    board_service: web::Data<Arc<BoardService>>,
    path: web::Path<String>,
    post_data: web::Json<UpdatePostRequest>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Updating post id={}", post_id);

    match board_service
        .update_post(&post_id, post_data.into_inner())
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err, "Failed to update post"),
    }
}

pub async fn delete_post(
    board_service: web::Data<Arc<BoardService>>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Deleting post id={}", post_id);

    match board_service.delete_post(&post_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Post deleted successfully",
        }),
        Err(err) => error_to_response(err, "Failed to delete post"),
    }
}
