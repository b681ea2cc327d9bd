//! REST API endpoints for juror comments

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::Comment;
use crate::service::CommentService;

/// Request body for adding a comment
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub comment: String,
}

/// Add a comment to a case under a freshly generated juror nickname
#[utoipa::path(
    post,
    path = "/api/cases/{id}/comments",
    params(("id" = i64, Path, description = "Case ID")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = Comment),
        (status = 400, description = "Empty comment"),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "comments"
)]
#[post("/api/cases/{id}/comments")]
pub async fn add_comment(
    service: web::Data<CommentService>,
    path: web::Path<i64>,
    body: web::Json<AddCommentRequest>,
) -> Result<impl Responder, ApiError> {
    let comment = service.add(path.into_inner(), &body.comment).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// List comments on a case, oldest first
#[utoipa::path(
    get,
    path = "/api/cases/{id}/comments",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Comments retrieved successfully", body = [Comment]),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "comments"
)]
#[get("/api/cases/{id}/comments")]
pub async fn list_comments(
    service: web::Data<CommentService>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let comments = service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Configure comment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_comment).service(list_comments);
}
