//! REST API endpoints for bookmarks

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::api::identity::UserIdentity;
use crate::model::Case;
use crate::service::BookmarkService;

/// Bookmark state for (case, caller)
#[derive(Debug, Serialize, ToSchema)]
pub struct BookmarkStatus {
    pub bookmarked: bool,
}

/// Toggle the caller's bookmark on a case
#[utoipa::path(
    post,
    path = "/api/cases/{id}/bookmark",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Bookmark toggled", body = BookmarkStatus),
        (status = 401, description = "Missing identity"),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookmarks"
)]
#[post("/api/cases/{id}/bookmark")]
pub async fn toggle_bookmark(
    service: web::Data<BookmarkService>,
    identity: UserIdentity,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let bookmarked = service.toggle(path.into_inner(), identity.0).await?;
    Ok(HttpResponse::Ok().json(BookmarkStatus { bookmarked }))
}

/// Check whether the caller has bookmarked a case
#[utoipa::path(
    get,
    path = "/api/cases/{id}/bookmark",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Bookmark state", body = BookmarkStatus),
        (status = 401, description = "Missing identity"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookmarks"
)]
#[get("/api/cases/{id}/bookmark")]
pub async fn check_bookmark(
    service: web::Data<BookmarkService>,
    identity: UserIdentity,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let bookmarked = service.is_bookmarked(path.into_inner(), identity.0).await?;
    Ok(HttpResponse::Ok().json(BookmarkStatus { bookmarked }))
}

/// List the caller's bookmarked cases
#[utoipa::path(
    get,
    path = "/api/me/bookmarks",
    responses(
        (status = 200, description = "Bookmarked cases", body = [Case]),
        (status = 401, description = "Missing identity"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookmarks"
)]
#[get("/api/me/bookmarks")]
pub async fn my_bookmarks(
    service: web::Data<BookmarkService>,
    identity: UserIdentity,
) -> Result<impl Responder, ApiError> {
    let cases = service.list_cases(identity.0).await?;
    Ok(HttpResponse::Ok().json(cases))
}

/// Configure bookmark routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(toggle_bookmark)
        .service(check_bookmark)
        .service(my_bookmarks);
}
