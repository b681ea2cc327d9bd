//! REST API endpoints for cases

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::ApiError;
use crate::api::identity::UserIdentity;
use crate::db::models::ListCasesQuery;
use crate::model::{Case, CaseInput};
use crate::service::CaseService;

/// Query parameters for listing cases
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCasesParams {
    /// Page number (1-indexed, default: 1)
    pub page: Option<u32>,
    /// Page size (default: 10, max: 100)
    pub page_size: Option<u32>,
    /// Filter by category
    pub category: Option<String>,
}

/// Paginated response for cases
#[derive(Debug, Serialize, ToSchema)]
pub struct CaseListResponse {
    pub cases: Vec<Case>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub total_pages: u32,
}

/// Submit a new case
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CaseInput,
    responses(
        (status = 201, description = "Case created", body = Case),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing identity"),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
#[post("/api/cases")]
pub async fn create_case(
    service: web::Data<CaseService>,
    identity: UserIdentity,
    input: web::Json<CaseInput>,
) -> Result<impl Responder, ApiError> {
    let case = service.create(input.into_inner(), identity.0).await?;
    Ok(HttpResponse::Created().json(case))
}

/// List cases with pagination and an optional category filter
#[utoipa::path(
    get,
    path = "/api/cases",
    params(ListCasesParams),
    responses(
        (status = 200, description = "Cases retrieved successfully", body = CaseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
#[get("/api/cases")]
pub async fn list_cases(
    service: web::Data<CaseService>,
    query: web::Query<ListCasesParams>,
) -> Result<impl Responder, ApiError> {
    let paginated = service
        .list(ListCasesQuery {
            page: query.page,
            page_size: query.page_size,
            category: query.category.clone(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(CaseListResponse {
        cases: paginated.cases,
        page: paginated.page,
        page_size: paginated.page_size,
        total_count: paginated.total_count,
        total_pages: paginated.total_pages,
    }))
}

/// Get a case by ID, counting the view
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Case retrieved successfully", body = Case),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
#[get("/api/cases/{id}")]
pub async fn get_case(
    service: web::Data<CaseService>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let case = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(case))
}

/// Delete a case (submitter only)
#[utoipa::path(
    delete,
    path = "/api/cases/{id}",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 401, description = "Missing identity"),
        (status = 403, description = "Case belongs to another user"),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
#[delete("/api/cases/{id}")]
pub async fn delete_case(
    service: web::Data<CaseService>,
    identity: UserIdentity,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    service.delete(path.into_inner(), identity.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the caller's submitted cases
#[utoipa::path(
    get,
    path = "/api/me/cases",
    responses(
        (status = 200, description = "Cases retrieved successfully", body = [Case]),
        (status = 401, description = "Missing identity"),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
#[get("/api/me/cases")]
pub async fn my_cases(
    service: web::Data<CaseService>,
    identity: UserIdentity,
) -> Result<impl Responder, ApiError> {
    let cases = service.list_by_user(identity.0).await?;
    Ok(HttpResponse::Ok().json(cases))
}

/// Configure case routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_case)
        .service(list_cases)
        .service(get_case)
        .service(delete_case)
        .service(my_cases);
}
