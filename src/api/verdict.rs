//! REST API endpoints for verdict generation and lookup

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::Verdict;
use crate::service::VerdictService;

/// Request body for verdict generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateVerdictRequest {
    pub case_id: i64,
}

/// Envelope returned by the generation endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateVerdictResponse {
    pub data: Verdict,
    pub error: Option<String>,
    pub message: String,
}

/// Generate a verdict for a case
///
/// Idempotent: if the case already has a verdict it is returned without a
/// second model call.
#[utoipa::path(
    post,
    path = "/api/verdicts/generate",
    request_body = GenerateVerdictRequest,
    responses(
        (status = 200, description = "Verdict generated", body = GenerateVerdictResponse),
        (status = 400, description = "Missing or invalid case_id"),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Model returned no usable verdict")
    ),
    tag = "verdicts"
)]
#[post("/api/verdicts/generate")]
pub async fn generate_verdict(
    service: web::Data<VerdictService>,
    body: web::Json<GenerateVerdictRequest>,
) -> Result<impl Responder, ApiError> {
    let verdict = service.generate_for_case(body.case_id).await?;

    Ok(HttpResponse::Ok().json(GenerateVerdictResponse {
        data: verdict,
        error: None,
        message: "Verdict generated successfully".to_string(),
    }))
}

/// Get the verdict for a case
#[utoipa::path(
    get,
    path = "/api/cases/{id}/verdict",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Verdict retrieved successfully", body = Verdict),
        (status = 404, description = "No verdict for this case"),
        (status = 500, description = "Internal server error")
    ),
    tag = "verdicts"
)]
#[get("/api/cases/{id}/verdict")]
pub async fn get_case_verdict(
    service: web::Data<VerdictService>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let verdict = service.get_for_case(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(verdict))
}

/// Configure verdict routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_verdict).service(get_case_verdict);
}
