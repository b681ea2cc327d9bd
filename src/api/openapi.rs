//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

/// OpenAPI documentation for the LoveCourt API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LoveCourt API",
        description = "Romantic conflict cases with AI-generated verdicts, votes, comments and bookmarks"
    ),
    paths(
        crate::api::case::create_case,
        crate::api::case::list_cases,
        crate::api::case::get_case,
        crate::api::case::delete_case,
        crate::api::case::my_cases,
        crate::api::verdict::generate_verdict,
        crate::api::verdict::get_case_verdict,
        crate::api::vote::cast_vote,
        crate::api::vote::get_vote_stats,
        crate::api::bookmark::toggle_bookmark,
        crate::api::bookmark::check_bookmark,
        crate::api::bookmark::my_bookmarks,
        crate::api::comment::add_comment,
        crate::api::comment::list_comments,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::model::Case,
        crate::model::CaseInput,
        crate::model::CaseStatus,
        crate::model::Verdict,
        crate::model::VerdictChoice,
        crate::model::VoteStats,
        crate::model::Comment,
        crate::api::case::CaseListResponse,
        crate::api::verdict::GenerateVerdictRequest,
        crate::api::verdict::GenerateVerdictResponse,
        crate::api::vote::CastVoteRequest,
        crate::api::bookmark::BookmarkStatus,
        crate::api::comment::AddCommentRequest,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "cases", description = "Case submission and browsing"),
        (name = "verdicts", description = "AI verdict generation"),
        (name = "votes", description = "Juror voting"),
        (name = "bookmarks", description = "Case bookmarks"),
        (name = "comments", description = "Juror comments"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
