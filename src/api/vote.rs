//! REST API endpoints for votes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::api::identity::UserIdentity;
use crate::model::{VerdictChoice, VoteStats};
use crate::service::VoteService;

/// Request body for casting a vote
#[derive(Debug, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    pub vote: VerdictChoice,
}

/// Cast or replace the caller's vote on a case
#[utoipa::path(
    post,
    path = "/api/cases/{id}/votes",
    params(("id" = i64, Path, description = "Case ID")),
    request_body = CastVoteRequest,
    responses(
        (status = 200, description = "Vote recorded, updated tally returned", body = VoteStats),
        (status = 400, description = "Invalid vote value"),
        (status = 401, description = "Missing identity"),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "votes"
)]
#[post("/api/cases/{id}/votes")]
pub async fn cast_vote(
    service: web::Data<VoteService>,
    identity: UserIdentity,
    path: web::Path<i64>,
    body: web::Json<CastVoteRequest>,
) -> Result<impl Responder, ApiError> {
    let stats = service
        .cast(path.into_inner(), identity.0, body.vote)
        .await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Get the vote tally for a case
#[utoipa::path(
    get,
    path = "/api/cases/{id}/votes",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Tally retrieved successfully", body = VoteStats),
        (status = 404, description = "Case not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "votes"
)]
#[get("/api/cases/{id}/votes")]
pub async fn get_vote_stats(
    service: web::Data<VoteService>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let stats = service.stats(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Configure vote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(cast_vote).service(get_vote_stats);
}
