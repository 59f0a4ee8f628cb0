use crate::dtos::{CreatedResponse, ItemsResponse, ProcedureSearchParams};
use crate::error::AppError;
use crate::models::Procedure;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use mongodb::bson::{doc, Document};
use validator::Validate;

pub async fn list_procedures(
    State(state): State<AppState>,
    Query(params): Query<ProcedureSearchParams>,
) -> Result<Json<ItemsResponse>, AppError> {
    let filter = procedure_filter(params.q.as_deref());
    let items = state.db()?.list_procedures(filter).await?;
    Ok(Json(ItemsResponse { items }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_procedure(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Procedure>, AppError>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;
    let id = state.db()?.create_procedure(&payload).await?;
    tracing::info!(procedure_id = %id, name = %payload.name, "Procedure created");
    Ok(Json(CreatedResponse { id }))
}

/// Naive text search: a case-insensitive substring match against name or
/// slug. No query returns everything.
fn procedure_filter(q: Option<&str>) -> Document {
    match q {
        Some(q) if !q.is_empty() => doc! {
            "$or": [
                { "name": { "$regex": q, "$options": "i" } },
                { "slug": { "$regex": q, "$options": "i" } },
            ]
        },
        _ => Document::new(),
    }
}
