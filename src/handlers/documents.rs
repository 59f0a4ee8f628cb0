use crate::dtos::{CreatedResponse, ItemsResponse};
use crate::error::AppError;
use crate::models::DocumentRequirement;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

pub async fn list_procedure_documents(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state.db()?.list_document_requirements(&slug).await?;
    Ok(Json(ItemsResponse { items }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_procedure_document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    WithRejection(Json(mut payload), _): WithRejection<Json<DocumentRequirement>, AppError>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;
    // The path segment wins over whatever the body carried.
    payload.procedure_slug = Some(slug);
    let id = state.db()?.create_document_requirement(&payload).await?;
    tracing::info!(requirement_id = %id, title = %payload.title, "Document requirement created");
    Ok(Json(CreatedResponse { id }))
}
