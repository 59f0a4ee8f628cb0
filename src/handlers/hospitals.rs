use crate::dtos::{CreatedResponse, HospitalListParams, ItemsResponse};
use crate::error::AppError;
use crate::models::Hospital;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use mongodb::bson::Document;
use validator::Validate;

pub async fn list_hospitals(
    State(state): State<AppState>,
    Query(params): Query<HospitalListParams>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state.db()?.list_hospitals(hospital_filter(&params)).await?;
    Ok(Json(ItemsResponse { items }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_hospital(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Hospital>, AppError>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;
    let id = state.db()?.create_hospital(&payload).await?;
    tracing::info!(hospital_id = %id, name = %payload.name, "Hospital created");
    Ok(Json(CreatedResponse { id }))
}

/// Equality filter over the supplied parameters; absent or empty parameters
/// are left out entirely rather than matched as null.
fn hospital_filter(params: &HospitalListParams) -> Document {
    let mut filter = Document::new();
    if let Some(state) = params.state.as_deref().filter(|s| !s.is_empty()) {
        filter.insert("state", state);
    }
    if let Some(district) = params.district.as_deref().filter(|s| !s.is_empty()) {
        filter.insert("district", district);
    }
    filter
}
