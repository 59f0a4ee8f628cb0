use crate::dtos::{CreatedResponse, DoctorListParams, ItemsResponse};
use crate::error::AppError;
use crate::models::Doctor;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use mongodb::bson::Document;
use validator::Validate;

pub async fn list_doctors(
    State(state): State<AppState>,
    Query(params): Query<DoctorListParams>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state.db()?.list_doctors(doctor_filter(&params)).await?;
    Ok(Json(ItemsResponse { items }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_doctor(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Doctor>, AppError>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;
    let id = state.db()?.create_doctor(&payload).await?;
    tracing::info!(doctor_id = %id, name = %payload.name, "Doctor created");
    Ok(Json(CreatedResponse { id }))
}

/// Exact-match filter; hospital_id is compared verbatim, never partially.
fn doctor_filter(params: &DoctorListParams) -> Document {
    let mut filter = Document::new();
    if let Some(hospital_id) = params.hospital_id.as_deref().filter(|s| !s.is_empty()) {
        filter.insert("hospital_id", hospital_id);
    }
    if let Some(department) = params.department.as_deref().filter(|s| !s.is_empty()) {
        filter.insert("department", department);
    }
    filter
}
