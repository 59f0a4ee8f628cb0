use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Envelope for every list route.
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Document>,
}

/// Envelope for every create route: the store-generated identifier as a string.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct HospitalListParams {
    pub state: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DoctorListParams {
    pub hospital_id: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProcedureSearchParams {
    /// Free-text query matched as a case-insensitive substring of name or slug.
    pub q: Option<String>,
}
