use serde::{Deserialize, Serialize};
use validator::Validate;

/// A government hospital. Optional scalars are stored as null so documents
/// round-trip unchanged through the `hospital` collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Hospital {
    pub name: String,
    /// Ownership level: district/state/central.
    pub level: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be within [-180, 180]"))]
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Emergency helpline or ambulance number.
    pub emergency_contact: Option<String>,
    /// Facility tags e.g. ICU, MRI, 24x7.
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub departments: Vec<String>,
}

impl Hospital {
    pub const COLLECTION: &'static str = "hospital";
}
