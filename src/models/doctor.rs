use serde::{Deserialize, Serialize};
use validator::Validate;

/// A doctor on a hospital's OPD roster. `hospital_id` is a soft reference to a
/// hospital identifier; no existence check is performed on it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Doctor {
    pub name: String,
    pub specialization: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    /// OPD days e.g. Mon, Wed, Fri.
    #[serde(default)]
    pub opd_days: Vec<String>,
    /// OPD timing window e.g. 10:00-13:00.
    pub opd_timings: Option<String>,
    pub photo_url: Option<String>,
    pub hospital_id: Option<String>,
    pub department: Option<String>,
}

impl Doctor {
    pub const COLLECTION: &'static str = "doctor";
}
