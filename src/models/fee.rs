use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An official fee schedule entry. Part of the data model but not exposed
/// over any HTTP route.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Fee {
    pub hospital_id: Option<String>,
    pub department: Option<String>,
    /// Service or consultation name.
    pub service_name: String,
    #[validate(range(min = 0.0, message = "amount must be non-negative"))]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub effective_from: Option<NaiveDate>,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Fee {
    pub const COLLECTION: &'static str = "fee";
}
