use serde::{Deserialize, Serialize};
use validator::Validate;

/// A medical procedure with patient-facing guidance. Cost bounds are each
/// non-negative; min <= max is deliberately not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Procedure {
    /// Procedure code if available.
    pub code: Option<String>,
    pub name: String,
    /// URL-friendly identifier, referenced by document requirements.
    pub slug: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub pre_op_instructions: Vec<String>,
    #[serde(default)]
    pub recovery_tips: Vec<String>,
    #[validate(range(min = 0.0, message = "estimated_cost_min must be non-negative"))]
    pub estimated_cost_min: Option<f64>,
    #[validate(range(min = 0.0, message = "estimated_cost_max must be non-negative"))]
    pub estimated_cost_max: Option<f64>,
}

impl Procedure {
    pub const COLLECTION: &'static str = "procedure";
}
