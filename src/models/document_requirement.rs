use serde::{Deserialize, Serialize};
use validator::Validate;

/// A document a patient must bring for a procedure or admission.
/// `procedure_slug` is a soft reference to `Procedure::slug`; on the nested
/// create route it is overwritten with the path segment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentRequirement {
    pub procedure_slug: Option<String>,
    /// Document title e.g. Government ID.
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_mandatory")]
    pub mandatory: bool,
}

fn default_mandatory() -> bool {
    true
}

impl DocumentRequirement {
    pub const COLLECTION: &'static str = "documentrequirement";
}
