pub mod doctors;
pub mod documents;
pub mod health;
pub mod hospitals;
pub mod procedures;

pub use doctors::{create_doctor, list_doctors};
pub use documents::{create_procedure_document, list_procedure_documents};
pub use health::{read_root, test_database};
pub use hospitals::{create_hospital, list_hospitals};
pub use procedures::{create_procedure, list_procedures};
