pub mod doctor;
pub mod document_requirement;
pub mod fee;
pub mod hospital;
pub mod procedure;

pub use doctor::Doctor;
pub use document_requirement::DocumentRequirement;
pub use fee::Fee;
pub use hospital::Hospital;
pub use procedure::Procedure;
