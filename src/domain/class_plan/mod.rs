//! Class plan request and response models.

mod options;
mod reference;

pub use options::{ClassLevel, Modality, Purpose};
pub use reference::{ReferenceMaterial, render_references};

/// Everything the teacher supplied for one plan.
///
/// Free-text answers are kept exactly as entered. Only
/// [`ClassPlanForm::submit`](crate::domain::ClassPlanForm::submit) builds one,
/// so all three are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPlanRequest {
    pub topic: String,
    pub student_count: String,
    pub duration_minutes: String,
    pub level: ClassLevel,
    pub modality: Modality,
    pub purpose: Purpose,
    pub reference_materials: Vec<ReferenceMaterial>,
}

/// Generated plan text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPlanResponse {
    pub text: String,
}

impl ClassPlanResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
