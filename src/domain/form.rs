//! Class plan form state and submit validation.

use crate::domain::class_plan::{
    ClassLevel, ClassPlanRequest, Modality, Purpose, ReferenceMaterial,
};
use crate::domain::{AppError, ValidationError};

/// Field names reported when an answer is missing, in form order.
pub const TOPIC_FIELD: &str = "topic";
pub const STUDENTS_FIELD: &str = "students";
pub const DURATION_FIELD: &str = "duration";

/// Returns true iff all three required answers are non-empty.
///
/// Whitespace is not trimmed; `" "` counts as an answer.
pub fn validate(topic: &str, student_count: &str, duration: &str) -> bool {
    missing_fields(topic, student_count, duration).is_empty()
}

/// Names of the required answers that are empty.
pub fn missing_fields(topic: &str, student_count: &str, duration: &str) -> Vec<&'static str> {
    [(TOPIC_FIELD, topic), (STUDENTS_FIELD, student_count), (DURATION_FIELD, duration)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Awaiting submit.
    #[default]
    Idle,
    /// Submit was pressed and validation ran.
    Submitted,
}

/// Transient input state for one class plan.
#[derive(Debug, Clone, Default)]
pub struct ClassPlanForm {
    pub topic: String,
    pub student_count: String,
    pub duration_minutes: String,
    pub level: ClassLevel,
    pub modality: Modality,
    pub purpose: Purpose,
    pub reference_materials: Vec<ReferenceMaterial>,
    state: FormState,
}

impl ClassPlanForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validate the answers and build a request from them.
    ///
    /// The form is `Submitted` afterwards whether or not validation passed.
    pub fn submit(&mut self) -> Result<ClassPlanRequest, AppError> {
        self.state = FormState::Submitted;

        let missing = missing_fields(&self.topic, &self.student_count, &self.duration_minutes);
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "class plan form rejected");
            return Err(ValidationError::MissingAnswers { fields: missing }.into());
        }

        Ok(ClassPlanRequest {
            topic: self.topic.clone(),
            student_count: self.student_count.clone(),
            duration_minutes: self.duration_minutes.clone(),
            level: self.level,
            modality: self.modality,
            purpose: self.purpose,
            reference_materials: self.reference_materials.clone(),
        })
    }

    /// Return to `Idle` so the same answers can be submitted again.
    pub fn reset(&mut self) {
        self.state = FormState::Idle;
    }
}
