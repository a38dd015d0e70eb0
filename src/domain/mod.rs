pub mod class_plan;
pub mod configuration;
pub mod error;
pub mod form;
pub mod prompt;

pub use class_plan::{
    ClassLevel, ClassPlanRequest, ClassPlanResponse, Modality, Purpose, ReferenceMaterial,
};
pub use configuration::{ClassPlanConfig, CompletionSettings, EndpointConfig};
pub use error::{AppError, UpstreamError, ValidationError};
pub use form::{ClassPlanForm, FormState};
pub use prompt::{ChatMessage, Role};
