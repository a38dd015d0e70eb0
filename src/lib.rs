//! classplan: turn a teacher's answers into an LLM-generated class plan.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::completion_client::HttpCompletionClient;
pub use app::PlanRequester;
pub use app::api::{generate_plan, load_endpoint, load_settings, preview_plan_prompt};
pub use domain::form::{missing_fields, validate};
pub use domain::{
    AppError, ChatMessage, ClassLevel, ClassPlanConfig, ClassPlanForm, ClassPlanRequest,
    ClassPlanResponse, CompletionSettings, EndpointConfig, FormState, Modality, Purpose,
    ReferenceMaterial, Role, UpstreamError, ValidationError,
};
pub use ports::{CompletionClient, CompletionRequest};
