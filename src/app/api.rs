//! API Facade for the application.
//!
//! Glues form submission, configuration, and the HTTP completion client
//! together for the CLI and library callers.

use std::path::Path;

use crate::adapters::completion_client::HttpCompletionClient;
use crate::app::PlanRequester;
use crate::domain::{
    AppError, ChatMessage, ClassPlanConfig, ClassPlanForm, ClassPlanResponse, CompletionSettings,
    EndpointConfig,
};

/// Load completion settings from `path` or `./classplan.toml`.
pub fn load_settings(path: Option<&Path>) -> Result<ClassPlanConfig, AppError> {
    crate::app::config::load_config(path)
}

/// Load the completion endpoint from `LLAMA_BASE_URL` and `LLAMA_API_KEY`.
pub fn load_endpoint() -> Result<EndpointConfig, AppError> {
    EndpointConfig::from_env()
}

/// Submit the form and request a class plan from the endpoint.
///
/// Validation failures return before any network access.
pub fn generate_plan(
    form: &mut ClassPlanForm,
    settings: &CompletionSettings,
    endpoint: &EndpointConfig,
) -> Result<ClassPlanResponse, AppError> {
    let request = form.submit()?;

    let client = HttpCompletionClient::new(endpoint, settings)?;
    PlanRequester::new(client, settings.clone()).generate_plan(&request)
}

/// Submit the form and render the messages that would be sent.
pub fn preview_plan_prompt(form: &mut ClassPlanForm) -> Result<Vec<ChatMessage>, AppError> {
    let request = form.submit()?;
    crate::domain::prompt::build_messages(&request)
}
