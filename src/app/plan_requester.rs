//! Turns a validated class plan request into one completion call.

use crate::domain::prompt::build_messages;
use crate::domain::{AppError, ClassPlanRequest, ClassPlanResponse, CompletionSettings};
use crate::ports::{CompletionClient, CompletionRequest};

/// Sends class plan requests through an injected completion client.
pub struct PlanRequester<C: CompletionClient> {
    client: C,
    settings: CompletionSettings,
}

impl<C: CompletionClient> PlanRequester<C> {
    pub fn new(client: C, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    /// Build the two-message prompt, send it, and return the first choice's text.
    ///
    /// Blocks until the endpoint answers. Upstream failures are not retried.
    pub fn generate_plan(&self, request: &ClassPlanRequest) -> Result<ClassPlanResponse, AppError> {
        let completion_request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: build_messages(request)?,
            temperature: self.settings.temperature,
        };

        tracing::debug!(
            model = %completion_request.model,
            temperature = completion_request.temperature,
            references = request.reference_materials.len(),
            "sending class plan request"
        );

        match self.client.complete(&completion_request) {
            Ok(text) => {
                tracing::info!(chars = text.chars().count(), "class plan generated");
                Ok(ClassPlanResponse::new(text))
            }
            Err(err) => {
                tracing::debug!(error = %err, "class plan request failed");
                Err(err)
            }
        }
    }
}
