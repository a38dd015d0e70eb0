//! Chat completion client port definition.

use serde::Serialize;

use crate::domain::{AppError, ChatMessage};

/// Body of a chat-completion call.
///
/// Only the model, the messages, and the temperature are sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// Port for chat-completion endpoints.
pub trait CompletionClient {
    /// Send one request and return the first choice's message content.
    ///
    /// Fails with [`AppError::Upstream`] for transport errors, non-success
    /// statuses, and payloads without usable content.
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for &T {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

impl<T: CompletionClient + ?Sized> CompletionClient for Box<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}
