use std::io;

use thiserror::Error;

/// Library-wide error type for classplan operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// One or more required answers were left empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The completion endpoint failed or answered with an unusable payload.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Value is not one of the fixed options for a selection.
    #[error("Invalid {kind} '{value}': must be one of {expected}")]
    InvalidOption { kind: &'static str, value: String, expected: String },

    /// Reference file not found at path.
    #[error("Reference file not found: {0}")]
    ReferenceNotFound(String),

    /// Reference file has an extension other than txt or pdf.
    #[error("Unsupported reference file '{0}': only .txt and .pdf are accepted")]
    UnsupportedReference(String),

    /// Interactive input could not be read.
    #[error("Failed to read input: {0}")]
    Input(String),

    /// Prompt template failed to render.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Form answers that failed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please answer all the questions. Missing: {}", .fields.join(", "))]
    MissingAnswers { fields: Vec<&'static str> },
}

/// Failure talking to the completion endpoint.
///
/// Messages carry the cause for diagnostics. None of them include the API key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("Failed to generate class plan: request failed: {0}")]
    Transport(String),

    #[error("Failed to generate class plan: endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to generate class plan: malformed response: {0}")]
    MalformedPayload(String),

    #[error("Failed to generate class plan: response contained no choices")]
    EmptyChoices,

    #[error("Failed to generate class plan: first choice has no message content")]
    MissingContent,
}
