//! Completion settings loaded from `classplan.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const DEFAULT_MODEL: &str = "Meta-Llama-3.1-8b-Instruct";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassPlanConfig {
    #[serde(default)]
    pub completion: CompletionSettings,
}

impl ClassPlanConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()
    }
}

/// Parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionSettings {
    /// Model identifier passed to the endpoint.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CompletionSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error(format!(
                "completion.temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("completion.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

// Matches reqwest's blocking client default.
fn default_timeout() -> u64 {
    30
}

/// Parse and validate settings from TOML content.
pub fn parse_config_content(content: &str) -> Result<ClassPlanConfig, AppError> {
    let config: ClassPlanConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
