//! Settings file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, ClassPlanConfig};

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "classplan.toml";

/// Load completion settings.
///
/// An explicit `path` must exist. Without one, `./classplan.toml` is read when
/// present and defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<ClassPlanConfig, AppError> {
    let config_path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no {} found, using default settings", DEFAULT_CONFIG_FILE);
                return Ok(ClassPlanConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %config_path.display(), "loading settings");
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}
