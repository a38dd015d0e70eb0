//! Reference material handles.
//!
//! A reference is only ever a name. File bytes are not read, so the model sees
//! which documents the teacher attached but not what they contain.

use std::fmt;
use std::path::Path;

use crate::domain::AppError;

const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

/// Opaque handle to an attached reference document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMaterial {
    name: String,
}

impl ReferenceMaterial {
    /// Create a handle from a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a handle for a file on disk.
    ///
    /// The file must exist and carry a `.txt` or `.pdf` extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let display = path.display().to_string();

        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)));
        if !accepted {
            return Err(AppError::UnsupportedReference(display));
        }

        if !path.is_file() {
            return Err(AppError::ReferenceNotFound(display));
        }

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::UnsupportedReference(display.clone()))?;

        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ReferenceMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Render the references the way the prompt shows them: names joined by
/// `", "`, or the empty string when nothing was attached.
pub fn render_references(references: &[ReferenceMaterial]) -> String {
    references.iter().map(ReferenceMaterial::name).collect::<Vec<_>>().join(", ")
}
