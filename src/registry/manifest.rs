//! Registry manifest model.
//!
//! A manifest is the JSON document served at `<registry>/r/<component>.json`.
//! It lists the source files of one component plus advisory dependencies that
//! the user installs separately.

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// One installable file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Registry-relative source path, e.g. `components/motion-core/ai-glow-input.tsx`.
    pub path: String,
    /// Suggested install path; only its inner directory segments are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: None,
            content: content.into(),
            kind: String::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

impl Manifest {
    /// Parse and validate a manifest body.
    pub fn parse(body: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(body)
            .map_err(|err| MotionError::InvalidManifest(format!("malformed JSON: {err}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the invariants the installer relies on.
    ///
    /// A manifest without files, or with a file lacking a path or content,
    /// rejects the whole request so nothing is half-installed.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(MotionError::InvalidManifest(
                "manifest contains no files".to_string(),
            ));
        }

        for (idx, file) in self.files.iter().enumerate() {
            if file.path.trim().is_empty() {
                return Err(MotionError::InvalidManifest(format!(
                    "file #{} has an empty path",
                    idx + 1
                )));
            }
            if file.content.is_empty() {
                return Err(MotionError::InvalidManifest(format!(
                    "file {} has no content",
                    file.path
                )));
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
