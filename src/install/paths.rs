//! Registry path to local path mapping.
//!
//! A registry path such as `components/motion-core/ai-glow-input.tsx` is split
//! into the registry's own grouping label (`components`), the sub-directory to
//! preserve (`motion-core`) and the filename. Only the last two are used
//! locally; the install root replaces the label.
//!
//! Every segment passes [`validate_path_component`] so a manifest can never
//! place a file outside the install root.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::MotionError;
use crate::registry::manifest::FileDescriptor;

/// Errors specific to path policy violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPolicyViolation {
    /// Path contains traversal sequences (.. or .)
    TraversalAttempt { path: String },
    /// Path is absolute instead of registry-relative
    AbsolutePath { path: String },
    /// Path component contains invalid characters
    InvalidComponent { component: String, reason: String },
    /// Path has no filename segment
    MissingFilename { path: String },
}

impl fmt::Display for PathPolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TraversalAttempt { path } => {
                write!(f, "path {path:?} contains traversal sequences")
            }
            Self::AbsolutePath { path } => write!(f, "path {path:?} must be relative"),
            Self::InvalidComponent { component, reason } => {
                write!(f, "invalid path component {component:?}: {reason}")
            }
            Self::MissingFilename { path } => write!(f, "path {path:?} has no filename"),
        }
    }
}

impl std::error::Error for PathPolicyViolation {}

impl From<PathPolicyViolation> for MotionError {
    fn from(violation: PathPolicyViolation) -> Self {
        Self::ValidationFailed(violation.to_string())
    }
}

/// Validate a single path component (filename or directory name).
///
/// Rejects empty components, `.`/`..`, separators and NUL bytes.
pub fn validate_path_component(component: &str) -> Result<(), PathPolicyViolation> {
    if component.is_empty() {
        return Err(PathPolicyViolation::InvalidComponent {
            component: component.to_string(),
            reason: "empty component".to_string(),
        });
    }
    if component.contains('\0') {
        return Err(PathPolicyViolation::InvalidComponent {
            component: component.to_string(),
            reason: "contains null byte".to_string(),
        });
    }
    if component == ".." || component == "." {
        return Err(PathPolicyViolation::TraversalAttempt {
            path: component.to_string(),
        });
    }
    if component.contains('/') || component.contains('\\') {
        return Err(PathPolicyViolation::InvalidComponent {
            component: component.to_string(),
            reason: "contains directory separator".to_string(),
        });
    }
    Ok(())
}

/// Split a registry path on `/`, checking every segment.
fn segments(path: &str) -> Result<Vec<&str>, PathPolicyViolation> {
    if path.starts_with('/') {
        return Err(PathPolicyViolation::AbsolutePath {
            path: path.to_string(),
        });
    }
    let parts = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();
    for part in &parts {
        validate_path_component(part).map_err(|violation| match violation {
            PathPolicyViolation::TraversalAttempt { .. } => {
                PathPolicyViolation::TraversalAttempt {
                    path: path.to_string(),
                }
            }
            other => other,
        })?;
    }
    Ok(parts)
}

/// Directory segments to preserve: those of `target` (or `path` when there is
/// no target) after the first and before the last.
pub fn target_subdir(file: &FileDescriptor) -> Result<Vec<String>, PathPolicyViolation> {
    let basis = file.target.as_deref().unwrap_or(&file.path);
    let parts = segments(basis)?;
    if parts.len() <= 2 {
        return Ok(Vec::new());
    }
    Ok(parts[1..parts.len() - 1]
        .iter()
        .map(|segment| (*segment).to_string())
        .collect())
}

/// On-disk filename: always the last segment of `path`, never of `target`.
pub fn file_name(file: &FileDescriptor) -> Result<String, PathPolicyViolation> {
    segments(&file.path)?
        .last()
        .map(|name| (*name).to_string())
        .ok_or_else(|| PathPolicyViolation::MissingFilename {
            path: file.path.clone(),
        })
}

/// `root` / sub-directory / filename.
pub fn local_install_path(
    root: &Path,
    file: &FileDescriptor,
) -> Result<PathBuf, PathPolicyViolation> {
    let mut path = root.to_path_buf();
    for segment in target_subdir(file)? {
        path.push(segment);
    }
    path.push(file_name(file)?);
    Ok(path)
}
