//! Install root resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{MotionError, Result};
use crate::install::fs::InstallFs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSource {
    /// An existing directory matched one of the candidates.
    Detected,
    /// Nothing matched; the last candidate is used and created on demand.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallRoot {
    pub path: PathBuf,
    pub source: RootSource,
}

impl InstallRoot {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for InstallRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Pick the first candidate that exists as a directory, else the last one.
///
/// Probing is read-only; the fallback is not created here.
pub fn resolve_install_root<F: InstallFs + ?Sized>(
    fs: &F,
    candidates: &[PathBuf],
) -> Result<InstallRoot> {
    let Some(fallback) = candidates.last() else {
        return Err(MotionError::Config(
            "no install root candidates configured".to_string(),
        ));
    };

    for candidate in candidates {
        let found = fs.is_dir(candidate);
        debug!(candidate = %candidate.display(), found, "probing install root");
        if found {
            return Ok(InstallRoot {
                path: candidate.clone(),
                source: RootSource::Detected,
            });
        }
    }

    Ok(InstallRoot {
        path: fallback.clone(),
        source: RootSource::Fallback,
    })
}
