//! Shared test utilities for motion.


use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MotionError, Result};
use crate::install::fs::InstallFs;
use crate::registry::client::ManifestSource;
use crate::registry::manifest::Manifest;

/// In-memory manifest source that counts how often it was asked.
pub struct StaticSource {
    response: Box<dyn Fn() -> Result<Manifest>>,
    calls: Cell<usize>,
}

impl StaticSource {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            response: Box::new(move || {
                manifest.validate()?;
                Ok(manifest.clone())
            }),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: impl Fn() -> MotionError + 'static) -> Self {
        Self {
            response: Box::new(move || Err(error())),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ManifestSource for StaticSource {
    fn fetch(&self, _component: &str) -> Result<Manifest> {
        self.calls.set(self.calls.get() + 1);
        (self.response)()
    }
}

/// Wraps another filesystem and fails every write to one path.
pub struct FailingFs<F> {
    inner: F,
    fail_on: PathBuf,
}

impl<F: InstallFs> FailingFs<F> {
    pub fn new(inner: F, fail_on: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            fail_on: fail_on.into(),
        }
    }
}

impl<F: InstallFs> InstallFs for FailingFs<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if path == self.fail_on {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied (simulated)",
            ));
        }
        self.inner.write(path, contents)
    }
}
