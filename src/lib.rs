//! motion - install animated UI components from a hosted registry.
//!
//! The library exposes the installer pipeline used by the `motion` binary:
//! [`registry`] fetches and generates manifests, [`install`] maps manifest
//! paths onto the local project and writes files.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod registry;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use error::{MotionError, Result};
