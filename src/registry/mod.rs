//! Component registry: manifest model, HTTP client and manifest generation.

pub mod builder;
pub mod client;
pub mod manifest;

pub use builder::{BuildReport, IndexEntry, build_registry};
pub use client::{ManifestSource, RegistryClient};
pub use manifest::{FileDescriptor, Manifest};
