//! Registry-driven file installation.

pub mod advice;
pub mod fs;
pub mod installer;
pub mod paths;
pub mod root;

pub use advice::{DependencyAdvice, PackageManager};
pub use fs::{DiskFs, InstallFs};
pub use installer::{FileOutcome, FileReport, InstallOptions, InstallReport, Installer};
pub use root::{InstallRoot, RootSource, resolve_install_root};
