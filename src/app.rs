use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{MotionError, Result};
use crate::install::DiskFs;
use crate::registry::RegistryClient;

/// Everything a command needs, computed once per invocation.
pub struct AppContext {
    /// Directory all install and build paths are relative to.
    pub cwd: PathBuf,
    pub config: Config,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let cwd = resolve_cwd(cli.cwd.as_deref())?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let output_format = if cli.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        Ok(Self {
            cwd,
            config,
            output_format,
            verbosity: cli.verbose,
        })
    }

    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }

    #[must_use]
    pub fn filesystem(&self) -> DiskFs {
        DiskFs::new(&self.cwd)
    }

    /// Registry client, honoring a per-command URL override.
    pub fn registry_client(&self, url_override: Option<&str>) -> Result<RegistryClient> {
        match url_override {
            Some(url) => RegistryClient::new(url, self.config.registry.timeout_secs),
            None => RegistryClient::from_config(&self.config.registry),
        }
    }

    /// Resolve a possibly relative path against the working directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

fn resolve_cwd(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    match explicit {
        Some(dir) => {
            let dir = cwd.join(dir);
            if !dir.is_dir() {
                return Err(MotionError::Config(format!(
                    "working directory {} does not exist",
                    dir.display()
                )));
            }
            Ok(dir)
        }
        None => Ok(cwd),
    }
}
