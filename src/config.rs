use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

pub const DEFAULT_REGISTRY_URL: &str = "https://motion-core.dev";
pub const PROJECT_CONFIG_FILE: &str = "motion.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Load config layers: defaults, then global and project files (or a single
    /// explicit file), then environment overrides.
    pub fn load(explicit_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("MOTION_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(cwd)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("motion/config.toml")),
            None => Ok(None),
        }
    }

    fn load_project(cwd: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&cwd.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| MotionError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw).map_err(|err| {
            MotionError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.registry {
            self.registry.merge(patch);
        }
        if let Some(patch) = patch.install {
            self.install.merge(patch);
        }
        if let Some(patch) = patch.build {
            self.build.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("MOTION_REGISTRY_URL") {
            self.registry.url = value;
        }
        if let Some(value) = env_u64("MOTION_REGISTRY_TIMEOUT_SECS")? {
            self.registry.timeout_secs = value;
        }
        if let Some(values) = env_list("MOTION_INSTALL_ROOTS") {
            self.install.roots = values;
        }
        if let Some(value) = env_string("MOTION_BUILD_SOURCE") {
            self.build.source = PathBuf::from(value);
        }
        if let Some(value) = env_string("MOTION_BUILD_OUT") {
            self.build.out = PathBuf::from(value);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.registry.url.trim().is_empty() {
            return Err(MotionError::Config(
                "registry url is empty; set [registry].url".to_string(),
            ));
        }
        if self.install.roots.is_empty() {
            return Err(MotionError::Config(
                "install roots are empty; set [install].roots".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub url: String,
    /// Request timeout in seconds; 0 disables it.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl RegistryConfig {
    fn merge(&mut self, patch: RegistryPatch) {
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Candidate install roots, most specific first. The last one is the
    /// fallback when none of them exists.
    #[serde(default)]
    pub roots: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            roots: vec![
                "src/components".to_string(),
                "app/components".to_string(),
                "components".to_string(),
            ],
        }
    }
}

impl InstallConfig {
    fn merge(&mut self, patch: InstallPatch) {
        if let Some(value) = patch.roots {
            self.roots = value;
        }
    }

    #[must_use]
    pub fn root_candidates(&self) -> Vec<PathBuf> {
        self.roots.iter().map(PathBuf::from).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub source: PathBuf,
    #[serde(default)]
    pub out: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("components"),
            out: PathBuf::from("public/r"),
        }
    }
}

impl BuildConfig {
    fn merge(&mut self, patch: BuildPatch) {
        if let Some(value) = patch.source {
            self.source = value;
        }
        if let Some(value) = patch.out {
            self.out = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub registry: Option<RegistryPatch>,
    pub install: Option<InstallPatch>,
    pub build: Option<BuildPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RegistryPatch {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InstallPatch {
    pub roots: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BuildPatch {
    pub source: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse::<u64>().map(Some).map_err(|err| {
            MotionError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
