//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ClusterSettings`]
//! and [`NamePolicy`] it carries.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `SVCGEN_<SECTION>__<KEY>`
//!    (e.g. `SVCGEN_CLUSTER__NAMESPACE=payments`)
//! 3. Config file (`--config`, else [`AppConfig::config_path`]); optional
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use svcgen_core::{
    application::GenerationRequest,
    domain::{ClusterSettings, NamePolicy},
};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how services are generated.
    pub generation: GenerationConfig,
    /// Values interpolated into the manifests.
    pub cluster: ClusterSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub apps_dir: PathBuf,
    pub name_policy: NamePolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            apps_dir: PathBuf::from(GenerationRequest::DEFAULT_APPS_DIR),
            name_policy: NamePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// A missing file is not an error, so `--config` may name a file that
    /// `svcgen init` has not written yet.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        // Defaults come from `#[serde(default)]`, so every layer may be partial.
        let config: Self = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an invalid shape")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values no generation could succeed with.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.cluster
            .validate()
            .context("Invalid [cluster] configuration")?;

        if self.generation.apps_dir.as_os_str().is_empty() {
            anyhow::bail!("[generation] apps_dir cannot be empty");
        }

        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "homelab", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }

    /// Path the active configuration was (or would be) read from.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_homelab_cluster() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generation.apps_dir, PathBuf::from("apps"));
        assert_eq!(cfg.generation.name_policy, NamePolicy::Strict);
        assert_eq!(cfg.cluster.namespace, "core");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load(Some(&tmp.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg.cluster, ClusterSettings::default());
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("svcgen.toml");
        fs::write(
            &path,
            "[generation]\nname_policy = \"permissive\"\n\n[cluster]\ndomain = \"example.org\"\ncontainer_port = 9000\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.generation.name_policy, NamePolicy::Permissive);
        assert_eq!(cfg.cluster.domain, "example.org");
        assert_eq!(cfg.cluster.container_port, 9000);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.cluster.namespace, "core");
        assert_eq!(cfg.generation.apps_dir, PathBuf::from("apps"));
    }

    #[test]
    fn invalid_cluster_values_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("svcgen.toml");
        fs::write(&path, "[cluster]\nnamespace = \"Not Valid\"\n").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("namespace"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("svcgen.toml");
        fs::write(&path, "[cluster\nnamespace = ").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
