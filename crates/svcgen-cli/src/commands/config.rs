//! `svcgen config`: inspect the active configuration.

use std::path::Path;

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&render_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `cluster.namespace`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let unknown = || CliError::InvalidInput {
        message: format!("Unknown config key '{key}' (try: svcgen config list)"),
    };

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .filter(|v| !v.is_object())
        .cloned()
        .ok_or_else(unknown)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        let get = |key| render_value(&get_config_value(&cfg, key).unwrap());

        assert_eq!(get("cluster.namespace"), "core");
        assert_eq!(get("cluster.container_port"), "8080");
        assert_eq!(get("generation.apps_dir"), "apps");
        assert_eq!(get("generation.name_policy"), "strict");
        assert_eq!(get("output.no_color"), "false");
    }

    #[test]
    fn get_unknown_key_is_user_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "cluster.namspace").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn sections_are_not_values() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "cluster").is_err());
    }
}
