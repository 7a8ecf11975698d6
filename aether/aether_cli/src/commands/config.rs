//! The `config` command: print the effective configuration.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use super::run::{resolve_config, RunArgs};

/// Output format for the config command
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Pretty-printed JSON
    #[default]
    Json,

    /// TOML, loadable with `--config`
    Toml,
}

/// Arguments for the config command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Output format
    #[clap(long, value_enum, default_value_t = ConfigFormat::Json)]
    pub format: ConfigFormat,

    /// Overrides applied the same way `run` applies them
    #[clap(flatten)]
    pub overrides: RunArgs,
}

/// Render the effective configuration.
pub fn render_config(config_path: Option<&Path>, args: &ConfigArgs) -> Result<String> {
    let config = resolve_config(config_path, &args.overrides)?;
    let text = match args.format {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(&config).context("Failed to encode configuration as JSON")?
        }
        ConfigFormat::Toml => {
            let text = toml::to_string_pretty(&config)
                .context("Failed to encode configuration as TOML")?;
            text.trim_end().to_string()
        }
    };
    Ok(text)
}

/// Implementation of the config command
pub fn execute_config(config_path: Option<&Path>, args: &ConfigArgs) -> Result<()> {
    println!("{}", render_config(config_path, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(format: ConfigFormat) -> ConfigArgs {
        ConfigArgs {
            format,
            overrides: RunArgs {
                data_dir: Some(PathBuf::from("/srv/aether")),
                ..RunArgs::default()
            },
        }
    }

    #[test]
    fn test_json_output() {
        let text = render_config(None, &args(ConfigFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["host"]["data_dir"], "/srv/aether");
        assert_eq!(value["logging"]["level"], "warn");
        assert_eq!(value["host"]["tick_interval_ms"], 250);
    }

    #[test]
    fn test_toml_output() {
        let text = render_config(None, &args(ConfigFormat::Toml)).unwrap();
        assert!(text.contains("[host]"));
        assert!(text.contains("data_dir = \"/srv/aether\""));
    }
}
