//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/fxc/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::cli::ConfigCommands;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# fxc - filoxenia console configuration

# Config schema version (do not modify)
version = 1

# Directory holding the entity snapshots exported from the data service
# (bookings.json, properties.json, payments.json)
# data_dir = "/var/lib/filoxenia/snapshots"

# Output preferences
[output]
# color = true   # Enable colors (respects NO_COLOR env)
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding entity snapshot files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_dir: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/fxc/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("FXC_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/fxc
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("fxc"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("fxc"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("FXC_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {e}")))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {e}")))?;

    // No migrations yet; pin the version for forward compatibility.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes a config subcommand. No subcommand defaults to `show`.
pub fn execute(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => execute_show(ctx),
        Some(ConfigCommands::Init) => execute_init(ctx),
        Some(ConfigCommands::Path) => {
            println!("{}", get_config_path()?.display());
            Ok(())
        }
    }
}

/// Executes the config show command.
fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{header}\n");
        }
        println!("Path:     {}", path.display());
        println!("Exists:   {}", path.exists());
        match &config.data_dir {
            Some(dir) => println!("Data dir: {}", dir.display()),
            None => println!("Data dir: (not set)"),
        }
        if let Some(color) = config.output.color {
            println!("Color:    {color}");
        }
    }

    Ok(())
}

/// Executes the config init command: writes the default config if none
/// exists yet.
fn execute_init(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if path.exists() {
        if !ctx.quiet {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {e}")))?;
    }
    fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {e}")))?;

    if !ctx.quiet {
        println!("Created {}", path.display());
    }
    Ok(())
}
