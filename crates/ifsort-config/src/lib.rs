//! Configuration for the ifsort CLI.
//!
//! TOML file + `IFSORT_` environment layering, and translation to
//! `ifsort_core::DiscoveryConfig`. Core never reads config files; this crate
//! is the only place that does.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ifsort_core::{
    BusOrder, CommandSpec, DEFAULT_NAME_PATTERN, DiscoveryConfig, ProbeCommand, ProbePolicy,
};

/// Prefix for environment overrides. Nested keys are split on `__`,
/// e.g. `IFSORT_DISCOVERY__BUS_ORDER=numeric`.
pub const ENV_PREFIX: &str = "IFSORT_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: Discovery,

    #[serde(default)]
    pub output: Output,
}

/// How interfaces are found and ordered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Discovery {
    /// Regex selecting interface names from the lister output.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Lister argv, e.g. `["ifconfig", "-a"]`.
    #[serde(default = "default_list_command")]
    pub list_command: Vec<String>,

    /// Per-interface introspection program.
    #[serde(default = "default_probe_program")]
    pub probe_program: String,

    #[serde(default = "default_address_flag")]
    pub address_flag: String,

    #[serde(default = "default_driver_flag")]
    pub driver_flag: String,

    /// `abort` or `skip`.
    #[serde(default)]
    pub on_probe_failure: ProbePolicy,

    /// `lexical` or `numeric`.
    #[serde(default)]
    pub bus_order: BusOrder,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            list_command: default_list_command(),
            probe_program: default_probe_program(),
            address_flag: default_address_flag(),
            driver_flag: default_driver_flag(),
            on_probe_failure: ProbePolicy::default(),
            bus_order: BusOrder::default(),
        }
    }
}

fn default_pattern() -> String {
    DEFAULT_NAME_PATTERN.into()
}
fn default_list_command() -> Vec<String> {
    vec!["ifconfig".into(), "-a".into()]
}
fn default_probe_program() -> String {
    ProbeCommand::default().program
}
fn default_address_flag() -> String {
    ProbeCommand::default().address_flag
}
fn default_driver_flag() -> String {
    ProbeCommand::default().driver_flag
}

/// Where artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Output {
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    #[serde(default = "default_ifcfg_dir")]
    pub ifcfg_dir: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            ifcfg_dir: default_ifcfg_dir(),
        }
    }
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from("/etc/udev/rules.d")
}
fn default_ifcfg_dir() -> PathBuf {
    PathBuf::from("/etc/sysconfig/network-scripts")
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "ifsort", "ifsort").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ifsort");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load defaults, then the TOML file at `path` (if present), then env.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Resolution ──────────────────────────────────────────────────────

impl Config {
    /// Translate the file-level settings into a core `DiscoveryConfig`.
    pub fn discovery_config(&self) -> Result<DiscoveryConfig, ConfigError> {
        let d = &self.discovery;

        let lister =
            CommandSpec::from_argv(&d.list_command).ok_or_else(|| ConfigError::Validation {
                field: "discovery.list_command".into(),
                reason: "must name at least the program to run".into(),
            })?;

        if d.probe_program.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "discovery.probe_program".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(DiscoveryConfig {
            name_pattern: d.pattern.clone(),
            lister,
            probe: ProbeCommand {
                program: d.probe_program.clone(),
                address_flag: d.address_flag.clone(),
                driver_flag: d.driver_flag.clone(),
            },
            policy: d.on_probe_failure,
            bus_order: d.bus_order,
        })
    }
}
