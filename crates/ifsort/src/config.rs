//! CLI configuration: a thin wrapper around `ifsort_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` and per-command flag overrides
//! (--config, --pattern, --bus-order, --rules-dir, ...).

use std::path::PathBuf;

use ifsort_core::{BusOrder, DiscoveryConfig, ProbePolicy};

use crate::cli::{BusOrderArg, DiscoveryArgs, GlobalOpts, ProbeFailureArg};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use ifsort_config::{Config, load_config_from, save_config_to};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Config file path: `--config` / `IFSORT_CONFIG` first, then the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(ifsort_config::config_path)
}

/// Load the layered config for this invocation.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(load_config_from(&config_path(global))?)
}

/// Translate config + command flags into a core `DiscoveryConfig`.
///
/// Flag overrides take priority over config values.
pub fn resolve_discovery(cfg: &Config, args: &DiscoveryArgs) -> Result<DiscoveryConfig, CliError> {
    let mut discovery = cfg.discovery_config()?;

    if let Some(ref pattern) = args.pattern {
        discovery.name_pattern.clone_from(pattern);
    }
    if let Some(order) = args.bus_order {
        discovery.bus_order = match order {
            BusOrderArg::Lexical => BusOrder::Lexical,
            BusOrderArg::Numeric => BusOrder::Numeric,
        };
    }
    if let Some(policy) = args.on_probe_failure {
        discovery.policy = match policy {
            ProbeFailureArg::Abort => ProbePolicy::Abort,
            ProbeFailureArg::Skip => ProbePolicy::Skip,
        };
    }

    Ok(discovery)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut cfg = Config::default();
        cfg.discovery.bus_order = BusOrder::Numeric;
        let args = DiscoveryArgs {
            pattern: Some("en[a-z0-9]+".into()),
            bus_order: Some(BusOrderArg::Lexical),
            on_probe_failure: Some(ProbeFailureArg::Skip),
        };

        let resolved = resolve_discovery(&cfg, &args).unwrap();
        assert_eq!(resolved.name_pattern, "en[a-z0-9]+");
        assert_eq!(resolved.bus_order, BusOrder::Lexical);
        assert_eq!(resolved.policy, ProbePolicy::Skip);
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let mut cfg = Config::default();
        cfg.discovery.bus_order = BusOrder::Numeric;
        let args = DiscoveryArgs {
            pattern: None,
            bus_order: None,
            on_probe_failure: None,
        };

        let resolved = resolve_discovery(&cfg, &args).unwrap();
        assert_eq!(resolved.bus_order, BusOrder::Numeric);
        assert_eq!(resolved.policy, ProbePolicy::Abort);
    }
}
