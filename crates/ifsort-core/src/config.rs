// ── Runtime discovery configuration ──
//
// These types describe *how* to discover and order interfaces. They never
// touch disk: the CLI builds a `DiscoveryConfig` from its config layers and
// hands it in.

use serde::{Deserialize, Serialize};

use crate::collector::ProbePolicy;
use crate::order::BusOrder;

/// Default pattern for candidate interface names.
pub const DEFAULT_NAME_PATTERN: &str = "eth[0-9]+";

/// An external program plus its fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from an argv-style list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }
}

/// Per-interface introspection program and the flags selecting each query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: String,
    /// Flag requesting the permanent hardware address.
    pub address_flag: String,
    /// Flag requesting driver and bus information.
    pub driver_flag: String,
}

impl Default for ProbeCommand {
    fn default() -> Self {
        Self {
            program: "ethtool".into(),
            address_flag: "-P".into(),
            driver_flag: "-i".into(),
        }
    }
}

/// Everything the discovery pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Regex selecting candidate interface names from the lister output.
    pub name_pattern: String,
    /// Interface lister invocation.
    pub lister: CommandSpec,
    /// Per-interface introspector invocation.
    pub probe: ProbeCommand,
    /// What to do when one adapter cannot be probed.
    pub policy: ProbePolicy,
    /// Comparator used for canonical ordering.
    pub bus_order: BusOrder,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            name_pattern: DEFAULT_NAME_PATTERN.into(),
            lister: CommandSpec::new("ifconfig", ["-a"]),
            probe: ProbeCommand::default(),
            policy: ProbePolicy::default(),
            bus_order: BusOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_tools() {
        let cfg = DiscoveryConfig::default();
        assert_eq!(cfg.lister.program, "ifconfig");
        assert_eq!(cfg.lister.args, vec!["-a".to_owned()]);
        assert_eq!(cfg.probe.program, "ethtool");
        assert_eq!(cfg.policy, ProbePolicy::Abort);
        assert_eq!(cfg.bus_order, BusOrder::Lexical);
    }

    #[test]
    fn command_spec_from_argv() {
        let argv = vec!["ip".to_owned(), "-o".to_owned(), "link".to_owned()];
        let spec = CommandSpec::from_argv(&argv);
        assert_eq!(spec, Some(CommandSpec::new("ip", ["-o", "link"])));
        assert_eq!(CommandSpec::from_argv(&[]), None);
    }
}
