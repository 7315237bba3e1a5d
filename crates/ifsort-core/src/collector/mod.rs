// ── Interface attribute collector ──
//
// Discovers candidate interfaces through an injected `Introspector` and
// extracts name, hardware address and bus location from its raw text.
//
// Two shapes are offered:
//   - positional: three independent lists joined later by index
//     (`collect_hardware_addresses`, `collect_bus_locations`)
//   - per-adapter: one complete-or-failed outcome per interface
//     (`collect_records` + `assemble`), which the pipeline uses.

mod canned;
pub mod parse;
mod system;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, error, warn};

pub use canned::CannedIntrospector;
pub use parse::{
    compile_name_pattern, find_interface_names, parse_bus_location, parse_hardware_address,
};
pub use system::SystemIntrospector;

use crate::error::CoreError;
use crate::model::{BusLocation, InterfaceRecord, InterfaceRegistry, MacAddress};

// ── Collaborator seam ───────────────────────────────────────────────

/// Which per-interface query to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ProbeMode {
    /// Permanent hardware address (`ethtool -P`).
    HardwareAddress,
    /// Driver and bus information (`ethtool -i`).
    DriverInfo,
}

/// Source of raw interface text. Implementations return the collaborator's
/// stdout, or `CollectorExecution` when it cannot run or exits non-zero.
pub trait Introspector {
    fn list_interfaces(&self) -> Result<String, CoreError>;

    fn introspect(&self, name: &str, mode: ProbeMode) -> Result<String, CoreError>;
}

// ── Failure policy ──────────────────────────────────────────────────

/// What to do with adapters that could not be probed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProbePolicy {
    /// Any failure aborts the run.
    #[default]
    Abort,
    /// Failed adapters are left out and reported.
    Skip,
}

/// Result of probing one adapter.
#[derive(Debug)]
pub enum ProbeOutcome {
    Probed(InterfaceRecord),
    Failed { name: String, cause: CoreError },
}

// ── Name discovery ──────────────────────────────────────────────────

/// Run the lister and pick every name matching `pattern`, in the order listed.
pub fn list_interface_names(
    introspector: &dyn Introspector,
    pattern: &str,
) -> Result<Vec<String>, CoreError> {
    let re = compile_name_pattern(pattern)?;
    let listing = introspector.list_interfaces()?;
    let names = find_interface_names(&re, &listing);
    debug!(?names, pattern, "enumerated interfaces");
    Ok(names)
}

// ── Positional collection ───────────────────────────────────────────

/// One hardware address per name that could be queried.
///
/// A failed invocation is logged and skipped, so the result can be shorter
/// than `names`; `build_registry` rejects such a result. Output without a
/// MAC-shaped token is fatal.
pub fn collect_hardware_addresses(
    introspector: &dyn Introspector,
    names: &[String],
) -> Result<Vec<MacAddress>, CoreError> {
    collect_positional(introspector, names, ProbeMode::HardwareAddress, |name, text| {
        parse_hardware_address(text).ok_or_else(|| CoreError::NoAddressFound {
            interface: name.to_owned(),
        })
    })
}

/// One bus location per name that could be queried. Same failure rules as
/// [`collect_hardware_addresses`].
pub fn collect_bus_locations(
    introspector: &dyn Introspector,
    names: &[String],
) -> Result<Vec<BusLocation>, CoreError> {
    collect_positional(introspector, names, ProbeMode::DriverInfo, |name, text| {
        parse_bus_location(text).ok_or_else(|| CoreError::NoBusLocationFound {
            interface: name.to_owned(),
        })
    })
}

fn collect_positional<T>(
    introspector: &dyn Introspector,
    names: &[String],
    mode: ProbeMode,
    extract: impl Fn(&str, &str) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    let mut values = Vec::with_capacity(names.len());
    for name in names {
        match introspector.introspect(name, mode) {
            Ok(text) => values.push(extract(name, &text)?),
            Err(e) => error!(interface = %name, %mode, error = %e, "introspection failed"),
        }
    }
    Ok(values)
}

// ── Per-adapter collection ──────────────────────────────────────────

/// Query one adapter: address first, then driver info.
pub fn probe_interface(
    introspector: &dyn Introspector,
    name: &str,
) -> Result<InterfaceRecord, CoreError> {
    let text = introspector.introspect(name, ProbeMode::HardwareAddress)?;
    let mac = parse_hardware_address(&text).ok_or_else(|| CoreError::NoAddressFound {
        interface: name.to_owned(),
    })?;

    let text = introspector.introspect(name, ProbeMode::DriverInfo)?;
    let bus = parse_bus_location(&text).ok_or_else(|| CoreError::NoBusLocationFound {
        interface: name.to_owned(),
    })?;

    Ok(InterfaceRecord::new(name, mac, bus))
}

/// Probe every adapter in enumeration order, one outcome per name.
pub fn collect_records(introspector: &dyn Introspector, names: &[String]) -> Vec<ProbeOutcome> {
    names
        .iter()
        .map(|name| match probe_interface(introspector, name) {
            Ok(record) => ProbeOutcome::Probed(record),
            Err(cause) => ProbeOutcome::Failed {
                name: name.clone(),
                cause,
            },
        })
        .collect()
}

/// Turn probe outcomes into a registry according to `policy`.
///
/// `Abort` logs every failure and returns the first one; `Skip` keeps the
/// successful records in enumeration order.
pub fn assemble(
    outcomes: Vec<ProbeOutcome>,
    policy: ProbePolicy,
) -> Result<InterfaceRegistry, CoreError> {
    let mut registry = InterfaceRegistry::new();
    let mut first_failure = None;

    for outcome in outcomes {
        match outcome {
            ProbeOutcome::Probed(record) => registry.push(record),
            ProbeOutcome::Failed { name, cause } => match policy {
                ProbePolicy::Abort => {
                    error!(interface = %name, error = %cause, "probe failed");
                    first_failure.get_or_insert(cause);
                }
                ProbePolicy::Skip => {
                    warn!(interface = %name, error = %cause, "probe failed, skipping adapter");
                }
            },
        }
    }

    match first_failure {
        Some(cause) => Err(cause),
        None => Ok(registry),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::build_registry;

    const LISTING: &str = "eth0: flags=4163<UP>\neth1: flags=4163<UP>\nlo: flags=73<UP>\n";

    fn two_port_host() -> CannedIntrospector {
        CannedIntrospector::new(LISTING)
            .with_interface(
                "eth0",
                "Permanent address: cc:46:d6:4e:d6:69\n",
                "driver: igb\nbus-info: 0000:04:00.1\n",
            )
            .with_interface(
                "eth1",
                "Permanent address: cc:46:d6:4e:d6:68\n",
                "driver: igb\nbus-info: 0000:04:00.0\n",
            )
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn list_interface_names_filters_by_pattern() {
        let intro = two_port_host();
        assert_eq!(
            list_interface_names(&intro, "eth[0-9]+").unwrap(),
            vec!["eth0", "eth1"]
        );
    }

    #[test]
    fn list_interface_names_propagates_lister_failure() {
        let intro = CannedIntrospector::failing_lister("exit status: 1");
        let err = list_interface_names(&intro, "eth[0-9]+").unwrap_err();
        assert!(matches!(err, CoreError::CollectorExecution { .. }));
    }

    #[test]
    fn positional_collection_queries_once_per_name() {
        let intro = two_port_host();
        let n = names(&["eth0", "eth1"]);

        let macs = collect_hardware_addresses(&intro, &n).unwrap();
        let buses = collect_bus_locations(&intro, &n).unwrap();

        assert_eq!(
            macs,
            vec![
                MacAddress::new("cc:46:d6:4e:d6:69"),
                MacAddress::new("cc:46:d6:4e:d6:68")
            ]
        );
        assert_eq!(
            buses,
            vec![BusLocation::new("0000:04:00.1"), BusLocation::new("0000:04:00.0")]
        );
        assert_eq!(
            intro.calls(),
            vec![
                ("eth0".to_owned(), ProbeMode::HardwareAddress),
                ("eth1".to_owned(), ProbeMode::HardwareAddress),
                ("eth0".to_owned(), ProbeMode::DriverInfo),
                ("eth1".to_owned(), ProbeMode::DriverInfo),
            ]
        );
    }

    #[test]
    fn positional_collection_skips_failed_invocations() {
        let intro = two_port_host().with_failure("eth0", ProbeMode::HardwareAddress, "exit 76");
        let n = names(&["eth0", "eth1"]);

        let macs = collect_hardware_addresses(&intro, &n).unwrap();
        let buses = collect_bus_locations(&intro, &n).unwrap();
        assert_eq!(macs.len(), 1);

        let err = build_registry(&n, &macs, &buses).unwrap_err();
        assert!(matches!(err, CoreError::Assembly { addresses: 1, .. }));
    }

    #[test]
    fn positional_collection_fails_on_missing_token() {
        let intro = two_port_host().with_interface("eth1", "Permanent address: not set\n", "");
        let err = collect_hardware_addresses(&intro, &names(&["eth0", "eth1"])).unwrap_err();
        assert!(matches!(err, CoreError::NoAddressFound { ref interface } if interface == "eth1"));
    }

    #[test]
    fn positional_bus_collection_fails_on_missing_token() {
        let intro = two_port_host().with_interface(
            "eth0",
            "Permanent address: cc:46:d6:4e:d6:69\n",
            "driver: virtio_net\nbus-info: \n",
        );
        let err = collect_bus_locations(&intro, &names(&["eth0", "eth1"])).unwrap_err();
        assert!(
            matches!(err, CoreError::NoBusLocationFound { ref interface } if interface == "eth0")
        );
        // the first missing token ends collection
        assert_eq!(intro.calls(), vec![("eth0".to_owned(), ProbeMode::DriverInfo)]);
    }

    #[test]
    fn probe_interface_builds_complete_record() {
        let intro = two_port_host();
        let rec = probe_interface(&intro, "eth1").unwrap();
        assert_eq!(rec.logical_name(), "eth1");
        assert_eq!(rec.hardware_address().as_str(), "cc:46:d6:4e:d6:68");
        assert_eq!(rec.bus_location().as_str(), "0000:04:00.0");
    }

    #[test]
    fn probe_interface_reports_missing_bus_location() {
        let intro = two_port_host().with_interface(
            "eth0",
            "Permanent address: cc:46:d6:4e:d6:69\n",
            "driver: virtio_net\nbus-info: \n",
        );
        let err = probe_interface(&intro, "eth0").unwrap_err();
        assert!(matches!(err, CoreError::NoBusLocationFound { .. }));
    }

    #[test]
    fn probe_interface_stops_after_address_failure() {
        let intro = two_port_host().with_interface("eth0", "", "bus-info: 0000:04:00.1\n");
        assert!(probe_interface(&intro, "eth0").is_err());
        assert_eq!(
            intro.calls(),
            vec![("eth0".to_owned(), ProbeMode::HardwareAddress)]
        );
    }

    #[test]
    fn assemble_abort_returns_first_failure() {
        let intro = two_port_host()
            .with_interface("eth0", "no address here\n", "bus-info: 0000:04:00.1\n")
            .with_failure("eth1", ProbeMode::HardwareAddress, "exit 1");
        let outcomes = collect_records(&intro, &names(&["eth0", "eth1"]));

        let err = assemble(outcomes, ProbePolicy::Abort).unwrap_err();
        assert!(matches!(err, CoreError::NoAddressFound { ref interface } if interface == "eth0"));
    }

    #[test]
    fn assemble_skip_keeps_alignment() {
        let intro = CannedIntrospector::new(LISTING)
            .with_failure("eth0", ProbeMode::HardwareAddress, "exit 1")
            .with_interface(
                "eth1",
                "Permanent address: cc:46:d6:4e:d6:68\n",
                "bus-info: 0000:04:00.0\n",
            );
        let outcomes = collect_records(&intro, &names(&["eth0", "eth1"]));

        let registry = assemble(outcomes, ProbePolicy::Skip).unwrap();
        assert_eq!(registry.len(), 1);
        let rec = &registry.records()[0];
        assert_eq!(rec.logical_name(), "eth1");
        assert_eq!(rec.hardware_address().as_str(), "cc:46:d6:4e:d6:68");
        assert_eq!(rec.bus_location().as_str(), "0000:04:00.0");
    }

    #[test]
    fn probe_policy_parses_case_insensitively() {
        assert_eq!("Skip".parse::<ProbePolicy>().unwrap(), ProbePolicy::Skip);
        assert_eq!(ProbePolicy::Abort.to_string(), "abort");
    }
}
