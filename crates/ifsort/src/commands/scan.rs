//! Scan command: show the canonical naming plan without writing anything.

use serde::Serialize;
use tabled::Tabled;

use ifsort_core::{Discovery, InterfaceRecord, Rename};

use crate::cli::{GlobalOpts, ScanArgs};
use crate::commands::util;
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Plan rows ───────────────────────────────────────────────────────

/// One adapter in canonical order, with the name it was reported under.
#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub name: String,
    pub reported_name: String,
    pub hardware_address: String,
    pub bus_location: String,
}

impl PlanEntry {
    fn new(record: &InterfaceRecord, rename: &Rename) -> Self {
        Self {
            name: record.logical_name().to_owned(),
            reported_name: rename.from.clone(),
            hardware_address: record.hardware_address().to_string(),
            bus_location: record.bus_location().to_string(),
        }
    }

    fn is_change(&self) -> bool {
        self.name != self.reported_name
    }
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "WAS")]
    was: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "BUS")]
    bus: String,
}

/// Pair each canonical record with its rename; both lists share sorted order.
pub fn plan(discovery: &Discovery) -> Vec<PlanEntry> {
    discovery
        .registry
        .iter()
        .zip(&discovery.renames)
        .map(|(record, rename)| PlanEntry::new(record, rename))
        .collect()
}

/// Render the plan in the requested format.
pub fn render_plan(entries: &[PlanEntry], global: &GlobalOpts) -> String {
    let color = output::should_color(&global.color);
    output::render_list(
        &global.output,
        entries,
        |e| PlanRow {
            name: output::paint_name(&e.name, e.is_change(), color),
            was: e.reported_name.clone(),
            mac: e.hardware_address.clone(),
            bus: e.bus_location.clone(),
        },
        |e| e.name.clone(),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ScanArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let discovery_config = config::resolve_discovery(&cfg, &args.discovery)?;
    let discovery = util::discover_system(&discovery_config)?;

    let entries = plan(&discovery);
    output::print_output(&render_plan(&entries, global), global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ifsort_core::{CannedIntrospector, DiscoveryConfig, discover};

    use super::*;

    #[test]
    fn plan_pairs_new_and_reported_names() {
        let intro = CannedIntrospector::new("eth0:\neth1:\n")
            .with_interface("eth0", "cc:46:d6:4e:d6:69", "bus-info: 0000:04:00.1")
            .with_interface("eth1", "cc:46:d6:4e:d6:68", "bus-info: 0000:04:00.0");
        let discovery = discover(&intro, &DiscoveryConfig::default()).unwrap();

        let entries = plan(&discovery);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "eth0");
        assert_eq!(entries[0].reported_name, "eth1");
        assert_eq!(entries[0].hardware_address, "cc:46:d6:4e:d6:68");
        assert!(entries[0].is_change());
        assert_eq!(entries[1].bus_location, "0000:04:00.1");
    }
}
