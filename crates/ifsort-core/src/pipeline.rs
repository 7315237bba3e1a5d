// ── Discovery pipeline ──
//
// Collection → registry → canonical order, in one sequential pass. Any
// collection failure (under the abort policy) ends the run before a single
// artifact could be rendered.

use tracing::info;

use crate::collector::{self, Introspector};
use crate::config::DiscoveryConfig;
use crate::error::CoreError;
use crate::model::InterfaceRegistry;
use crate::order::{Rename, canonicalize};

/// Canonical registry plus the renames that produced it.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub registry: InterfaceRegistry,
    pub renames: Vec<Rename>,
}

/// Enumerate, probe and canonicalize every matching interface.
pub fn discover(
    introspector: &dyn Introspector,
    config: &DiscoveryConfig,
) -> Result<Discovery, CoreError> {
    let names = collector::list_interface_names(introspector, &config.name_pattern)?;
    let outcomes = collector::collect_records(introspector, &names);
    let mut registry = collector::assemble(outcomes, config.policy)?;

    let renames = canonicalize(&mut registry, config.bus_order);
    info!(
        found = names.len(),
        kept = registry.len(),
        order = %config.bus_order,
        "discovery complete"
    );

    Ok(Discovery { registry, renames })
}
