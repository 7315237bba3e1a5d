//! Deterministic, PCI-ordered network interface naming.
//!
//! This crate owns the discovery-to-renaming pipeline and the artifacts it
//! feeds:
//!
//! - **Collector** ([`collector`]): asks an [`Introspector`] for the
//!   interface listing and per-interface text, and extracts name, MAC address
//!   and PCI bus location from it. [`SystemIntrospector`] shells out to
//!   `ifconfig` / `ethtool`; [`CannedIntrospector`] replays fixed text.
//!
//! - **Registry** ([`model`]): [`InterfaceRecord`]s in enumeration order,
//!   either assembled per adapter ([`collector::assemble`]) or joined
//!   positionally ([`build_registry`]).
//!
//! - **Canonical order** ([`order`]): [`canonicalize`] sorts by bus location
//!   under a [`BusOrder`] and renames records `eth0`, `eth1`, ...
//!
//! - **Renderer** ([`render`]): udev `70-persistent-net.rules` and one
//!   `ifcfg-<name>` per adapter.
//!
//! [`discover`] runs the first three stages in a single sequential pass.

pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod render;

// ── Primary re-exports ──────────────────────────────────────────────
pub use collector::{
    CannedIntrospector, Introspector, ProbeMode, ProbeOutcome, ProbePolicy, SystemIntrospector,
};
pub use config::{CommandSpec, DEFAULT_NAME_PATTERN, DiscoveryConfig, ProbeCommand};
pub use error::CoreError;
pub use model::{
    BusLocation, InterfaceRecord, InterfaceRegistry, MacAddress, PciAddress, build_registry,
};
pub use order::{BusOrder, NAME_PREFIX, Rename, canonicalize};
pub use pipeline::{Discovery, discover};
pub use render::{
    RenderReport, render_interface_config_files, render_persistent_rules_file,
};
