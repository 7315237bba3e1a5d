// ── Domain model ──

pub mod interface;
pub mod registry;

pub use interface::{BusLocation, InterfaceRecord, MacAddress, PciAddress};
pub use registry::{InterfaceRegistry, build_registry};
