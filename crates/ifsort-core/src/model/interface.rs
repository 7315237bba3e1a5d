// ── Interface identity types ──
//
// MacAddress and BusLocation are fixed at discovery time. Only the logical
// name of an `InterfaceRecord` changes, and only through the rename pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── MacAddress ──────────────────────────────────────────────────────

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address.
    /// Accepts colon-separated or dash-separated hex pairs in either case.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().trim().to_lowercase().replace('-', ":");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ── BusLocation ─────────────────────────────────────────────────────

/// PCI bus identifier as reported by the driver, e.g. `0000:04:00.0`.
///
/// Stored verbatim: ordering compares the raw text unless a numeric
/// strategy asks for [`BusLocation::pci_address`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusLocation(String);

impl BusLocation {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `domain:bus:device.function` as hexadecimal fields.
    pub fn pci_address(&self) -> Option<PciAddress> {
        let (domain, rest) = self.0.split_once(':')?;
        let (bus, rest) = rest.split_once(':')?;
        let (device, function) = rest.split_once('.')?;

        Some(PciAddress {
            domain: u32::from_str_radix(domain, 16).ok()?,
            bus: u16::from_str_radix(bus, 16).ok()?,
            device: u16::from_str_radix(device, 16).ok()?,
            function: u16::from_str_radix(function.trim(), 16).ok()?,
        })
    }
}

impl fmt::Display for BusLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BusLocation {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Numeric view of a PCI address. Field order gives the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PciAddress {
    pub domain: u32,
    pub bus: u16,
    pub device: u16,
    pub function: u16,
}

// ── InterfaceRecord ─────────────────────────────────────────────────

/// One physical network adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    logical_name: String,
    hardware_address: MacAddress,
    bus_location: BusLocation,
}

impl InterfaceRecord {
    pub fn new(
        logical_name: impl Into<String>,
        hardware_address: MacAddress,
        bus_location: BusLocation,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            hardware_address,
            bus_location,
        }
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn hardware_address(&self) -> &MacAddress {
        &self.hardware_address
    }

    pub fn bus_location(&self) -> &BusLocation {
        &self.bus_location
    }

    pub(crate) fn rename(&mut self, name: String) -> String {
        std::mem::replace(&mut self.logical_name, name)
    }
}

impl fmt::Display for InterfaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.logical_name, self.hardware_address, self.bus_location
        )
    }
}
