// ── Canonical order & rename engine ──
//
// Sorts the registry by bus location and renames every record `eth<rank>`.
// The new name depends only on sorted rank, never on the reported name.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info};

use crate::model::{InterfaceRecord, InterfaceRegistry};

/// Prefix of every canonical interface name.
pub const NAME_PREFIX: &str = "eth";

/// Comparison strategy for bus locations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BusOrder {
    /// Plain string comparison. Correct only while every location uses the
    /// same digit width per field (`0000:0a:00.0` vs `0000:10:00.0` is fine,
    /// `0000:a:00.0` vs `0000:10:00.0` is not).
    #[default]
    Lexical,
    /// Compare `domain:bus:device.function` as integers. Locations that do
    /// not parse sort after all that do, lexically among themselves.
    Numeric,
}

impl BusOrder {
    pub fn compare(self, a: &InterfaceRecord, b: &InterfaceRecord) -> Ordering {
        let (la, lb) = (a.bus_location(), b.bus_location());
        match self {
            Self::Lexical => la.as_str().cmp(lb.as_str()),
            Self::Numeric => match (la.pci_address(), lb.pci_address()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => la.as_str().cmp(lb.as_str()),
            },
        }
    }
}

/// One name reassignment made by [`canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
    pub bus_location: String,
}

impl Rename {
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Canonical name for the record at `rank` in sorted order.
pub fn canonical_name(rank: usize) -> String {
    format!("{NAME_PREFIX}{rank}")
}

/// Sort the registry by bus location and renumber names from `eth0`.
///
/// The sort is stable, so equal locations keep their enumeration order and
/// repeated runs on the same input give the same result. Running this on an
/// already canonical registry changes nothing.
pub fn canonicalize(registry: &mut InterfaceRegistry, order: BusOrder) -> Vec<Rename> {
    debug!(?registry, %order, "registry before canonical sort");

    let records = registry.records_mut();
    records.sort_by(|a, b| order.compare(a, b));

    let renames: Vec<Rename> = records
        .iter_mut()
        .enumerate()
        .map(|(rank, record)| {
            let to = canonical_name(rank);
            let from = record.rename(to.clone());
            Rename {
                from,
                to,
                bus_location: record.bus_location().to_string(),
            }
        })
        .collect();

    for r in renames.iter().filter(|r| r.is_change()) {
        info!(from = %r.from, to = %r.to, bus = %r.bus_location, "renamed interface");
    }
    debug!(?registry, "registry after canonical sort");

    renames
}
