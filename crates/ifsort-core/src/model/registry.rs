// ── Interface registry ──
//
// Ordered, exclusively-owned collection of interface records. Created empty,
// filled once in enumeration order, then reordered and renamed in place.

use serde::Serialize;

use super::interface::{BusLocation, InterfaceRecord, MacAddress};
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InterfaceRegistry {
    records: Vec<InterfaceRecord>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: InterfaceRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InterfaceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceRecord> {
        self.records.iter()
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<InterfaceRecord> {
        &mut self.records
    }
}

impl FromIterator<InterfaceRecord> for InterfaceRegistry {
    fn from_iter<I: IntoIterator<Item = InterfaceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InterfaceRegistry {
    type Item = &'a InterfaceRecord;
    type IntoIter = std::slice::Iter<'a, InterfaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Join three index-aligned attribute lists into a registry.
///
/// Pure positional assembly: no uniqueness or format checks. Unequal lengths
/// are rejected rather than truncated, since a short list means the slots
/// after the first gap belong to different adapters.
pub fn build_registry(
    names: &[String],
    addresses: &[MacAddress],
    locations: &[BusLocation],
) -> Result<InterfaceRegistry, CoreError> {
    if names.len() != addresses.len() || names.len() != locations.len() {
        return Err(CoreError::Assembly {
            names: names.len(),
            addresses: addresses.len(),
            locations: locations.len(),
        });
    }

    let mut registry = InterfaceRegistry::new();
    for ((name, mac), bus) in names.iter().zip(addresses).zip(locations) {
        registry.push(InterfaceRecord::new(name.clone(), mac.clone(), bus.clone()));
    }
    Ok(registry)
}
