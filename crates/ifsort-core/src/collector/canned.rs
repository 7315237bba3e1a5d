// ── Canned-output introspector ──
//
// Deterministic stand-in for the system tools: returns fixed text per
// interface and records every call so tests can assert invocation order.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{Introspector, ProbeMode};
use crate::error::CoreError;

#[derive(Debug, Clone)]
enum Canned {
    Output(String),
    Failure(String),
}

impl Canned {
    fn replay(&self, program: &str) -> Result<String, CoreError> {
        match self {
            Self::Output(text) => Ok(text.clone()),
            Self::Failure(reason) => Err(CoreError::CollectorExecution {
                program: program.to_owned(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Introspector backed by in-memory text.
#[derive(Debug, Default)]
pub struct CannedIntrospector {
    listing: Option<Canned>,
    probes: HashMap<(String, ProbeMode), Canned>,
    calls: RefCell<Vec<(String, ProbeMode)>>,
}

impl CannedIntrospector {
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: Some(Canned::Output(listing.into())),
            ..Self::default()
        }
    }

    /// A lister that fails to run.
    pub fn failing_lister(reason: impl Into<String>) -> Self {
        Self {
            listing: Some(Canned::Failure(reason.into())),
            ..Self::default()
        }
    }

    /// Register address-mode and driver-mode output for one interface.
    #[must_use]
    pub fn with_interface(
        mut self,
        name: &str,
        address_output: impl Into<String>,
        driver_output: impl Into<String>,
    ) -> Self {
        self.probes.insert(
            (name.to_owned(), ProbeMode::HardwareAddress),
            Canned::Output(address_output.into()),
        );
        self.probes.insert(
            (name.to_owned(), ProbeMode::DriverInfo),
            Canned::Output(driver_output.into()),
        );
        self
    }

    /// Make one query for one interface exit with failure.
    #[must_use]
    pub fn with_failure(mut self, name: &str, mode: ProbeMode, reason: impl Into<String>) -> Self {
        self.probes
            .insert((name.to_owned(), mode), Canned::Failure(reason.into()));
        self
    }

    /// Every `introspect` call made so far, in order.
    pub fn calls(&self) -> Vec<(String, ProbeMode)> {
        self.calls.borrow().clone()
    }
}

impl Introspector for CannedIntrospector {
    fn list_interfaces(&self) -> Result<String, CoreError> {
        self.listing
            .as_ref()
            .map_or_else(|| Ok(String::new()), |c| c.replay("lister"))
    }

    fn introspect(&self, name: &str, mode: ProbeMode) -> Result<String, CoreError> {
        self.calls.borrow_mut().push((name.to_owned(), mode));
        match self.probes.get(&(name.to_owned(), mode)) {
            Some(canned) => canned.replay("introspector"),
            None => Err(CoreError::CollectorExecution {
                program: "introspector".into(),
                reason: format!("no such device: {name}"),
            }),
        }
    }
}
