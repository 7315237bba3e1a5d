// ── Core error types ──
//
// Collection-phase errors are fatal for a run: the pipeline never renders
// artifacts from an incomplete interface set. Rendering errors are reported
// per file by the renderer and surfaced through `FileWrite`.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Collaborator errors ──────────────────────────────────────────
    /// An external program could not be started or exited with failure status.
    #[error("Failed to run `{program}`: {reason}")]
    CollectorExecution { program: String, reason: String },

    // ── Extraction errors ────────────────────────────────────────────
    #[error("No hardware address found in introspection output for {interface}")]
    NoAddressFound { interface: String },

    #[error("No PCI bus location found in driver info for {interface}")]
    NoBusLocationFound { interface: String },

    #[error("Invalid interface name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // ── Assembly errors ──────────────────────────────────────────────
    #[error(
        "Attribute lists are misaligned: {names} names, {addresses} addresses, {locations} bus locations"
    )]
    Assembly {
        names: usize,
        addresses: usize,
        locations: usize,
    },

    // ── Rendering errors ─────────────────────────────────────────────
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
