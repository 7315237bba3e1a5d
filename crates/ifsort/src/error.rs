//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use ifsort_config::ConfigError;
use ifsort_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const COLLECTION: i32 = 3;
    pub const WRITE: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Collection ───────────────────────────────────────────────────

    #[error("Could not run `{program}`: {reason}")]
    #[diagnostic(
        code(ifsort::collector_failed),
        help(
            "Check that `{program}` is installed and runnable by this user.\n\
             The lister and introspector can be changed in the [discovery] config section."
        )
    )]
    CollectorFailed { program: String, reason: String },

    #[error("No hardware address found for {interface}")]
    #[diagnostic(
        code(ifsort::no_address),
        help(
            "The introspector output for {interface} had no aa:bb:cc:dd:ee:ff token.\n\
             Run with --on-probe-failure skip to leave this adapter out."
        )
    )]
    NoAddress { interface: String },

    #[error("No PCI bus location found for {interface}")]
    #[diagnostic(
        code(ifsort::no_bus_location),
        help(
            "The driver info for {interface} had no 0000:-prefixed bus-info.\n\
             Virtual adapters have none; narrow --pattern or use --on-probe-failure skip."
        )
    )]
    NoBusLocation { interface: String },

    #[error("Attribute lists are misaligned ({names} names, {addresses} addresses, {locations} bus locations)")]
    #[diagnostic(code(ifsort::misaligned))]
    Misaligned {
        names: usize,
        addresses: usize,
        locations: usize,
    },

    #[error("No interfaces matched '{pattern}'")]
    #[diagnostic(
        code(ifsort::no_interfaces),
        help("Check the lister output, or adjust --pattern / discovery.pattern.")
    )]
    NoInterfaces { pattern: String },

    // ── Rendering ────────────────────────────────────────────────────

    #[error("Failed to write {path}")]
    #[diagnostic(
        code(ifsort::write_failed),
        help("The target directory must already exist and be writable.")
    )]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {total} artifact files could not be written: {paths}")]
    #[diagnostic(
        code(ifsort::incomplete_artifacts),
        help("The target directories must exist and be writable. Files that were written are current.")
    )]
    IncompleteArtifacts {
        failed: usize,
        total: usize,
        paths: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ifsort::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(ifsort::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(ifsort::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(ifsort::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts, or --dry-run to preview.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    #[diagnostic(code(ifsort::toml))]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CollectorFailed { .. }
            | Self::NoAddress { .. }
            | Self::NoBusLocation { .. }
            | Self::Misaligned { .. }
            | Self::NoInterfaces { .. } => exit_code::COLLECTION,
            Self::WriteFailed { .. } | Self::IncompleteArtifacts { .. } => exit_code::WRITE,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CollectorExecution { program, reason } => {
                CliError::CollectorFailed { program, reason }
            }

            CoreError::NoAddressFound { interface } => CliError::NoAddress { interface },

            CoreError::NoBusLocationFound { interface } => CliError::NoBusLocation { interface },

            CoreError::InvalidPattern { pattern, source } => CliError::Validation {
                field: "pattern".into(),
                reason: format!("'{pattern}' is not a valid regex: {source}"),
            },

            CoreError::Assembly {
                names,
                addresses,
                locations,
            } => CliError::Misaligned {
                names,
                addresses,
                locations,
            },

            CoreError::FileWrite { path, source } => CliError::WriteFailed {
                path: path.display().to_string(),
                source,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Serialization(e) => CliError::Toml(e),
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn collection_errors_share_an_exit_code() {
        let err: CliError = CoreError::NoAddressFound {
            interface: "eth1".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::COLLECTION);
        assert_eq!(err.to_string(), "No hardware address found for eth1");
    }

    #[test]
    fn write_errors_map_to_write_code() {
        let err: CliError = CoreError::FileWrite {
            path: PathBuf::from("/etc/udev/rules.d/70-persistent-net.rules"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::WRITE);
    }

    #[test]
    fn bad_pattern_is_a_usage_error() {
        let Err(core) = ifsort_core::collector::compile_name_pattern("eth(") else {
            panic!("pattern should not compile");
        };
        let err = CliError::from(core);
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert!(err.to_string().contains("pattern"));
    }
}
