// ── Artifact renderer ──
//
// Turns a canonical registry into a udev persistent-naming rules file and
// one ifcfg file per adapter. Text generation is pure; the write functions
// overwrite existing files and give no transactional guarantee.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::CoreError;
use crate::model::{InterfaceRecord, InterfaceRegistry};

pub const RULES_FILE_NAME: &str = "70-persistent-net.rules";
pub const IFCFG_PREFIX: &str = "ifcfg-";

// ── Text generation ─────────────────────────────────────────────────

/// The udev rule binding one record's MAC to its logical name.
pub fn persistent_rule(record: &InterfaceRecord) -> String {
    format!(
        "SUBSYSTEM==\"net\", ACTION==\"add\", DRIVERS==\"?*\", ATTR{{address}}==\"{}\", ATTR{{type}}==\"1\", KERNEL==\"eth*\", NAME=\"{}\"",
        record.hardware_address(),
        record.logical_name()
    )
}

/// Full rules file: each rule preceded by a newline and terminated by one,
/// so consecutive rules are separated by a blank line.
pub fn persistent_rules_text(registry: &InterfaceRegistry) -> String {
    registry
        .iter()
        .map(|record| format!("\n{}\n", persistent_rule(record)))
        .collect()
}

/// ifcfg key-value block for one record.
pub fn interface_config_text(record: &InterfaceRecord) -> String {
    format!(
        "DEVICE={}\nHWADDR={}\nTYPE=Ethernet\nONBOOT=yes\nBOOTPROTO=none\n",
        record.logical_name(),
        record.hardware_address()
    )
}

pub fn rules_file_path(dir: &Path) -> PathBuf {
    dir.join(RULES_FILE_NAME)
}

pub fn interface_config_path(dir: &Path, record: &InterfaceRecord) -> PathBuf {
    dir.join(format!("{IFCFG_PREFIX}{}", record.logical_name()))
}

// ── File emission ───────────────────────────────────────────────────

/// Outcome of writing the per-interface config files.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<CoreError>,
}

/// Write `<dir>/70-persistent-net.rules`. The directory must exist.
pub fn render_persistent_rules_file(
    dir: &Path,
    registry: &InterfaceRegistry,
) -> Result<PathBuf, CoreError> {
    let path = rules_file_path(dir);
    write_artifact(&path, &persistent_rules_text(registry))?;
    info!(path = %path.display(), rules = registry.len(), "wrote persistent-net rules");
    Ok(path)
}

/// Write `<dir>/ifcfg-<name>` for every record. Each write is independent;
/// a failure is logged and the remaining records are still attempted.
pub fn render_interface_config_files(dir: &Path, registry: &InterfaceRegistry) -> RenderReport {
    let mut report = RenderReport::default();
    for record in registry {
        let path = interface_config_path(dir, record);
        match write_artifact(&path, &interface_config_text(record)) {
            Ok(()) => {
                info!(path = %path.display(), interface = record.logical_name(), "wrote ifcfg");
                report.written.push(path);
            }
            Err(e) => report.failed.push(e),
        }
    }
    report
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), CoreError> {
    std::fs::write(path, contents).map_err(|source| {
        error!(path = %path.display(), error = %source, "artifact write failed");
        CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{BusLocation, MacAddress};

    fn record(name: &str, mac: &str, bus: &str) -> InterfaceRecord {
        InterfaceRecord::new(name, MacAddress::new(mac), BusLocation::new(bus))
    }

    fn two_port() -> InterfaceRegistry {
        [
            record("eth0", "cc:46:d6:4e:d6:68", "0000:04:00.0"),
            record("eth1", "cc:46:d6:4e:d6:69", "0000:04:00.1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ifcfg_block_is_exact() {
        let rec = record("eth2", "cc:46:d6:4e:d6:6a", "0000:04:00.2");
        assert_eq!(
            interface_config_text(&rec),
            "DEVICE=eth2\nHWADDR=cc:46:d6:4e:d6:6a\nTYPE=Ethernet\nONBOOT=yes\nBOOTPROTO=none\n"
        );
    }

    #[test]
    fn rules_text_has_one_rule_per_record_separated_by_blank_lines() {
        let text = persistent_rules_text(&two_port());
        let rule_lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(rule_lines.len(), 2);
        assert!(rule_lines[0].contains("ATTR{address}==\"cc:46:d6:4e:d6:68\""));
        assert!(rule_lines[0].ends_with("NAME=\"eth0\""));
        assert!(rule_lines[1].ends_with("NAME=\"eth1\""));
        assert_eq!(
            text,
            format!(
                "\n{}\n\n{}\n",
                persistent_rule(&two_port().records()[0]),
                persistent_rule(&two_port().records()[1])
            )
        );
    }

    #[test]
    fn rules_text_snapshot() {
        insta::assert_snapshot!(persistent_rules_text(&two_port()).trim(), @r#"
        SUBSYSTEM=="net", ACTION=="add", DRIVERS=="?*", ATTR{address}=="cc:46:d6:4e:d6:68", ATTR{type}=="1", KERNEL=="eth*", NAME="eth0"

        SUBSYSTEM=="net", ACTION=="add", DRIVERS=="?*", ATTR{address}=="cc:46:d6:4e:d6:69", ATTR{type}=="1", KERNEL=="eth*", NAME="eth1"
        "#);
    }

    #[test]
    fn empty_registry_renders_empty_rules() {
        assert_eq!(persistent_rules_text(&InterfaceRegistry::new()), "");
    }

    #[test]
    fn rules_file_is_written_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(RULES_FILE_NAME), "stale").unwrap();

        let path = render_persistent_rules_file(dir.path(), &two_port()).unwrap();

        assert_eq!(path, dir.path().join("70-persistent-net.rules"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            persistent_rules_text(&two_port())
        );
    }

    #[test]
    fn rules_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("rules.d");

        let err = render_persistent_rules_file(&missing, &two_port()).unwrap_err();
        assert!(matches!(err, CoreError::FileWrite { ref path, .. } if path.starts_with(&missing)));
    }

    #[test]
    fn ifcfg_files_are_written_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let report = render_interface_config_files(dir.path(), &two_port());

        assert!(report.failed.is_empty());
        assert_eq!(
            report.written,
            vec![dir.path().join("ifcfg-eth0"), dir.path().join("ifcfg-eth1")]
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("ifcfg-eth1")).unwrap(),
            "DEVICE=eth1\nHWADDR=cc:46:d6:4e:d6:69\nTYPE=Ethernet\nONBOOT=yes\nBOOTPROTO=none\n"
        );
    }

    #[test]
    fn ifcfg_failure_does_not_stop_remaining_records() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the first file should go makes that write fail.
        std::fs::create_dir(dir.path().join("ifcfg-eth0")).unwrap();

        let report = render_interface_config_files(dir.path(), &two_port());

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.written, vec![dir.path().join("ifcfg-eth1")]);
        assert!(dir.path().join("ifcfg-eth1").is_file());
    }
}
