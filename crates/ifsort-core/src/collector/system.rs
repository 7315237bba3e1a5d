// ── Process-backed introspector ──
//
// Runs the lister and the per-interface introspector as child processes,
// one at a time, blocking until each exits. There is no timeout.

use std::process::{Command, Output};

use tracing::debug;

use super::{Introspector, ProbeMode};
use crate::config::{CommandSpec, ProbeCommand};
use crate::error::CoreError;

/// Introspector that shells out to real system tools.
#[derive(Debug, Clone)]
pub struct SystemIntrospector {
    lister: CommandSpec,
    probe: ProbeCommand,
}

impl SystemIntrospector {
    pub fn new(lister: CommandSpec, probe: ProbeCommand) -> Self {
        Self { lister, probe }
    }
}

impl Introspector for SystemIntrospector {
    fn list_interfaces(&self) -> Result<String, CoreError> {
        run(&self.lister.program, &self.lister.args)
    }

    fn introspect(&self, name: &str, mode: ProbeMode) -> Result<String, CoreError> {
        let flag = match mode {
            ProbeMode::HardwareAddress => &self.probe.address_flag,
            ProbeMode::DriverInfo => &self.probe.driver_flag,
        };
        run(&self.probe.program, &[flag.clone(), name.to_owned()])
    }
}

fn run(program: &str, args: &[String]) -> Result<String, CoreError> {
    debug!(program, ?args, "invoking collaborator");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| CoreError::CollectorExecution {
            program: program.to_owned(),
            reason: e.to_string(),
        })?;

    check_status(program, &output)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn check_status(program: &str, output: &Output) -> Result<(), CoreError> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let reason = if stderr.is_empty() {
        output.status.to_string()
    } else {
        format!("{}: {stderr}", output.status)
    };

    Err(CoreError::CollectorExecution {
        program: program.to_owned(),
        reason,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", ["-c", script])
    }

    #[test]
    fn lister_stdout_is_captured() {
        let intro = SystemIntrospector::new(sh("printf 'eth0: up\\neth1: up\\n'"), ProbeCommand::default());
        assert_eq!(intro.list_interfaces().unwrap(), "eth0: up\neth1: up\n");
    }

    #[test]
    fn nonzero_exit_is_an_execution_error() {
        let intro = SystemIntrospector::new(sh("echo boom >&2; exit 3"), ProbeCommand::default());
        let err = intro.list_interfaces().unwrap_err();
        match err {
            CoreError::CollectorExecution { program, reason } => {
                assert_eq!(program, "sh");
                assert!(reason.contains("boom"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_an_execution_error() {
        let intro = SystemIntrospector::new(
            CommandSpec::new("ifsort-no-such-lister", Vec::<String>::new()),
            ProbeCommand::default(),
        );
        assert!(matches!(
            intro.list_interfaces(),
            Err(CoreError::CollectorExecution { .. })
        ));
    }

    #[test]
    fn probe_passes_mode_flag_then_name() {
        let probe = ProbeCommand {
            program: "echo".into(),
            address_flag: "-P".into(),
            driver_flag: "-i".into(),
        };
        let intro = SystemIntrospector::new(sh("true"), probe);
        assert_eq!(
            intro.introspect("eth4", ProbeMode::DriverInfo).unwrap(),
            "-i eth4\n"
        );
    }
}
