//! Generate command: discover, then write udev rules and ifcfg files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tabled::Tabled;

use ifsort_core::{CoreError, InterfaceRegistry, render};

use crate::cli::{ArtifactKind, GenerateArgs, GlobalOpts};
use crate::commands::util;
use crate::config;
use crate::error::CliError;
use crate::output;

/// Which artifacts to produce and where.
#[derive(Debug)]
struct Targets {
    rules_dir: Option<PathBuf>,
    ifcfg_dir: Option<PathBuf>,
}

impl Targets {
    fn resolve(args: &GenerateArgs, cfg: &config::Config) -> Self {
        let rules_dir = args
            .rules_dir
            .clone()
            .unwrap_or_else(|| cfg.output.rules_dir.clone());
        let ifcfg_dir = args
            .ifcfg_dir
            .clone()
            .unwrap_or_else(|| cfg.output.ifcfg_dir.clone());

        match args.only {
            Some(ArtifactKind::Rules) => Self {
                rules_dir: Some(rules_dir),
                ifcfg_dir: None,
            },
            Some(ArtifactKind::Ifcfg) => Self {
                rules_dir: None,
                ifcfg_dir: Some(ifcfg_dir),
            },
            None => Self {
                rules_dir: Some(rules_dir),
                ifcfg_dir: Some(ifcfg_dir),
            },
        }
    }

    fn file_count(&self, registry: &InterfaceRegistry) -> usize {
        usize::from(self.rules_dir.is_some())
            + self.ifcfg_dir.as_ref().map_or(0, |_| registry.len())
    }
}

// ── Written-file rows ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WrittenFile {
    kind: &'static str,
    path: PathBuf,
}

#[derive(Tabled)]
struct WrittenRow {
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "PATH")]
    path: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &GenerateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let discovery_config = config::resolve_discovery(&cfg, &args.discovery)?;
    let discovery = util::discover_system(&discovery_config)?;
    let registry = discovery.registry;

    // An empty registry would truncate the rules file to nothing.
    if registry.is_empty() {
        return Err(CliError::NoInterfaces {
            pattern: discovery_config.name_pattern,
        });
    }

    let targets = Targets::resolve(args, &cfg);

    if args.dry_run {
        let color = output::should_color(&global.color);
        output::print_output(&preview(&targets, &registry, color), global.quiet);
        return Ok(());
    }

    let total = targets.file_count(&registry);
    let prompt = format!("Write {total} files for {} interfaces?", registry.len());
    if !util::confirm(&prompt, "generate", global.yes)? {
        output::print_output("Aborted, nothing written.", global.quiet);
        return Ok(());
    }

    let (written, mut failures) = write_artifacts(&targets, &registry);

    let out = output::render_list(
        &global.output,
        &written,
        |w| WrittenRow {
            kind: w.kind.to_owned(),
            path: w.path.display().to_string(),
        },
        |w| w.path.display().to_string(),
    );
    output::print_output(&out, global.quiet);

    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0).into()),
        failed => Err(CliError::IncompleteArtifacts {
            failed,
            total,
            paths: failed_paths(&failures),
        }),
    }
}

/// Write every requested artifact. Rules and ifcfg passes are independent:
/// a failed rules file does not stop the ifcfg files.
fn write_artifacts(
    targets: &Targets,
    registry: &InterfaceRegistry,
) -> (Vec<WrittenFile>, Vec<CoreError>) {
    let mut written = Vec::new();
    let mut failures = Vec::new();

    if let Some(ref dir) = targets.rules_dir {
        match render::render_persistent_rules_file(dir, registry) {
            Ok(path) => written.push(WrittenFile {
                kind: "rules",
                path,
            }),
            Err(e) => failures.push(e),
        }
    }

    if let Some(ref dir) = targets.ifcfg_dir {
        let report = render::render_interface_config_files(dir, registry);
        failures.extend(report.failed);
        written.extend(
            report
                .written
                .into_iter()
                .map(|path| WrittenFile { kind: "ifcfg", path }),
        );
    }

    (written, failures)
}

/// Comma-separated paths of the files that could not be written.
fn failed_paths(failures: &[CoreError]) -> String {
    failures
        .iter()
        .filter_map(|e| match e {
            CoreError::FileWrite { path, .. } => Some(path.display().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Concatenate the would-be files, each under a header naming its path.
fn preview(targets: &Targets, registry: &InterfaceRegistry, color: bool) -> String {
    let mut sections = Vec::new();

    if let Some(ref dir) = targets.rules_dir {
        sections.push(section(
            &render::rules_file_path(dir),
            &render::persistent_rules_text(registry),
            color,
        ));
    }
    if let Some(ref dir) = targets.ifcfg_dir {
        for record in registry {
            sections.push(section(
                &render::interface_config_path(dir, record),
                &render::interface_config_text(record),
                color,
            ));
        }
    }

    sections.join("\n")
}

fn section(path: &Path, body: &str, color: bool) -> String {
    format!(
        "{}\n{}",
        output::artifact_header(&path.display().to_string(), color),
        body
    )
}
