//! Clap derive structures for the `ifsort` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept free
//! of crate-internal imports so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ifsort -- deterministic, PCI-ordered network interface naming
#[derive(Debug, Parser)]
#[command(
    name = "ifsort",
    version,
    about = "Rename network interfaces by PCI bus order and generate udev/ifcfg files",
    long_about = "Discovers ethN interfaces, sorts them by PCI bus location, renumbers\n\
        them from eth0, and writes 70-persistent-net.rules plus one ifcfg-<name>\n\
        file per adapter so names stay stable across reboots and reimages.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the platform default
    #[arg(long, env = "IFSORT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BusOrderArg {
    /// Plain string comparison of bus locations
    Lexical,
    /// Compare domain:bus:device.function numerically
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProbeFailureArg {
    /// Abort the run when any adapter cannot be probed
    Abort,
    /// Leave failed adapters out and continue
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtifactKind {
    /// 70-persistent-net.rules only
    Rules,
    /// ifcfg-<name> files only
    Ifcfg,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover interfaces and show the canonical naming plan
    #[command(alias = "ls")]
    Scan(ScanArgs),

    /// Discover interfaces and write udev rules and ifcfg files
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Manage ifsort configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Discovery overrides ──────────────────────────────────────────────

/// Flags overriding the `[discovery]` config section for one run.
#[derive(Debug, Args)]
pub struct DiscoveryArgs {
    /// Regex selecting interface names from the lister output
    #[arg(long)]
    pub pattern: Option<String>,

    /// How bus locations are compared
    #[arg(long, value_enum)]
    pub bus_order: Option<BusOrderArg>,

    /// What to do when an adapter cannot be probed
    #[arg(long, value_enum)]
    pub on_probe_failure: Option<ProbeFailureArg>,
}

// ── Scan ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

// ── Generate ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Directory for 70-persistent-net.rules (overrides config)
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,

    /// Directory for ifcfg-<name> files (overrides config)
    #[arg(long)]
    pub ifcfg_dir: Option<PathBuf>,

    /// Write only one kind of artifact
    #[arg(long, value_enum)]
    pub only: Option<ArtifactKind>,

    /// Print the artifacts instead of writing them
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (defaults + file + environment)
    Show,

    /// Print the config file path
    Path,

    /// Write a config file populated with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
