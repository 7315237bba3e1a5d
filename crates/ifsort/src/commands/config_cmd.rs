//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            output::print_output(&format_config(&cfg, &global.output)?, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(
                &config::config_path(global).display().to_string(),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            config::save_config_to(&Config::default(), &path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            output::print_output(&format!("Wrote {}", path.display()), global.quiet);
            Ok(())
        }
    }
}

/// TOML for human-oriented formats, serde output for the structured ones.
fn format_config(cfg: &Config, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(output::render_json(cfg, false)),
        OutputFormat::JsonCompact => Ok(output::render_json(cfg, true)),
        OutputFormat::Yaml => Ok(output::render_yaml(cfg)),
        OutputFormat::Table | OutputFormat::Plain => Ok(toml::to_string_pretty(cfg)?),
    }
}
