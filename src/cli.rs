use crate::{
    config::{Config, DEFAULT_CONFIG_FILE},
    report::CheckReport,
    tools::registry::ToolRegistry,
    validator::{BinaryValidator, ValidationOptions},
};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "binguard")]
#[command(about = "Validate executable paths before they are spawned")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a single binary path
    Check {
        #[arg(allow_hyphen_values = true)]
        path: String,

        /// Reject relative input
        #[arg(long)]
        require_absolute: bool,

        /// Skip the existence and executability probe
        #[arg(long)]
        no_check_exists: bool,

        /// Accept existing files without execute permission
        #[arg(long)]
        no_verify_executable: bool,

        /// Permitted binary name (repeatable)
        #[arg(long = "allow", value_name = "NAME")]
        allow: Vec<String>,
    },

    /// Validate a path as the binary of a known tool (beads, backlog, or configured)
    Tool {
        name: String,

        #[arg(allow_hyphen_values = true)]
        path: String,

        /// Config file declaring additional tools
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate every [[binary]] entry of a config file
    Config {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

/// Runs one command. Returns whether every checked path was valid.
pub fn run(cli: Cli) -> anyhow::Result<bool> {
    let validator = BinaryValidator::default();
    let (reports, single) = match cli.command {
        Commands::Check { path, require_absolute, no_check_exists, no_verify_executable, allow } => {
            let opts = ValidationOptions {
                require_absolute,
                check_exists: !no_check_exists,
                verify_executable: !no_verify_executable,
                allowed_basenames: if allow.is_empty() { None } else { Some(allow) },
            };
            let outcome = validator.validate(&path, &opts);
            (vec![CheckReport::new("binary", &path, &outcome)], true)
        }
        Commands::Tool { name, path, config } => {
            let registry = match config {
                Some(p) => ToolRegistry::new(&load_config(&p)?),
                None => ToolRegistry::builtin(),
            };
            let spec = registry.get(&name).with_context(|| {
                format!("unknown tool: {name} (known: {})", registry.list_names().join(", "))
            })?;
            let outcome = validator.validate(&path, &spec.options());
            (vec![CheckReport::new(&spec.name, &path, &outcome)], true)
        }
        Commands::Config { config } => (check_config(&validator, &load_config(&config)?), false),
    };

    emit(&reports, cli.format, single)?;
    Ok(reports.iter().all(CheckReport::is_valid))
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let cfg = Config::load(path).with_context(|| format!("loading config {}", path.display()))?;
    cfg.validate().context("validating config")?;
    Ok(cfg)
}

pub fn check_config(validator: &BinaryValidator, cfg: &Config) -> Vec<CheckReport> {
    let registry = ToolRegistry::new(cfg);
    let reports: Vec<CheckReport> = cfg
        .binary
        .iter()
        .map(|entry| {
            let input = entry.path.as_deref().unwrap_or_default();
            let outcome = validator.validate(input, &cfg.options_for(entry, &registry));
            CheckReport::new(&entry.subject(), input, &outcome)
        })
        .collect();
    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    info!(checked = reports.len(), failed, "config binaries checked");
    reports
}

fn emit(reports: &[CheckReport], format: OutputFormat, single: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => match reports {
            [one] if single => println!("{}", serde_json::to_string_pretty(one)?),
            _ => println!("{}", serde_json::to_string_pretty(reports)?),
        },
        OutputFormat::Text => {
            for r in reports {
                println!("{}", r.to_line());
            }
            if !single {
                let failed = reports.iter().filter(|r| !r.is_valid()).count();
                if failed > 0 {
                    println!("\n{failed} of {} path(s) failed validation", reports.len());
                } else {
                    println!("\nall {} path(s) valid", reports.len());
                }
            }
        }
    }
    Ok(())
}
