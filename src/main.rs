//! dpdp-assess: DPDP compliance self-assessment tool
//!
//! Scores questionnaire submissions against the Digital Personal Data
//! Protection Act checklist, classifies Significant Data Fiduciaries and
//! ranks remediation work.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use dpdp_assess::{
    cli,
    config::{self, AppConfig, ConfigPreset, Validatable},
    model::OrganizationRef,
    pipeline::{OutputOptions, exit_codes},
    reports::ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nBuilt-in catalog:",
        "\n  DPDP Act 2023 checklist, 25 questions in 13 categories",
        "\n\nOutput Formats:",
        "\n  summary, json, table",
        "\n\nFeatures:",
        "\n  Weighted scoring, SDF classification, risk index, certificates, portfolio overview"
    )
}

#[derive(Parser)]
#[command(name = "dpdp-assess")]
#[command(version, long_version = build_long_version())]
#[command(about = "DPDP compliance self-assessment tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score / invalid registration / not eligible for a certificate
    2  Non-compliant with --fail-on-non-compliant
    3  Error occurred

EXAMPLES:
    # Score a questionnaire submission
    dpdp-assess assess answers.json --profile profile.json --name \"Acme Pvt Ltd\"

    # CI gate: JSON output, fail below 80%
    dpdp-assess assess answers.json -o json --min-score 80

    # Is this organization a Significant Data Fiduciary?
    dpdp-assess sdf profile.json

    # Portfolio overview across stored reports
    dpdp-assess overview reports/*.json -o table")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output flags shared by every reporting command
#[derive(clap::Args, Clone)]
struct OutputArgs {
    /// Output format (auto: summary, or json when writing a .json file)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Questionnaire answers (JSON or YAML map of question id to Yes/Partial/No)
    answers: PathBuf,

    /// Organization profile used for SDF classification
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Organization identifier
    #[arg(long, default_value = "local")]
    org_id: String,

    /// Organization display name
    #[arg(long, default_value = "Unnamed Organization")]
    name: String,

    /// Include the composite 0-100 risk index
    #[arg(long)]
    risk_index: bool,

    /// Exit with code 1 if the score is below this percentage
    #[arg(long)]
    min_score: Option<f64>,

    /// Exit with code 2 if the organization is Non-Compliant
    #[arg(long)]
    fail_on_non_compliant: bool,

    /// Custom question catalog (YAML or JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `risk` subcommand
#[derive(Parser)]
struct RiskArgs {
    /// Overall compliance percentage (0-100)
    score: f64,

    /// SDF score from the organization profile
    #[arg(long, default_value_t = 0)]
    sdf_score: u32,

    /// Data volume code (e.g. `10k_to_100k`, `more_than_1_million`)
    #[arg(long)]
    data_volume: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a questionnaire submission and report compliance
    Assess(AssessArgs),

    /// Classify an organization profile as a Significant Data Fiduciary
    Sdf {
        /// Organization profile (JSON or YAML)
        profile: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Map a compliance percentage to status, risk level and risk index
    Risk(RiskArgs),

    /// List the question catalog
    Catalog {
        /// Only show questions in this category
        #[arg(long)]
        category: Option<String>,

        /// Custom question catalog (YAML or JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate organization registration details
    ValidateOrg {
        /// Organization registration (JSON or YAML)
        organization: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Portfolio overview across stored compliance reports
    Overview {
        /// Compliance report files (each holding one report or an array)
        reports: Vec<PathBuf>,

        /// Known organizations (array of {orgId, organizationName}) to list unassessed ones
        #[arg(long)]
        organizations: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Issue a compliance certificate from the latest report
    Certificate {
        /// Compliance report file
        report: PathBuf,

        /// Issue timestamp (RFC 3339), defaults to now
        #[arg(long)]
        issued_at: Option<DateTime<Utc>>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .dpdp-assess.yaml in the current directory
    Init {
        /// Start from a preset (default, ci-cd, strict)
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Load the config file, layer command-line overrides on top and validate.
fn effective_config(cli: &Cli, overrides: AppConfig) -> Result<AppConfig> {
    let overrides = AppConfig {
        output: config::OutputConfig {
            no_color: overrides.output.no_color || cli.no_color,
            ..overrides.output
        },
        behavior: config::BehaviorConfig {
            quiet: overrides.behavior.quiet || cli.quiet,
            ..overrides.behavior
        },
        ..overrides
    };
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    config.ensure_valid()?;
    Ok(config)
}

fn output_overrides(output: OutputArgs) -> AppConfig {
    AppConfig::builder()
        .output_format(output.output)
        .output_file(output.output_file)
        .build()
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Assess(ref args) => {
            let overrides = AppConfig::builder()
                .output_format(args.output.output)
                .output_file(args.output.output_file.clone())
                .min_score(args.min_score)
                .fail_on_non_compliant(args.fail_on_non_compliant)
                .catalog_file(args.catalog.clone())
                .build();
            let app = effective_config(&cli, overrides)?;

            cli::run_assess(cli::AssessConfig {
                answers: args.answers.clone(),
                profile: args.profile.clone(),
                organization: OrganizationRef::new(&args.org_id, &args.name),
                risk_index: args.risk_index,
                app,
            })
        }

        Commands::Sdf {
            ref profile,
            ref output,
        } => {
            let app = effective_config(&cli, output_overrides(output.clone()))?;
            cli::run_sdf(
                profile.clone(),
                app.output.format,
                app.output.file,
                app.output.no_color,
            )
        }

        Commands::Risk(ref args) => {
            let app = effective_config(&cli, output_overrides(args.output.clone()))?;
            cli::run_risk(cli::RiskConfig {
                score: args.score,
                sdf_score: args.sdf_score,
                data_volume: args.data_volume.clone(),
                format: app.output.format,
                output_file: app.output.file,
                no_color: app.output.no_color,
            })
        }

        Commands::Catalog {
            ref category,
            ref catalog,
            ref output,
        } => {
            let overrides = AppConfig {
                catalog: config::CatalogConfig {
                    file: catalog.clone(),
                },
                ..output_overrides(output.clone())
            };
            let app = effective_config(&cli, overrides)?;
            let catalog = app.load_catalog()?;
            cli::run_catalog(
                &catalog,
                category.as_deref(),
                app.output.format,
                app.output.file,
                app.output.no_color,
            )
        }

        Commands::ValidateOrg {
            ref organization,
            ref output,
        } => {
            let app = effective_config(&cli, output_overrides(output.clone()))?;
            cli::run_validate_org(
                organization.clone(),
                app.output.format,
                app.output.file,
                app.output.no_color,
            )
        }

        Commands::Overview {
            ref reports,
            ref organizations,
            ref output,
        } => {
            let app = effective_config(&cli, output_overrides(output.clone()))?;
            let options = OutputOptions {
                format: app.output.format,
                file: app.output.file,
                no_color: app.output.no_color,
                quiet: app.behavior.quiet,
            };
            cli::run_overview(reports.clone(), organizations.clone(), &options)
        }

        Commands::Certificate {
            ref report,
            issued_at,
            ref output,
        } => {
            let app = effective_config(&cli, output_overrides(output.clone()))?;
            cli::run_certificate(
                report.clone(),
                issued_at,
                app.output.format,
                app.output.file,
                app.output.no_color,
            )
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "dpdp-assess", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { ref output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { ref action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".dpdp-assess.yaml",
                    ".dpdp-assess.yml",
                    "dpdp-assess.yaml",
                    "dpdp-assess.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".dpdp-assess.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset.as_deref() {
                    None => config::generate_full_example_config(),
                    Some(name) => {
                        let preset = ConfigPreset::from_name(name).with_context(|| {
                            let valid: Vec<&str> =
                                ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                            format!(
                                "Unknown preset: {name}. Valid options: {}",
                                valid.join(", ")
                            )
                        })?;
                        config::generate_example_config(&AppConfig::from_preset(preset))
                    }
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}
