//! Type Generator CLI
//!
//! Generates Rust types from a bot API description, checks committed output
//! for drift and inspects classified declarations.
//!
//! Usage:
//!   botapi-typegen generate --schema api.json --out src/gen_types.rs
//!   botapi-typegen check --against src/gen_types.rs
//!   botapi-typegen inspect --type InputMediaPhoto

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use botapi_typegen::{
    generate_rust, ApiDescription, Checksum, CodegenContext, DriftReport, GeneratedOutput,
    GeneratorConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "botapi-typegen")]
#[command(about = "Generate Rust client types from a bot API description")]
struct Cli {
    /// Configuration file layered over typegen.toml and the environment
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the types file
    Generate {
        /// API description (JSON)
        #[arg(short, long)]
        schema: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Regenerate in memory and diff against a committed file
    Check {
        #[arg(short, long)]
        schema: Option<PathBuf>,
        /// Committed generated file
        #[arg(short, long)]
        against: Option<PathBuf>,
    },

    /// Print classified declarations as JSON
    Inspect {
        #[arg(short, long)]
        schema: Option<PathBuf>,
        /// Only this type
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = GeneratorConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Generate { schema, out } => {
            let schema_path = schema.unwrap_or_else(|| config.schema.path.clone());
            let output = generate(&config, &schema_path)?;

            match out.or_else(|| config.output.path.clone()) {
                Some(path) => {
                    std::fs::write(&path, &output.code)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "✅ Generated {} structs and {} families into {}",
                        output.struct_count,
                        output.family_count,
                        path.display()
                    );
                }
                None => print!("{}", output.code),
            }
            Ok(0)
        }

        Commands::Check { schema, against } => {
            let schema_path = schema.unwrap_or_else(|| config.schema.path.clone());
            let Some(target) = against.or_else(|| config.output.path.clone()) else {
                bail!("no file to check: pass --against or set [output] path");
            };

            let output = generate(&config, &schema_path)?;
            let committed = std::fs::read_to_string(&target)
                .with_context(|| format!("failed to read {}", target.display()))?;

            let report = DriftReport::compare(&committed, &output.code);
            if !report.has_drift() {
                eprintln!("✅ {} is up to date", target.display());
                return Ok(0);
            }

            print!("{}", report.render());
            if report.schema_changed() {
                eprintln!("\n⚠️  The API description changed since {} was generated", target.display());
            }
            eprintln!("❌ {} lines differ - regenerate {}", report.changes.len(), target.display());
            Ok(1)
        }

        Commands::Inspect { schema, type_name } => {
            let schema_path = schema.unwrap_or_else(|| config.schema.path.clone());
            let api = ApiDescription::from_path(&schema_path)?;
            let options = config.generate_options(None);
            let ctx = CodegenContext::build(&api, &options)?;

            let mut declarations = ctx.declarations()?;
            if let Some(name) = type_name {
                declarations.retain(|d| d.name() == name);
                if declarations.is_empty() {
                    bail!("type {} not found", name);
                }
            }

            println!("{}", serde_json::to_string_pretty(&declarations)?);
            Ok(0)
        }
    }
}

fn generate(config: &GeneratorConfig, schema_path: &Path) -> anyhow::Result<GeneratedOutput> {
    let source = std::fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read {}", schema_path.display()))?;
    let checksum = Checksum::of_source(&source);
    tracing::info!(schema = %schema_path.display(), sha256 = checksum.short(), "loading API description");

    let api = ApiDescription::from_json_str(&source)?;
    let output = generate_rust(&api, &config.generate_options(Some(checksum)))?;
    Ok(output)
}
