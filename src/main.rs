use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ident_uuid::{
    BINARY_LEN, GenerationMethod, OutputFormat, TEXT_LEN, Uuid, UuidResult, ValidationForm,
    generate, validate,
};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "ident")]
#[command(about = "Generate, validate and convert UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new UUIDs
    Generate {
        /// Generation method: secure, weak, blocking or time (default from IDENT_METHOD)
        #[arg(long)]
        method: Option<GenerationMethod>,
        /// Output format: binary (printed as hex) or text (default from IDENT_FORMAT)
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Number of UUIDs to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Report elapsed time after generating
        #[arg(long)]
        timing: bool,
    },
    /// Check whether a value is a well-formed UUID
    Validate {
        /// Candidate value
        value: String,
        /// Form to check against: any, binary or text
        #[arg(long, default_value_t = ValidationForm::Any)]
        form: ValidationForm,
    },
    /// Print the properties of a UUID
    Inspect {
        /// UUID in text form (or a 16-character binary string)
        value: String,
        /// Print a single property: binary, text, str or is_null
        #[arg(long)]
        property: Option<String>,
    },
    /// Convert between text form and 32-digit hex binary form
    Convert {
        /// Text UUID, or 32 hex digits of binary UUID
        value: String,
    },
}

/// Entry point for the `ident` command-line tool.
///
/// # Environment Variables
/// - `IDENT_METHOD`: default generation method (default: "secure")
/// - `IDENT_FORMAT`: default output format (default: "binary")
/// - `RUST_LOG`: log filter, logs are written to stderr
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("ident=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    run(cli, CliConfig::from_env)
}

/// Dispatch a parsed command. `resolve_config` is only called by commands that use defaults.
fn run<F>(cli: Cli, resolve_config: F) -> anyhow::Result<ExitCode>
where
    F: FnOnce() -> UuidResult<CliConfig>,
{
    match cli.command {
        Some(Commands::Generate {
            method,
            format,
            count,
            timing,
        }) => {
            let config = resolve_config()?;
            tracing::debug!(
                method = %config.method(),
                format = %config.format(),
                "resolved config"
            );

            let method = method.unwrap_or(config.method());
            let format = format.unwrap_or(config.format());
            let started = Instant::now();
            for _ in 0..count {
                println!("{}", generate(method, format)?);
            }
            if timing {
                println!("elapsed: {:.5}", started.elapsed().as_secs_f64());
            }
        }
        Some(Commands::Validate { value, form }) => {
            if validate(&value, form) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Inspect { value, property }) => {
            let uuid = Uuid::new(&value)?;
            match property {
                Some(name) => println!("{}", uuid.property(&name)?),
                None => {
                    for name in ["text", "binary", "is_null"] {
                        println!("{}: {}", name, uuid.property(name)?);
                    }
                }
            }
        }
        Some(Commands::Convert { value }) => {
            println!("{}", convert(&value)?);
        }
        None => {
            println!("Use 'ident --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Text form to 32 hex digits, or 32 hex digits to text form.
fn convert(value: &str) -> anyhow::Result<String> {
    if value.len() == TEXT_LEN {
        return Ok(hex::encode(ident_uuid::binary(value)?));
    }
    if value.len() == BINARY_LEN * 2 {
        let bytes = hex::decode(value)?;
        return Ok(ident_uuid::text(&bytes)?);
    }
    anyhow::bail!(
        "expected a {}-character text UUID or {} hex digits, got {} characters",
        TEXT_LEN,
        BINARY_LEN * 2,
        value.len()
    )
}
