use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use suma_resta::arithmetic::Number;
use suma_resta::config::{self, Config, OutputFormat};
use suma_resta::operation::{Calculation, Operation};
use suma_resta::{check, output};

#[derive(Parser)]
#[command(name = "suma-resta", about = "Add or subtract two numbers")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format override
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print a + b
    #[command(visible_alias = "suma")]
    Add {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    /// Print a - b
    #[command(visible_alias = "resta")]
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    /// Verify the arithmetic contract; exits non-zero on any mismatch
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut cfg = Config::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&cfg.log.filter))?,
        )
        .init();

    match &cfg.source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!(
            path = %cli.config.display(),
            "no config file, using defaults"
        ),
    }

    if let Some(format) = cli.format {
        cfg.output.format = format;
    }

    let calc = match cli.command {
        Command::Add { a, b } => Calculation::evaluate(Operation::Add, a, b),
        Command::Subtract { a, b } => Calculation::evaluate(Operation::Subtract, a, b),
        Command::Check => {
            let report = check::run()?;
            println!(
                "ok: {} scenarios, {} properties",
                report.scenarios, report.properties
            );
            return Ok(());
        }
    };

    println!("{}", output::render(&calc, &cfg.output)?);
    Ok(())
}
