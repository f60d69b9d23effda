//! reckon CLI
//!
//! With no operation, runs the demonstration sequence. Results go to
//! stdout, logs to stderr (`RUST_LOG=debug` for a trace of every step).

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use reckon::adapters::console;
use reckon::{Calculator, EngineConfig, Number, Operation, OutputFormat, OverflowPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "reckon",
    version,
    about = "Checked arithmetic engine",
    allow_negative_numbers = true,
    after_help = "Operations: add, subtract (sub), multiply (mul), divide (div), power (pow), sqrt.\n\
                  With no operation, runs the demonstration sequence.\n\
                  Flags go before the operation; operands may start with '-' (e.g. -5, -inf)."
)]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Overflow policy: reject or widen
    #[arg(long, default_value_t = OverflowPolicy::Reject)]
    overflow: OverflowPolicy,

    /// Operation to evaluate
    operation: Option<Operation>,

    /// Operands (two, or one for sqrt)
    #[arg(requires = "operation", allow_hyphen_values = true)]
    operands: Vec<Number>,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let calc = Calculator::with_config(EngineConfig::new().with_overflow(cli.overflow));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.operation {
        None => {
            info!("running demo (overflow={}, format={})", cli.overflow, cli.format);
            console::run_demo(&calc, &mut out, cli.format).context("demo run failed")?;
        }
        Some(operation) => {
            console::evaluate(&calc, operation, &cli.operands, &mut out, cli.format)
                .with_context(|| format!("could not evaluate {}", operation))?;
        }
    }

    Ok(())
}
