//! sigtest — interoperability harness CLI
//!
//! `sigtest generate` runs one driver invocation against a fixture and
//! prints the driver's output; `sigtest report` merges every driver's
//! result file into the conformance page.

mod error;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use sigtest_report::{aggregate, render_report};
use sigtest_runner::{ArgValue, InvocationOptions, Runner};
use sigtest_types::DriverId;

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "sigtest", version, about = "HTTP message signature interoperability harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one driver invocation against a fixture
    Generate(GenerateArgs),
    /// Merge driver result files into the conformance report page
    Report(ReportArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Fixture id (resolved to <fixture-dir>/<id>.httpMessage)
    #[arg(long)]
    fixture: String,

    /// Directory holding fixture files
    #[arg(long, default_value = "test/input")]
    fixture_dir: PathBuf,

    /// Path or name of the driver executable
    #[arg(long)]
    generator: String,

    /// Sub-command passed to the driver
    #[arg(long)]
    command: String,

    /// Override the synthesized Date header (defaults to now)
    #[arg(long)]
    date: Option<String>,

    /// Driver flag as key=value; repeat a key to build a space-joined list
    #[arg(long = "arg", value_name = "KEY=VALUE")]
    args: Vec<String>,

    /// Kill the driver after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Args)]
struct ReportArgs {
    /// Directory holding <driverId>-report.json files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Driver whose test list is the authoritative row set
    #[arg(long)]
    reference: String,

    /// Page template containing the %%%REPORTS%%% placeholder
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output page path
    #[arg(long, default_value = "index.html")]
    out: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Generate(args) => generate(args).await,
        Commands::Report(args) => report(args),
    }
}

async fn generate(args: GenerateArgs) -> CliResult<()> {
    let mut options = InvocationOptions::new(args.generator, args.command);
    if let Some(date) = args.date {
        options = options.date(date);
    }
    if let Some(secs) = args.timeout_secs {
        options = options.timeout(Duration::from_secs(secs));
    }
    options.args = parse_driver_args(&args.args)?;

    let runner = Runner::new(args.fixture_dir);
    let output = runner.generate(&args.fixture, &options).await?;
    print!("{output}");
    Ok(())
}

fn report(args: ReportArgs) -> CliResult<()> {
    let matrix = aggregate(&args.dir, &DriverId::new(args.reference))?;
    let template = std::fs::read_to_string(&args.template)?;
    let page = render_report(&matrix, &template);
    std::fs::write(&args.out, page)?;

    info!(out = %args.out.display(), "report written");
    println!("Generated new implementation report.");
    Ok(())
}

/// Parse `key=value` pairs into ordered driver flags. A repeated key folds
/// its values into one space-joined list argument.
fn parse_driver_args(pairs: &[String]) -> CliResult<Vec<(String, ArgValue)>> {
    let mut parsed: Vec<(String, ArgValue)> = Vec::new();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::InvalidInput(format!("expected KEY=VALUE, got '{pair}'")))?;
        if key.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "empty flag name in '{pair}'"
            )));
        }

        match parsed
            .iter_mut()
            .find(|(existing, _)| existing.as_str() == key)
        {
            Some(entry) => {
                let prior = std::mem::replace(&mut entry.1, ArgValue::List(Vec::new()));
                entry.1 = match prior {
                    ArgValue::Scalar(first) => ArgValue::List(vec![first, value.to_string()]),
                    ArgValue::List(mut values) => {
                        values.push(value.to_string());
                        ArgValue::List(values)
                    }
                };
            }
            None => parsed.push((key.to_string(), ArgValue::Scalar(value.to_string()))),
        }
    }

    Ok(parsed)
}
