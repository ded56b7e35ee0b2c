use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;

use rusty_tally::classify::{classify, difference};
use rusty_tally::data::loader::load_file;
use rusty_tally::report::Report;
use rusty_tally::stats::normalize;

const DEFAULT_INPUT: &str = "data/numbers.txt";
const DEFAULT_FORMAT: OutputFormat = OutputFormat::Text;

#[derive(Parser)]
#[command(name = "rusty-tally")]
#[command(about = "Average, normalize and classify lists of numbers")]
struct Cli {
    /// Defaults to `report` on data/numbers.txt
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the count and average of a number file
    Report(InputArgs),

    /// Print every value divided by the file's maximum
    Normalize(InputArgs),

    /// Label a triple of numbers and print their sum
    Classify {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Print the absolute difference of two numbers
    Diff {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Number file (.txt, .csv or .json)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = DEFAULT_FORMAT)]
    format: OutputFormat,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: DEFAULT_FORMAT,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Commands::Report(InputArgs::default())) {
        Commands::Report(args) => run_report(&args.input, args.format),
        Commands::Normalize(args) => run_normalize(&args.input, args.format),
        Commands::Classify { x, y, z } => {
            let result = classify(x, y, z);
            println!("{}", result.label);
            println!("{}", result.sum);
            Ok(())
        }
        Commands::Diff { a, b } => {
            println!("{}", difference(a, b));
            Ok(())
        }
    }
}

fn run_report(input: &Path, format: OutputFormat) -> Result<()> {
    let list = load_file(input).with_context(|| format!("loading {}", input.display()))?;
    let report = Report::from_list(&list)
        .with_context(|| format!("summarising {}", input.display()))?;
    debug!("report for {}: {report:?}", input.display());

    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json().context("serialising report")?),
    }
    Ok(())
}

fn run_normalize(input: &Path, format: OutputFormat) -> Result<()> {
    let list = load_file(input).with_context(|| format!("loading {}", input.display()))?;
    let normalized = normalize(list.as_slice());

    match format {
        OutputFormat::Text => {
            for value in &normalized {
                println!("{value}");
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&normalized).context("serialising normalized values")?
        ),
    }
    Ok(())
}
