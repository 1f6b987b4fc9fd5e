use std::fmt;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use digitforge::solver::constants::{MAX_RESULT, MIN_RESULT};
use digitforge::{Registry, SynthesisConfig, Synthesizer, parse_operands};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Digitforge - the simplest expression for every number your digits can make
#[derive(Parser, Debug)]
#[command(name = "digitforge")]
#[command(
    about = "List the lowest-rank expression for every integer from 0 to 100 reachable from the given digits"
)]
#[command(version)]
pub struct CliArgs {
    /// Digits to combine, each one used exactly once (e.g. 2567)
    pub digits: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Search permutations in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Also list the values that could not be reached
    #[arg(long)]
    pub missing: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub operands: Vec<u8>,
    pub log_level: LogLevel,
    pub parallel: bool,
    pub show_missing: bool,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let operands = parse_operands(&args.digits).context("Invalid digit string")?;

    Ok(CliConfig {
        operands,
        log_level: args.log_level,
        parallel: args.parallel,
        show_missing: args.missing,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

/// The registry as a table, one reachable value per row
pub struct Report<'a> {
    pub registry: &'a Registry,
    pub show_missing: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .registry
            .iter()
            .map(|(_, answer)| answer.text.len())
            .max()
            .unwrap_or(0)
            .max("expression".len());

        writeln!(f, "{:>5}  {:>4}  {}", "value", "rank", "expression")?;
        writeln!(f, "{}", "-".repeat(5 + 2 + 4 + 2 + width))?;
        for (value, answer) in self.registry.iter() {
            writeln!(f, "{:>5}  {:>4}  {}", value, answer.rank, answer.text)?;
        }

        let total = MAX_RESULT - MIN_RESULT + 1;
        writeln!(f, "{} of {} values reachable", self.registry.len(), total)?;

        if self.show_missing {
            let missing: Vec<String> = self
                .registry
                .missing()
                .iter()
                .map(u32::to_string)
                .collect();
            if missing.is_empty() {
                writeln!(f, "missing: none")?;
            } else {
                writeln!(f, "missing: {}", missing.join(", "))?;
            }
        }
        Ok(())
    }
}

pub fn format_report(registry: &Registry, show_missing: bool) -> String {
    Report {
        registry,
        show_missing,
    }
    .to_string()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let synthesizer = Synthesizer::new(SynthesisConfig {
        parallel: config.parallel,
    });

    info!("Combining operands {:?}", config.operands);

    let registry = synthesizer
        .synthesize(&config.operands)
        .context("Synthesis failed")?;

    if registry.is_empty() {
        warn!("No value in range is reachable");
    }

    print!("{}", format_report(&registry, config.show_missing));
    Ok(())
}
