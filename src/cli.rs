use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use mathgen::utils::validate_count;
use mathgen::{DivisionPolicy, ExpressionGenerator, GeneratedExpression, GeneratorConfig};

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

/// mathgen - Generate random arithmetic problems with answers
#[derive(Parser, Debug)]
#[command(name = "mathgen")]
#[command(about = "Generate random arithmetic expressions and their answers")]
#[command(version)]
pub struct CliArgs {
    /// Difficulty level (1 = single digits, 2 = two digits, ...)
    #[arg(allow_negative_numbers = true)]
    pub difficulty: i64,

    /// Number of expressions to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Exact number of operands per expression
    #[arg(long)]
    pub operands: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Allow divisions with non-integer results
    #[arg(long)]
    pub allow_decimal: bool,

    /// Allow expressions whose answer is negative
    #[arg(long)]
    pub allow_negative: bool,

    /// Print expressions as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub generator: GeneratorConfig,
    pub difficulty: i64,
    pub count: usize,
    pub operands: Option<usize>,
    pub seed: Option<u64>,
    pub latex: bool,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        validate_count(args.count).context("Invalid count")?;

        let division = if args.allow_decimal {
            DivisionPolicy::AllowDecimal
        } else {
            DivisionPolicy::WholeNumber
        };
        let generator = GeneratorConfig::default()
            .division(division)
            .allow_negative_result(args.allow_negative);

        Ok(CliConfig {
            generator,
            difficulty: args.difficulty,
            count: args.count,
            operands: args.operands,
            seed: args.seed,
            latex: args.latex,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

pub fn format_line(generated: &GeneratedExpression, latex: bool) -> String {
    if latex {
        format!("{} = {}", generated.expression().to_latex(), generated.result())
    } else {
        generated.to_string()
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut generator = match config.seed {
        Some(seed) => ExpressionGenerator::from_seed(config.generator, seed),
        None => ExpressionGenerator::with_config(config.generator),
    }
    .context("Invalid generator configuration")?;

    info!(
        "Generating {} expression(s) at difficulty {}",
        config.count, config.difficulty
    );

    let problems = match config.operands {
        Some(operands) => {
            generator.generate_expression_set_with_operands(config.count, operands, config.difficulty)
        }
        None => generator.generate_expression_set(config.count, config.difficulty),
    }
    .context("Failed to generate expressions")?;

    for generated in &problems {
        println!("{}", format_line(generated, config.latex));
    }
    Ok(())
}
