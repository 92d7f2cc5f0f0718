use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use mathsheet::generator::constants::{
    DEFAULT_MAX_OPERAND, DEFAULT_MAX_RESULT, DEFAULT_MIN_OPERAND, DEFAULT_MIN_RESULT,
    MAX_GENERATION_ATTEMPTS,
};
use mathsheet::sheet::{
    DEFAULT_COLS_PER_PAGE, DEFAULT_PAGES, DEFAULT_ROWS_PER_PAGE, default_file_name,
    render_answers, write_sheet,
};
use mathsheet::{
    GeneratorConfig, NumberRanges, OperandCount, OperationSet, Operator, ProblemGenerator,
    SheetLayout, generate_batch_parallel, validate_bounds,
};

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

/// Mathsheet - Generate arithmetic practice worksheets
#[derive(Parser, Debug)]
#[command(name = "mathsheet")]
#[command(about = "Generate printable arithmetic practice problems within number ranges")]
#[command(version)]
pub struct CliArgs {
    /// Smallest operand
    #[arg(long, default_value_t = DEFAULT_MIN_OPERAND)]
    pub min_operand: i64,

    /// Largest operand
    #[arg(long, default_value_t = DEFAULT_MAX_OPERAND)]
    pub max_operand: i64,

    /// Smallest result
    #[arg(long, default_value_t = DEFAULT_MIN_RESULT)]
    pub min_result: i64,

    /// Largest result
    #[arg(long, default_value_t = DEFAULT_MAX_RESULT)]
    pub max_result: i64,

    /// Operands on the left-hand side (2 or 3)
    #[arg(short = 'n', long, default_value_t = 2)]
    pub operands: u8,

    /// Include addition (addition and subtraction are used when no operation is given)
    #[arg(long)]
    pub add: bool,

    /// Include subtraction
    #[arg(long)]
    pub sub: bool,

    /// Include multiplication
    #[arg(long)]
    pub mul: bool,

    /// Include division
    #[arg(long)]
    pub div: bool,

    /// Mix multiplication/division with addition/subtraction
    #[arg(long)]
    pub mixed: bool,

    /// Put a blank after `=` in three-operand problems
    #[arg(long)]
    pub inline_blank: bool,

    /// Problems per column
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows: usize,

    /// Columns per page
    #[arg(long, default_value_t = DEFAULT_COLS_PER_PAGE)]
    pub cols: usize,

    /// Number of pages
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pub pages: usize,

    /// Seed for a reproducible worksheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append an answer key
    #[arg(long)]
    pub answers: bool,

    /// Write the worksheet to this file instead of stdout
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write the worksheet into this directory under a name built from the operations
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub generator: GeneratorConfig,
    pub layout: SheetLayout,
    pub seed: Option<u64>,
    pub answers: bool,
    pub destination: Option<PathBuf>,
    pub log_level: LogLevel,
}

fn selected_operations(args: &CliArgs) -> OperationSet {
    let operations = [
        (args.add, Operator::Add),
        (args.sub, Operator::Sub),
        (args.mul, Operator::Mul),
        (args.div, Operator::Div),
    ]
    .into_iter()
    .filter(|(selected, _)| *selected)
    .fold(OperationSet::none(), |set, (_, op)| set.with(op));

    if operations.is_empty() {
        OperationSet::default()
    } else {
        operations
    }
}

/// Validate parsed arguments and turn them into configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    validate_bounds(
        args.min_operand,
        args.max_operand,
        args.min_result,
        args.max_result,
    )
    .context("Invalid number range")?;

    let operand_count = OperandCount::try_from(args.operands).context("Invalid operand count")?;
    let layout = SheetLayout::new(args.rows, args.cols, args.pages).context("Invalid page layout")?;
    let operations = selected_operations(&args);

    let generator = GeneratorConfig {
        ranges: NumberRanges::new(
            args.min_operand,
            args.max_operand,
            args.min_result,
            args.max_result,
        ),
        operations,
        mixed: args.mixed,
        operand_count,
        show_answer_inline: args.inline_blank,
        max_attempts: MAX_GENERATION_ATTEMPTS,
    };
    generator.validate().context("Invalid operation selection")?;

    let destination = match (args.output, args.output_dir) {
        (Some(path), _) => Some(path),
        (None, Some(dir)) => Some(dir.join(default_file_name(&operations, args.mixed))),
        (None, None) => None,
    };

    Ok(CliConfig {
        generator,
        layout,
        seed: args.seed,
        answers: args.answers,
        destination,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let count = config.layout.total_problems();
    info!(
        "Generating {} problems ({} pages of {}x{})",
        count,
        config.layout.pages(),
        config.layout.rows_per_page(),
        config.layout.cols_per_page()
    );

    let problems = match config.seed {
        Some(seed) => ProblemGenerator::with_seed(config.generator, seed).generate_batch(count),
        None => generate_batch_parallel(&config.generator, count),
    }
    .context("Failed to generate problems")?;

    let fallbacks = problems.iter().filter(|p| p.is_fallback()).count();
    if fallbacks > 0 {
        warn!(
            "{} of {} problems could not satisfy the ranges and use the placeholder",
            fallbacks, count
        );
    }

    let mut sheet = config.layout.render(&problems);
    if config.answers {
        sheet.push_str("\u{c}\nAnswers\n");
        sheet.push_str(&render_answers(&problems));
    }

    match config.destination {
        Some(path) => {
            write_sheet(&path, &sheet)
                .with_context(|| format!("Failed to save worksheet to {}", path.display()))?;
            println!("Worksheet saved to {}", path.display());
        }
        None => print!("{}", sheet),
    }
    Ok(())
}
