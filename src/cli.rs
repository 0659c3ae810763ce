use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use numble::{Expression, ExpressionSolver, SolverConfig, validate_numbers};

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

/// Numble - Reach a target number by combining the given numbers
#[derive(Parser, Debug)]
#[command(name = "numble")]
#[command(
    about = "Find the simplest arithmetic expression over the given numbers that equals the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    pub target: u64,

    /// Numbers available, each usable at most once
    #[arg(required = true)]
    pub numbers: Vec<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Stop after generating this many candidate expressions
    #[arg(long)]
    pub node_budget: Option<u64>,

    /// Print every distinct solution, simplest first
    #[arg(short, long)]
    pub all: bool,

    /// Use * and / instead of × and ÷
    #[arg(long)]
    pub ascii: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: u64,
    pub numbers: Vec<u64>,
    pub log_level: LogLevel,
    pub solver: SolverConfig,
    pub all: bool,
    pub ascii: bool,
}

/// Whether a solution was printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Unsolved,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            target: args.target,
            numbers: args.numbers,
            log_level: args.log_level,
            solver: SolverConfig {
                node_budget: args.node_budget,
            },
            all: args.all,
            ascii: args.ascii,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_numbers(&args.numbers).context("Invalid numbers")?;

    Ok(CliConfig::from(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// `<expression> = <target>`
pub fn format_line(expr: &Expression, target: u64, ascii: bool) -> String {
    if ascii {
        format!("{} = {}", expr.to_ascii(), target)
    } else {
        format!("{} = {}", expr, target)
    }
}

/// Run the main application logic
pub fn run() -> Result<Outcome> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::with_config(config.solver.clone());

    info!(
        "Searching for expressions over {:?} that equal {}",
        config.numbers, config.target
    );

    let solution = solver.solve(config.target, &config.numbers);

    if solution.stats().budget_exhausted {
        warn!(
            "Search stopped early after {} nodes; the result may not be the simplest",
            solution.stats().nodes_generated
        );
    }

    if config.all {
        for expr in solution.ranked() {
            println!("{}", format_line(expr, config.target, config.ascii));
        }
    } else if let Some(expr) = solution.best() {
        println!("{}", format_line(expr, config.target, config.ascii));
    }

    if solution.is_empty() {
        warn!("No matching expression found");
        println!("No solution found.");
        Ok(Outcome::Unsolved)
    } else {
        Ok(Outcome::Solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["numble", "375", "5", "75"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, 375);
            assert_eq!(args.numbers, vec![5, 75]);
            assert!(matches!(args.log_level, LogLevel::Warn));
            assert_eq!(args.node_budget, None);
            assert!(!args.all);
            assert!(!args.ascii);
        }
    }

    #[test]
    fn test_cli_args_flags() {
        let args = CliArgs::try_parse_from([
            "numble",
            "--log-level",
            "debug",
            "--node-budget",
            "500",
            "--all",
            "--ascii",
            "14",
            "7",
            "7",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from(args);
            assert_eq!(config.target, 14);
            assert_eq!(config.numbers, vec![7, 7]);
            assert!(matches!(config.log_level, LogLevel::Debug));
            assert_eq!(config.solver.node_budget, Some(500));
            assert!(config.all);
            assert!(config.ascii);
        }
    }

    #[test]
    fn test_cli_args_reject_non_integers() {
        assert!(CliArgs::try_parse_from(["numble", "375", "5", "seven"]).is_err());
        assert!(CliArgs::try_parse_from(["numble", "3.5", "5"]).is_err());
        assert!(CliArgs::try_parse_from(["numble", "375", "-5"]).is_err());
    }

    #[test]
    fn test_cli_args_require_numbers() {
        assert!(CliArgs::try_parse_from(["numble", "375"]).is_err());
    }

    #[test]
    fn test_format_line() {
        let solver = ExpressionSolver::new();
        let found = solver.find_expression(15, &[5, 75]);
        assert!(found.is_some());
        if let Some(expr) = found {
            assert_eq!(format_line(&expr, 15, false), "75 ÷ 5 = 15");
            assert_eq!(format_line(&expr, 15, true), "75 / 5 = 15");
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
