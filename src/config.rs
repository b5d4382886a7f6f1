use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::planning::StrategyKind;

const DEFAULT_LOG_FILTER: &str = "info";

/// Beacon planner for the hexagonal ant contest. Reads the referee protocol on stdin,
/// answers on stdout and logs to stderr.
#[derive(Parser, Debug)]
#[command(name = "hive-beacons")]
pub struct Config {
    /// Path planning strategy
    #[arg(long, default_value = "bfs")]
    pub strategy: StrategyKind,

    /// Log filter directive, takes precedence over RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}
impl Config {
    pub fn log_filter(&self) -> EnvFilter {
        match &self.log {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

/// stdout belongs to the referee, so every log line goes to stderr
pub fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
