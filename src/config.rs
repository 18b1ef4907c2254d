//! Command line and environment configuration.
//!
//! Values come from the command line first, then the environment (a `.env`
//! file is loaded by `main` before parsing), then the defaults below.

use crate::output::OutputFormat;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "ip-range-cidrs")]
#[command(version, about = "Convert inclusive IP address ranges into CIDR blocks")]
pub struct Cli {
    /// First address of the range
    #[arg(requires = "end", conflicts_with = "file")]
    pub begin: Option<String>,

    /// Last address of the range (inclusive)
    pub end: Option<String>,

    /// Read ranges from a file, one per line ('-' for stdin)
    #[arg(short, long, required_unless_present = "begin")]
    pub file: Option<String>,

    #[arg(long, value_enum, env = "RANGE_CIDRS_FORMAT", default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Re-check every result for exact, ordered, minimal coverage
    #[arg(long)]
    pub verify: bool,

    /// log4rs configuration file
    #[arg(long, env = "RANGE_CIDRS_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: String,

    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn color(&self) -> bool {
        !self.no_color
    }
}

/// Start logging from `path`, or to stderr at `warn` when the file is missing.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("logging configured from {path}");
        return Ok(());
    }
    log4rs::init_config(default_log_config()?)?;
    log::debug!("{path} not found, logging to stderr");
    Ok(())
}

fn default_log_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {M} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_single_range() {
        let cli = Cli::try_parse_from(["ip-range-cidrs", "10.0.0.1", "10.0.0.9"]).unwrap();
        assert_eq!(cli.begin.as_deref(), Some("10.0.0.1"));
        assert_eq!(cli.end.as_deref(), Some("10.0.0.9"));
        assert!(cli.file.is_none());
        assert!(!cli.verify);
        assert!(cli.color());
    }

    #[test]
    fn test_cli_file_and_flags() {
        let cli = Cli::try_parse_from([
            "ip-range-cidrs",
            "--file",
            "ranges.txt",
            "--format",
            "json",
            "--verify",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.file.as_deref(), Some("ranges.txt"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verify);
        assert!(!cli.color());
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["ip-range-cidrs"]).is_err());
        assert!(Cli::try_parse_from(["ip-range-cidrs", "10.0.0.1"]).is_err());
        assert!(
            Cli::try_parse_from(["ip-range-cidrs", "10.0.0.1", "10.0.0.2", "-f", "x"]).is_err()
        );
    }

    #[test]
    fn test_default_log_config_builds() {
        assert!(default_log_config().is_ok());
    }
}
