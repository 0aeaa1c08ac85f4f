use std::path::PathBuf;

use clap::Parser;
use redactor_core::{RedactionFlags, RedactionRequest};

use crate::stats::{StatsDestination, StatsFormat};

#[derive(Parser)]
#[command(name = "redactor")]
#[command(about = "Redact sensitive information from text documents", long_about = None)]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Input file(s) or glob pattern(s)
    #[arg(long, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Redact names of people and organizations
    #[arg(long)]
    pub names: bool,

    /// Redact dates
    #[arg(long)]
    pub dates: bool,

    /// Redact phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Redact street addresses and place names
    #[arg(long)]
    pub address: bool,

    /// Redact whole sentences containing this concept (repeatable)
    #[arg(long)]
    pub concept: Vec<String>,

    /// Directory to store redacted files
    #[arg(long)]
    pub output: PathBuf,

    /// Where to write statistics: stdout, stderr, or a file path
    #[arg(long, value_parser = StatsDestination::parse)]
    pub stats: StatsDestination,

    /// Statistics format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Config file (default: platform config dir)
    #[arg(long, env = "REDACTOR_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn request(&self) -> RedactionRequest {
        let flags = RedactionFlags {
            names: self.names,
            dates: self.dates,
            phones: self.phones,
            address: self.address,
        };
        RedactionRequest::new(flags, self.concept.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags_and_concepts() {
        let cli = Cli::try_parse_from([
            "redactor", "--input", "a.txt", "b.txt", "--names", "--phones", "--concept", "wine",
            "--concept", "beer", "--output", "out", "--stats", "stderr",
        ])
        .unwrap();

        assert_eq!(cli.input, vec!["a.txt", "b.txt"]);
        assert_eq!(cli.stats, StatsDestination::Stderr);
        let request = cli.request();
        assert!(request.flags.names && request.flags.phones);
        assert!(!request.flags.dates && !request.flags.address);
        assert_eq!(request.concepts, vec!["wine", "beer"]);
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-v", "-V", "--version"] {
            let err = Cli::try_parse_from(["redactor", flag]).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_output_and_stats_required() {
        assert!(Cli::try_parse_from(["redactor", "--input", "a.txt", "--stats", "stdout"]).is_err());
        assert!(Cli::try_parse_from(["redactor", "--input", "a.txt", "--output", "out"]).is_err());
    }
}
