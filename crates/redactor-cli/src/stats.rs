use std::convert::Infallible;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use redactor_core::{FileStats, RunStats};
use serde::Serialize;

/// Where the run statistics go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsDestination {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl StatsDestination {
    /// `stdout` and `stderr` name the streams, anything else is a file path
    pub fn parse(value: &str) -> Result<Self, Infallible> {
        Ok(match value {
            "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    /// `key: value` lines
    Text,
    /// JSON object with per-file detail
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub stats: FileStats,
}

/// Aggregate statistics plus the files that produced them
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub totals: RunStats,
    pub redaction_percentage: Option<f64>,
    pub files: Vec<FileReport>,
}

impl StatsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, input: &Path, output: &Path, stats: FileStats) {
        self.totals.record(&stats);
        self.redaction_percentage = self.totals.redaction_percentage().ok();
        self.files.push(FileReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            stats,
        });
    }

    pub fn render(&self, format: StatsFormat) -> Result<String> {
        match format {
            StatsFormat::Text => Ok(self.totals.to_key_value_lines()),
            StatsFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

pub async fn write_stats(destination: &StatsDestination, content: &str) -> Result<()> {
    match destination {
        StatsDestination::Stdout => println!("{}", content),
        StatsDestination::Stderr => eprintln!("{}", content),
        StatsDestination::File(path) => {
            tokio::fs::write(path, format!("{}\n", content))
                .await
                .with_context(|| format!("Failed to write stats to {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::{Category, RedactionInfo};

    #[test]
    fn test_parse_destination() {
        assert_eq!(StatsDestination::parse("stdout"), Ok(StatsDestination::Stdout));
        assert_eq!(StatsDestination::parse("stderr"), Ok(StatsDestination::Stderr));
        assert_eq!(
            StatsDestination::parse("out/stats.txt"),
            Ok(StatsDestination::File(PathBuf::from("out/stats.txt")))
        );
    }

    #[test]
    fn test_text_render() {
        let mut report = StatsReport::new();
        report.record(
            Path::new("a.txt"),
            Path::new("out/a.txt.censored"),
            FileStats::new("abcd", "abc"),
        );

        assert_eq!(
            report.render(StatsFormat::Text).unwrap(),
            "files_processed: 1\ntotal_chars_original: 4\ntotal_chars_redacted: 3\nredaction_percentage: -25.0"
        );
    }

    #[test]
    fn test_json_render() {
        let mut report = StatsReport::new();
        let stats = FileStats::new("Call 555-123-4567", "Call ████████████").with_redactions(vec![
            RedactionInfo {
                category: Category::Phones,
                count: 1,
            },
        ]);
        report.record(Path::new("a.txt"), Path::new("out/a.txt.censored"), stats);

        let value: serde_json::Value =
            serde_json::from_str(&report.render(StatsFormat::Json).unwrap()).unwrap();
        assert_eq!(value["files_processed"], 1);
        assert_eq!(value["total_chars_original"], 17);
        assert_eq!(value["redaction_percentage"], 0.0);
        assert_eq!(value["files"][0]["input"], "a.txt");
        assert_eq!(value["files"][0]["redactions"][0]["category"], "phones");
    }

    #[test]
    fn test_empty_run_has_no_percentage() {
        let report = StatsReport::new();
        let value: serde_json::Value =
            serde_json::from_str(&report.render(StatsFormat::Json).unwrap()).unwrap();
        assert!(value["redaction_percentage"].is_null());
        assert!(
            report
                .render(StatsFormat::Text)
                .unwrap()
                .ends_with("redaction_percentage: N/A")
        );
    }
}
