use std::sync::Arc;

use anyhow::{Context, Result};
use redactor_config::Config;
use redactor_engine::Redactor;
use redactor_nlp::RuleParser;
use redactor_rules::RedactionPolicy;
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::inputs::expand_inputs;
use crate::stats::{StatsReport, write_stats};

pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // The entity source must be ready before any file is touched
    let parser = RuleParser::from_gazetteer_path(config.gazetteer.path.as_deref())
        .context("Failed to load gazetteer")?;
    let policy = RedactionPolicy::new(config.filler, config.exception_words.clone());
    let redactor = Redactor::new(Arc::new(parser), policy);

    let request = cli.request();
    if request.flags.is_empty() && request.concepts.is_empty() {
        warn!("No redaction flags given, files are copied unchanged");
    }

    let inputs = expand_inputs(&cli.input)?;
    debug!("Expanded {} input(s) to {} file(s)", cli.input.len(), inputs.len());

    tokio::fs::create_dir_all(&cli.output)
        .await
        .with_context(|| format!("Failed to create output directory {}", cli.output.display()))?;

    let mut report = StatsReport::new();
    for input in &inputs {
        let text = tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let redacted = redactor
            .redact(&text, &request)
            .with_context(|| format!("Failed to redact {}", input.display()))?;

        let name = config
            .output_name(input)
            .with_context(|| format!("Input has no file name: {}", input.display()))?;
        let output = cli.output.join(name);
        tokio::fs::write(&output, &redacted.text)
            .await
            .with_context(|| format!("Failed to write {}", output.display()))?;

        info!(
            "Redacted {} -> {} ({} redactions)",
            input.display(),
            output.display(),
            redacted.stats.redaction_count()
        );
        report.record(input, &output, redacted.stats);
    }

    if let Err(e) = report.totals.redaction_percentage() {
        warn!("Redaction percentage unavailable: {}", e);
    }

    let rendered = report.render(cli.stats_format)?;
    write_stats(&cli.stats, &rendered).await
}
