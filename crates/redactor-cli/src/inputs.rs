use std::path::PathBuf;

use anyhow::{Context, Result, bail};

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Expand `--input` values into file paths
///
/// Glob patterns expand to their matching files, sorted. Literal paths are
/// kept as given, so a missing file surfaces when it is read. Argument order
/// is preserved across values.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !is_pattern(input) {
            files.push(PathBuf::from(input));
            continue;
        }

        let mut matched = Vec::new();
        for entry in glob::glob(input).with_context(|| format!("Invalid glob pattern: {}", input))? {
            let path = entry.with_context(|| format!("Failed to expand {}", input))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        if matched.is_empty() {
            bail!("No files match {}", input);
        }

        // Sort for determinism
        matched.sort();
        files.extend(matched);
    }

    Ok(files)
}
