use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Redactor configuration (config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Character repeated over every redacted match
    #[serde(default = "default_filler")]
    pub filler: char,

    /// Names the name rule never redacts
    #[serde(default = "default_exception_words")]
    pub exception_words: Vec<String>,

    /// Appended to the input file name for the redacted copy
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    #[serde(default)]
    pub gazetteer: GazetteerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GazetteerConfig {
    /// Extra entity names merged into the built-in gazetteer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filler: default_filler(),
            exception_words: default_exception_words(),
            output_extension: default_output_extension(),
            gazetteer: GazetteerConfig::default(),
        }
    }
}

fn default_filler() -> char {
    '█'
}

fn default_exception_words() -> Vec<String> {
    vec!["Enron".to_string()]
}

fn default_output_extension() -> String {
    "censored".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "redactor", "redactor") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.redactor/config.toml")
        }
    }

    /// Reject settings that would break redaction
    ///
    /// An alphanumeric filler could itself match a later pattern (a digit
    /// filler turns a masked date into a phone number).
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.filler.is_alphanumeric() || self.filler.is_whitespace() {
            bail!(
                "filler must be a symbol, not a letter, digit or space: {:?}",
                self.filler
            );
        }
        if self.output_extension.is_empty()
            || self.output_extension.contains(['/', '\\'])
        {
            bail!(
                "output_extension must be a non-empty file suffix: {:?}",
                self.output_extension
            );
        }
        Ok(())
    }

    /// Output file name for an input path: `<basename>.<extension>`
    pub fn output_name(&self, input: &Path) -> Option<String> {
        input
            .file_name()
            .and_then(|n| n.to_str())
            .map(|name| format!("{}.{}", name, self.output_extension))
    }
}
