use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

/// Location of the raw profile JSON read by `twin build`.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_path")]
    pub path: PathBuf,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: default_profile_path(),
        }
    }
}

fn default_profile_path() -> PathBuf {
    PathBuf::from("./profile.json")
}

/// Location of the document store JSON shared by all commands.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./digitaltwin.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Maximum number of documents returned per search.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    5
}

/// Settings for the hosted completion API (Groq's OpenAI-compatible
/// endpoint). The API key itself comes from the `GROQ_API_KEY` environment
/// variable, never from this file.
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Number of prior turns replayed to the API (4 user/assistant pairs).
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_window: default_history_window(),
        }
    }
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}
fn default_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    500
}
fn default_history_window() -> usize {
    8
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: every setting has a built-in default, so
/// `twin` runs with zero configuration. A file that exists but fails to
/// parse or validate is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.retrieval.limit < 1 {
        anyhow::bail!("retrieval.limit must be >= 1");
    }

    if !(0.0..=2.0).contains(&config.completion.temperature) {
        anyhow::bail!("completion.temperature must be in [0.0, 2.0]");
    }

    if config.completion.max_tokens == 0 {
        anyhow::bail!("completion.max_tokens must be > 0");
    }

    if config.completion.model.trim().is_empty() {
        anyhow::bail!("completion.model must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/twin.toml")).unwrap();
        assert_eq!(config.store.path, PathBuf::from("./digitaltwin.json"));
        assert_eq!(config.retrieval.limit, 5);
        assert_eq!(config.completion.model, "llama-3.1-8b-instant");
        assert_eq!(config.completion.history_window, 8);
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[store]\npath = \"/tmp/docs.json\"").unwrap();
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/docs.json"));
        assert_eq!(config.completion.max_tokens, 500);
        assert!((config.completion.temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_limit_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[retrieval]\nlimit = 0").unwrap();
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[completion]\ntemperature = 3.5").unwrap();
        assert!(load_config(f.path()).is_err());
    }
}
