use anyhow::{Context, Result};
use config::{Environment, File, FileFormat};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix for structured environment overrides, e.g. `NEWSDASH_LLM__MODEL`.
const ENV_PREFIX: &str = "NEWSDASH";

/// Environment variables the dashboard has always read its secrets from.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("NEWS_API_KEY", "news.api_key"),
    ("OPENAI_API_KEY", "llm.api_key"),
    ("GOOGLE_TTS_API_KEY", "tts.api_key"),
    ("GOOGLE_APPLICATION_CREDENTIALS", "tts.credentials_path"),
];

const DEFAULT_CONFIG_FILES: &[&str] = &["conf.yaml", "conf.yml", "conf.json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub news: NewsApiConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    /// Directory synthesized audio is written to and served from under `/output`
    pub output_dir: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            output_dir: "output".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

/// Settings for the news search provider (newsapi.org wire format)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub user_agent: String,
    pub headline_category: String,
    pub headline_language: String,
    pub headline_page_size: u32,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
            user_agent: "Mozilla/5.0".to_string(),
            headline_category: "business".to_string(),
            headline_language: "en".to_string(),
            headline_page_size: 30,
        }
    }
}

/// Settings for the OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    /// Model used for the narrative summary of a search
    pub model: String,
    /// Model used for per-headline translation and summaries
    pub digest_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4".to_string(),
            digest_model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// Settings for the Google-style text-to-speech endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Service-account JSON file; takes priority over `api_key` when set
    pub credentials_path: Option<String>,
    pub language_code: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com/v1".to_string(),
            api_key: String::new(),
            credentials_path: None,
            language_code: "ko-KR".to_string(),
        }
    }
}

impl TtsConfig {
    pub fn credentials_file(&self) -> Option<PathBuf> {
        self.credentials_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

impl Config {
    /// Locate and load the configuration.
    ///
    /// An explicit path must exist. Otherwise `CONFIG_PATH` and the default
    /// file names are tried in order, falling back to defaults plus the
    /// environment when no file is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from: {}", path.display());
            return Self::load(path);
        }

        let candidates: Vec<PathBuf> = std::env::var("CONFIG_PATH")
            .ok()
            .into_iter()
            .chain(DEFAULT_CONFIG_FILES.iter().map(|s| s.to_string()))
            .map(PathBuf::from)
            .collect();

        for path in &candidates {
            if !path.exists() {
                debug!("No config file at {}", path.display());
                continue;
            }
            info!("Loading configuration from: {}", path.display());
            return Self::load(path);
        }

        info!("No config file found, using defaults and environment");
        Self::from_sources(None)
    }

    /// Load a YAML, JSON or TOML file, layering the environment on top.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_config_text(path)?;
        let format = format_for(path)?;
        let expanded = expand_env_placeholders(&content);
        Self::from_sources(Some((expanded, format)))
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse configuration text directly; used for inline configs and tests.
    pub fn parse_str(content: &str, format: FileFormat) -> Result<Self> {
        Self::from_sources(Some((expand_env_placeholders(content), format)))
    }

    fn from_sources(file: Option<(String, FileFormat)>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some((content, format)) = file {
            builder = builder.add_source(File::from_str(&content, format));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        for (var, key) in LEGACY_ENV_KEYS {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Log every upstream credential that is not configured. Missing keys are
    /// not fatal; the affected upstream call fails per request instead.
    pub fn warn_missing_credentials(&self) {
        if self.news.api_key.trim().is_empty() {
            warn!("News API key is not configured (NEWS_API_KEY)");
        }
        if self.llm.api_key.trim().is_empty() {
            warn!("Chat completion API key is not configured (OPENAI_API_KEY)");
        }
        if self.tts.api_key.trim().is_empty() && self.tts.credentials_file().is_none() {
            warn!("No TTS credentials configured (GOOGLE_TTS_API_KEY or GOOGLE_APPLICATION_CREDENTIALS)");
        }
    }
}

fn format_for(path: &Path) -> Result<FileFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "json" | "jsonld" => Ok(FileFormat::Json),
        "toml" => Ok(FileFormat::Toml),
        other => anyhow::bail!("Unsupported config file extension: {:?}", other),
    }
}

/// Read a config file as UTF-8, dropping a leading BOM if present.
fn read_config_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        warn!("Configuration file {} contains invalid UTF-8", path.display());
    }
    Ok(text.into_owned())
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables expand to an empty string.
pub fn expand_env_placeholders(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| {
                debug!("Environment variable {} is not set", name);
                String::new()
            })
        })
        .into_owned()
}
