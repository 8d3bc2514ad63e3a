use dotenvy::dotenv;
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Discord message limit is 2000 characters
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

pub const DEFAULT_CREDENTIALS_PATH: &str = "config.json";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Sites the web search is restricted to when no resources file overrides them.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "betaflight.com",
    "github.com/betaflight",
    "inavflight.org",
    "oscarliang.com",
    "intofpv.com",
    "rotorbuilds.com",
    "mateksys.com",
    "holybro.com",
    "iflight-rc.com",
    "diatone.us",
];

const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
const TAVILY_API_KEY: &str = "TAVILY_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing {path}: create it with your keys")]
    MissingFile { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} must contain a non-empty {field}")]
    MissingField { field: &'static str, path: PathBuf },
}

/// Optional curated resources: search allow-list and citable documents.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Resources {
    pub trusted_domains: Vec<String>,
    pub documents: Vec<String>,
}

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub discord_token: String,
    pub tavily_api_key: String,
    pub chat_model: String,
    pub openai_base_url: Option<String>,
    pub trusted_domains: Vec<String>,
    pub documents: Vec<String>,
}

impl Config {
    /// Loads `.env`, then the credentials file named by `FPV_CONFIG_PATH`
    /// and the resources file named by `FPV_RESOURCES_PATH` (if set).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let credentials_path = env::var("FPV_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string());
        let resources_path = env::var("FPV_RESOURCES_PATH").ok().map(PathBuf::from);

        let mut config = Self::load(Path::new(&credentials_path), resources_path.as_deref())?;
        if let Ok(model) = env::var("OPENAI_MODEL") {
            if !model.trim().is_empty() {
                config.chat_model = model;
            }
        }
        config.openai_base_url = env::var("OPENAI_BASE_URL").ok().filter(|u| !u.is_empty());
        Ok(config)
    }

    pub fn load(credentials_path: &Path, resources_path: Option<&Path>) -> Result<Self, ConfigError> {
        let credentials = read_json(credentials_path)?;

        let resources = match resources_path {
            Some(path) => {
                let value = read_json(path)?;
                serde_json::from_value::<Resources>(value).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Resources::default(),
        };

        let trusted_domains = if resources.trusted_domains.is_empty() {
            DEFAULT_TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect()
        } else {
            resources.trusted_domains
        };

        Ok(Config {
            openai_api_key: required_field(&credentials, OPENAI_API_KEY, credentials_path)?,
            discord_token: required_field(&credentials, DISCORD_TOKEN, credentials_path)?,
            tavily_api_key: required_field(&credentials, TAVILY_API_KEY, credentials_path)?,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            openai_base_url: None,
            trusted_domains,
            documents: resources.documents,
        })
    }
}

fn read_json(path: &Path) -> Result<Value, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn required_field(value: &Value, field: &'static str, path: &Path) -> Result<String, ConfigError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingField {
            field,
            path: path.to_path_buf(),
        })
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"[REDACTED]")
            .field("discord_token", &"[REDACTED]")
            .field("tavily_api_key", &"[REDACTED]")
            .field("chat_model", &self.chat_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("trusted_domains", &self.trusted_domains)
            .field("documents", &self.documents)
            .finish()
    }
}
