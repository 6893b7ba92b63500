use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum organic results requested from the search provider per query.
    pub result_cap: usize,
    pub api_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Per-page timeout; a page that exceeds it is recorded as a failure and
    /// never retried.
    pub timeout_seconds: u64,
    /// Upper bound on in-flight page fetches.
    pub max_concurrent_fetches: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// When true, a 10-digit run only counts as a phone number if its first
    /// digit is in `phone_prefix_digits`. Disable to accept any 10-digit run.
    pub restrict_phone_prefix: bool,
    pub phone_prefix_digits: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                result_cap: 20,
                api_timeout_seconds: 10,
            },
            fetch: FetchConfig {
                timeout_seconds: 7,
                max_concurrent_fetches: 10,
                user_agent: "Mozilla/5.0".to_string(),
            },
            extraction: ExtractionConfig {
                restrict_phone_prefix: true,
                phone_prefix_digits: vec![7, 8, 9, 6],
            },
            output: OutputConfig {
                directory: "out".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
