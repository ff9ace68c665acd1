use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation service
    #[serde(default = "default_recommendations_api_url")]
    pub recommendations_api_url: String,

    /// Count sent when no count is given on the command line
    #[serde(default = "default_num_recommendations")]
    pub default_num_recommendations: String,

    /// tracing-subscriber filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_recommendations_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_num_recommendations() -> String {
    "5".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
