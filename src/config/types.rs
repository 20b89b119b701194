use serde::Deserialize;

/// Listing crawled when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "https://movie.douban.com/top250";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Where the ranked listing lives
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// URL of the first listing page; other pages append their relative path to it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds (none when unset)
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds (none when unset)
    #[serde(rename = "connect-timeout-secs", default)]
    pub connect_timeout_secs: Option<u64>,
}
