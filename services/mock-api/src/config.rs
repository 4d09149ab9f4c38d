use serde::Deserialize;

use tailmate_core::config::Config;

/// Mock API configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct MockApiConfig {
    /// Interface to bind (default `0.0.0.0`). Env var: `MOCK_API_HOST`.
    #[serde(default = "default_host")]
    pub mock_api_host: String,
    /// TCP port for the HTTP server (default 8000). Env var: `MOCK_API_PORT`.
    #[serde(default = "default_port")]
    pub mock_api_port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8000
}

impl Config for MockApiConfig {}

impl MockApiConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.mock_api_host, self.mock_api_port)
    }
}
