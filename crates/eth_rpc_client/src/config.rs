use std::env;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Endpoint settings for a JSON-RPC node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub url: String,
    /// Sent as a bearer token when set.
    pub token: Option<String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            token: None,
        }
    }
}

impl RpcConfig {
    pub fn new(url: &str, token: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            token: token.map(str::to_string),
        }
    }

    /// Reads `ETH_RPC_URL` and `ETH_RPC_TOKEN`, loading a `.env` file first if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_values(env::var("ETH_RPC_URL").ok(), env::var("ETH_RPC_TOKEN").ok())
    }

    fn from_values(url: Option<String>, token: Option<String>) -> Self {
        Self {
            url: url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            token: token.filter(|t| !t.is_empty()),
        }
    }
}
