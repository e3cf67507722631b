use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_BASE_ID: &str = "appsfcB6YESLj4NCN";
pub const DEFAULT_MOVIES_TABLE: &str = "movies";
pub const DEFAULT_USERS_TABLE: &str = "users";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Location of the records API and the tables used.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    pub base_id: String,
    pub movies_table: String,
    pub users_table: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_id: DEFAULT_BASE_ID.to_string(),
            movies_table: DEFAULT_MOVIES_TABLE.to_string(),
            users_table: DEFAULT_USERS_TABLE.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Base URL of the tables, e.g. `https://api.airtable.com/v0/app123`.
    pub fn tables_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.base_id.trim_matches('/')
        )
    }
}
