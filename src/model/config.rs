use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    pub version: u32,

    /// Name of the environment used when `--env` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            current: None,
            environments: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub dashboard_url: String,
    pub token: String,
}

/// Fully resolved dashboard endpoint for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub env_name: Option<String>,
    pub dashboard_url: String,
    pub token: String,
}

impl Environment {
    /// Token with everything but the last four characters hidden.
    pub fn masked_token(&self) -> String {
        let n = self.token.chars().count();
        if n <= 4 {
            return "*".repeat(n);
        }
        let tail: String = self.token.chars().skip(n - 4).collect();
        format!("{}{}", "*".repeat(n - 4), tail)
    }
}
