use serde::{Deserialize, Serialize};

mod config;
pub use self::config::*;

/// Display projection of an API definition, as shown by `api list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRecord {
    pub id: String,
    pub name: String,
    pub listen_path: String,
    pub default_version: String,
}
