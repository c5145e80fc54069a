use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_CACHE_TTL, ENV_CONFIG_PATH, ENV_PAGE_SIZE, ENV_USERS_API,
    ENV_USERS_API_TIMEOUT,
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub listing: FileListingConfig,
    #[serde(default)]
    pub cache: FileCacheConfig,
    #[serde(default)]
    pub pagination: FilePaginationConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileListingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Humantime duration, e.g. `"30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCacheConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staleness_window: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FilePaginationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Environment-derived configuration values, kept raw so parse errors can
/// name the variable that produced them.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub users_api: Option<String>,
    pub users_api_timeout: Option<String>,
    pub cache_ttl: Option<String>,
    pub page_size: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        Self {
            users_api: read(ENV_USERS_API),
            users_api_timeout: read(ENV_USERS_API_TIMEOUT),
            cache_ttl: read(ENV_CACHE_TTL),
            page_size: read(ENV_PAGE_SIZE),
            config_path: read(ENV_CONFIG_PATH).map(PathBuf::from),
        }
    }
}
