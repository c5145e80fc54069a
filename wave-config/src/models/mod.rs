pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_STALENESS_WINDOW};

/// Effective configuration after merging file, env, and defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub listing: ListingConfig,
    pub cache: CacheConfig,
    pub pagination: PaginationConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    /// `None` is legal; the store reports it when a fetch is attempted.
    pub endpoint: Option<Url>,
    /// `None` means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ListingConfig {
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint: Some(endpoint),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// A fetch within this window after the last success is served from
    /// memory.
    pub staleness_window: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            staleness_window: DEFAULT_STALENESS_WINDOW,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where the effective values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}
