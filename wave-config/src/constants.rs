use std::time::Duration;

/// Listing endpoint URL.
pub const ENV_USERS_API: &str = "WAVE_USERS_API";
/// Optional per-request timeout for the listing endpoint (humantime).
pub const ENV_USERS_API_TIMEOUT: &str = "WAVE_USERS_API_TIMEOUT";
/// How long a successful fetch is served from cache (humantime).
pub const ENV_CACHE_TTL: &str = "WAVE_CACHE_TTL";
pub const ENV_PAGE_SIZE: &str = "WAVE_PAGE_SIZE";
pub const ENV_CONFIG_PATH: &str = "WAVE_CONFIG_PATH";

pub const DEFAULT_STALENESS_WINDOW: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub(crate) const KEY_USERS_API_TIMEOUT: &str = "listing.request_timeout";
pub(crate) const KEY_CACHE_TTL: &str = "cache.staleness_window";
