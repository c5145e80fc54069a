//! Config composition: `.env` -> environment -> optional TOML file ->
//! defaults. Environment values win over file values.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{KEY_CACHE_TTL, KEY_USERS_API_TIMEOUT};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    CacheConfig, Config, ConfigMetadata, ListingConfig, PaginationConfig,
};
use crate::util::{parse_duration, parse_endpoint, parse_page_size};
use crate::validation::{ConfigWarning, ConfigWarnings};

use self::error::ConfigLoadError;

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_dotenv: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file instead of `$WAVE_CONFIG_PATH`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load this env file instead of searching for `.env`. The file must
    /// exist.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file = self.load_dotenv()?;
        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file = env_file;
        Ok(load)
    }

    /// Compose configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let config_path = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let file = match config_path.as_deref() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let mut warnings = ConfigWarnings::default();
        let listing = resolve_listing(&env, &file, &mut warnings)?;

        let cache = match env
            .cache_ttl
            .as_deref()
            .or(file.cache.staleness_window.as_deref())
        {
            Some(raw) => CacheConfig {
                staleness_window: parse_duration(KEY_CACHE_TTL, raw)?,
            },
            None => CacheConfig::default(),
        };

        let pagination = match (&env.page_size, file.pagination.page_size) {
            (Some(raw), _) => PaginationConfig {
                page_size: parse_page_size(raw)?,
            },
            (None, Some(0)) => {
                return Err(ConfigLoadError::InvalidPageSize {
                    value: "0".to_string(),
                });
            }
            (None, Some(page_size)) => PaginationConfig { page_size },
            (None, None) => PaginationConfig::default(),
        };

        tracing::info!(
            config_path = ?config_path,
            endpoint = ?listing.endpoint.as_ref().map(|url| url.as_str()),
            staleness_window = ?cache.staleness_window,
            page_size = pagination.page_size,
            "loaded configuration"
        );
        warnings.log();

        Ok(ConfigLoad {
            config: Config {
                listing,
                cache,
                pagination,
                metadata: ConfigMetadata {
                    config_path,
                    env_file: None,
                },
            },
            warnings,
        })
    }

    fn load_dotenv(&self) -> Result<Option<PathBuf>, ConfigLoadError> {
        if let Some(path) = &self.env_file {
            dotenvy::from_path(path).map_err(|source| {
                ConfigLoadError::EnvFile {
                    path: path.clone(),
                    source,
                }
            })?;
            return Ok(Some(path.clone()));
        }

        if self.skip_dotenv {
            return Ok(None);
        }

        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(source) => Err(ConfigLoadError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve_listing(
    env: &EnvConfig,
    file: &FileConfig,
    warnings: &mut ConfigWarnings,
) -> Result<ListingConfig, ConfigLoadError> {
    let raw_endpoint = env
        .users_api
        .as_deref()
        .or(file.listing.endpoint.as_deref())
        .filter(|value| !value.trim().is_empty());

    let endpoint = match raw_endpoint {
        Some(raw) => {
            let url = parse_endpoint(raw)?;
            if url.scheme() == "http" {
                warnings.push(ConfigWarning::InsecureListingEndpoint {
                    endpoint: url.to_string(),
                });
            }
            Some(url)
        }
        None => {
            warnings.push(ConfigWarning::MissingListingEndpoint);
            None
        }
    };

    let request_timeout = env
        .users_api_timeout
        .as_deref()
        .or(file.listing.request_timeout.as_deref())
        .map(|raw| parse_duration(KEY_USERS_API_TIMEOUT, raw))
        .transpose()?;

    Ok(ListingConfig {
        endpoint,
        request_timeout,
    })
}
