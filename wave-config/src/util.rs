use std::time::Duration;

use url::Url;

use crate::ConfigLoadError;

pub fn parse_duration(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: raw.to_string(),
            source,
        }
    })
}

pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigLoadError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|source| {
        ConfigLoadError::InvalidEndpoint {
            value: trimmed.to_string(),
            source,
        }
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigLoadError::UnsupportedEndpointScheme {
            value: trimmed.to_string(),
        }),
    }
}

pub fn parse_page_size(raw: &str) -> Result<usize, ConfigLoadError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigLoadError::InvalidPageSize {
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humantime_durations() {
        assert_eq!(
            parse_duration("cache.staleness_window", "10m").unwrap(),
            Duration::from_secs(600)
        );
        assert!(parse_duration("cache.staleness_window", "ten").is_err());
    }

    #[test]
    fn endpoint_requires_http_scheme() {
        assert!(parse_endpoint("https://example.com/users").is_ok());
        assert!(matches!(
            parse_endpoint("ftp://example.com/users"),
            Err(ConfigLoadError::UnsupportedEndpointScheme { .. })
        ));
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(ConfigLoadError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn page_size_must_be_positive() {
        assert_eq!(parse_page_size(" 25 ").unwrap(), 25);
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("-3").is_err());
    }
}
