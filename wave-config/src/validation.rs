use std::fmt;

/// Non-fatal findings produced while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No listing endpoint was configured; every fetch will fail until one
    /// is provided.
    MissingListingEndpoint,
    /// The listing endpoint uses plain http.
    InsecureListingEndpoint { endpoint: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingListingEndpoint => write!(
                f,
                "listing endpoint is not configured (set {})",
                crate::constants::ENV_USERS_API
            ),
            ConfigWarning::InsecureListingEndpoint { endpoint } => {
                write!(f, "listing endpoint {endpoint} is not using https")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.items.contains(warning)
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for warning in &self.items {
            tracing::warn!(%warning, "configuration warning");
        }
    }
}
