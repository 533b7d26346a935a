//! Client configuration and the process-wide configuration slot.
//!
//! Prefer building a [`Configuration`] and passing it to
//! [`LoyaltyClient::new`](crate::client::LoyaltyClient::new). The global slot
//! behind [`configure`] exists for applications that set credentials once at
//! startup and hand out clients from anywhere.

use crate::errors::{LoyaltyError, Result};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Connection settings for the loyalty API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL of the loyalty service (e.g., "https://api.example.com")
    pub base_url: Option<String>,

    /// Key sent in the `APIKey` header on every request
    pub api_key: Option<String>,

    /// Request timeout applied to the default HTTP client
    pub timeout: Option<Duration>,
}

impl Configuration {
    /// Creates a configuration with a base URL and API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use brink_loyalty::config::Configuration;
    ///
    /// let config = Configuration::new("https://api.example.com", "TEST_API_KEY");
    /// assert_eq!(config.api_key.as_deref(), Some("TEST_API_KEY"));
    /// ```
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key: Some(api_key.into()),
            timeout: None,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

static GLOBAL: RwLock<Option<Configuration>> = RwLock::new(None);

/// Mutates the process-wide configuration, creating it on first use.
///
/// Fields the closure leaves alone keep their previous values.
///
/// # Examples
///
/// ```
/// brink_loyalty::configure(|config| {
///     config.base_url = Some("https://api.example.com".to_string());
///     config.api_key = Some("TEST_API_KEY".to_string());
/// });
///
/// let current = brink_loyalty::configuration().unwrap();
/// assert_eq!(current.api_key.as_deref(), Some("TEST_API_KEY"));
/// ```
pub fn configure<F>(mutator: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    mutator(slot.get_or_insert_with(Configuration::default));
    tracing::debug!(
        base_url = ?slot.as_ref().and_then(|c| c.base_url.as_deref()),
        "Loyalty configuration updated"
    );
}

/// Returns a snapshot of the process-wide configuration.
///
/// Fails with [`LoyaltyError::NotConfigured`] if [`configure`] was never called.
pub fn configuration() -> Result<Configuration> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(LoyaltyError::NotConfigured)
}

/// Clears the process-wide configuration.
pub fn reset() {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = None;
}
