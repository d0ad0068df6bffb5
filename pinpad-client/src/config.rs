//! Client-side settings.

use std::time::Duration;

/// Where the form navigates after a successful validation.
pub const DEFAULT_REDIRECT_URL: &str = "https://xyz.com";

/// How long the success notice stays up before navigating.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Settings for a [`crate::PinForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClientConfig {
    pub redirect_url: String,
    pub redirect_delay: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = url.into();
        self
    }

    #[must_use]
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            redirect_url: DEFAULT_REDIRECT_URL.to_owned(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }
}
