//! Gateway configuration read from the process environment.

use std::sync::Arc;

use pinpad_core::{MemoryStorage, NewPinCode, PinCandidate, PinError, Storage, StorageError};

/// Address the gateway binds to when `PINPAD_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3456";

const LISTEN_ADDR_VAR: &str = "PINPAD_LISTEN_ADDR";
const PIN_VAR: &str = "PINPAD_PIN";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The seed PIN is not four digits.
    #[error("{var} is not a valid PIN: {source}")]
    InvalidPin {
        var: &'static str,
        #[source]
        source: PinError,
    },
}

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to listen on, e.g. `"0.0.0.0:8080"`.
    pub listen_addr: String,
    /// PIN inserted into storage at startup. `None` leaves storage empty,
    /// so every well-formed PIN is rejected.
    pub pin: Option<PinCandidate>,
}

impl GatewayConfig {
    /// Read `PINPAD_LISTEN_ADDR` and `PINPAD_PIN` from the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPin`] if `PINPAD_PIN` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPin`] if the PIN variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let pin = lookup(PIN_VAR)
            .map(PinCandidate::try_from)
            .transpose()
            .map_err(|source| ConfigError::InvalidPin { var: PIN_VAR, source })?;
        Ok(Self { listen_addr, pin })
    }

    /// Build the in-memory storage, seeded with the configured PIN if any.
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the seed insert.
    pub async fn storage(&self) -> Result<Arc<dyn Storage>, StorageError> {
        let storage = MemoryStorage::new();
        if let Some(pin) = &self.pin {
            storage
                .create_pin_code(NewPinCode { pin: pin.as_str().to_owned() })
                .await?;
        }
        Ok(Arc::new(storage))
    }
}
