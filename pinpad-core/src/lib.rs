//! Shared schema for the pinpad PIN gate.
//!
//! Defines the PIN candidate type, the JSON bodies of the validation
//! endpoint, the stored records, and the [`Storage`] capability the gateway
//! delegates to.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod pin;
pub mod record;
pub mod storage;
pub mod wire;

pub use error::{PinError, StorageError};
pub use pin::{PinCandidate, PIN_LENGTH};
pub use record::{NewPinCode, NewUser, PinCode, User};
pub use storage::{MemoryStorage, Storage};
pub use wire::{MessageResponse, ValidatePinRequest};
