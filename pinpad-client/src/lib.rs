//! Client side of the pinpad PIN gate.
//!
//! A headless form that collects four digits from an on-screen keypad,
//! submits them automatically, and either schedules a redirect or resets
//! for another attempt. Physical keyboard digits are suppressed; see
//! [`keypad::keyboard_disposition`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod collector;
pub mod config;
pub mod error;
pub mod form;
pub mod keypad;
pub mod redirect;
pub mod validator;

pub use collector::PinCollector;
pub use config::ClientConfig;
pub use error::ClientError;
pub use form::{FormStatus, Notice, PinForm, Severity, Submission};
pub use keypad::{Key, KeyDisposition};
pub use redirect::{Navigator, Redirect};
pub use validator::{HttpValidator, PinValidator};
