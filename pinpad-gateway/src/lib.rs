//! HTTP gateway for the pinpad PIN gate.
//!
//! Exposes the single validation endpoint and a liveness probe. PIN checks
//! are delegated to whatever [`pinpad_core::Storage`] the router is built
//! with.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
