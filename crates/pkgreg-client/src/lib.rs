#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultRegistryClient, RegistryClient};

// Configuration
pub use config::RegistryClientConfig;

// Errors
pub use error::{ClientError, ClientResult};

// Backend seam
pub use http::{HttpBackend, ReqwestBackend};

// Silence unused dev-dependency warnings; wiremock is used by tests/
#[cfg(test)]
use wiremock as _;
