//! HTTP request handlers for the registry server.
//!
//! Handlers are thin wrappers that delegate to `RegistryService`.

pub mod downloads;
pub mod packages;
