//! Command handlers.
//!
//! `serve` and `publish` work on the local database; the other commands
//! talk to a registry over HTTP.

pub mod download;
pub mod list;
pub mod publish;
pub mod serve;
pub mod show;
pub mod summary;
