//! Transport contract constants.
//!
//! String constants for API routes shared by the server and the client.
//! Keep these string-only with no framework-specific types.

pub mod http;
