//! HTTP route constants.

pub mod registry;
