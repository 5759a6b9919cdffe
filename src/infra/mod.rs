//! Infrastructure: store implementations and app configuration.

pub mod app_config;
pub mod store;
