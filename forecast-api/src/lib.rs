//! Weather forecast API server.
//!
//! This crate wires the core pipeline into an HTTP surface:
//! - Parsing CLI arguments
//! - Configuration loading (flag > env > file > default)
//! - Logging setup
//! - JSON response writing and the axum router

pub mod cli;
pub mod config;
pub mod logging;
pub mod rest;
pub mod routes;

pub use cli::Args;
pub use config::{Config, ConfigError};
pub use routes::{AppState, router};
