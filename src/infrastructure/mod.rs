//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, startup wiring and the HTTP server
//! lifecycle.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root: loads artifacts into a registry
//! - [`config`] - Configuration loading and validation
//! - [`server`] - Binding, serving and graceful shutdown

pub mod bootstrap;
pub mod config;
pub mod server;

pub use config::Config;
