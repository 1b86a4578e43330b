//! Inbound adapters (driving side): HTTP API and command line.

pub mod cli;
pub mod http;
