//! Inbound ports (driving side): interfaces called by inbound adapters.

pub mod prediction;
