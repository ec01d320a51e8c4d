// Frameworks layer: configuration, logging bootstrap and task wiring.

pub mod config;
pub mod runtime;
