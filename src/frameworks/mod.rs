// Frameworks layer: runtime bootstrap, command line and environment config.

pub mod app;
pub mod cli;
pub mod config;
