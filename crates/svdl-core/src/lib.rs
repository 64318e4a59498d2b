pub mod config;
pub mod logging;

// Resolution core
pub mod descriptor;
pub mod error;
pub mod ident;
pub mod platform;
pub mod remote_api;
pub mod resolver;

// Caller-facing services (driven by the CLI layer)
pub mod checksum;
pub mod fetch;
pub mod history;
