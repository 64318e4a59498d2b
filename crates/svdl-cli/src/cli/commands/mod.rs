//! CLI command handlers. Each command is in its own file for clarity.

mod checksum;
mod clear_history;
mod detect;
mod get;
mod history;
mod resolve;

pub use checksum::run_checksum;
pub use clear_history::run_clear_history;
pub use detect::run_detect;
pub use get::run_get;
pub use history::run_history;
pub use resolve::run_resolve;
