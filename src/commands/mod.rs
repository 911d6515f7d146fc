//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod add;
pub mod list;
pub mod remove;

pub use add::run_add;
pub use list::run_list;
pub use remove::run_remove;
