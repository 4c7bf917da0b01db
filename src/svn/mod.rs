pub mod command;
pub mod executor;
pub mod parser;
pub mod repository;

// Re-export commonly used types
pub use command::{CommandSpec, Subcommand};
pub use executor::{CommandOutput, SvnExecutor};
pub use parser::{
    CheckoutReport, Commit, Commits, parse_checkout, parse_head_revision,
    parse_last_changed_revision, parse_log, parse_log_entry,
};
pub use repository::SvnRepository;
