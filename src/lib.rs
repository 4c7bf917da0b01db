pub mod audit;
pub mod config;
pub mod error;
pub mod svn;

// Re-export commonly used types for convenience
pub use error::{SvnError, SvnResult};
pub use svn::{CheckoutReport, Commit, Commits, SvnRepository};
