use crate::svn::command::CommandSpec;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Appends one line per external svn invocation, with size-based
/// rotation. Password values never reach the log file.
#[derive(Debug, Clone)]
pub struct CommandLogger {
    log_path: PathBuf,
}

impl CommandLogger {
    /// Create a CommandLogger writing to the given path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        // Ensure directory exists
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Log one invocation with its exit code
    pub fn log_invocation(&self, spec: &CommandSpec, exit_code: i32) -> std::io::Result<()> {
        // Check and rotate log if needed
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        let log_entry = format!(
            "[{}] [{}] [{}] [exit:{}] svn {}\n",
            timestamp,
            user,
            spec.url,
            exit_code,
            redacted_args(spec).join(" ")
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            // Rotate: commands.log -> commands.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Argument vector with the password value masked, safe to write to disk
fn redacted_args(spec: &CommandSpec) -> Vec<String> {
    let mut args = Vec::new();
    let mut mask_next = false;

    for arg in spec.to_args() {
        if mask_next {
            args.push("********".to_string());
            mask_next = false;
        } else {
            mask_next = arg == "--password";
            args.push(arg);
        }
    }

    args
}
