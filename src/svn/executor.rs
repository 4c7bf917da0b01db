use crate::error::{SvnError, SvnResult};
use crate::svn::command::CommandSpec;
use std::process::{Command, Output};

/// Result of executing an svn command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes svn subcommands as child processes
///
/// One child process per call, run to completion, no retries and no
/// timeout. A caller wanting bounded latency must impose it around the
/// call.
#[derive(Debug, Clone)]
pub struct SvnExecutor {
    binary: String,
}

impl SvnExecutor {
    /// Create an executor using the `svn` binary on the search path
    pub fn new() -> Self {
        Self {
            binary: "svn".to_string(),
        }
    }

    /// Use a specific svn binary instead of the one on the search path
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Execute one invocation and capture its output
    ///
    /// The argument vector is passed to the process builder token by
    /// token; no shell is involved. For subcommands whose output is
    /// matched against English labels, the message locale is pinned on
    /// the child's environment only — the parent environment is never
    /// touched.
    pub fn run(&self, spec: &CommandSpec) -> SvnResult<CommandOutput> {
        let mut command = Command::new(&self.binary);
        command.args(spec.to_args());

        if spec.subcommand.needs_english_messages() {
            command.env("LC_MESSAGES", "en_US.UTF-8");
            command.env("LANGUAGE", "en");
        }

        let output = command.output().map_err(|e| {
            SvnError::CommandFailed(format!("Failed to execute {}: {}", self.binary, e))
        })?;

        self.process_output(output, spec)
    }

    /// Process command output into CommandOutput struct
    fn process_output(&self, output: Output, spec: &CommandSpec) -> SvnResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        // Non-zero exit surfaces the raw stderr text verbatim
        if !success {
            return Err(SvnError::CommandFailed(format!(
                "'svn {}' failed with exit code {}: {}",
                spec.subcommand.as_str(),
                exit_code,
                stderr.trim()
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the configured binary name
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for SvnExecutor {
    fn default() -> Self {
        Self::new()
    }
}
