use crate::audit::logger::CommandLogger;
use crate::config::settings::RepositorySettings;
use crate::error::{SvnError, SvnResult};
use crate::svn::command::{CommandSpec, Subcommand};
use crate::svn::executor::{CommandOutput, SvnExecutor};
use crate::svn::parser::{self, CheckoutReport, Commits};
use std::path::Path;

/// Represents a remote svn repository and provides access to its history
///
/// Connection details are fixed at construction. Every operation spawns
/// one independent child process and parses into operation-local state,
/// so concurrent calls do not interfere; the handle itself is never
/// mutated after construction.
#[derive(Debug)]
pub struct SvnRepository {
    url: String,
    username: Option<String>,
    password: Option<String>,
    executor: SvnExecutor,
    command_log: Option<CommandLogger>,
}

impl SvnRepository {
    /// Create a handle for the given repository url
    pub fn new(
        url: impl Into<String>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> SvnResult<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(SvnError::Configuration(
                "repository url must not be empty".to_string(),
            ));
        }

        Ok(Self {
            url,
            username: username.map(str::to_string),
            password: password.map(str::to_string),
            executor: SvnExecutor::new(),
            command_log: None,
        })
    }

    /// Create a handle from a config file entry
    pub fn from_settings(settings: &RepositorySettings) -> SvnResult<Self> {
        Self::new(
            settings.url.as_str(),
            settings.username.as_deref(),
            settings.password.as_deref(),
        )
    }

    /// Use a specific svn binary instead of the one on the search path
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.executor = SvnExecutor::with_binary(binary);
        self
    }

    /// Record every external invocation to the given log file
    pub fn with_command_log<P: AsRef<Path>>(mut self, path: P) -> SvnResult<Self> {
        self.command_log = Some(CommandLogger::with_path(path)?);
        Ok(self)
    }

    /// Get the repository url
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the most recent commits, newest first
    ///
    /// With a limit, passes `-l N` to the log invocation; without one the
    /// full history is fetched. Records are parsed lazily as the returned
    /// stream is advanced; a failed invocation is the single terminal
    /// error and delivers no records at all.
    pub fn latest_commits(&self, limit: Option<usize>) -> SvnResult<Commits> {
        let mut spec = self.spec(Subcommand::Log);
        if let Some(limit) = limit {
            spec = spec.arg("-l").arg(limit.to_string());
        }

        let output = self.run(spec)?;
        Ok(parser::parse_log(&output.stdout))
    }

    /// Fetch commits at a revision or range, e.g. `"42"` or `"40:45"`
    ///
    /// Without a revision the full history is fetched. Same delivery
    /// contract as [`latest_commits`](Self::latest_commits).
    pub fn commits(&self, revision: Option<&str>) -> SvnResult<Commits> {
        let mut spec = self.spec(Subcommand::Log);
        if let Some(revision) = revision {
            spec = spec.arg("-r").arg(revision);
        }

        let output = self.run(spec)?;
        Ok(parser::parse_log(&output.stdout))
    }

    /// Get the numeric id of the repository's most recent revision
    pub fn head_revision(&self) -> SvnResult<String> {
        let spec = self.spec(Subcommand::Log).arg("-r").arg("HEAD");

        let output = self.run(spec)?;
        parser::parse_head_revision(&output.stdout)
    }

    /// Get the revision at which the path was last changed
    ///
    /// Returns `"0"` when svn info reports no such field; absence is not
    /// an error so that pollers can treat a fresh repository uniformly.
    pub fn last_changed_revision(&self) -> SvnResult<String> {
        let output = self.run(self.spec(Subcommand::Info))?;
        Ok(parser::parse_last_changed_revision(&output.stdout))
    }

    /// Check the repository out into the destination path
    ///
    /// Fails as a whole on a process error; no partial report is
    /// returned.
    pub fn checkout<P: AsRef<Path>>(&self, destination: P) -> SvnResult<CheckoutReport> {
        let spec = self
            .spec(Subcommand::Checkout)
            .arg(destination.as_ref().to_string_lossy());

        let output = self.run(spec)?;
        Ok(parser::parse_checkout(&output.stdout))
    }

    fn spec(&self, subcommand: Subcommand) -> CommandSpec {
        CommandSpec::new(subcommand, self.url.as_str())
            .credentials(self.username.as_deref(), self.password.as_deref())
    }

    fn run(&self, spec: CommandSpec) -> SvnResult<CommandOutput> {
        let result = self.executor.run(&spec);

        if let Some(log) = &self.command_log {
            let exit_code = match &result {
                Ok(output) => output.exit_code,
                Err(_) => -1,
            };
            // A logging failure never masks the command result
            let _ = log.log_invocation(&spec, exit_code);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_empty_url() {
        let result = SvnRepository::new("", None, None);

        assert!(matches!(result, Err(SvnError::Configuration(_))));
    }

    #[test]
    fn test_new_stores_url() {
        let repo = SvnRepository::new("http://svn.example.com/repo", None, None).unwrap();

        assert_eq!(repo.url(), "http://svn.example.com/repo");
    }

    #[test]
    fn test_from_settings() {
        let settings = RepositorySettings {
            url: "http://svn.example.com/repo".to_string(),
            username: Some("alice".to_string()),
            password: None,
        };

        let repo = SvnRepository::from_settings(&settings).unwrap();
        assert_eq!(repo.url(), "http://svn.example.com/repo");
    }

    #[test]
    fn test_from_settings_empty_url() {
        let settings = RepositorySettings {
            url: String::new(),
            username: None,
            password: None,
        };

        assert!(SvnRepository::from_settings(&settings).is_err());
    }
}
