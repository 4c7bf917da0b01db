/// Subcommands of the external svn client this crate drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Log,
    Info,
    Checkout,
}

impl Subcommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcommand::Log => "log",
            Subcommand::Info => "info",
            Subcommand::Checkout => "checkout",
        }
    }

    /// `svn info` output is matched against English field labels, so its
    /// invocation must pin the message locale. The other subcommands are
    /// locale-independent for parsing purposes.
    pub fn needs_english_messages(&self) -> bool {
        matches!(self, Subcommand::Info)
    }
}

/// One svn invocation, built per call and handed to the executor
///
/// Arguments stay discrete tokens all the way to the process builder;
/// nothing is ever joined into a shell string, so URLs, credentials and
/// extra options cannot inject into a shell.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub subcommand: Subcommand,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub extra_args: Vec<String>,
}

impl CommandSpec {
    pub fn new(subcommand: Subcommand, url: impl Into<String>) -> Self {
        Self {
            subcommand,
            url: url.into(),
            username: None,
            password: None,
            extra_args: Vec::new(),
        }
    }

    pub fn credentials(mut self, username: Option<&str>, password: Option<&str>) -> Self {
        self.username = username.map(str::to_string);
        self.password = password.map(str::to_string);
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Ordered argument vector: subcommand, url, credential flag/value
    /// pairs when configured, then the extra args. Unconfigured
    /// credentials contribute no tokens at all.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.subcommand.as_str().to_string(), self.url.clone()];

        if let Some(username) = &self.username {
            args.push("--username".to_string());
            args.push(username.clone());
        }
        if let Some(password) = &self.password {
            args.push("--password".to_string());
            args.push(password.clone());
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }
}
