//! Invocation options and command composition

use std::time::Duration;

use crate::error::{RunnerError, RunnerResult};

/// Value of one `--flag` option.
///
/// Drivers take either a single value or an ordered sequence; a sequence is
/// delivered as one space-joined argument. Any other value shape is a caller
/// error and is unrepresentable here by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Scalar(String),
    List(Vec<String>),
}

impl ArgValue {
    /// The single OS argument this value becomes.
    fn to_token(&self) -> String {
        match self {
            ArgValue::Scalar(value) => value.clone(),
            ArgValue::List(values) => values.join(" "),
        }
    }

    /// The value as it appears in the logged command line. Sequences are
    /// quoted the way a shell user would write them.
    fn display(&self) -> String {
        match self {
            ArgValue::Scalar(value) => value.clone(),
            ArgValue::List(values) => format!("\"{}\"", values.join(" ")),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Scalar(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Scalar(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(values: Vec<String>) -> Self {
        ArgValue::List(values)
    }
}

/// Configuration for one driver invocation.
///
/// `args` keeps insertion order and is never sorted; drivers may be
/// positionally sensitive about their flags.
#[derive(Debug, Clone)]
pub struct InvocationOptions {
    /// Path or name of the driver executable.
    pub generator: String,

    /// Sub-command or mode string passed as the driver's first argument.
    pub command: String,

    /// Overrides the synthesized `Date:` header. Defaults to the runner's
    /// clock at call time.
    pub date: Option<String>,

    /// Ordered `--flag value` pairs.
    pub args: Vec<(String, ArgValue)>,

    /// Kill the driver and fail the invocation after this long. With `None`
    /// a hung driver hangs the call.
    pub timeout: Option<Duration>,
}

impl InvocationOptions {
    pub fn new(generator: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            command: command.into(),
            date: None,
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Override the signature date header.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Append one `--flag value` pair.
    pub fn arg(mut self, flag: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.push((flag.into(), value.into()));
        self
    }

    /// Bound the driver's running time.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }
}

/// A composed invocation: the program to spawn and its argument vector.
///
/// Arguments are handed to the OS directly, without a shell; the quoting in
/// [`Invocation::command_line`] exists only for the human-readable form.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    command_line: String,
}

impl Invocation {
    /// Compose an invocation from options.
    ///
    /// Fails with [`RunnerError::MissingOption`] if `generator` or `command`
    /// is empty.
    pub fn compose(options: &InvocationOptions) -> RunnerResult<Self> {
        if options.generator.is_empty() {
            return Err(RunnerError::MissingOption("generator"));
        }
        if options.command.is_empty() {
            return Err(RunnerError::MissingOption("command"));
        }

        let mut args = vec![options.command.clone()];
        let mut command_line = format!("{} {}", options.generator, options.command);

        for (flag, value) in &options.args {
            args.push(format!("--{flag}"));
            args.push(value.to_token());
            command_line.push_str(&format!(" --{flag} {}", value.display()));
        }

        Ok(Self {
            program: options.generator.clone(),
            args,
            command_line,
        })
    }

    /// The driver executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Sub-command followed by the flattened `--flag value` tokens.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Human-readable command line, as logged.
    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_scalar_flags_in_insertion_order() {
        let options = InvocationOptions::new("echo", "x").arg("foo", "bar");
        let invocation = Invocation::compose(&options).unwrap();

        assert!(invocation.command_line().contains("echo x --foo bar"));
        assert_eq!(invocation.program(), "echo");
        assert_eq!(invocation.args(), ["x", "--foo", "bar"]);
    }

    #[test]
    fn joins_list_values_into_one_quoted_token() {
        let options = InvocationOptions::new("driver", "sign").arg(
            "headers",
            vec!["date".to_string(), "digest".to_string()],
        );
        let invocation = Invocation::compose(&options).unwrap();

        assert_eq!(
            invocation.command_line(),
            "driver sign --headers \"date digest\""
        );
        // One OS argument, unquoted.
        assert_eq!(invocation.args(), ["sign", "--headers", "date digest"]);
    }

    #[test]
    fn preserves_flag_order_without_sorting() {
        let options = InvocationOptions::new("driver", "verify")
            .arg("zeta", "1")
            .arg("alpha", "2");
        let invocation = Invocation::compose(&options).unwrap();

        assert_eq!(
            invocation.command_line(),
            "driver verify --zeta 1 --alpha 2"
        );
    }

    #[test]
    fn empty_generator_is_a_missing_option() {
        let options = InvocationOptions::new("", "sign");
        assert!(matches!(
            Invocation::compose(&options),
            Err(RunnerError::MissingOption("generator"))
        ));
    }

    #[test]
    fn empty_command_is_a_missing_option() {
        let options = InvocationOptions::new("driver", "");
        assert!(matches!(
            Invocation::compose(&options),
            Err(RunnerError::MissingOption("command"))
        ));
    }
}
