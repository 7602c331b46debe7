//! Command-line argument parsing for the `seclai` binary.

use std::time::Duration;

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List sources
    Sources,
    /// Start an agent run
    Run {
        agent_id: String,
        input: Option<String>,
        /// Deadline for `--stream`; the client default applies when unset
        timeout: Option<Duration>,
        /// Wait for completion over the event stream
        stream: bool,
    },
    /// Fetch one run
    GetRun { agent_id: String, run_id: String },
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

pub const USAGE: &str = "\
usage: seclai <command>

commands:
  version                                 print the version
  sources                                 list sources
  run <agent-id> [--input TEXT] [--timeout SECS] [--stream]
                                          start an agent run
  get-run <agent-id> <run-id>             fetch a run

environment:
  SECLAI_API_KEY   API key (required)
  SECLAI_API_URL   API base URL (default https://seclai.com)
  RUST_LOG         log filter, e.g. seclai=debug";

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use seclai::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["seclai".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, UsageError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);

    let command = match args.next() {
        Some(command) => command,
        None => return Ok(CliCommand::Help),
    };

    match command.as_str() {
        "version" | "--version" | "-V" => Ok(CliCommand::Version),
        "help" | "--help" | "-h" => Ok(CliCommand::Help),
        "sources" => Ok(CliCommand::Sources),
        "run" => parse_run(args),
        "get-run" => {
            let agent_id = required(args.next(), "get-run requires <agent-id>")?;
            let run_id = required(args.next(), "get-run requires <run-id>")?;
            Ok(CliCommand::GetRun { agent_id, run_id })
        }
        other => Err(UsageError(format!("unknown command: {}", other))),
    }
}

fn parse_run<I>(mut args: I) -> Result<CliCommand, UsageError>
where
    I: Iterator<Item = String>,
{
    let agent_id = required(args.next(), "run requires <agent-id>")?;
    let mut input = None;
    let mut timeout = None;
    let mut stream = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => input = Some(required(args.next(), "--input requires a value")?),
            "--timeout" => {
                let raw = required(args.next(), "--timeout requires a value")?;
                let parsed = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|s| *s > 0.0)
                    .and_then(|s| Duration::try_from_secs_f64(s).ok())
                    .ok_or_else(|| UsageError(format!("invalid --timeout: {}", raw)))?;
                timeout = Some(parsed);
            }
            "--stream" => stream = true,
            other => return Err(UsageError(format!("unexpected argument: {}", other))),
        }
    }

    Ok(CliCommand::Run {
        agent_id,
        input,
        timeout,
        stream,
    })
}

fn required(value: Option<String>, message: &str) -> Result<String, UsageError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| UsageError(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, UsageError> {
        let mut all = vec!["seclai".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["version"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_sources() {
        assert_eq!(parse(&["sources"]), Ok(CliCommand::Sources));
    }

    #[test]
    fn test_parse_run_with_options() {
        assert_eq!(
            parse(&["run", "a1", "--input", "hello", "--timeout", "90", "--stream"]),
            Ok(CliCommand::Run {
                agent_id: "a1".to_string(),
                input: Some("hello".to_string()),
                timeout: Some(Duration::from_secs(90)),
                stream: true,
            })
        );
    }

    #[test]
    fn test_parse_run_minimal() {
        assert_eq!(
            parse(&["run", "a1"]),
            Ok(CliCommand::Run {
                agent_id: "a1".to_string(),
                input: None,
                timeout: None,
                stream: false,
            })
        );
    }

    #[test]
    fn test_parse_run_errors() {
        assert!(parse(&["run"]).is_err());
        assert!(parse(&["run", "a1", "--timeout"]).is_err());
        assert!(parse(&["run", "a1", "--timeout", "-3"]).is_err());
        assert!(parse(&["run", "a1", "--bogus"]).is_err());
    }

    #[test]
    fn test_parse_run_rejects_unrepresentable_timeout() {
        for raw in ["1e300", "inf", "NaN"] {
            let err = parse(&["run", "a1", "--timeout", raw]).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid --timeout: {}", raw));
        }
    }

    #[test]
    fn test_parse_get_run() {
        assert_eq!(
            parse(&["get-run", "a1", "r1"]),
            Ok(CliCommand::GetRun {
                agent_id: "a1".to_string(),
                run_id: "r1".to_string(),
            })
        );
        assert!(parse(&["get-run", "a1"]).is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse(&["frobnicate"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown command: frobnicate");
    }
}
