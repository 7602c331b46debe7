//! CLI for the `seclai` binary.
//!
//! ```ignore
//! use seclai::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! run_cli_command(command).await?;
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, UsageError, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;

use crate::client::SeclaiClient;
use crate::config::ClientConfig;
use crate::models::{AgentRunRequest, AgentRunStreamRequest, ListSourcesParams};
use crate::wait::WaitOptions;

/// Execute a parsed command, printing results as JSON on stdout.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        command => {
            let client = SeclaiClient::new(ClientConfig::from_env())
                .wrap_err("failed to configure Seclai client")?;
            run_api_command(&client, command).await
        }
    }
}

/// Commands that talk to the API.
pub async fn run_api_command(client: &SeclaiClient, command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Sources => {
            let sources = client.list_sources(&ListSourcesParams::new()).await?;
            print_json(&sources)
        }
        CliCommand::Run {
            agent_id,
            input,
            timeout,
            stream: true,
        } => {
            let request = AgentRunStreamRequest {
                input,
                ..Default::default()
            };
            let mut options = WaitOptions::new();
            if let Some(timeout) = timeout {
                options = options.with_timeout(timeout);
            }
            let state = client
                .run_streaming_agent_and_wait(&agent_id, &request, options)
                .await
                .wrap_err_with(|| format!("run of agent {} did not complete", agent_id))?;
            print_json(&state)
        }
        CliCommand::Run {
            agent_id, input, ..
        } => {
            let request = AgentRunRequest {
                input,
                ..Default::default()
            };
            let run = client.run_agent(&agent_id, &request).await?;
            print_json(&run)
        }
        CliCommand::GetRun { agent_id, run_id } => {
            let run = client.get_agent_run(&agent_id, &run_id).await?;
            print_json(&run)
        }
        CliCommand::Version | CliCommand::Help => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
