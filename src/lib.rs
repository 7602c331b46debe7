//! Seclai API client.
//!
//! Typed convenience methods over the Seclai REST API plus
//! [`SeclaiClient::run_streaming_agent_and_wait`], which starts an agent run
//! and follows its server-sent event stream until the run completes.
//!
//! ```ignore
//! use seclai::{ClientConfig, SeclaiClient, WaitOptions};
//! use seclai::models::AgentRunStreamRequest;
//!
//! let client = SeclaiClient::new(ClientConfig::from_env())?;
//! let state = client
//!     .run_streaming_agent_and_wait("agent-id", &AgentRunStreamRequest::with_input("hi"), WaitOptions::new())
//!     .await?;
//! println!("{} finished as {}", state.run_id, state.status);
//! ```

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sse;
pub mod traits;
pub mod wait;

pub use client::{ApiRequest, SeclaiClient};
pub use config::ClientConfig;
pub use error::{ErrorCategory, SeclaiError, SeclaiResult};
pub use models::{RunState, RunStatus};
pub use wait::WaitOptions;
