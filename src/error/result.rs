//! Result type alias for client operations.

use super::seclai_error::SeclaiError;

/// Type alias for Results using SeclaiError.
///
/// # Example
///
/// ```ignore
/// use seclai::error::SeclaiResult;
///
/// async fn latest_output(client: &SeclaiClient) -> SeclaiResult<Option<String>> {
///     let run = client.get_agent_run("agent_1", "run_1").await?;
///     Ok(run.output)
/// }
/// ```
pub type SeclaiResult<T> = Result<T, SeclaiError>;
