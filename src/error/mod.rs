//! Error handling for the Seclai client.
//!
//! - **Unified Error Type**: `SeclaiError` covers configuration, transport,
//!   timeout, cancellation, API status and protocol failures
//! - **Status Classification**: `status_error` turns any non-2xx response into
//!   `Status` or (for 422) `Validation`, for every request path
//! - **Error Categories**: coarse classification for retry decisions
//! - **Result Type Alias**: `SeclaiResult<T>`
//!
//! # Error Categories
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Configuration | API key / base URL / upload input | No |
//! | Transport | Connection, DNS, TLS, body read | Yes |
//! | Timeout | Wait deadline or request timeout | Yes |
//! | Cancelled | Caller cancelled | No |
//! | Api | Non-2xx status (5xx, 408, 429 retryable) | Sometimes |
//! | Validation | HTTP 422 | No |
//! | Protocol | Bad JSON, stream ended before done | No |

mod category;
mod result;
mod seclai_error;
mod status;

pub use category::ErrorCategory;
pub use result::SeclaiResult;
pub use seclai_error::SeclaiError;
pub use status::{status_error, ApiStatusError, ApiValidationError};
