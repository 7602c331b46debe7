//! Typed request and response models for the Seclai API.

pub mod content;
pub mod pagination;
pub mod run;
pub mod source;
pub mod upload;
pub mod validation;

pub use content::{ContentDetailResponse, ContentEmbedding, ContentEmbeddingsListResponse};
pub use pagination::PaginationResponse;
pub use run::{
    AgentRunAttempt, AgentRunListResponse, AgentRunRequest, AgentRunResponse,
    AgentRunStreamRequest, Metadata, RunState, RunStatus,
};
pub use source::{ListSourcesParams, Source, SourceListResponse};
pub use upload::{FileUploadResponse, UploadFileRequest};
pub use validation::{HttpValidationError, ValidationError};
