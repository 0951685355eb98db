//! Error types for intake submissions.
//!
//! The site shows one generic "please try again" message for all of these.
//! The variants exist so the console log says which step failed and why.

use thiserror::Error;

/// A single backend call failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed, or its response could not be read.
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Backend answered with a non-success status.
    #[error("{endpoint} rejected the request ({status}): {detail}")]
    Rejected {
        endpoint: String,
        status: u16,
        detail: String,
    },
    /// Backend answered 2xx but the body is not the expected record.
    #[error("{endpoint} returned an unreadable body: {source}")]
    Malformed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// Commission was accepted but the response carried no record id.
    #[error("commission created without an id")]
    MissingRecordId,
}

/// Raw form input could not be turned into a typed request.
///
/// The browser's `required` attributes normally prevent this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("`{value}` is not a valid choice for `{field}`")]
    UnknownOption { field: &'static str, value: String },
    #[error("`{0}` is not a YYYY-MM-DD date")]
    InvalidDeadline(String),
}

/// A submission chain stopped at some step.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form input rejected: {0}")]
    Draft(#[from] DraftError),
    #[error("creating commission failed: {0}")]
    Create(#[source] ApiError),
    #[error("uploading reference images for commission {commission_id} failed: {source}")]
    Upload {
        commission_id: String,
        #[source]
        source: ApiError,
    },
    #[error("sending contact message failed: {0}")]
    Contact(#[source] ApiError),
}

impl SubmitError {
    /// Step name used in log fields.
    pub fn step(&self) -> &'static str {
        match self {
            SubmitError::Draft(_) => "draft",
            SubmitError::Create(_) => "create",
            SubmitError::Upload { .. } => "upload",
            SubmitError::Contact(_) => "contact",
        }
    }
}

pub type Result<T, E = SubmitError> = std::result::Result<T, E>;
