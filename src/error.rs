/*!
Client errors.
*/
pub use reqwest::Error as Http;
pub use serde_json::Error as Json;
pub use url::ParseError as Url;

use reqwest::StatusCode;
use thiserror::Error;

/// Street address client error.
#[derive(Debug, Error)]
pub enum Error {
    /// The input violates a documented field constraint. Raised before any request is sent.
    #[error("{0}")]
    Validation(#[from] Validation),
    /// The service answered with something other than `200 OK`.
    ///
    /// The response body is not inspected.
    #[error("Street address API responded with status {status}")]
    Transport { status: StatusCode },
    #[error("{0}")]
    Http(#[from] Http),
    /// The response body is not the expected JSON document.
    #[error("{0}")]
    Decode(#[from] Json),
    #[error("{0}")]
    Url(#[from] Url),
    #[error("Environment variable {0} is not set")]
    MissingCredentials(&'static str),
}

/// Address input constraint violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Validation {
    #[error("city and state or zip code are required.")]
    LocalityRequired,
    #[error("{field} is required.")]
    Required { field: &'static str },
    #[error("{field} must be {max} characters or less.")]
    TooLong { field: &'static str, max: u64 },
    #[error("candidates must be at least 1 and at most 10, got {0}.")]
    CandidatesOutOfRange(i32),
}

impl Validation {
    /// Wire name of the offending field, if the violation concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            Validation::LocalityRequired => None,
            Validation::Required { field } | Validation::TooLong { field, .. } => Some(field),
            Validation::CandidatesOutOfRange(_) => Some("candidates"),
        }
    }
}
