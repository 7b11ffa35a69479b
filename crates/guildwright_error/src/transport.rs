//! Transport failure types.
//!
//! The staging core never speaks the wire protocol. Transport implementations
//! report their failures with [`TransportError`] and the core hands them back
//! to the caller untouched.

use derive_getters::Getters;

/// Specific transport error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// Credentials rejected by the platform.
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// Document rejected by the platform's validation.
    #[display("Request rejected: {}", _0)]
    Rejected(String),

    /// Too many requests.
    #[display("Rate limited: retry after {} seconds", _0)]
    RateLimited(u64),

    /// Connection or protocol failure.
    #[display("Network failure: {}", _0)]
    Network(String),

    /// Response body could not be understood.
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

/// Transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    kind: TransportErrorKind,
    line: u32,
    file: &'static str,
}

impl TransportError {
    /// Create a new transport error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildwright_error::{TransportError, TransportErrorKind};
    ///
    /// let err = TransportError::new(TransportErrorKind::RateLimited(5));
    /// assert!(err.to_string().contains("retry after 5 seconds"));
    /// ```
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
