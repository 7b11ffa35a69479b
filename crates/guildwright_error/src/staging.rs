//! Staging graph errors.
//!
//! These cover the configuration and type errors raised while growing or
//! rendering a guild staging graph. They are reported synchronously and the
//! graph is left untouched when one is returned.

use derive_getters::Getters;

/// Specific staging error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StagingErrorKind {
    /// An entity of the wrong kind was supplied, e.g. a channel used as an
    /// overwrite target.
    #[display("Type mismatch: expected {}, received {}", expected, found)]
    TypeMismatch {
        /// Kind of entity the operation accepts
        expected: String,
        /// Kind of entity that was supplied
        found: String,
    },

    /// A handle minted by a different staging graph.
    #[display("{} {} belongs to a different guild", entity, id)]
    ForeignEntity {
        /// Entity kind ("role", "channel", "category")
        entity: String,
        /// Temporary identifier carried by the handle
        id: u64,
    },

    /// A handle whose identifier is not present in this graph.
    #[display("Unknown {} {}", entity, id)]
    UnknownEntity {
        /// Entity kind ("role", "channel", "category")
        entity: String,
        /// Temporary identifier carried by the handle
        id: u64,
    },

    /// The placeholder allocator has handed out every value it can.
    #[display("Temporary identifiers exhausted")]
    IdsExhausted,

    /// Icon bytes are not a supported image format.
    #[display("Unsupported image type given")]
    UnsupportedImage,
}

/// Staging error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Staging Error: {} at line {} in {}", kind, line, file)]
pub struct StagingError {
    kind: StagingErrorKind,
    line: u32,
    file: &'static str,
}

impl StagingError {
    /// Create a new staging error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildwright_error::{StagingError, StagingErrorKind};
    ///
    /// let err = StagingError::new(StagingErrorKind::UnsupportedImage);
    /// assert_eq!(err.kind(), &StagingErrorKind::UnsupportedImage);
    /// ```
    #[track_caller]
    pub fn new(kind: StagingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
