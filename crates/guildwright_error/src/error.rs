//! Top-level error wrapper types.

use crate::{BlueprintError, ConfigError, JsonError, StagingError, TransportError};

/// Every error the Guildwright crates can produce.
///
/// # Examples
///
/// ```
/// use guildwright_error::{GuildwrightError, StagingError, StagingErrorKind};
///
/// let err: GuildwrightError = StagingError::new(StagingErrorKind::UnsupportedImage).into();
/// assert!(format!("{}", err).contains("Unsupported image"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GuildwrightErrorKind {
    /// Staging graph configuration or type error
    #[from(StagingError)]
    Staging(StagingError),
    /// Blueprint loading error
    #[from(BlueprintError)]
    Blueprint(BlueprintError),
    /// Failure reported by the transport collaborator
    #[from(TransportError)]
    Transport(TransportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Guildwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use guildwright_error::{GuildwrightErrorKind, GuildwrightResult, ConfigError};
///
/// fn might_fail() -> GuildwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), GuildwrightErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Guildwright Error: {}", _0)]
pub struct GuildwrightError(Box<GuildwrightErrorKind>);

impl GuildwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: GuildwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuildwrightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GuildwrightErrorKind
impl<T> From<T> for GuildwrightError
where
    T: Into<GuildwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Guildwright operations.
pub type GuildwrightResult<T> = std::result::Result<T, GuildwrightError>;
