//! Error types for the Guildwright library.
//!
//! This crate provides the error types used throughout the Guildwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use guildwright_error::{GuildwrightResult, StagingError, StagingErrorKind};
//!
//! fn attach_overwrite() -> GuildwrightResult<()> {
//!     Err(StagingError::new(StagingErrorKind::TypeMismatch {
//!         expected: "role".to_string(),
//!         found: "channel".to_string(),
//!     }))?
//! }
//!
//! assert!(attach_overwrite().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blueprint;
mod config;
mod error;
mod json;
mod staging;
mod transport;

pub use blueprint::{BlueprintError, BlueprintErrorKind};
pub use config::ConfigError;
pub use error::{GuildwrightError, GuildwrightErrorKind, GuildwrightResult};
pub use json::JsonError;
pub use staging::{StagingError, StagingErrorKind};
pub use transport::{TransportError, TransportErrorKind};
