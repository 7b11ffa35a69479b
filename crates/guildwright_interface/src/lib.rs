//! Trait definitions for the Guildwright guild staging library.
//!
//! The staging graph builds request documents but never performs I/O. The
//! traits here are the seams to the outside world: a transport that submits
//! documents and a live-resource type that wraps what the transport returns.

mod traits;
mod types;

pub use traits::{GuildTransport, LiveGuild};
pub use types::RawGuildData;
