//! Guildwright - stage Discord guilds before they exist.
//!
//! Describe a guild's roles, categories and channels locally, then render the
//! whole structure as the single document a guild creation request carries.
//! Placeholder ids tie the pieces together until the platform assigns real
//! ones.
//!
//! # Quick Start
//!
//! ```
//! use guildwright::{NewGuild, PermissionOverwrite, RoleOptions, TextChannelOptions, ChannelOptions};
//!
//! let mut guild = NewGuild::new("Test");
//! let general = guild.add_category("General", Default::default()).unwrap();
//! let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
//! guild
//!     .category(general)
//!     .add_text_channel(
//!         "chat",
//!         TextChannelOptions::default().with_overwrite(mods, PermissionOverwrite::new(8u64, 0u64)),
//!     )
//!     .unwrap();
//!
//! let document = guild.to_document().unwrap();
//! assert_eq!(document["channels"][1]["permission_overwrites"][0]["allow"], "8");
//! ```
//!
//! # Architecture
//!
//! - `guildwright_error` - Error types
//! - `guildwright_core` - Permission bits, colours, platform enums, emoji, icons
//! - `guildwright_interface` - Transport and live-guild traits
//! - `guildwright_staging` - The staging graph, rendering and blueprints
//!
//! This crate re-exports everything and adds configuration, tracing setup and
//! the `guildwright` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod render;
mod telemetry;

pub use config::{GuildwrightConfig, OutputConfig, StagingConfig, TelemetryConfig};
pub use render::{BlueprintSummary, check_blueprint, load_guild, render_blueprint};
pub use telemetry::init_tracing;

pub use guildwright_core::*;
pub use guildwright_error::*;
pub use guildwright_interface::*;
pub use guildwright_staging::*;
