//! Staging graph for guilds that do not exist yet.
//!
//! A [`NewGuild`] collects roles, categories and channels locally, wires them
//! together through placeholder ids, and renders the whole structure as the
//! single document a guild creation request carries.
//!
//! # Example
//!
//! ```rust,ignore
//! use guildwright_staging::{NewGuild, RoleOptions, TextChannelOptions};
//!
//! # async fn example(transport: &impl guildwright_interface::GuildTransport)
//! #     -> guildwright_error::GuildwrightResult<()> {
//! let mut guild = NewGuild::new("Test");
//! let general = guild.add_category("General", Default::default())?;
//! guild.category(general).add_text_channel("chat", TextChannelOptions::default())?;
//!
//! let created: guildwright_interface::RawGuildData = guild.create(transport).await?;
//! println!("Created {:?}", created.id());
//! # Ok(())
//! # }
//! ```
//!
//! Guilds can also be described declaratively in TOML; see [`Blueprint`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blueprint;
mod category;
mod channel;
mod guild;
mod id;
mod overwrite;
mod payload;
mod role;
mod template;

pub use blueprint::{
    Blueprint, CategoryEntry, ChannelEntry, ChannelSection, GuildSection, OverwriteSection,
    RoleSection,
};
pub use category::CategoryScope;
pub use channel::{
    CategoryOptions, Channel, ChannelKind, ChannelOptions, ChannelPlacement, ForumOptions,
    StageChannelOptions, TextChannelOptions, VoiceChannelOptions,
};
pub use guild::{GuildOptions, NewGuild};
pub use id::{CategoryRef, ChannelRef, EntityRef, IdAllocator, RoleRef, TempId};
pub use overwrite::Overwrites;
pub use payload::{ChannelPayload, GuildPayload, OverwritePayload, RolePayload};
pub use role::{DEFAULT_ROLE_NAME, Role, RoleOptions};
pub use template::NewTemplatedGuild;
