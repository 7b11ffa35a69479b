//! Core value types for the Guildwright guild staging library.
//!
//! The staging graph treats these as opaque value objects: permissions,
//! colours and flags expose a numeric `value()` projection, the platform
//! enums expose their integer codes, and emoji/forum tags know how to render
//! their own request fragments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod colour;
mod emoji;
mod enums;
mod flags;
mod forum_tag;
mod icon;
mod permissions;

pub use colour::Colour;
pub use emoji::{EmojiInput, ForumTagEmoji, PartialEmoji};
pub use enums::{
    ApiEnum, ChannelType, ContentFilter, ForumLayoutType, ForumOrderType, NotificationLevel,
    OverwriteType, VerificationLevel, VideoQualityMode,
};
pub use flags::SystemChannelFlags;
pub use forum_tag::{ForumTag, ForumTagPayload};
pub use icon::{ImageFormat, bytes_to_base64_data};
pub use permissions::{PermissionOverwrite, Permissions};
