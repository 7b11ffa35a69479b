//! Platform enumerations and their integer codes.
//!
//! Each enum parses from and displays as its snake_case name (used by
//! blueprints and the CLI) while [`ApiEnum::value`] yields the integer code
//! the creation endpoint expects.

use serde::{Deserialize, Serialize};

/// An enumeration rendered to the platform as an integer code.
pub trait ApiEnum: Copy {
    /// Integer code of this variant.
    fn value(self) -> u8;
}

/// Kind of channel.
///
/// Only the guild channel kinds that can be part of a creation request are
/// listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ChannelType {
    /// Text channel
    Text = 0,
    /// Voice channel
    Voice = 2,
    /// Channel category
    Category = 4,
    /// Stage channel
    Stage = 13,
    /// Forum channel
    Forum = 15,
}

/// Verification required before members can talk.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum VerificationLevel {
    /// Unrestricted
    #[default]
    None = 0,
    /// Verified email
    Low = 1,
    /// Registered for longer than five minutes
    Medium = 2,
    /// Member of the guild for longer than ten minutes
    High = 3,
    /// Verified phone number
    Highest = 4,
}

/// Default message notification level.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum NotificationLevel {
    /// Notify on every message
    #[default]
    AllMessages = 0,
    /// Notify on mentions only
    OnlyMentions = 1,
}

/// Explicit content filter level.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ContentFilter {
    /// Scan nothing
    #[default]
    Disabled = 0,
    /// Scan members without roles
    NoRole = 1,
    /// Scan everyone
    AllMembers = 2,
}

/// Camera video quality for voice and stage channels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum VideoQualityMode {
    /// Chosen by the platform
    Auto = 1,
    /// 720p
    Full = 2,
}

/// Default sort order of forum posts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ForumOrderType {
    /// Most recent activity first
    LatestActivity = 0,
    /// Most recently created first
    CreationDate = 1,
}

/// Default layout of forum posts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ForumLayoutType {
    /// No default chosen
    NotSet = 0,
    /// List view
    ListView = 1,
    /// Gallery view
    GalleryView = 2,
}

/// Target kind of a permission overwrite.
///
/// Members cannot exist before the guild does, so the staging graph only
/// ever emits [`OverwriteType::Role`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum OverwriteType {
    /// Role target
    Role = 0,
    /// Member target
    Member = 1,
}

impl ApiEnum for ChannelType {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for VerificationLevel {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for NotificationLevel {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for ContentFilter {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for VideoQualityMode {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for ForumOrderType {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for ForumLayoutType {
    fn value(self) -> u8 {
        self as u8
    }
}

impl ApiEnum for OverwriteType {
    fn value(self) -> u8 {
        self as u8
    }
}
