//! Rendered request documents.
//!
//! Every optional field carries `skip_serializing_if`, so anything left unset
//! is absent from the document rather than rendered as `null` or a default.
//! The per-kind channel fields live on the channel option structs themselves
//! and are flattened into [`ChannelPayload`].

use crate::{ChannelKind, TempId};
use guildwright_core::{ApiEnum, EmojiInput, ForumTag};
use serde::{Serialize, Serializer};

/// The guild creation document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildPayload {
    /// Guild name
    pub name: String,
    /// Icon as a `data:` URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Seconds before idle members are moved to the AFK channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    /// Verification level code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
    /// Default notification level code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<u8>,
    /// Explicit content filter code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content_filter: Option<u8>,
    /// System channel flag bits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_flags: Option<u32>,
    /// Roles, default role first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RolePayload>,
    /// Channels in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelPayload>,
    /// Placeholder of the AFK channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<TempId>,
    /// Placeholder of the system channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<TempId>,
}

/// One entry of the `roles` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolePayload {
    /// Placeholder
    pub id: TempId,
    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RGB colour, `0` for none
    pub color: u32,
    /// Permission bits as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    /// Display separately in the member list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    /// Allow anyone to mention the role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

/// One entry of the `channels` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPayload {
    /// Placeholder
    pub id: TempId,
    /// Channel name
    pub name: String,
    /// Channel type code
    #[serde(rename = "type")]
    pub kind: u8,
    /// Placeholder of the parent category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TempId>,
    /// Role overwrites in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<OverwritePayload>,
    /// Kind-specific fields
    #[serde(flatten)]
    pub settings: ChannelKind,
}

/// One entry of a channel's `permission_overwrites` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverwritePayload {
    /// Placeholder of the target role
    pub id: TempId,
    /// Overwrite target type code, always the role code
    #[serde(rename = "type")]
    pub kind: u8,
    /// Allowed bits as a decimal string
    pub allow: String,
    /// Denied bits as a decimal string
    pub deny: String,
}

pub(crate) fn api_value<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ApiEnum,
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_u8(v.value()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn forum_emoji<S>(value: &Option<EmojiInput>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .as_ref()
        .map(|emoji| emoji.resolve().to_forum_tag_payload())
        .serialize(serializer)
}

pub(crate) fn forum_tags<S>(value: &Option<Vec<ForumTag>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .as_ref()
        .map(|tags| tags.iter().map(ForumTag::to_payload).collect::<Vec<_>>())
        .serialize(serializer)
}
