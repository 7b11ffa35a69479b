//! Staged channels.
//!
//! Channels are a closed family: text, voice, stage, category and forum. The
//! shared base (placeholder, name, parent, overwrites) lives on [`Channel`];
//! the kind-specific fields live on the option struct stored in
//! [`ChannelKind`], whose serde attributes double as the rendering table for
//! that kind.

use crate::payload::{api_value, forum_emoji, forum_tags};
use crate::{CategoryRef, ChannelPayload, EntityRef, OverwritePayload, Overwrites, TempId};
use crate::overwrite::RoleOverwrites;
use guildwright_core::{
    ApiEnum, ChannelType, EmojiInput, ForumLayoutType, ForumOrderType, ForumTag, OverwriteType,
    PermissionOverwrite, VideoQualityMode,
};
use serde::{Deserialize, Serialize};

/// Where a channel sits: its parent category and its overwrites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelPlacement {
    pub(crate) category: Option<CategoryRef>,
    pub(crate) overwrites: Overwrites,
}

/// Placement setters shared by every non-category channel option struct.
pub trait ChannelOptions: Sized {
    /// Mutable access to the placement fields.
    fn placement_mut(&mut self) -> &mut ChannelPlacement;

    /// Nest the channel under `category`.
    fn with_category(mut self, category: CategoryRef) -> Self {
        self.placement_mut().category = Some(category);
        self
    }

    /// Replace the overwrite map.
    fn with_overwrites(mut self, overwrites: impl Into<Overwrites>) -> Self {
        self.placement_mut().overwrites = overwrites.into();
        self
    }

    /// Add one overwrite.
    fn with_overwrite(
        mut self,
        target: impl Into<EntityRef>,
        overwrite: PermissionOverwrite,
    ) -> Self {
        self.placement_mut().overwrites.insert(target, overwrite);
        self
    }
}

/// Options of a text channel.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[serde(default)]
#[setters(prefix = "with_", strip_option, into)]
pub struct TextChannelOptions {
    #[serde(skip)]
    #[setters(skip)]
    #[getter(skip)]
    pub(crate) placement: ChannelPlacement,
    /// Designate as the guild's system channel
    #[serde(skip_serializing)]
    #[getter(skip)]
    pub(crate) system_channel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    #[serde(
        rename(serialize = "rate_limit_per_user"),
        skip_serializing_if = "Option::is_none"
    )]
    slowmode_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_auto_archive_duration: Option<u32>,
    #[serde(
        rename(serialize = "default_thread_rate_limit_per_user"),
        skip_serializing_if = "Option::is_none"
    )]
    default_thread_slowmode_delay: Option<u32>,
}

/// Options of a voice channel.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[serde(default)]
#[setters(prefix = "with_", strip_option, into)]
pub struct VoiceChannelOptions {
    #[serde(skip)]
    #[setters(skip)]
    #[getter(skip)]
    pub(crate) placement: ChannelPlacement,
    /// Designate as the guild's AFK channel
    #[serde(skip_serializing)]
    #[getter(skip)]
    pub(crate) afk_channel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rtc_region: Option<String>,
    #[serde(serialize_with = "api_value", skip_serializing_if = "Option::is_none")]
    video_quality_mode: Option<VideoQualityMode>,
}

/// Options of a stage channel.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[serde(default)]
#[setters(prefix = "with_", strip_option, into)]
pub struct StageChannelOptions {
    #[serde(skip)]
    #[setters(skip)]
    #[getter(skip)]
    pub(crate) placement: ChannelPlacement,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rtc_region: Option<String>,
    #[serde(serialize_with = "api_value", skip_serializing_if = "Option::is_none")]
    video_quality_mode: Option<VideoQualityMode>,
}

/// Options of a category. Categories have no parent and no kind-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct CategoryOptions {
    #[serde(skip)]
    pub(crate) overwrites: Overwrites,
}

impl CategoryOptions {
    /// Add one overwrite.
    pub fn with_overwrite(
        mut self,
        target: impl Into<EntityRef>,
        overwrite: PermissionOverwrite,
    ) -> Self {
        self.overwrites.insert(target, overwrite);
        self
    }
}

/// Options of a forum channel.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[serde(default)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ForumOptions {
    #[serde(skip)]
    #[setters(skip)]
    #[getter(skip)]
    pub(crate) placement: ChannelPlacement,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    #[serde(
        rename(serialize = "rate_limit_per_user"),
        skip_serializing_if = "Option::is_none"
    )]
    slowmode_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_auto_archive_duration: Option<u32>,
    #[serde(
        rename(serialize = "default_thread_rate_limit_per_user"),
        skip_serializing_if = "Option::is_none"
    )]
    default_thread_slowmode_delay: Option<u32>,
    #[serde(serialize_with = "api_value", skip_serializing_if = "Option::is_none")]
    default_sort_order: Option<ForumOrderType>,
    #[serde(serialize_with = "forum_emoji", skip_serializing_if = "Option::is_none")]
    default_reaction_emoji: Option<EmojiInput>,
    #[serde(
        rename(serialize = "default_forum_layout"),
        serialize_with = "api_value",
        skip_serializing_if = "Option::is_none"
    )]
    default_layout: Option<ForumLayoutType>,
    #[serde(serialize_with = "forum_tags", skip_serializing_if = "Option::is_none")]
    available_tags: Option<Vec<ForumTag>>,
}

impl ChannelOptions for TextChannelOptions {
    fn placement_mut(&mut self) -> &mut ChannelPlacement {
        &mut self.placement
    }
}

impl ChannelOptions for VoiceChannelOptions {
    fn placement_mut(&mut self) -> &mut ChannelPlacement {
        &mut self.placement
    }
}

impl ChannelOptions for StageChannelOptions {
    fn placement_mut(&mut self) -> &mut ChannelPlacement {
        &mut self.placement
    }
}

impl ChannelOptions for ForumOptions {
    fn placement_mut(&mut self) -> &mut ChannelPlacement {
        &mut self.placement
    }
}

/// Kind-specific part of a staged channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelKind {
    /// Text channel
    Text(TextChannelOptions),
    /// Voice channel
    Voice(VoiceChannelOptions),
    /// Stage channel
    Stage(StageChannelOptions),
    /// Category
    Category(CategoryOptions),
    /// Forum channel
    Forum(ForumOptions),
}

impl ChannelKind {
    /// Platform channel type.
    pub fn channel_type(&self) -> ChannelType {
        match self {
            Self::Text(_) => ChannelType::Text,
            Self::Voice(_) => ChannelType::Voice,
            Self::Stage(_) => ChannelType::Stage,
            Self::Category(_) => ChannelType::Category,
            Self::Forum(_) => ChannelType::Forum,
        }
    }
}

/// A channel staged for creation.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Channel {
    id: TempId,
    name: String,
    parent: Option<TempId>,
    #[getter(skip)]
    overwrites: RoleOverwrites,
    kind: ChannelKind,
}

impl Channel {
    pub(crate) fn new(
        id: TempId,
        name: String,
        parent: Option<TempId>,
        overwrites: RoleOverwrites,
        kind: ChannelKind,
    ) -> Self {
        Self {
            id,
            name,
            parent,
            overwrites,
            kind,
        }
    }

    /// Platform channel type.
    pub fn channel_type(&self) -> ChannelType {
        self.kind.channel_type()
    }

    /// Role overwrites in insertion order.
    pub fn overwrites(&self) -> impl Iterator<Item = (TempId, &PermissionOverwrite)> {
        self.overwrites.iter().map(|(role, overwrite)| (role.id, overwrite))
    }

    /// Render this channel's entry of the `channels` array.
    pub fn to_payload(&self) -> ChannelPayload {
        let permission_overwrites = self
            .overwrites
            .iter()
            .map(|(role, overwrite)| {
                let (allow, deny) = overwrite.pair();
                OverwritePayload {
                    id: role.id,
                    kind: OverwriteType::Role.value(),
                    allow: allow.value().to_string(),
                    deny: deny.value().to_string(),
                }
            })
            .collect();

        ChannelPayload {
            id: self.id,
            name: self.name.clone(),
            kind: self.channel_type().value(),
            parent_id: self.parent,
            permission_overwrites,
            settings: self.kind.clone(),
        }
    }
}
