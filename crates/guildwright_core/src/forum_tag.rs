//! Forum tag definitions.

use crate::{EmojiInput, ForumTagEmoji};
use serde::{Deserialize, Serialize};

/// A tag that can be applied to posts in a forum channel.
///
/// # Examples
///
/// ```
/// use guildwright_core::ForumTag;
///
/// let tag = ForumTag::new("bug").with_moderated(true).with_emoji("🐛");
/// let payload = tag.to_payload();
/// assert_eq!(payload.name, "bug");
/// assert!(payload.moderated);
/// assert_eq!(payload.emoji.emoji_name.as_deref(), Some("🐛"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ForumTag {
    /// Tag name
    #[setters(skip)]
    name: String,
    /// Whether only moderators may apply the tag
    #[serde(default)]
    moderated: bool,
    /// Emoji shown next to the tag
    #[serde(default)]
    emoji: Option<EmojiInput>,
    /// Existing tag id, when re-submitting a known tag
    #[serde(default)]
    id: Option<u64>,
}

impl ForumTag {
    /// A new unmoderated tag without emoji.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moderated: false,
            emoji: None,
            id: None,
        }
    }

    /// Render the request fragment for this tag.
    pub fn to_payload(&self) -> ForumTagPayload {
        let emoji = match &self.emoji {
            Some(emoji) => emoji.resolve().to_forum_tag_payload(),
            None => ForumTagEmoji {
                emoji_id: None,
                emoji_name: None,
            },
        };
        ForumTagPayload {
            name: self.name.clone(),
            moderated: self.moderated,
            emoji,
            id: self.id,
        }
    }
}

/// Rendered forum tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumTagPayload {
    /// Tag name
    pub name: String,
    /// Whether only moderators may apply the tag
    pub moderated: bool,
    /// Emoji fragment, flattened into the tag object
    #[serde(flatten)]
    pub emoji: ForumTagEmoji,
    /// Existing tag id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}
