//! Partial emoji references as used by forum channels.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

static CUSTOM_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<?(?:(a)?:)?([A-Za-z0-9_]+):([0-9]{13,20})>?$").expect("Valid custom emoji regex")
});

/// A reference to either a unicode emoji or a custom emoji by id.
///
/// # Examples
///
/// ```
/// use guildwright_core::PartialEmoji;
///
/// let custom: PartialEmoji = "<:party:1234567890123456>".parse().unwrap();
/// assert_eq!(custom.id(), &Some(1234567890123456));
/// assert_eq!(custom.name().as_deref(), Some("party"));
///
/// let unicode: PartialEmoji = "🎉".parse().unwrap();
/// assert_eq!(unicode.id(), &None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct PartialEmoji {
    /// Emoji name, or the unicode character itself
    name: Option<String>,
    /// Custom emoji id
    #[serde(default)]
    id: Option<u64>,
    /// Whether the custom emoji is animated
    #[serde(default)]
    animated: bool,
}

impl PartialEmoji {
    /// A unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
            animated: false,
        }
    }

    /// A custom emoji by id.
    pub fn custom(name: impl Into<String>, id: u64, animated: bool) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id),
            animated,
        }
    }

    /// Whether this is a custom (id-bearing) emoji.
    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }

    /// Render the `{emoji_id, emoji_name}` fragment forum channels and tags expect.
    ///
    /// Custom emoji are referenced by id only, unicode emoji by name only.
    pub fn to_forum_tag_payload(&self) -> ForumTagEmoji {
        match self.id {
            Some(id) => ForumTagEmoji {
                emoji_id: Some(id.to_string()),
                emoji_name: None,
            },
            None => ForumTagEmoji {
                emoji_id: None,
                emoji_name: self.name.clone(),
            },
        }
    }
}

impl FromStr for PartialEmoji {
    type Err = Infallible;

    /// Parse `<:name:id>`, `<a:name:id>`, `name:id`, or fall back to a unicode emoji.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = CUSTOM_EMOJI.captures(s) {
            if let Ok(id) = caps[3].parse::<u64>() {
                return Ok(Self::custom(&caps[2], id, caps.get(1).is_some()));
            }
        }
        Ok(Self::unicode(s))
    }
}

impl std::fmt::Display for PartialEmoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("_");
        match self.id {
            Some(id) if self.animated => write!(f, "<a:{}:{}>", name, id),
            Some(id) => write!(f, "<:{}:{}>", name, id),
            None => write!(f, "{}", name),
        }
    }
}

/// The emoji fragment of a forum tag or default reaction.
///
/// Exactly one of the two fields is set; the other renders as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTagEmoji {
    /// Custom emoji id
    pub emoji_id: Option<String>,
    /// Unicode emoji
    pub emoji_name: Option<String>,
}

/// Emoji as accepted from callers: a structured reference or shorthand text.
///
/// Both forms normalize to the same [`PartialEmoji`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum EmojiInput {
    /// Already structured reference
    Emoji(PartialEmoji),
    /// Textual shorthand such as `"🎉"` or `"<:party:1234567890123456>"`
    Text(String),
}

impl EmojiInput {
    /// Normalize to a structured reference.
    pub fn resolve(&self) -> PartialEmoji {
        match self {
            Self::Emoji(emoji) => emoji.clone(),
            Self::Text(text) => match text.parse() {
                Ok(emoji) => emoji,
                Err(never) => match never {},
            },
        }
    }
}

impl From<&str> for EmojiInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
