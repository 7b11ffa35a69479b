//! Declarative guild blueprints.
//!
//! A blueprint is a TOML file describing a guild the way a person would
//! write it down: roles and categories are referred to by name, and channels
//! are listed in the order they should appear.
//!
//! ```toml
//! [guild]
//! name = "Test"
//! verification_level = "medium"
//!
//! [[roles]]
//! name = "Mods"
//! permissions = 8
//!
//! [[channels]]
//! kind = "category"
//! name = "General"
//!
//! [[channels]]
//! kind = "text"
//! name = "chat"
//! category = "General"
//! system_channel = true
//!
//! [[channels.overwrites]]
//! role = "Mods"
//! allow = 8
//! ```

use crate::{
    CategoryOptions, CategoryRef, ChannelOptions, ForumOptions, GuildOptions, IdAllocator,
    NewGuild, RoleOptions, RoleRef, StageChannelOptions, TextChannelOptions, VoiceChannelOptions,
    DEFAULT_ROLE_NAME,
};
use guildwright_core::{
    ContentFilter, NotificationLevel, PermissionOverwrite, Permissions, SystemChannelFlags,
    VerificationLevel,
};
use guildwright_error::{BlueprintError, BlueprintErrorKind, GuildwrightResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

/// The `[guild]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildSection {
    /// Guild name
    pub name: String,
    /// Icon image, relative to the blueprint file
    pub icon: Option<PathBuf>,
    /// Seconds before idle members are moved to the AFK channel
    pub afk_timeout: Option<u32>,
    /// Verification level, e.g. `"medium"`
    pub verification_level: Option<VerificationLevel>,
    /// Default notification level, e.g. `"only_mentions"`
    pub notification_level: Option<NotificationLevel>,
    /// Explicit content filter, e.g. `"all_members"`
    pub content_filter: Option<ContentFilter>,
    /// Raw system channel flag bits
    pub system_channel_flags: Option<u32>,
}

/// One `[[roles]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleSection {
    /// Role name
    pub name: String,
    /// Remaining keys of the entry
    #[serde(flatten)]
    pub options: RoleOptions,
    #[serde(flatten)]
    unknown: toml::Table,
}

/// One `[[channels.overwrites]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverwriteSection {
    /// Role name
    pub role: String,
    /// Allowed permission bits
    #[serde(default)]
    pub allow: u64,
    /// Denied permission bits
    #[serde(default)]
    pub deny: u64,
}

impl OverwriteSection {
    fn to_overwrite(&self) -> PermissionOverwrite {
        PermissionOverwrite::new(
            Permissions::from_bits(self.allow),
            Permissions::from_bits(self.deny),
        )
    }
}

/// A `[[channels]]` entry of a non-category kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChannelEntry<O> {
    /// Channel name
    pub name: String,
    /// Category name; the category must be listed earlier
    pub category: Option<String>,
    /// Role overwrites
    #[serde(default)]
    pub overwrites: Vec<OverwriteSection>,
    /// Kind-specific keys
    #[serde(flatten)]
    pub options: O,
    /// Keys `options` did not take
    #[serde(flatten)]
    unknown: toml::Table,
}

/// A `[[channels]]` entry of kind `category`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    /// Category name
    pub name: String,
    /// Role overwrites
    #[serde(default)]
    pub overwrites: Vec<OverwriteSection>,
}

/// A `[[channels]]` entry, discriminated by its `kind` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelSection {
    /// `kind = "text"`
    Text(ChannelEntry<TextChannelOptions>),
    /// `kind = "voice"`
    Voice(ChannelEntry<VoiceChannelOptions>),
    /// `kind = "stage"`
    Stage(ChannelEntry<StageChannelOptions>),
    /// `kind = "category"`
    Category(CategoryEntry),
    /// `kind = "forum"`
    Forum(ChannelEntry<ForumOptions>),
}

impl ChannelSection {
    /// Channel name as written.
    pub fn name(&self) -> &str {
        match self {
            Self::Text(entry) => &entry.name,
            Self::Voice(entry) => &entry.name,
            Self::Stage(entry) => &entry.name,
            Self::Category(entry) => &entry.name,
            Self::Forum(entry) => &entry.name,
        }
    }

    fn unknown_keys(&self) -> Option<&toml::Table> {
        match self {
            Self::Text(entry) => Some(&entry.unknown),
            Self::Voice(entry) => Some(&entry.unknown),
            Self::Stage(entry) => Some(&entry.unknown),
            Self::Category(_) => None,
            Self::Forum(entry) => Some(&entry.unknown),
        }
    }
}

/// A parsed blueprint, ready to be built into a [`NewGuild`].
///
/// # Examples
///
/// ```
/// use guildwright_staging::Blueprint;
///
/// let blueprint: Blueprint = r#"
///     [guild]
///     name = "Test"
///
///     [[channels]]
///     kind = "voice"
///     name = "Lounge"
///     afk_channel = true
/// "#
/// .parse()
/// .unwrap();
///
/// let document = blueprint.build().unwrap().to_document().unwrap();
/// assert_eq!(document["afk_channel_id"], document["channels"][0]["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    guild: GuildSection,
    #[serde(default)]
    roles: Vec<RoleSection>,
    #[serde(default)]
    channels: Vec<ChannelSection>,
    /// File the blueprint was read from; icon paths resolve against it
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl Blueprint {
    /// Load a blueprint from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid blueprint.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BlueprintError::new(BlueprintErrorKind::FileRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let mut blueprint: Self = content.parse()?;
        blueprint.source_path = Some(path.to_path_buf());
        Ok(blueprint)
    }

    /// Build the staging graph with the default allocator.
    pub fn build(&self) -> GuildwrightResult<NewGuild> {
        self.build_with(IdAllocator::default())
    }

    /// Build the staging graph, drawing placeholders from `ids`.
    ///
    /// Roles are added first, then channels in document order. A declared
    /// `@everyone` entry is added ahead of the other roles wherever it
    /// appears; the default role can also be referenced without being
    /// declared.
    ///
    /// # Errors
    ///
    /// Unknown or duplicate names, unreadable icon files, and any error the
    /// graph itself rejects.
    #[instrument(skip_all, fields(guild = %self.guild.name, roles = self.roles.len(), channels = self.channels.len()))]
    pub fn build_with(&self, ids: IdAllocator) -> GuildwrightResult<NewGuild> {
        let mut guild = NewGuild::with_allocator(&self.guild.name, self.guild_options()?, ids)?;

        let (everyone, others): (Vec<_>, Vec<_>) = self
            .roles
            .iter()
            .partition(|section| section.name == DEFAULT_ROLE_NAME);
        let mut roles: HashMap<&str, RoleRef> = HashMap::new();
        for section in everyone.into_iter().chain(others) {
            if roles.contains_key(section.name.as_str()) {
                return Err(duplicate("role", &section.name).into());
            }
            let role = guild.add_role(&section.name, section.options.clone())?;
            roles.insert(&section.name, role);
        }
        roles
            .entry(DEFAULT_ROLE_NAME)
            .or_insert_with(|| guild.ensure_default_role());

        let mut categories: HashMap<&str, CategoryRef> = HashMap::new();
        for section in &self.channels {
            debug!(name = section.name(), "Building channel");
            match section {
                ChannelSection::Category(entry) => {
                    if categories.contains_key(entry.name.as_str()) {
                        return Err(duplicate("category", &entry.name).into());
                    }
                    let mut options = CategoryOptions::default();
                    for overwrite in &entry.overwrites {
                        let role = resolve_role(&roles, &overwrite.role, &entry.name)?;
                        options = options.with_overwrite(role, overwrite.to_overwrite());
                    }
                    let category = guild.add_category(&entry.name, options)?;
                    categories.insert(&entry.name, category);
                }
                ChannelSection::Text(entry) => {
                    let options = entry.placed(&roles, &categories)?;
                    guild.add_text_channel(&entry.name, options)?;
                }
                ChannelSection::Voice(entry) => {
                    let options = entry.placed(&roles, &categories)?;
                    guild.add_voice_channel(&entry.name, options)?;
                }
                ChannelSection::Stage(entry) => {
                    let options = entry.placed(&roles, &categories)?;
                    guild.add_stage_channel(&entry.name, options)?;
                }
                ChannelSection::Forum(entry) => {
                    let options = entry.placed(&roles, &categories)?;
                    guild.add_forum(&entry.name, options)?;
                }
            }
        }

        Ok(guild)
    }

    fn guild_options(&self) -> Result<GuildOptions, BlueprintError> {
        let icon = match &self.guild.icon {
            Some(path) => Some(self.read_icon(path)?),
            None => None,
        };
        Ok(GuildOptions {
            icon,
            afk_timeout: self.guild.afk_timeout,
            verification_level: self.guild.verification_level,
            notification_level: self.guild.notification_level,
            content_filter: self.guild.content_filter,
            system_channel_flags: self.guild.system_channel_flags.map(SystemChannelFlags::from),
        })
    }

    fn read_icon(&self, path: &Path) -> Result<Vec<u8>, BlueprintError> {
        let resolved = match self.source_path.as_deref().and_then(Path::parent) {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        };
        debug!(path = %resolved.display(), "Reading guild icon");
        std::fs::read(&resolved).map_err(|e| {
            BlueprintError::new(BlueprintErrorKind::FileRead {
                path: resolved.display().to_string(),
                reason: e.to_string(),
            })
        })
    }
}

impl FromStr for Blueprint {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let blueprint: Self = toml::from_str(s)
            .map_err(|e| BlueprintError::new(BlueprintErrorKind::TomlParse(e.to_string())))?;

        for role in &blueprint.roles {
            reject_unknown(&role.unknown, &role.name)?;
        }
        for channel in &blueprint.channels {
            if let Some(unknown) = channel.unknown_keys() {
                reject_unknown(unknown, channel.name())?;
            }
        }
        Ok(blueprint)
    }
}

impl<O: ChannelOptions + Clone> ChannelEntry<O> {
    /// The entry's options with category and overwrites resolved to handles.
    fn placed(
        &self,
        roles: &HashMap<&str, RoleRef>,
        categories: &HashMap<&str, CategoryRef>,
    ) -> Result<O, BlueprintError> {
        let mut options = self.options.clone();
        if let Some(name) = &self.category {
            let category = categories.get(name.as_str()).ok_or_else(|| {
                BlueprintError::new(BlueprintErrorKind::UnknownCategory {
                    category: name.clone(),
                    channel: self.name.clone(),
                })
            })?;
            options = options.with_category(*category);
        }
        for overwrite in &self.overwrites {
            let role = resolve_role(roles, &overwrite.role, &self.name)?;
            options = options.with_overwrite(role, overwrite.to_overwrite());
        }
        Ok(options)
    }
}

fn resolve_role(
    roles: &HashMap<&str, RoleRef>,
    role: &str,
    channel: &str,
) -> Result<RoleRef, BlueprintError> {
    roles.get(role).copied().ok_or_else(|| {
        BlueprintError::new(BlueprintErrorKind::UnknownRole {
            role: role.to_string(),
            channel: channel.to_string(),
        })
    })
}

fn reject_unknown(unknown: &toml::Table, entry: &str) -> Result<(), BlueprintError> {
    match unknown.keys().next() {
        Some(key) => Err(BlueprintError::new(BlueprintErrorKind::UnknownKey {
            key: key.clone(),
            entry: entry.to_string(),
        })),
        None => Ok(()),
    }
}

#[track_caller]
fn duplicate(entity: &str, name: &str) -> BlueprintError {
    BlueprintError::new(BlueprintErrorKind::DuplicateName {
        entity: entity.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_kind_tag() {
        let blueprint: Blueprint = r#"
            [guild]
            name = "g"

            [[channels]]
            kind = "text"
            name = "chat"
            topic = "hi"
            slowmode_delay = 3
        "#
        .parse()
        .unwrap();

        let ChannelSection::Text(entry) = &blueprint.channels[0] else {
            panic!("expected text channel");
        };
        assert_eq!(entry.options.topic().as_deref(), Some("hi"));
        assert_eq!(entry.options.slowmode_delay(), &Some(3));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = r#"
            [guild]
            name = "g"

            [[channels]]
            kind = "thread"
            name = "x"
        "#
        .parse::<Blueprint>()
        .unwrap_err();
        assert!(matches!(err.kind(), BlueprintErrorKind::TomlParse(_)));
    }

    #[test]
    fn test_misspelt_channel_key_is_rejected() {
        let err = r#"
            [guild]
            name = "g"

            [[channels]]
            kind = "text"
            name = "chat"
            slowmode = 5
        "#
        .parse::<Blueprint>()
        .unwrap_err();
        assert_eq!(
            err.kind(),
            &BlueprintErrorKind::UnknownKey {
                key: "slowmode".to_string(),
                entry: "chat".to_string(),
            }
        );
    }

    #[test]
    fn test_key_of_another_kind_is_rejected() {
        // `topic` belongs to text and forum channels only
        let err = r#"
            [guild]
            name = "g"

            [[channels]]
            kind = "voice"
            name = "talk"
            topic = "hi"
        "#
        .parse::<Blueprint>()
        .unwrap_err();
        assert!(matches!(
            err.kind(),
            BlueprintErrorKind::UnknownKey { key, .. } if key == "topic"
        ));
    }

    #[test]
    fn test_misspelt_role_key_is_rejected() {
        let err = r#"
            [guild]
            name = "g"

            [[roles]]
            name = "Mods"
            hoisted = true
        "#
        .parse::<Blueprint>()
        .unwrap_err();
        assert_eq!(
            err.kind(),
            &BlueprintErrorKind::UnknownKey {
                key: "hoisted".to_string(),
                entry: "Mods".to_string(),
            }
        );
    }

    #[test]
    fn test_misspelt_fixed_keys_are_parse_errors() {
        for source in [
            "[guild]\nname = \"g\"\nafk = 60\n",
            "[guild]\nname = \"g\"\n[[channels]]\nkind = \"category\"\nname = \"c\"\nnsfw = true\n",
            "[guild]\nname = \"g\"\n[[channels]]\nkind = \"text\"\nname = \"t\"\n[[channels.overwrites]]\nrole = \"@everyone\"\nallowed = 8\n",
            "[guild]\nname = \"g\"\n[[channel]]\nkind = \"text\"\nname = \"t\"\n",
        ] {
            let err = source.parse::<Blueprint>().unwrap_err();
            assert!(
                matches!(err.kind(), BlueprintErrorKind::TomlParse(_)),
                "accepted: {}",
                source
            );
        }
    }

    #[test]
    fn test_unknown_enum_value_is_parse_error() {
        let err = r#"
            [guild]
            name = "g"
            verification_level = "extreme"
        "#
        .parse::<Blueprint>()
        .unwrap_err();
        assert!(matches!(err.kind(), BlueprintErrorKind::TomlParse(_)));
    }
}
