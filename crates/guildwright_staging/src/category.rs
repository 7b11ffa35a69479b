//! Adding channels under a category.

use crate::{
    CategoryRef, ChannelOptions, ChannelRef, ForumOptions, NewGuild, StageChannelOptions,
    TextChannelOptions, VoiceChannelOptions,
};
use guildwright_error::GuildwrightResult;

/// Borrowed view of a guild that nests every added channel under one category.
///
/// Obtained from [`NewGuild::category`]. Each method forwards to the guild
/// with the category filled in, overriding any category already set on the
/// options.
///
/// # Examples
///
/// ```
/// use guildwright_staging::NewGuild;
///
/// let mut guild = NewGuild::new("Test");
/// let voice = guild.add_category("Voice", Default::default()).unwrap();
/// let lounge = guild.category(voice).add_voice_channel("Lounge", Default::default()).unwrap();
/// assert_eq!(guild.channel(lounge).unwrap().parent(), &Some(voice.id()));
/// ```
#[derive(Debug)]
pub struct CategoryScope<'a> {
    guild: &'a mut NewGuild,
    category: CategoryRef,
}

impl<'a> CategoryScope<'a> {
    pub(crate) fn new(guild: &'a mut NewGuild, category: CategoryRef) -> Self {
        Self { guild, category }
    }

    /// The category channels are nested under.
    pub fn category(&self) -> CategoryRef {
        self.category
    }

    /// Stage a text channel in this category.
    pub fn add_text_channel(
        &mut self,
        name: impl Into<String>,
        options: TextChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        self.guild
            .add_text_channel(name, options.with_category(self.category))
    }

    /// Stage a voice channel in this category.
    pub fn add_voice_channel(
        &mut self,
        name: impl Into<String>,
        options: VoiceChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        self.guild
            .add_voice_channel(name, options.with_category(self.category))
    }

    /// Stage a stage channel in this category.
    pub fn add_stage_channel(
        &mut self,
        name: impl Into<String>,
        options: StageChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        self.guild
            .add_stage_channel(name, options.with_category(self.category))
    }

    /// Stage a forum in this category.
    pub fn add_forum(
        &mut self,
        name: impl Into<String>,
        options: ForumOptions,
    ) -> GuildwrightResult<ChannelRef> {
        self.guild.add_forum(name, options.with_category(self.category))
    }
}
