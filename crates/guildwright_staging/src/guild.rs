//! The guild staging graph.
//!
//! [`NewGuild`] owns every staged role and channel in insertion order and
//! renders the whole graph into one creation document. Entities are
//! referenced through `Copy` handles that carry the graph's identity, so
//! mistakes such as nesting under another guild's category are caught when
//! the entity is added rather than by the platform.

use crate::id::GraphId;
use crate::overwrite::RoleOverwrites;
use crate::{
    CategoryOptions, CategoryRef, CategoryScope, Channel, ChannelKind, ChannelPlacement,
    ChannelRef, EntityRef, ForumOptions, GuildPayload, IdAllocator, Overwrites, Role, RoleOptions,
    RoleRef, StageChannelOptions, TempId, TextChannelOptions, VoiceChannelOptions,
    DEFAULT_ROLE_NAME,
};
use guildwright_core::{
    ApiEnum, ChannelType, ContentFilter, NotificationLevel, SystemChannelFlags, VerificationLevel,
    bytes_to_base64_data,
};
use guildwright_error::{GuildwrightResult, JsonError, StagingError, StagingErrorKind};
use guildwright_interface::{GuildTransport, LiveGuild};
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument, warn};

/// Top-level guild attributes. Anything left unset is omitted from the document.
///
/// # Examples
///
/// ```
/// use guildwright_core::VerificationLevel;
/// use guildwright_staging::GuildOptions;
///
/// let options = GuildOptions::default()
///     .with_afk_timeout(300u32)
///     .with_verification_level(VerificationLevel::Medium);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct GuildOptions {
    /// Raw icon image bytes
    pub(crate) icon: Option<Vec<u8>>,
    /// Seconds before idle members are moved to the AFK channel
    pub(crate) afk_timeout: Option<u32>,
    pub(crate) verification_level: Option<VerificationLevel>,
    pub(crate) notification_level: Option<NotificationLevel>,
    pub(crate) content_filter: Option<ContentFilter>,
    pub(crate) system_channel_flags: Option<SystemChannelFlags>,
}

/// A guild that does not exist yet, described as an in-memory graph.
///
/// # Examples
///
/// ```
/// use guildwright_core::{PermissionOverwrite, Permissions};
/// use guildwright_staging::{ChannelOptions, NewGuild, RoleOptions, TextChannelOptions};
///
/// let mut guild = NewGuild::new("Test");
/// let general = guild.add_category("General", Default::default()).unwrap();
/// let mods = guild
///     .add_role("Mods", RoleOptions::default().with_permissions(Permissions::MANAGE_MESSAGES))
///     .unwrap();
/// guild
///     .category(general)
///     .add_text_channel(
///         "chat",
///         TextChannelOptions::default()
///             .with_overwrite(mods, PermissionOverwrite::new(8u64, 0u64)),
///     )
///     .unwrap();
///
/// let document = guild.to_document().unwrap();
/// assert_eq!(document["roles"].as_array().unwrap().len(), 2);
/// assert_eq!(document["channels"][1]["parent_id"], document["channels"][0]["id"]);
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct NewGuild {
    #[getter(skip)]
    graph: GraphId,
    #[getter(skip)]
    ids: IdAllocator,
    #[getter(skip)]
    default_role_id: TempId,
    name: String,
    options: GuildOptions,
    roles: Vec<Role>,
    channels: Vec<Channel>,
    afk_channel: Option<ChannelRef>,
    system_channel: Option<ChannelRef>,
}

impl NewGuild {
    /// An empty graph with no top-level attributes besides the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, GuildOptions::default())
    }

    /// An empty graph with the given top-level attributes.
    pub fn with_options(name: impl Into<String>, options: GuildOptions) -> Self {
        let ids = IdAllocator::starting_at(IdAllocator::DEFAULT_FIRST_ID + 1);
        Self::assemble(name.into(), options, ids, TempId::FIRST)
    }

    /// An empty graph drawing placeholders from `ids`.
    ///
    /// The first placeholder is reserved for the default role.
    ///
    /// # Errors
    ///
    /// Fails if `ids` is already exhausted.
    pub fn with_allocator(
        name: impl Into<String>,
        options: GuildOptions,
        mut ids: IdAllocator,
    ) -> GuildwrightResult<Self> {
        let default_role_id = ids.allocate()?;
        Ok(Self::assemble(name.into(), options, ids, default_role_id))
    }

    fn assemble(
        name: String,
        options: GuildOptions,
        ids: IdAllocator,
        default_role_id: TempId,
    ) -> Self {
        Self {
            graph: GraphId::next(),
            ids,
            default_role_id,
            name,
            options,
            roles: Vec::new(),
            channels: Vec::new(),
            afk_channel: None,
            system_channel: None,
        }
    }

    /// Make sure the `@everyone` role is staged and return it.
    ///
    /// Adds the role as the first entry when no role exists yet.
    pub fn ensure_default_role(&mut self) -> RoleRef {
        if self.roles.is_empty() {
            debug!(guild = %self.name, id = %self.default_role_id, "Synthesizing default role");
            self.roles.push(Role::default_role(self.default_role_id));
        }
        self.role_ref(self.roles[0].id())
    }

    /// Stage a role.
    ///
    /// The default role is synthesized first if this is the first role and it
    /// is not itself the default role.
    ///
    /// # Errors
    ///
    /// Fails if the graph has run out of placeholders; nothing is staged then.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_role(
        &mut self,
        name: impl Into<String>,
        options: RoleOptions,
    ) -> GuildwrightResult<RoleRef> {
        let name = name.into();
        let id = if self.roles.is_empty() && name == DEFAULT_ROLE_NAME {
            self.default_role_id
        } else {
            let id = self.ids.allocate()?;
            self.ensure_default_role();
            id
        };

        let role = Role::new(
            id,
            Some(name),
            options.permissions,
            options.colour.or(options.color),
            options.hoist,
            options.mentionable,
        );
        debug!(id = %id, name = ?role.name(), "Added role");
        self.roles.push(role);
        Ok(self.role_ref(&id))
    }

    /// Stage a category.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        mut options: CategoryOptions,
    ) -> GuildwrightResult<CategoryRef> {
        let placement = ChannelPlacement {
            category: None,
            overwrites: std::mem::take(&mut options.overwrites),
        };
        let channel = self.push_channel(name.into(), placement, ChannelKind::Category(options))?;
        Ok(CategoryRef {
            graph: channel.graph,
            id: channel.id,
        })
    }

    /// Stage a text channel, optionally designating it the system channel.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_text_channel(
        &mut self,
        name: impl Into<String>,
        mut options: TextChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        let placement = std::mem::take(&mut options.placement);
        let designate = options.system_channel;
        let channel = self.push_channel(name.into(), placement, ChannelKind::Text(options))?;
        if designate {
            self.system_channel = Some(channel);
        }
        Ok(channel)
    }

    /// Stage a voice channel, optionally designating it the AFK channel.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_voice_channel(
        &mut self,
        name: impl Into<String>,
        mut options: VoiceChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        let placement = std::mem::take(&mut options.placement);
        let designate = options.afk_channel;
        let channel = self.push_channel(name.into(), placement, ChannelKind::Voice(options))?;
        if designate {
            self.afk_channel = Some(channel);
        }
        Ok(channel)
    }

    /// Stage a stage channel.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_stage_channel(
        &mut self,
        name: impl Into<String>,
        mut options: StageChannelOptions,
    ) -> GuildwrightResult<ChannelRef> {
        let placement = std::mem::take(&mut options.placement);
        self.push_channel(name.into(), placement, ChannelKind::Stage(options))
    }

    /// Stage a forum channel.
    #[instrument(skip(self, name, options), fields(guild = %self.name))]
    pub fn add_forum(
        &mut self,
        name: impl Into<String>,
        mut options: ForumOptions,
    ) -> GuildwrightResult<ChannelRef> {
        let placement = std::mem::take(&mut options.placement);
        self.push_channel(name.into(), placement, ChannelKind::Forum(options))
    }

    /// Add channels under `category`.
    pub fn category(&mut self, category: CategoryRef) -> CategoryScope<'_> {
        CategoryScope::new(self, category)
    }

    /// Designate an already staged channel as the AFK channel.
    ///
    /// # Errors
    ///
    /// Foreign or unknown handles, and categories.
    pub fn set_afk_channel(&mut self, channel: ChannelRef) -> GuildwrightResult<()> {
        self.check_designated(&channel)?;
        self.afk_channel = Some(channel);
        Ok(())
    }

    /// Designate an already staged channel as the system channel.
    ///
    /// # Errors
    ///
    /// Foreign or unknown handles, and categories.
    pub fn set_system_channel(&mut self, channel: ChannelRef) -> GuildwrightResult<()> {
        self.check_designated(&channel)?;
        self.system_channel = Some(channel);
        Ok(())
    }

    /// Look up a staged role.
    pub fn role(&self, role: RoleRef) -> Option<&Role> {
        if role.graph != self.graph {
            return None;
        }
        self.roles.iter().find(|r| *r.id() == role.id)
    }

    /// Look up a staged channel or category.
    pub fn channel(&self, channel: impl Into<ChannelRef>) -> Option<&Channel> {
        let channel = channel.into();
        if channel.graph != self.graph {
            return None;
        }
        self.channels.iter().find(|c| *c.id() == channel.id)
    }

    /// Render the creation document.
    ///
    /// A graph without roles still renders the default role. The AFK and
    /// system channel ids only render alongside a non-empty channel list.
    ///
    /// # Errors
    ///
    /// Fails if the icon bytes are not a supported image format.
    #[instrument(skip(self), fields(guild = %self.name, roles = self.roles.len(), channels = self.channels.len()))]
    pub fn to_payload(&self) -> GuildwrightResult<GuildPayload> {
        let icon = match &self.options.icon {
            Some(bytes) => Some(bytes_to_base64_data(bytes)?),
            None => None,
        };

        let roles = if self.roles.is_empty() {
            vec![Role::default_role(self.default_role_id).to_payload()]
        } else {
            self.roles.iter().map(Role::to_payload).collect()
        };

        let channels: Vec<_> = self.channels.iter().map(Channel::to_payload).collect();
        let (afk_channel_id, system_channel_id) = if channels.is_empty() {
            (None, None)
        } else {
            (
                self.afk_channel.map(|c| c.id),
                self.system_channel.map(|c| c.id),
            )
        };

        debug!(
            roles = roles.len(),
            channels = channels.len(),
            has_icon = icon.is_some(),
            "Rendered guild payload"
        );

        Ok(GuildPayload {
            name: self.name.clone(),
            icon,
            afk_timeout: self.options.afk_timeout,
            verification_level: self.options.verification_level.map(ApiEnum::value),
            default_message_notifications: self.options.notification_level.map(ApiEnum::value),
            explicit_content_filter: self.options.content_filter.map(ApiEnum::value),
            system_channel_flags: self.options.system_channel_flags.map(|f| f.value()),
            roles,
            channels,
            afk_channel_id,
            system_channel_id,
        })
    }

    /// Render the creation document as JSON.
    pub fn to_document(&self) -> GuildwrightResult<JsonValue> {
        let payload = self.to_payload()?;
        serde_json::to_value(&payload).map_err(|e| {
            JsonError::new(format!("Failed to serialize guild payload: {}", e)).into()
        })
    }

    /// Submit the graph through `transport` and wrap the created guild.
    ///
    /// The graph is only borrowed; after a failure the same graph can be
    /// submitted again.
    ///
    /// # Errors
    ///
    /// Rendering errors, and whatever the transport fails with, unchanged.
    #[instrument(skip(self, transport), fields(guild = %self.name))]
    pub async fn create<T, G>(&self, transport: &T) -> GuildwrightResult<G>
    where
        T: GuildTransport + ?Sized,
        G: LiveGuild,
    {
        let document = self.to_document()?;
        info!("Submitting guild creation request");
        let data = transport.create_guild(document).await.inspect_err(|e| {
            warn!(error = %e, "Guild creation failed");
        })?;
        info!(id = ?data.id(), "Guild created");
        G::from_raw(data)
    }

    fn role_ref(&self, id: &TempId) -> RoleRef {
        RoleRef {
            graph: self.graph,
            id: *id,
        }
    }

    fn push_channel(
        &mut self,
        name: String,
        placement: ChannelPlacement,
        kind: ChannelKind,
    ) -> GuildwrightResult<ChannelRef> {
        let parent = match placement.category {
            Some(category) => Some(self.check_category(&category)?),
            None => None,
        };
        let overwrites = self.resolve_overwrites(placement.overwrites)?;

        let id = self.ids.allocate()?;
        let channel = ChannelRef {
            graph: self.graph,
            id,
            kind: kind.channel_type(),
        };
        debug!(
            id = %id,
            name = %name,
            kind = %channel.kind,
            parent = ?parent,
            overwrites = overwrites.len(),
            "Added channel"
        );
        self.channels
            .push(Channel::new(id, name, parent, overwrites, kind));
        Ok(channel)
    }

    fn check_owned(&self, target: &EntityRef) -> GuildwrightResult<()> {
        let graph = match target {
            EntityRef::Role(role) => role.graph,
            EntityRef::Channel(channel) => channel.graph,
            EntityRef::Category(category) => category.graph,
        };
        if graph != self.graph {
            warn!(entity = target.entity_name(), id = %target.id(), "Rejected foreign handle");
            return Err(StagingError::new(StagingErrorKind::ForeignEntity {
                entity: target.entity_name().to_string(),
                id: target.id().value(),
            })
            .into());
        }
        Ok(())
    }

    fn check_category(&self, category: &CategoryRef) -> GuildwrightResult<TempId> {
        self.check_owned(&EntityRef::Category(*category))?;
        let known = self
            .channels
            .iter()
            .any(|c| *c.id() == category.id && c.channel_type() == ChannelType::Category);
        if !known {
            return Err(unknown("category", category.id));
        }
        Ok(category.id)
    }

    fn check_channel(&self, channel: &ChannelRef) -> GuildwrightResult<()> {
        self.check_owned(&EntityRef::Channel(*channel))?;
        if !self.channels.iter().any(|c| *c.id() == channel.id) {
            return Err(unknown("channel", channel.id));
        }
        Ok(())
    }

    fn check_designated(&self, channel: &ChannelRef) -> GuildwrightResult<()> {
        self.check_channel(channel)?;
        if channel.kind == ChannelType::Category {
            warn!(id = %channel.id, "Rejected category as designated channel");
            return Err(StagingError::new(StagingErrorKind::TypeMismatch {
                expected: "channel".to_string(),
                found: "category".to_string(),
            })
            .into());
        }
        Ok(())
    }

    fn resolve_overwrites(&self, overwrites: Overwrites) -> GuildwrightResult<RoleOverwrites> {
        let mut resolved = Vec::with_capacity(overwrites.len());
        for (target, overwrite) in overwrites {
            self.check_owned(&target)?;
            let EntityRef::Role(role) = target else {
                warn!(found = target.entity_name(), "Rejected non-role overwrite target");
                return Err(StagingError::new(StagingErrorKind::TypeMismatch {
                    expected: "role".to_string(),
                    found: target.entity_name().to_string(),
                })
                .into());
            };
            if self.role(role).is_none() {
                return Err(unknown("role", role.id));
            }
            resolved.push((role, overwrite));
        }
        Ok(resolved)
    }
}

#[track_caller]
fn unknown(entity: &str, id: TempId) -> guildwright_error::GuildwrightError {
    StagingError::new(StagingErrorKind::UnknownEntity {
        entity: entity.to_string(),
        id: id.value(),
    })
    .into()
}
