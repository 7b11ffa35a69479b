//! Creating a guild from an existing template.

use guildwright_core::bytes_to_base64_data;
use guildwright_error::GuildwrightResult;
use guildwright_interface::{GuildTransport, LiveGuild};
use tracing::{info, instrument};

/// A guild to be cloned from a template by code.
///
/// Unlike [`NewGuild`](crate::NewGuild) there is no local structure; the
/// template supplies the roles and channels.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct NewTemplatedGuild {
    #[setters(skip)]
    name: String,
    #[setters(skip)]
    code: String,
    /// Raw icon image bytes
    icon: Option<Vec<u8>>,
}

impl NewTemplatedGuild {
    /// Template request for `code`, creating a guild called `name`.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            icon: None,
        }
    }

    /// Submit the request through `transport`.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedImage` for icons of unknown format; transport
    /// errors propagate unchanged.
    #[instrument(skip(self, transport), fields(guild = %self.name, code = %self.code))]
    pub async fn create<T, G>(&self, transport: &T) -> GuildwrightResult<G>
    where
        T: GuildTransport + ?Sized,
        G: LiveGuild,
    {
        let icon = match &self.icon {
            Some(bytes) => Some(bytes_to_base64_data(bytes)?),
            None => None,
        };
        info!("Submitting template creation request");
        let data = transport
            .create_guild_from_template(&self.code, &self.name, icon)
            .await?;
        G::from_raw(data)
    }
}
