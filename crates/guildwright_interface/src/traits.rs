//! Collaborator traits for guild creation.

use crate::RawGuildData;
use async_trait::async_trait;
use guildwright_error::GuildwrightResult;
use serde_json::Value as JsonValue;

/// Network boundary for guild creation.
///
/// Implementations speak the platform's wire protocol. Whatever they fail
/// with is handed back to the caller unchanged; the staging graph performs no
/// retry and holds no partial state.
///
/// # Example Implementation
///
/// ```rust,ignore
/// pub struct HttpTransport {
///     client: reqwest::Client,
///     token: String,
/// }
///
/// #[async_trait]
/// impl GuildTransport for HttpTransport {
///     async fn create_guild(&self, document: JsonValue) -> GuildwrightResult<RawGuildData> {
///         let response = self.client.post(GUILDS_URL).json(&document).send().await?;
///         Ok(RawGuildData::new(response.json().await?))
///     }
///
///     async fn create_guild_from_template(
///         &self,
///         code: &str,
///         name: &str,
///         icon: Option<String>,
///     ) -> GuildwrightResult<RawGuildData> {
///         // POST /guilds/templates/{code}
///     }
/// }
/// ```
#[async_trait]
pub trait GuildTransport: Send + Sync {
    /// Submit a fully rendered guild creation document.
    async fn create_guild(&self, document: JsonValue) -> GuildwrightResult<RawGuildData>;

    /// Create a guild by cloning the template identified by `code`.
    ///
    /// `icon` is already encoded as a data URI.
    async fn create_guild_from_template(
        &self,
        code: &str,
        name: &str,
        icon: Option<String>,
    ) -> GuildwrightResult<RawGuildData>;
}

/// A handle to a guild that exists on the platform.
pub trait LiveGuild: Sized {
    /// Wrap the transport's response.
    fn from_raw(data: RawGuildData) -> GuildwrightResult<Self>;
}

impl LiveGuild for RawGuildData {
    fn from_raw(data: RawGuildData) -> GuildwrightResult<Self> {
        Ok(data)
    }
}
