//! Rendering blueprints to creation documents.

use guildwright_error::{GuildwrightResult, JsonError};
use guildwright_staging::{Blueprint, IdAllocator, NewGuild};
use std::path::Path;
use tracing::{info, instrument};

/// Counts reported by [`check_blueprint`].
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct BlueprintSummary {
    name: String,
    roles: usize,
    channels: usize,
    afk_channel: bool,
    system_channel: bool,
}

impl std::fmt::Display for BlueprintSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} roles, {} channels",
            self.name, self.roles, self.channels
        )?;
        if self.afk_channel {
            write!(f, ", AFK channel set")?;
        }
        if self.system_channel {
            write!(f, ", system channel set")?;
        }
        Ok(())
    }
}

/// Read a blueprint file and build its staging graph.
pub fn load_guild(path: impl AsRef<Path>, ids: IdAllocator) -> GuildwrightResult<NewGuild> {
    Blueprint::from_file(path)?.build_with(ids)
}

/// Render a blueprint file as a JSON creation document.
#[instrument(skip(path, ids), fields(path = %path.as_ref().display()))]
pub fn render_blueprint(
    path: impl AsRef<Path>,
    ids: IdAllocator,
    pretty: bool,
) -> GuildwrightResult<String> {
    let document = load_guild(path, ids)?.to_document()?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    rendered.map_err(|e| JsonError::new(format!("Failed to format document: {}", e)).into())
}

/// Build and serialize a blueprint without printing the document.
#[instrument(skip(path, ids), fields(path = %path.as_ref().display()))]
pub fn check_blueprint(
    path: impl AsRef<Path>,
    ids: IdAllocator,
) -> GuildwrightResult<BlueprintSummary> {
    let payload = load_guild(path, ids)?.to_payload()?;
    let summary = BlueprintSummary {
        name: payload.name,
        roles: payload.roles.len(),
        channels: payload.channels.len(),
        afk_channel: payload.afk_channel_id.is_some(),
        system_channel: payload.system_channel_id.is_some(),
    };
    info!(%summary, "Blueprint is valid");
    Ok(summary)
}
