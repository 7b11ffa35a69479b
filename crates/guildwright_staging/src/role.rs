//! Staged roles.

use crate::{RolePayload, TempId};
use guildwright_core::{Colour, Permissions};
use serde::Deserialize;

/// Name of the implicit default role every guild has.
pub const DEFAULT_ROLE_NAME: &str = "@everyone";

/// Optional attributes of a role being added to a guild.
///
/// `colour` and `color` are aliases; when both are given `colour` wins.
///
/// # Examples
///
/// ```
/// use guildwright_core::{Colour, Permissions};
/// use guildwright_staging::RoleOptions;
///
/// let options = RoleOptions::default()
///     .with_permissions(Permissions::MANAGE_MESSAGES)
///     .with_colour(Colour::from_rgb(0xe7, 0x4c, 0x3c))
///     .with_hoist(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, derive_setters::Setters)]
#[serde(default)]
#[setters(prefix = "with_", strip_option, into)]
pub struct RoleOptions {
    pub(crate) permissions: Option<Permissions>,
    pub(crate) colour: Option<Colour>,
    pub(crate) color: Option<Colour>,
    pub(crate) hoist: Option<bool>,
    pub(crate) mentionable: Option<bool>,
}

/// A role staged for creation.
///
/// Roles are immutable once added; their placeholder is what overwrites
/// refer to.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Role {
    id: TempId,
    name: Option<String>,
    permissions: Option<Permissions>,
    colour: Option<Colour>,
    hoist: Option<bool>,
    mentionable: Option<bool>,
}

impl Role {
    pub(crate) fn new(
        id: TempId,
        name: Option<String>,
        permissions: Option<Permissions>,
        colour: Option<Colour>,
        hoist: Option<bool>,
        mentionable: Option<bool>,
    ) -> Self {
        Self {
            id,
            name,
            permissions,
            colour,
            hoist,
            mentionable,
        }
    }

    /// The `@everyone` role with no attributes set.
    pub(crate) fn default_role(id: TempId) -> Self {
        Self::new(id, Some(DEFAULT_ROLE_NAME.to_string()), None, None, None, None)
    }

    /// Alias of [`Role::colour`].
    pub fn color(&self) -> &Option<Colour> {
        &self.colour
    }

    /// Render this role's entry of the `roles` array.
    ///
    /// `color` always renders, falling back to "no colour".
    pub fn to_payload(&self) -> RolePayload {
        RolePayload {
            id: self.id,
            name: self.name.clone(),
            color: self.colour.unwrap_or_default().value(),
            permissions: self.permissions.map(|p| p.value().to_string()),
            hoist: self.hoist,
            mentionable: self.mentionable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdAllocator;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        let id = IdAllocator::starting_at(5).allocate().unwrap();
        let role = Role::new(id, Some("Quiet".to_string()), None, None, None, None);
        let rendered = serde_json::to_value(role.to_payload()).unwrap();
        assert_eq!(rendered, json!({"id": 5, "name": "Quiet", "color": 0}));
    }

    #[test]
    fn test_permissions_render_as_string() {
        let id = IdAllocator::default().allocate().unwrap();
        let role = Role::new(
            id,
            Some("Mods".to_string()),
            Some(Permissions::from_bits(8)),
            Some(Colour::from(0x3498db)),
            Some(true),
            Some(false),
        );
        let rendered = serde_json::to_value(role.to_payload()).unwrap();
        assert_eq!(rendered["permissions"], json!("8"));
        assert_eq!(rendered["color"], json!(0x3498db));
        assert_eq!(rendered["hoist"], json!(true));
        assert_eq!(rendered["mentionable"], json!(false));
    }
}
