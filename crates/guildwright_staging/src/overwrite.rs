//! Per-channel permission overwrite maps.

use crate::{EntityRef, RoleRef};
use guildwright_core::PermissionOverwrite;

/// Insertion-ordered mapping from an overwrite target to its allow/deny pair.
///
/// Inserting an existing target replaces its pair in place, keeping the
/// original position. Targets must be roles of the same guild; anything else
/// is rejected when the channel is added.
///
/// # Examples
///
/// ```
/// use guildwright_core::{PermissionOverwrite, Permissions};
/// use guildwright_staging::{NewGuild, Overwrites, RoleOptions};
///
/// let mut guild = NewGuild::new("Test");
/// let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
/// let overwrites = Overwrites::new()
///     .with(mods, PermissionOverwrite::allow_only(Permissions::ADMINISTRATOR));
/// assert_eq!(overwrites.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overwrites {
    entries: Vec<(EntityRef, PermissionOverwrite)>,
}

impl Overwrites {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overwrite for `target`, returning the pair it replaced.
    pub fn insert(
        &mut self,
        target: impl Into<EntityRef>,
        overwrite: PermissionOverwrite,
    ) -> Option<PermissionOverwrite> {
        let target = target.into();
        match self.entries.iter_mut().find(|(t, _)| *t == target) {
            Some((_, existing)) => Some(std::mem::replace(existing, overwrite)),
            None => {
                self.entries.push((target, overwrite));
                None
            }
        }
    }

    /// Chaining form of [`Overwrites::insert`].
    pub fn with(mut self, target: impl Into<EntityRef>, overwrite: PermissionOverwrite) -> Self {
        self.insert(target, overwrite);
        self
    }

    /// Overwrite for `target`, if any.
    pub fn get(&self, target: impl Into<EntityRef>) -> Option<&PermissionOverwrite> {
        let target = target.into();
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, overwrite)| overwrite)
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(EntityRef, PermissionOverwrite)> {
        self.entries.iter()
    }
}

impl<K: Into<EntityRef>> FromIterator<(K, PermissionOverwrite)> for Overwrites {
    fn from_iter<I: IntoIterator<Item = (K, PermissionOverwrite)>>(iter: I) -> Self {
        let mut overwrites = Self::new();
        for (target, overwrite) in iter {
            overwrites.insert(target, overwrite);
        }
        overwrites
    }
}

impl IntoIterator for Overwrites {
    type Item = (EntityRef, PermissionOverwrite);
    type IntoIter = std::vec::IntoIter<(EntityRef, PermissionOverwrite)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Overwrites after validation: role targets only.
pub(crate) type RoleOverwrites = Vec<(RoleRef, PermissionOverwrite)>;
