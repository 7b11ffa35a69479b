//! Permission bitsets and per-channel overwrite pairs.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A platform permission bitset.
///
/// Only the numeric projection matters to the staging graph; the named
/// constants cover the bits most often used when seeding a new guild.
///
/// # Examples
///
/// ```
/// use guildwright_core::Permissions;
///
/// let perms = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;
/// assert_eq!(perms.value(), (1 << 10) | (1 << 11));
/// assert!(perms.contains(Permissions::SEND_MESSAGES));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Permissions(u64);

impl Permissions {
    /// No permissions.
    pub const NONE: Self = Self(0);
    /// Create instant invites.
    pub const CREATE_INSTANT_INVITE: Self = Self(1 << 0);
    /// Kick members.
    pub const KICK_MEMBERS: Self = Self(1 << 1);
    /// Ban members.
    pub const BAN_MEMBERS: Self = Self(1 << 2);
    /// All permissions, bypassing overwrites.
    pub const ADMINISTRATOR: Self = Self(1 << 3);
    /// Manage channels.
    pub const MANAGE_CHANNELS: Self = Self(1 << 4);
    /// Manage the guild.
    pub const MANAGE_GUILD: Self = Self(1 << 5);
    /// Add reactions.
    pub const ADD_REACTIONS: Self = Self(1 << 6);
    /// View channels.
    pub const VIEW_CHANNEL: Self = Self(1 << 10);
    /// Send messages.
    pub const SEND_MESSAGES: Self = Self(1 << 11);
    /// Manage messages.
    pub const MANAGE_MESSAGES: Self = Self(1 << 13);
    /// Mention everyone.
    pub const MENTION_EVERYONE: Self = Self(1 << 17);
    /// Connect to voice.
    pub const CONNECT: Self = Self(1 << 20);
    /// Speak in voice.
    pub const SPEAK: Self = Self(1 << 21);
    /// Manage roles.
    pub const MANAGE_ROLES: Self = Self(1 << 28);

    /// Build a bitset from raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Numeric projection of the bitset.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Permissions {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Permissions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// An allow/deny permission pair scoped to one channel.
///
/// # Examples
///
/// ```
/// use guildwright_core::{PermissionOverwrite, Permissions};
///
/// let overwrite = PermissionOverwrite::new(Permissions::ADMINISTRATOR, Permissions::NONE);
/// let (allow, deny) = overwrite.pair();
/// assert_eq!(allow.value(), 8);
/// assert_eq!(deny.value(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct PermissionOverwrite {
    /// Explicitly allowed permissions
    #[serde(default)]
    allow: Permissions,
    /// Explicitly denied permissions
    #[serde(default)]
    deny: Permissions,
}

impl PermissionOverwrite {
    /// Create an overwrite from its allow and deny halves.
    pub fn new(allow: impl Into<Permissions>, deny: impl Into<Permissions>) -> Self {
        Self {
            allow: allow.into(),
            deny: deny.into(),
        }
    }

    /// Overwrite that only allows.
    pub fn allow_only(allow: impl Into<Permissions>) -> Self {
        Self::new(allow, Permissions::NONE)
    }

    /// Overwrite that only denies.
    pub fn deny_only(deny: impl Into<Permissions>) -> Self {
        Self::new(Permissions::NONE, deny)
    }

    /// The `(allow, deny)` pair.
    pub fn pair(&self) -> (Permissions, Permissions) {
        (self.allow, self.deny)
    }

    /// Whether the overwrite neither allows nor denies anything.
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}
