//! System channel flags.

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Suppression flags for the guild's system channel.
///
/// # Examples
///
/// ```
/// use guildwright_core::SystemChannelFlags;
///
/// let flags = SystemChannelFlags::SUPPRESS_JOIN_NOTIFICATIONS
///     | SystemChannelFlags::SUPPRESS_GUILD_REMINDER_NOTIFICATIONS;
/// assert_eq!(flags.value(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemChannelFlags(u32);

impl SystemChannelFlags {
    /// Suppress member join notifications.
    pub const SUPPRESS_JOIN_NOTIFICATIONS: Self = Self(1 << 0);
    /// Suppress server boost notifications.
    pub const SUPPRESS_PREMIUM_SUBSCRIPTIONS: Self = Self(1 << 1);
    /// Suppress server setup tips.
    pub const SUPPRESS_GUILD_REMINDER_NOTIFICATIONS: Self = Self(1 << 2);
    /// Hide sticker reply buttons on join notifications.
    pub const SUPPRESS_JOIN_NOTIFICATION_REPLIES: Self = Self(1 << 3);

    /// Numeric projection of the flags.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for SystemChannelFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl BitOr for SystemChannelFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
