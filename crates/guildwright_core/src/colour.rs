//! Role colours.

use serde::{Deserialize, Serialize};

/// A 24-bit RGB colour.
///
/// The platform represents "no colour" as `0`, which is what
/// [`Colour::default`] yields.
///
/// # Examples
///
/// ```
/// use guildwright_core::Colour;
///
/// assert_eq!(Colour::from_rgb(0x34, 0x98, 0xdb).value(), 0x3498db);
/// assert_eq!(Colour::default().value(), 0);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("#{:06x}", _0)]
pub struct Colour(u32);

impl Colour {
    /// Build a colour from its red, green and blue components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Numeric projection of the colour.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Colour {
    fn from(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }
}
