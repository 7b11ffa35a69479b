//! Temporary identifiers and entity handles.
//!
//! Nothing in a staging graph has a server-assigned identity yet, so every
//! role and channel is given a placeholder drawn from a per-graph counter.
//! The placeholders only need to be distinguishable inside one rendered
//! document; the platform discards them once the guild exists.

use guildwright_core::ChannelType;
use guildwright_error::{StagingError, StagingErrorKind};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Placeholder identifier, unique within one staging graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct TempId(u64);

impl TempId {
    /// Placeholder the default allocator hands out first.
    pub(crate) const FIRST: Self = Self(IdAllocator::DEFAULT_FIRST_ID);

    /// Numeric value of the placeholder.
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic per-graph allocator of [`TempId`]s.
///
/// # Examples
///
/// ```
/// use guildwright_staging::IdAllocator;
///
/// let mut ids = IdAllocator::starting_at(100);
/// assert_eq!(ids.allocate().unwrap().value(), 100);
/// assert_eq!(ids.allocate().unwrap().value(), 101);
///
/// let mut last = IdAllocator::starting_at(u64::MAX);
/// assert_eq!(last.allocate().unwrap().value(), u64::MAX);
/// assert!(last.allocate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once `u64::MAX` has been handed out
    next: Option<u64>,
}

impl IdAllocator {
    /// First value handed out by [`IdAllocator::default`].
    pub const DEFAULT_FIRST_ID: u64 = 1;

    /// Largest first id that leaves room for one entity besides the default role.
    pub const MAX_FIRST_ID: u64 = u64::MAX - 1;

    /// Allocator whose first placeholder is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Mint the next placeholder.
    ///
    /// # Errors
    ///
    /// [`StagingErrorKind::IdsExhausted`] once every value up to `u64::MAX`
    /// has been handed out.
    pub fn allocate(&mut self) -> Result<TempId, StagingError> {
        let value = self
            .next
            .ok_or_else(|| StagingError::new(StagingErrorKind::IdsExhausted))?;
        self.next = value.checked_add(1);
        Ok(TempId(value))
    }

    /// Whether no further placeholder can be minted.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(Self::DEFAULT_FIRST_ID)
    }
}

/// Process-unique identity of one staging graph.
///
/// Carried by every handle so a handle from another graph is caught instead
/// of silently resolving to whatever happens to share its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a role staged in a [`NewGuild`](crate::NewGuild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleRef {
    pub(crate) graph: GraphId,
    pub(crate) id: TempId,
}

impl RoleRef {
    /// Placeholder the role renders with.
    pub fn id(&self) -> TempId {
        self.id
    }
}

/// Handle to a category staged in a [`NewGuild`](crate::NewGuild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub(crate) graph: GraphId,
    pub(crate) id: TempId,
}

impl CategoryRef {
    /// Placeholder the category renders with.
    pub fn id(&self) -> TempId {
        self.id
    }
}

/// Handle to any channel staged in a [`NewGuild`](crate::NewGuild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelRef {
    pub(crate) graph: GraphId,
    pub(crate) id: TempId,
    pub(crate) kind: ChannelType,
}

impl ChannelRef {
    /// Placeholder the channel renders with.
    pub fn id(&self) -> TempId {
        self.id
    }

    /// Kind of channel behind the handle.
    pub fn kind(&self) -> ChannelType {
        self.kind
    }
}

impl From<CategoryRef> for ChannelRef {
    fn from(category: CategoryRef) -> Self {
        Self {
            graph: category.graph,
            id: category.id,
            kind: ChannelType::Category,
        }
    }
}

/// Any staged entity, as accepted by overwrite maps.
///
/// Only roles are valid overwrite targets; the other variants exist so a
/// misplaced channel handle is reported as a type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
pub enum EntityRef {
    /// A role
    Role(RoleRef),
    /// A non-category channel
    Channel(ChannelRef),
    /// A category
    Category(CategoryRef),
}

impl EntityRef {
    /// Entity kind, as used in error messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Role(_) => "role",
            Self::Channel(_) => "channel",
            Self::Category(_) => "category",
        }
    }

    /// Placeholder carried by the handle.
    pub fn id(&self) -> TempId {
        match self {
            Self::Role(role) => role.id,
            Self::Channel(channel) => channel.id,
            Self::Category(category) => category.id,
        }
    }
}
