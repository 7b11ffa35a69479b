//! Blueprint loading errors.

use derive_getters::Getters;

/// Specific blueprint error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BlueprintErrorKind {
    /// Blueprint or referenced icon file could not be read.
    #[display("Failed to read {}: {}", path, reason)]
    FileRead {
        /// Path that failed
        path: String,
        /// Underlying IO error message
        reason: String,
    },

    /// Blueprint is not valid TOML or does not match the schema.
    #[display("Failed to parse blueprint: {}", _0)]
    TomlParse(String),

    /// An entry carries a key its kind does not define.
    #[display("Unknown key '{}' in '{}'", key, entry)]
    UnknownKey {
        /// Key as written in the blueprint
        key: String,
        /// Name of the entry carrying the key
        entry: String,
    },

    /// A channel refers to a role name that was never declared.
    #[display("Unknown role '{}' referenced by channel '{}'", role, channel)]
    UnknownRole {
        /// Role name as written in the blueprint
        role: String,
        /// Channel carrying the reference
        channel: String,
    },

    /// A channel refers to a category name that was never declared.
    #[display("Unknown category '{}' referenced by channel '{}'", category, channel)]
    UnknownCategory {
        /// Category name as written in the blueprint
        category: String,
        /// Channel carrying the reference
        channel: String,
    },

    /// The same name was declared twice where names must be unique.
    #[display("Duplicate {} name '{}'", entity, name)]
    DuplicateName {
        /// Entity kind ("role", "category")
        entity: String,
        /// Offending name
        name: String,
    },
}

/// Blueprint error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Blueprint Error: {} at line {} in {}", kind, line, file)]
pub struct BlueprintError {
    kind: BlueprintErrorKind,
    line: u32,
    file: &'static str,
}

impl BlueprintError {
    /// Create a new blueprint error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BlueprintErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
