//! Error taxonomy for model validation and rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors that abort a whole `generate` call.
///
/// Both variants fail fast during validation, before any text is produced,
/// so a caller never receives a partial output map. Unknown access levels
/// are deliberately not represented here: they fall back to public (see
/// [`crate::Access::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A name is empty or not a valid identifier in the target language.
    #[error("invalid {kind} name '{name}' at '{path}': {reason}")]
    InvalidIdentifier {
        /// Node kind: "class", "parent", "field", "method" or "parameter".
        kind: &'static str,
        /// The offending name as given in the model.
        name: String,
        /// Dotted class path locating the offending node.
        path: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// The class tree nests deeper than the supported limit. Nested
    /// classes are owned exclusively, so a true cycle cannot be built in
    /// this model; the depth bound keeps rendering from recursing without
    /// limit if one ever were.
    #[error("class tree at '{path}' nests deeper than {limit} levels")]
    StructuralCycle {
        /// Dotted class path where the limit was exceeded.
        path: String,
        /// The nesting depth limit.
        limit: usize,
    },
}
