//! # Framework Errors
//!
//! This module defines the error types shared by the registry, the accessors
//! and the inspector. Path misses and namespace misses are *not* errors: they
//! surface as [`ResolvedPath::Unresolved`](crate::route::ResolvedPath) and
//! `None` respectively. Only declaration mistakes and failing accessors end
//! up here.

/// Errors raised while declaring classes or rendering resources.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Class already registered: {0}")]
    DuplicateClass(String),

    #[error("Association `{association}` declared twice on {class}")]
    DuplicateAssociation { class: String, association: String },

    #[error("Association `{association}` on {class} targets unknown class `{target}`")]
    UnresolvedTarget {
        class: String,
        association: String,
        target: String,
    },

    #[error("Association not found: {0}")]
    UnknownAssociation(String),

    /// An accessor failed while the inspector was reading through it.
    #[error("Accessor for `{attribute}` on {class} failed: {source}")]
    Accessor {
        class: String,
        attribute: String,
        #[source]
        source: AccessorError,
    },
}

/// Errors returned by attribute accessors.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum AccessorError {
    /// The attribute exists but may not be read.
    #[error("Attribute not readable: {0}")]
    Unreadable(String),

    /// The accessor itself failed.
    #[error("Accessor failed: {0}")]
    Failed(String),
}

impl From<String> for AccessorError {
    fn from(msg: String) -> Self {
        AccessorError::Failed(msg)
    }
}
