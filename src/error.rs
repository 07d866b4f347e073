//! Error types.

use thiserror::Error;

/// Result alias for resolv.conf operations.
pub type Result<T> = std::result::Result<T, ResolvConfError>;

/// Errors returned when building or writing a configuration.
#[derive(Debug, Error)]
pub enum ResolvConfError {
    /// Adding the item would exceed the directive's maximum count.
    #[error("too many {kind} entries, max is {max}")]
    CapacityExceeded {
        /// Directive that is full (`nameserver` or `sortlist`).
        kind: &'static str,
        /// Maximum number of entries allowed.
        max: usize,
    },

    /// An equal item is already present.
    #[error("{kind} {value} already exists in conf")]
    DuplicateEntry {
        /// Directive of the rejected item.
        kind: &'static str,
        /// Rendered form of the rejected item.
        value: String,
    },

    /// An option carries a value it cannot hold.
    #[error("bad value {value} for option {option}")]
    InvalidValue {
        /// Option type tag.
        option: String,
        /// Offending value.
        value: i32,
    },

    /// The option type is not part of the recognized vocabulary.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Writing the rendered file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolvConfError {
    /// Returns `true` for [`ResolvConfError::CapacityExceeded`].
    #[must_use]
    pub const fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Returns `true` for [`ResolvConfError::DuplicateEntry`].
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntry { .. })
    }
}
