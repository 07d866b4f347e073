//! Resolver `options` directive: vocabulary, token codec and the option item.
//!
//! Every recognized option type is listed once in [`VOCABULARY`]. Rendering
//! and decoding both consult that table, so an option that renders to a
//! non-empty token always decodes back to the same type.

use crate::error::{ResolvConfError, Result};
use std::fmt;

/// Whether an option stands alone or carries an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionArity {
    /// Rendered as the bare tag, e.g. `rotate`.
    Flag,
    /// Rendered as `tag:value`, e.g. `ndots:2`.
    Valued,
}

/// Recognized option type tags.
pub const VOCABULARY: &[(&str, OptionArity)] = &[
    ("debug", OptionArity::Flag),
    ("rotate", OptionArity::Flag),
    ("no-check-names", OptionArity::Flag),
    ("inet6", OptionArity::Flag),
    ("ip6-bytestring", OptionArity::Flag),
    ("ip6-dotint", OptionArity::Flag),
    ("no-ip6-dotint", OptionArity::Flag),
    ("edns0", OptionArity::Flag),
    ("single-request", OptionArity::Flag),
    ("single-request-reopen", OptionArity::Flag),
    ("no-tld-query", OptionArity::Flag),
    ("use-vc", OptionArity::Flag),
    ("ndots", OptionArity::Valued),
    ("timeout", OptionArity::Valued),
    ("attempts", OptionArity::Valued),
];

/// Value stored by [`ResolvOption::new`] until [`ResolvOption::set`] is called.
pub const UNSET: i32 = -1;

/// Looks up the arity of an option type, or `None` if the tag is unknown.
#[must_use]
pub fn arity(kind: &str) -> Option<OptionArity> {
    VOCABULARY
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|&(_, arity)| arity)
}

/// Decodes a canonical option token into its type tag and optional value.
///
/// ```
/// use resolvconf::option::parse_option;
///
/// assert_eq!(parse_option("rotate").unwrap(), ("rotate".to_string(), None));
/// assert_eq!(parse_option("ndots:5").unwrap(), ("ndots".to_string(), Some(5)));
/// assert!(parse_option("bogus").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ResolvConfError::UnknownOption`] if the tag is not recognized,
/// if a flag carries a value, if a valued option is missing one, or if the
/// value is not an integer.
pub fn parse_option(token: &str) -> Result<(String, Option<i32>)> {
    let unknown = || ResolvConfError::UnknownOption(token.to_string());

    match token.split_once(':') {
        Some((kind, value)) => match arity(kind) {
            Some(OptionArity::Valued) => {
                let value = value.parse().map_err(|_| unknown())?;
                Ok((kind.to_string(), Some(value)))
            }
            _ => Err(unknown()),
        },
        None => match arity(token) {
            Some(OptionArity::Flag) => Ok((token.to_string(), None)),
            _ => Err(unknown()),
        },
    }
}

/// A single entry of the `options` directive.
///
/// Two options are the same entry when their types match; the value does not
/// take part in that comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvOption {
    /// Type tag, one of [`VOCABULARY`].
    pub kind: String,
    /// Integer value, meaningful only for [`OptionArity::Valued`] types.
    pub value: i32,
}

impl ResolvOption {
    /// Creates an option of the given type with its value [`UNSET`].
    ///
    /// Give valued options a value with [`set`](Self::set) before adding
    /// them. An unset `ndots` is rejected by a configuration; an unset
    /// `timeout` or `attempts` is accepted and renders as `timeout:-1`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolvConfError::UnknownOption`] if `kind` is not a
    /// recognized option type.
    pub fn new(kind: impl Into<String>) -> Result<Self> {
        Self::valued(kind, UNSET)
    }

    /// Creates an option of the given type holding `value` as-is.
    ///
    /// The value is not range-checked here; a negative `ndots` is rejected
    /// when the option is added to a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolvConfError::UnknownOption`] if `kind` is not a
    /// recognized option type.
    pub fn valued(kind: impl Into<String>, value: i32) -> Result<Self> {
        let opt = Self {
            kind: kind.into(),
            value,
        };
        match parse_option(&opt.to_string()) {
            Ok(_) => Ok(opt),
            Err(_) => Err(ResolvConfError::UnknownOption(opt.kind)),
        }
    }

    /// Returns the stored value.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.value
    }

    /// Sets the value. Negative values are ignored.
    pub const fn set(&mut self, value: i32) -> &mut Self {
        if value >= 0 {
            self.value = value;
        }
        self
    }

    /// Returns the arity of this option's type, or `None` if unrecognized.
    #[must_use]
    pub fn arity(&self) -> Option<OptionArity> {
        arity(&self.kind)
    }

    /// Checks the option's own constraints, independent of any configuration.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.kind == "ndots" && self.value < 0 {
            return Err(ResolvConfError::InvalidValue {
                option: self.kind.clone(),
                value: self.value,
            });
        }
        parse_option(&self.to_string())
            .map(drop)
            .map_err(|_| ResolvConfError::UnknownOption(self.kind.clone()))
    }
}

impl fmt::Display for ResolvOption {
    /// Renders the canonical token. Unrecognized types render as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity() {
            Some(OptionArity::Flag) => f.write_str(&self.kind),
            Some(OptionArity::Valued) => write!(f, "{}:{}", self.kind, self.value),
            None => Ok(()),
        }
    }
}
