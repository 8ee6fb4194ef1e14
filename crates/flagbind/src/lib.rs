//! Bind command line flags and options onto a plain struct.
//!
//! A target type lists its switches and valued options as field attributes,
//! and the parser fills a fresh `Default` instance from a token sequence:
//!
//! ```
//! #[derive(Debug, Default, flagbind::Reflect)]
//! #[parsable]
//! struct Opts {
//!     #[flag("-v")]
//!     #[flag("--verbose")]
//!     verbose: bool,
//!     #[option("-j")]
//!     jobs: u32,
//!     #[option("--name")]
//!     name: String,
//! }
//!
//! let opts: Opts = flagbind::parse(["--verbose", "-j", "4"]).unwrap();
//! assert!(opts.verbose);
//! assert_eq!(opts.jobs, 4);
//! assert_eq!(opts.name, "");
//! ```
//!
//! Declarations are checked as a whole before a single token is read: a
//! member marked both as a flag and as an option, a repeated alias, a
//! non-`bool` flag, or a name claimed by two members fails every parse,
//! including the empty one.
//!
//! Without the derive, the same schema can be spelled out with [`TypeInfo`]
//! and [`Member`].

#[cfg(feature = "derive")]
pub use flagbind_macros::Reflect;

pub use crate::{
    kind::{Bindable, ValueKind},
    marker::{FlagMarker, OptionMarker},
    registry::{Binding, Registry},
    rt::Parser,
    schema::{Member, Reflect, TypeInfo},
};

mod kind;
mod marker;
mod registry;
mod schema;
mod validate;

pub mod rt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("marker name can't be empty")]
    InvalidName,

    #[error("`{ty}` is not marked as parsable")]
    NotParsable { ty: &'static str },

    #[error("`{member}` can't be both a flag and an option")]
    ConflictingMarkers { member: &'static str },

    #[error("`{member}` declares `{name}` more than once")]
    DuplicateAlias { member: &'static str, name: String },

    #[error("`{member}`: {msg}")]
    TypeMismatch { member: &'static str, msg: String },

    #[error("`{name}` is declared by both `{first}` and `{second}`")]
    DuplicateGlobalName { name: String, first: &'static str, second: &'static str },

    #[error("Unknown flag: `{token}`")]
    UnknownToken { token: String },

    #[error("Can't parse `{name}`, {reason}")]
    TypeCoercion { name: String, value: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Whether the error comes from the target's declarations rather than
    /// from the tokens.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::ConflictingMarkers { .. }
                | Error::DuplicateAlias { .. }
                | Error::TypeMismatch { .. }
                | Error::DuplicateGlobalName { .. }
        )
    }
}

/// Parses `tokens` into a fresh `T`.
///
/// Shorthand for `Parser::new(tokens).parse::<T>()`.
pub fn parse<T, I, S>(tokens: I) -> Result<T>
where
    T: Reflect + Default,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(tokens).parse()
}
