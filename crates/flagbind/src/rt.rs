//! The token binder.
use std::ffi::OsString;

use crate::{Binding, Error, Reflect, Registry, Result};

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error::InvalidArgument(format!($($tt)*))
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

/// An ordered sequence of tokens, ready to be bound onto a target type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    tokens: Vec<String>,
}

impl Parser {
    pub fn new<I, S>(tokens: I) -> Parser
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Parser { tokens: tokens.into_iter().map(Into::into).collect() }
    }

    /// Like [`Parser::new`], but an absent sequence is an error rather than
    /// an empty one.
    pub fn try_new<I, S>(tokens: Option<I>) -> Result<Parser>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match tokens {
            Some(tokens) => Ok(Parser::new(tokens)),
            None => bail!("token sequence can't be absent"),
        }
    }

    pub fn from_os_args(args: Vec<OsString>) -> Result<Parser> {
        let mut tokens = Vec::with_capacity(args.len());
        for arg in args {
            match arg.into_string() {
                Ok(it) => tokens.push(it),
                Err(it) => bail!("invalid utf8: {:?}", it),
            }
        }
        Ok(Parser { tokens })
    }

    /// Tokens of the current process, without the program name.
    pub fn new_from_env() -> Result<Parser> {
        let mut args = std::env::args_os();
        let _progn = args.next();
        Parser::from_os_args(args.collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Binds the tokens onto a fresh `T`.
    ///
    /// The declarations of `T` are checked in full first; then tokens are
    /// consumed left to right. The first bad token ends the parse, and the
    /// partly filled instance is dropped.
    pub fn parse<T: Reflect + Default>(&self) -> Result<T> {
        let registry = Registry::<T>::new()?;
        self.parse_with(&registry)
    }

    /// Same as [`Parser::parse`], with a registry built beforehand.
    pub fn parse_with<T: Default>(&self, registry: &Registry<T>) -> Result<T> {
        let mut res = T::default();
        let mut tokens = self.tokens.iter();
        while let Some(token) = tokens.next() {
            let (binding, member) = registry
                .lookup(token)
                .ok_or_else(|| Error::UnknownToken { token: token.clone() })?;
            match binding {
                Binding::Switch => {
                    log::trace!("`{token}` switches `{}`", member.name());
                    member.switch(&mut res)?;
                }
                Binding::Value(_) => {
                    let raw = tokens.next().map(String::as_str).unwrap_or_default();
                    log::trace!("`{token}` sets `{}` to {raw:?}", member.name());
                    member.assign(&mut res, token, raw)?;
                }
            }
        }
        Ok(res)
    }
}
