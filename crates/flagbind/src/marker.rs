//! Flag and option markers.
//!
//! The Parsable marker has no value of its own: it is the
//! [`TypeInfo::parsable`](crate::TypeInfo::parsable) bit.
use crate::{Error, Result, ValueKind};

/// Marks a `bool` member as a switch. A member can carry several, one per
/// alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMarker {
    name: String,
}

impl FlagMarker {
    pub fn new(name: impl Into<String>) -> Result<FlagMarker> {
        Ok(FlagMarker { name: non_empty(name.into())? })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Marks a member as an option taking the next token as its value.
///
/// The accepted type is the member's own; a kind given here must agree with
/// it and with the other aliases of the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMarker {
    name: String,
    kind: Option<ValueKind>,
}

impl OptionMarker {
    pub fn new(name: impl Into<String>) -> Result<OptionMarker> {
        Ok(OptionMarker { name: non_empty(name.into())?, kind: None })
    }

    pub fn typed(name: impl Into<String>, kind: ValueKind) -> Result<OptionMarker> {
        Ok(OptionMarker { name: non_empty(name.into())?, kind: Some(kind) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}

fn non_empty(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidName);
    }
    Ok(name)
}
