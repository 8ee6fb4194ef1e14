use std::fmt;

/// The declared value kind of a bindable member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Integer,
    Float,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A type a flag or an option can be written into.
///
/// The set is closed over the primitive kinds of [`ValueKind`]: declaring a
/// member of any other type does not compile.
///
/// ```compile_fail
/// #[derive(Default, flagbind::Reflect)]
/// #[parsable]
/// struct Opts {
///     #[flag("-p")]
///     pair: Vec<u8>,
/// }
/// ```
///
/// Nor can the set be extended from outside:
///
/// ```compile_fail
/// struct Pair(Vec<u8>);
///
/// impl flagbind::Bindable for Pair {
///     const KIND: flagbind::ValueKind = flagbind::ValueKind::Bool;
///
///     fn coerce(_raw: &str) -> Result<Pair, String> {
///         Ok(Pair(Vec::new()))
///     }
/// }
/// ```
pub trait Bindable: sealed::Sealed + Sized {
    const KIND: ValueKind;

    /// Converts the raw value token.
    fn coerce(raw: &str) -> Result<Self, String>;

    /// The value a bare switch writes, if this type can be a switch.
    fn switch_on() -> Option<Self> {
        None
    }
}

mod sealed {
    pub trait Sealed {}
}

impl sealed::Sealed for bool {}
impl Bindable for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn coerce(raw: &str) -> Result<bool, String> {
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("expected `true` or `false`, got `{raw}`"))
        }
    }

    fn switch_on() -> Option<bool> {
        Some(true)
    }
}

impl sealed::Sealed for String {}
impl Bindable for String {
    const KIND: ValueKind = ValueKind::Text;

    fn coerce(raw: &str) -> Result<String, String> {
        Ok(raw.to_string())
    }
}

macro_rules! from_str {
    ($kind:ident: $($ty:ident)*) => {$(
        impl sealed::Sealed for $ty {}
        impl Bindable for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn coerce(raw: &str) -> Result<$ty, String> {
                raw.parse::<$ty>().map_err(|err| err.to_string())
            }
        }
    )*};
}

from_str!(Integer: i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
from_str!(Float: f32 f64);
