//! Member metadata of a target type.
//!
//! This is what `#[derive(Reflect)]` writes out: the type's name, whether it
//! is parsable, and one [`Member`] per marked field, each owning the setter
//! that writes into that field.
use std::{any::type_name, fmt};

use crate::{Bindable, Error, FlagMarker, OptionMarker, Result, ValueKind};

/// Types that can describe their bindable members.
///
/// Usually derived:
///
/// ```
/// #[derive(Default, flagbind::Reflect)]
/// #[parsable]
/// struct Opts {
///     #[flag("-q")]
///     quiet: bool,
///     #[option("--level", ty = integer)]
///     level: u8,
/// }
/// ```
pub trait Reflect: Sized {
    fn reflect() -> Result<TypeInfo<Self>>;
}

/// Declared members of `T` together with the Parsable marker.
pub struct TypeInfo<T> {
    name: &'static str,
    parsable: bool,
    members: Vec<Member<T>>,
}

impl<T> TypeInfo<T> {
    pub fn new(name: &'static str) -> TypeInfo<T> {
        TypeInfo { name, parsable: false, members: Vec::new() }
    }

    /// Sets the Parsable marker. Parsing a type without it always fails.
    pub fn parsable(mut self) -> TypeInfo<T> {
        self.parsable = true;
        self
    }

    pub fn member(mut self, member: Member<T>) -> TypeInfo<T> {
        self.members.push(member);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_parsable(&self) -> bool {
        self.parsable
    }

    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    pub(crate) fn into_members(self) -> Vec<Member<T>> {
        self.members
    }
}

impl<T> fmt::Debug for TypeInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("parsable", &self.parsable)
            .field("members", &self.members)
            .finish()
    }
}

type Setter<T> = Box<dyn Fn(&mut T, Option<&str>) -> Result<(), String> + Send + Sync>;

/// A bindable member: its markers and the setter writing into it.
pub struct Member<T> {
    name: &'static str,
    ty: &'static str,
    kind: ValueKind,
    flags: Vec<FlagMarker>,
    options: Vec<OptionMarker>,
    set: Setter<T>,
}

impl<T: 'static> Member<T> {
    /// A member stored in a field of `T`.
    pub fn field<V, F>(name: &'static str, access: F) -> Member<T>
    where
        V: Bindable + 'static,
        F: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        Member::property(name, move |target: &mut T, value: V| *access(target) = value)
    }

    /// A member written through a setter function.
    pub fn property<V, F>(name: &'static str, write: F) -> Member<T>
    where
        V: Bindable + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let set = move |target: &mut T, raw: Option<&str>| -> Result<(), String> {
            let value = match raw {
                Some(raw) => V::coerce(raw)?,
                None => V::switch_on()
                    .ok_or_else(|| format!("`{}` can't be a switch", type_name::<V>()))?,
            };
            write(target, value);
            Ok(())
        };
        Member {
            name,
            ty: type_name::<V>(),
            kind: V::KIND,
            flags: Vec::new(),
            options: Vec::new(),
            set: Box::new(set),
        }
    }
}

impl<T> Member<T> {
    pub fn flag(mut self, marker: FlagMarker) -> Member<T> {
        self.flags.push(marker);
        self
    }

    pub fn option(mut self, marker: OptionMarker) -> Member<T> {
        self.options.push(marker);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rust type of the member, as reported by `std::any::type_name`.
    pub fn ty(&self) -> &'static str {
        self.ty
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn flags(&self) -> &[FlagMarker] {
        &self.flags
    }

    pub fn options(&self) -> &[OptionMarker] {
        &self.options
    }

    pub(crate) fn switch(&self, target: &mut T) -> Result<()> {
        (self.set)(target, None).map_err(|msg| Error::TypeMismatch { member: self.name, msg })
    }

    pub(crate) fn assign(&self, target: &mut T, token: &str, raw: &str) -> Result<()> {
        (self.set)(target, Some(raw)).map_err(|reason| Error::TypeCoercion {
            name: token.to_string(),
            value: raw.to_string(),
            reason,
        })
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
