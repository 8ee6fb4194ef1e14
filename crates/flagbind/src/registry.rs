use std::collections::{hash_map::Entry, HashMap};

use crate::{validate, Error, Member, Reflect, Result, TypeInfo, ValueKind};

/// What a registered name does when it shows up in the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Writes `true`, takes no value.
    Switch,
    /// Consumes the next token as a value of this kind.
    Value(ValueKind),
}

/// Every flag and option name of a type, mapped to the member it writes.
///
/// Building one checks the whole declaration. The result is immutable and
/// can serve any number of parses, from any number of threads.
pub struct Registry<T> {
    ty: &'static str,
    members: Vec<Member<T>>,
    names: HashMap<String, (Binding, usize)>,
}

impl<T: Reflect> Registry<T> {
    pub fn new() -> Result<Registry<T>> {
        Registry::build(T::reflect()?)
    }
}

impl<T> Registry<T> {
    pub fn build(info: TypeInfo<T>) -> Result<Registry<T>> {
        if !info.is_parsable() {
            return Err(Error::NotParsable { ty: info.name() });
        }
        let ty = info.name();
        let members = info.into_members();
        validate::members(&members)?;

        let mut names: HashMap<String, (Binding, usize)> = HashMap::new();
        for (idx, member) in members.iter().enumerate() {
            let flags = member.flags().iter().map(|it| (it.name(), Binding::Switch));
            let options =
                member.options().iter().map(|it| (it.name(), Binding::Value(member.kind())));
            for (name, binding) in flags.chain(options) {
                match names.entry(name.to_string()) {
                    Entry::Occupied(it) => {
                        let (_, first) = *it.get();
                        return Err(Error::DuplicateGlobalName {
                            name: name.to_string(),
                            first: members[first].name(),
                            second: member.name(),
                        });
                    }
                    Entry::Vacant(it) => {
                        it.insert((binding, idx));
                    }
                }
            }
        }

        log::debug!("registered {} names for `{ty}`", names.len());
        Ok(Registry { ty, members, names })
    }

    /// Name of the target type.
    pub fn ty(&self) -> &'static str {
        self.ty
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn binding(&self, name: &str) -> Option<Binding> {
        self.names.get(name).map(|&(binding, _)| binding)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut res = self.names.keys().map(String::as_str).collect::<Vec<_>>();
        res.sort_unstable();
        res
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<(Binding, &Member<T>)> {
        self.names.get(name).map(|&(binding, idx)| (binding, &self.members[idx]))
    }
}
