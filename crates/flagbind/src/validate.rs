use std::collections::HashSet;

use crate::{Error, Member, Result, ValueKind};

/// Checks each member on its own. Runs over every member before the
/// registry is filled, so a bad declaration fails even a parse that would
/// never touch it.
pub(crate) fn members<T>(members: &[Member<T>]) -> Result<()> {
    members.iter().try_for_each(member)
}

fn member<T>(member: &Member<T>) -> Result<()> {
    let flags = member.flags();
    let options = member.options();

    if !flags.is_empty() && !options.is_empty() {
        return Err(Error::ConflictingMarkers { member: member.name() });
    }

    if !flags.is_empty() {
        distinct(member.name(), flags.iter().map(|it| it.name()))?;
        if member.kind() != ValueKind::Bool {
            return Err(Error::TypeMismatch {
                member: member.name(),
                msg: format!("a flag must be `bool`, found `{}`", member.ty()),
            });
        }
    } else if !options.is_empty() {
        distinct(member.name(), options.iter().map(|it| it.name()))?;
        let mut declared = options.iter().filter_map(|it| it.kind().map(|kind| (it.name(), kind)));
        if let Some((name, kind)) = declared.next() {
            if let Some((other, other_kind)) = declared.find(|&(_, it)| it != kind) {
                return Err(Error::TypeMismatch {
                    member: member.name(),
                    msg: format!(
                        "options disagree on type, `{name}` is {kind} but `{other}` is {other_kind}"
                    ),
                });
            }
            if kind != member.kind() {
                return Err(Error::TypeMismatch {
                    member: member.name(),
                    msg: format!("option `{name}` is {kind}, found `{}`", member.ty()),
                });
            }
        }
    }
    Ok(())
}

fn distinct<'a>(member: &'static str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::DuplicateAlias { member, name: name.to_string() });
        }
    }
    Ok(())
}
