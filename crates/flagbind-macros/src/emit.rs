use crate::ast;

use std::{env, fmt::Write};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

pub(crate) fn emit(target: &ast::Target) -> String {
    let mut buf = String::new();

    w!(buf, "impl flagbind::Reflect for {} {{\n", target.name);
    w!(buf, "    fn reflect() -> flagbind::Result<flagbind::TypeInfo<Self>> {{\n");
    w!(buf, "        let info = flagbind::TypeInfo::new(\"{}\")", target.name);
    if target.parsable {
        w!(buf, "\n            .parsable()");
    }
    for field in target.marked_fields() {
        emit_member(&mut buf, field);
    }
    w!(buf, ";\n");
    w!(buf, "        Ok(info)\n");
    w!(buf, "    }}\n");
    w!(buf, "}}\n");

    if env::var("FLAGBIND_EXPAND").is_ok() {
        eprintln!("{buf}");
    }

    buf
}

fn emit_member(buf: &mut String, field: &ast::Field) {
    w!(buf, "\n            .member(\n");
    w!(
        buf,
        "                flagbind::Member::field({:?}, |it: &mut Self| &mut it.{})",
        field.display_name(),
        field.name
    );
    for marker in &field.markers {
        w!(buf, "\n                    ");
        match marker {
            ast::Marker::Flag { name } => {
                w!(buf, ".flag(flagbind::FlagMarker::new({name:?})?)")
            }
            ast::Marker::Option { name, kind: None } => {
                w!(buf, ".option(flagbind::OptionMarker::new({name:?})?)")
            }
            ast::Marker::Option { name, kind: Some(kind) } => {
                w!(buf, ".option(flagbind::OptionMarker::typed({name:?}, {})?)", kind.path())
            }
        }
    }
    w!(buf, ",\n            )");
}

impl ast::Field {
    fn display_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }
}

impl ast::Kind {
    fn path(self) -> &'static str {
        match self {
            ast::Kind::Bool => "flagbind::ValueKind::Bool",
            ast::Kind::Integer => "flagbind::ValueKind::Integer",
            ast::Kind::Float => "flagbind::ValueKind::Float",
            ast::Kind::Text => "flagbind::ValueKind::Text",
        }
    }
}
