#[derive(Debug)]
pub(crate) struct Target {
    pub(crate) name: String,
    pub(crate) parsable: bool,
    pub(crate) fields: Vec<Field>,
}

impl Target {
    pub(crate) fn marked_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|it| !it.markers.is_empty())
    }
}

#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) markers: Vec<Marker>,
}

#[derive(Debug)]
pub(crate) enum Marker {
    Flag { name: String },
    Option { name: String, kind: Option<Kind> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Bool,
    Integer,
    Float,
    Text,
}
