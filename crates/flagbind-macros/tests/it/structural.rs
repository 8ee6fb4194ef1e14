#![allow(unused)]

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct FlagAndOption {
    #[flag("-f")]
    #[option("-o")]
    pub field: bool,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct RepeatedFlag {
    #[flag("-f")]
    #[flag("-f")]
    pub field: bool,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct RepeatedOption {
    #[option("-o")]
    #[option("-o")]
    pub field: bool,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct IntegerFlag {
    #[flag("-f")]
    pub field: i32,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct DisagreeingOptions {
    #[option("-o", ty = integer)]
    #[option("-o2", ty = text)]
    pub field: i32,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct MistypedOption {
    #[option("-o", ty = text)]
    pub field: i32,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct SharedFlag {
    #[flag("-f")]
    pub field1: bool,
    #[flag("-f")]
    pub field2: bool,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct SharedOption {
    #[option("-o")]
    pub field1: i32,
    #[option("-o")]
    pub field2: String,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct FlagShadowsOption {
    #[option("-x")]
    pub field1: String,
    #[flag("-y")]
    #[flag("-x")]
    pub field2: bool,
}

/// The bad member is never named in the tokens.
#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct UntouchedDefect {
    #[flag("-ok")]
    pub good: bool,
    #[flag("-bad")]
    #[option("-worse")]
    pub bad: String,
}
