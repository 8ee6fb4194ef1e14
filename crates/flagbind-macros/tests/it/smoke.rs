#![allow(unused)]

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct Empty;

#[derive(Debug, Default, flagbind::Reflect)]
pub struct NotParsable {
    #[flag("-f")]
    pub field: bool,
}

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
pub struct Unmarked {
    pub field1: bool,
    pub field2: i32,
    pub field3: f32,
    pub field4: String,
}

/// Knobs of a build.
#[derive(Debug, Default, PartialEq, flagbind::Reflect)]
#[parsable]
pub struct Build {
    /// Print more.
    #[flag("-v")]
    #[flag("--verbose")]
    pub verbose: bool,
    #[option("-j")]
    #[option("--jobs", ty = integer)]
    pub jobs: u32,
    #[option("--target")]
    pub target: String,
    #[option("--ratio", ty = float)]
    pub ratio: f64,
    #[option("--lto", ty = bool)]
    pub lto: bool,
    pub(crate) features: Vec<String>,
}

#[derive(Debug, Default, PartialEq, flagbind::Reflect)]
#[parsable]
pub struct Aliases {
    #[flag("-f")]
    #[flag("-f2")]
    pub field: bool,
    #[option("-o")]
    #[option("-o2")]
    pub option: i32,
}
