mod smoke;
mod structural;

use std::fmt;

use expect_test::{expect, Expect};

fn check<A>(args: &str, expect: Expect)
where
    A: flagbind::Reflect + Default + fmt::Debug,
{
    let res = flagbind::parse::<A, _, _>(args.split_ascii_whitespace());
    match res {
        Ok(args) => {
            expect.assert_debug_eq(&args);
        }
        Err(err) => {
            expect.assert_eq(&err.to_string());
        }
    }
}

#[test]
fn empty() {
    check::<smoke::Empty>(
        "",
        expect![[r#"
            Empty
        "#]],
    );
    check::<smoke::Empty>("-f", expect!["Unknown flag: `-f`"]);
}

#[test]
fn not_parsable() {
    check::<smoke::NotParsable>("", expect!["`NotParsable` is not marked as parsable"]);
    check::<smoke::NotParsable>("-f", expect!["`NotParsable` is not marked as parsable"]);
}

#[test]
fn unmarked_fields_keep_defaults() {
    check::<smoke::Unmarked>(
        "",
        expect![[r#"
            Unmarked {
                field1: false,
                field2: 0,
                field3: 0.0,
                field4: "",
            }
        "#]],
    );
    check::<smoke::Unmarked>("field1", expect!["Unknown flag: `field1`"]);
}

#[test]
fn smoke() {
    check::<smoke::Build>(
        "",
        expect![[r#"
            Build {
                verbose: false,
                jobs: 0,
                target: "",
                ratio: 0.0,
                lto: false,
                features: [],
            }
        "#]],
    );
    check::<smoke::Build>(
        "--verbose -j 8 --target wasm32 --ratio 0.5 --lto False --jobs 16",
        expect![[r#"
            Build {
                verbose: true,
                jobs: 16,
                target: "wasm32",
                ratio: 0.5,
                lto: false,
                features: [],
            }
        "#]],
    );
    check::<smoke::Build>(
        "-v --lto TRUE --ratio 2",
        expect![[r#"
            Build {
                verbose: true,
                jobs: 0,
                target: "",
                ratio: 2.0,
                lto: true,
                features: [],
            }
        "#]],
    );

    check::<smoke::Build>("-v --werbose", expect!["Unknown flag: `--werbose`"]);
    check::<smoke::Build>("-j lol", expect!["Can't parse `-j`, invalid digit found in string"]);
    check::<smoke::Build>("-j -1", expect!["Can't parse `-j`, invalid digit found in string"]);
    check::<smoke::Build>(
        "--lto 1",
        expect!["Can't parse `--lto`, expected `true` or `false`, got `1`"],
    );
    check::<smoke::Build>(
        "--jobs",
        expect!["Can't parse `--jobs`, cannot parse integer from empty string"],
    );
}

#[test]
fn aliases() {
    for args in [["-f", "-o", "10"], ["-f2", "-o2", "10"], ["-f", "-o2", "10"]] {
        let res = flagbind::parse::<smoke::Aliases, _, _>(args).unwrap();
        assert_eq!(res, smoke::Aliases { field: true, option: 10 });
    }
}

#[test]
fn repeated_parses_agree() {
    let parser = flagbind::Parser::new(["-v", "-j", "3", "--target", "x86_64"]);
    let first = parser.parse::<smoke::Build>().unwrap();
    let second = flagbind::Parser::new(parser.tokens().to_vec()).parse::<smoke::Build>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn structural_errors_precede_scanning() {
    use structural::*;

    check::<FlagAndOption>("", expect!["`field` can't be both a flag and an option"]);
    check::<FlagAndOption>("-f", expect!["`field` can't be both a flag and an option"]);
    check::<RepeatedFlag>("", expect!["`field` declares `-f` more than once"]);
    check::<RepeatedOption>("", expect!["`field` declares `-o` more than once"]);
    check::<IntegerFlag>("-f", expect!["`field`: a flag must be `bool`, found `i32`"]);
    check::<DisagreeingOptions>(
        "-o 1",
        expect!["`field`: options disagree on type, `-o` is integer but `-o2` is text"],
    );
    check::<MistypedOption>("", expect!["`field`: option `-o` is text, found `i32`"]);
    check::<SharedFlag>("", expect!["`-f` is declared by both `field1` and `field2`"]);
    check::<SharedOption>("-o 1", expect!["`-o` is declared by both `field1` and `field2`"]);
    check::<FlagShadowsOption>("", expect!["`-x` is declared by both `field1` and `field2`"]);
    check::<UntouchedDefect>("-ok", expect!["`bad` can't be both a flag and an option"]);
}

#[test]
fn structural_errors_are_typed() {
    let err = flagbind::parse::<structural::SharedOption, _, _>(Vec::<String>::new()).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(
        err,
        flagbind::Error::DuplicateGlobalName {
            name: "-o".to_string(),
            first: "field1",
            second: "field2",
        }
    );

    let err = flagbind::parse::<smoke::Build, _, _>(["--nope"]).unwrap_err();
    assert!(!err.is_structural());
    assert!(matches!(err, flagbind::Error::UnknownToken { token } if token == "--nope"));
}

#[test]
fn reflected_metadata() {
    use flagbind::{Reflect, ValueKind};

    let info = smoke::Build::reflect().unwrap();
    assert_eq!(info.name(), "Build");
    assert!(info.is_parsable());
    let members = info.members().iter().map(|it| (it.name(), it.kind())).collect::<Vec<_>>();
    assert_eq!(
        members,
        vec![
            ("verbose", ValueKind::Bool),
            ("jobs", ValueKind::Integer),
            ("target", ValueKind::Text),
            ("ratio", ValueKind::Float),
            ("lto", ValueKind::Bool),
        ]
    );

    let registry = flagbind::Registry::<smoke::Build>::new().unwrap();
    assert_eq!(
        registry.names(),
        vec!["--jobs", "--lto", "--ratio", "--target", "--verbose", "-j", "-v"]
    );
    assert_eq!(registry.binding("-v"), Some(flagbind::Binding::Switch));
    assert_eq!(registry.binding("--lto"), Some(flagbind::Binding::Value(ValueKind::Bool)));
}
