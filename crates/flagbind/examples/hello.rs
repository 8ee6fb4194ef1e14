//! `RUST_LOG=trace cargo run --example hello -- --name Ferris -n 3 --shout`

#[derive(Debug, Default, flagbind::Reflect)]
#[parsable]
struct Hello {
    #[option("--name")]
    name: String,
    #[option("-n")]
    #[option("--times")]
    times: u8,
    #[flag("-s")]
    #[flag("--shout")]
    shout: bool,
}

fn main() {
    env_logger::init();

    let flags = match flagbind::Parser::new_from_env().and_then(|p| p.parse::<Hello>()) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1)
        }
    };

    let name = if flags.name.is_empty() { "world" } else { flags.name.as_str() };
    for _ in 0..flags.times.max(1) {
        let greeting = format!("Hello, {name}!");
        if flags.shout {
            println!("{}", greeting.to_uppercase());
        } else {
            println!("{greeting}");
        }
    }
}
