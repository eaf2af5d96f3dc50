#![warn(clippy::all, rust_2018_idioms)]

use dupfind::report::{DEMO_INPUT, write_report};

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &DEMO_INPUT)?;
    Ok(())
}
