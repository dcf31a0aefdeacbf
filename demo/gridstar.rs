//! Console demo: find and print a path on a small occupancy grid.
//!
//! Run: cargo run --bin gridstar -- [MAP_FILE]
//! Set `RUST_LOG=debug` to see search statistics.

use clap::Parser;
use gridstar_demo::{Args, report};

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args
        .scenario()
        .and_then(|s| s.run().map(|path| report(&s, &path)))
    {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
