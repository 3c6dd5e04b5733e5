//! Verdant CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use verdant::cli::args::VerdantArgs;
use verdant::cli::commands::execute_command;

fn main() {
    let args = VerdantArgs::parse();

    // RUST_LOG, when set, overrides the level picked by -v/-q.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("verdant: {e}");
        process::exit(1);
    }
}
