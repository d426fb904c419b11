//! Verba CLI binary.

use clap::Parser;
use std::process;
use verba::cli::{VerbaArgs, execute_command};

fn main() {
    let args = VerbaArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
