//! Reads a TOML file named on the command line and prints its canonical
//! JSON-shaped dump to stdout.

use std::env;
use std::process::ExitCode;

use tomletta::{to_canonical_json, DumpConfig};

fn main() -> ExitCode {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: dump <path-to-toml-file>");
            return ExitCode::FAILURE;
        }
    };

    match tomletta::read_file(&path) {
        Ok(root) => {
            println!("{}", to_canonical_json(&root, DumpConfig::default()));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
