//! Sprite Composer - command-line tool for slicing and naming sprite sheets

use std::process::ExitCode;

use sprite_composer::cli;

fn main() -> ExitCode {
    env_logger::init();
    cli::run()
}
