use std::process::ExitCode;

use icon_pad::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use icon_pad::{adjust, PadConfig};
use log::debug;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match adjust(DEFAULT_INPUT, DEFAULT_OUTPUT, &PadConfig::default()) {
        Ok(outcome) => {
            println!("Icon fixed: {}", DEFAULT_OUTPUT);
            println!("Original bounding box: {}", outcome.bounds);
            println!(
                "New size: {}x{} with {}px margins",
                outcome.canvas_size, outcome.canvas_size, outcome.margin
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
