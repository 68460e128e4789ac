//! Sort a sequence of integers and print an annotated report.

use std::process::ExitCode;

use clap::Parser;
use sort_playground::config::{Config, OutputFormat, DEFAULT_SEQUENCE, EXIT_BAD_INPUT};
use sort_playground::input::parse_tokens;
use sort_playground::logging::init_logging;
use sort_playground::Report;
use tracing::info;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    let values = if config.values.is_empty() {
        DEFAULT_SEQUENCE.to_vec()
    } else {
        match parse_tokens(&config.values) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::from(EXIT_BAD_INPUT);
            }
        }
    };

    info!(sorter = ?config.sorter, len = values.len(), "sorting");
    let report = Report::build(config.sorter, values, config.summary);

    match config.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => match report.render_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
