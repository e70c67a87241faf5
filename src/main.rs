use std::process::ExitCode;

use cmb_fnl::output::{format_report, to_json_pretty, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = match cmb_fnl::run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match OutputFormat::from_env_or(OutputFormat::Terminal) {
        OutputFormat::Terminal => print!("{}", format_report(&report)),
        OutputFormat::Json => match to_json_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
