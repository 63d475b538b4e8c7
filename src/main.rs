// Greeter - Colorized greeting utility
use std::process::ExitCode;

use greeter::cli::{execute, parse, ConsoleWriter};
use greeter::infrastructure::logging::init_logging;
use greeter::GreeterError;

fn main() -> ExitCode {
    let args = match parse(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => return report(e),
    };

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let mut writer = ConsoleWriter::stdio();
    match execute(&args, &mut writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(err: GreeterError) -> ExitCode {
    match &err {
        // clap picks stdout for help/version and stderr for usage errors
        GreeterError::Usage(e) => {
            if e.print().is_err() {
                eprintln!("{}", e);
            }
        }
        other => eprintln!("Error: {}", other),
    }
    ExitCode::from(err.exit_code())
}
