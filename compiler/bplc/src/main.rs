//! `bplc`: parse Boogie files and report their diagnostics.

use std::io::IsTerminal;
use std::process::ExitCode;

use bpl_diagnostic::TerminalEmitter;
use bplc::{parse_all, parse_args, report, Command, USAGE};

fn main() -> ExitCode {
    bplc::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Parse(options)) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let results = parse_all(&options);

    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let mut diagnostics = TerminalEmitter::with_color_mode(stderr.lock(), options.color, is_tty);
    let stdout = std::io::stdout();

    match report(&results, &options, &mut diagnostics, &mut stdout.lock()) {
        Ok(summary) if summary.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
