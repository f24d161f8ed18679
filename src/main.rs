use std::env;
use std::process::ExitCode;

use chess_rules::board::Color;
use chess_rules::console::run_console_loop;
use chess_rules::session::SessionConfig;

fn main() -> ExitCode {
    let mut config = SessionConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--black" => config = config.human(Color::Black),
            "--fen" => match args.next() {
                Some(fen) => config = config.start_fen(fen),
                None => {
                    eprintln!("usage: chess_rules [--black] [--fen <fen>]");
                    return ExitCode::FAILURE;
                }
            },
            other => {
                eprintln!("unknown argument '{other}'");
                eprintln!("usage: chess_rules [--black] [--fen <fen>]");
                return ExitCode::FAILURE;
            }
        }
    }

    match run_console_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
