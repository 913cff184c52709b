//! KorvaqScrip CLI

use std::path::Path;
use std::process::ExitCode;

use kq_diagnostic::emitter::ColorMode;
use kqc::commands::{lex_file, parse_file, run_file, run_repl};

fn main() -> ExitCode {
    kqc::init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid --color value '{value}' (expected auto, always or never)");
                return ExitCode::FAILURE;
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        return run_repl(color);
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: kq run <file.kq>");
                return ExitCode::FAILURE;
            };
            run_file(path, color)
        }
        "repl" => run_repl(color),
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: kq lex <file.kq>");
                return ExitCode::FAILURE;
            };
            lex_file(path, color)
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: kq parse <file.kq>");
                return ExitCode::FAILURE;
            };
            parse_file(path, color)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("KorvaqScrip {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // If it looks like a source file, run it
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("kq"))
            {
                run_file(command, color)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("KorvaqScrip interpreter");
    println!();
    println!("Usage: kq [--color=auto|always|never] <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file.kq>     Run a program");
    println!("  repl              Start an interactive session (default)");
    println!("  lex <file.kq>     Tokenize and display tokens");
    println!("  parse <file.kq>   Parse and display statements");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  kq run main.kq");
    println!("  kq main.kq                 # same as `kq run main.kq`");
    println!("  RUST_LOG=kq_eval=debug kq main.kq");
}
