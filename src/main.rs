// hlslparse: parse HLSL files and dump their syntax trees

use std::process::ExitCode;

use hlslparse::{parse_with_logger, print_ast, Logger, SourceCode, StdLogger};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("hlslparse");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {program_name} <file.hlsl> [...]");
        return ExitCode::FAILURE;
    }

    let mut log = StdLogger::new();
    let mut failed = false;

    for path in &args[1..] {
        let source = match SourceCode::from_file(path) {
            Ok(source) => source,
            Err(err) => {
                log.error(&format!("{path}: {err}"));
                failed = true;
                continue;
            }
        };

        match parse_with_logger(&source, &mut log) {
            Some(program) => print_ast(&program, &mut log),
            None => failed = true,
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
