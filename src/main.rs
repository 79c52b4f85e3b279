use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use frontend::{display_error, init_tracing, lexer::lexer::tokenize, parser::parser::parse, tree::lower::lower_program};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map(String::as_str).unwrap_or("frontend"));
        return ExitCode::from(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path.display(), err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (program, diagnostics) = parse(tokens, Rc::new(file_name.clone()));

    info!("Parsed in {:?}", parse_start.elapsed());

    for root in lower_program(&program) {
        print!("{}", root.dump());
        println!("---=====---");
    }

    for error in &diagnostics {
        display_error(error, &source, &file_name);
    }

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
