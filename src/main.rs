use std::{env, fs::read_to_string, process::exit, time::Instant};

use cclex::lexer::lexer::tokenize;
use log::debug;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cclex <source-file>");
        exit(1);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            exit(1);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);
    debug!(
        "tokenized {} ({} tokens) in {:?}",
        file_path,
        tokens.len(),
        start.elapsed()
    );

    for token in &tokens {
        println!("{}", token);
    }
}
