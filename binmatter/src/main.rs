//! Command-line tool for checking and inspecting front-matter documents.
//!
//! Usage: matter [OPTIONS] [FILE]
//!
//! Options:
//!   --check            Parse only; exit 0 if the document is valid, 1 if not
//!   --tokens           Print the raw token stream instead of parsing
//!   -h, --help         Print help
//!   -V, --version      Print version
//!
//! With no FILE, or when FILE is `-`, reads from standard input.

use libmatter::{Tokenizer, Value};
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut check_only = false;
    let mut dump_tokens = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("matter {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--check" => {
                check_only = true;
            }
            "--tokens" => {
                dump_tokens = true;
            }
            "-" => {
                // Explicit stdin; input_path stays None
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(2);
            }
            arg => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input files not supported");
                    process::exit(2);
                }
                input_path = Some(arg);
            }
        }
        i += 1;
    }

    let source = match read_input(input_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if dump_tokens {
        for token in Tokenizer::new(&source) {
            println!("{:?}", token);
        }
        return;
    }

    match libmatter::parse(&source) {
        Ok(entries) => {
            if !check_only {
                for entry in &entries {
                    print_value(entry, 0);
                }
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

/// Read the whole input, from a file or from stdin.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Render one entry back in document form.
fn print_value(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Scalar { key, value } => println!("{}{}: {}", pad, key, value),
        Value::Sequence { key, items } => {
            println!("{}{}:", pad, key);
            for item in items {
                println!("{}  - {}", pad, item);
            }
        }
        Value::Mapping(fields) => {
            for (key, field) in fields {
                match field {
                    Value::Scalar { .. } | Value::Sequence { .. } => print_value(field, depth),
                    Value::Mapping(_) => {
                        println!("{}{}:", pad, key);
                        print_value(field, depth + 1);
                    }
                }
            }
        }
    }
}

fn print_help() {
    println!("Usage: matter [OPTIONS] [FILE]");
    println!();
    println!("Parse a front-matter document and print its entries.");
    println!("With no FILE, or when FILE is -, reads standard input.");
    println!();
    println!("Options:");
    println!("  --check        Parse only; exit 0 if valid, 1 if not");
    println!("  --tokens       Print the raw token stream instead of parsing");
    println!("  -h, --help     Print help");
    println!("  -V, --version  Print version");
}
