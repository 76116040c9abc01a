//! Command-line interface for infobox
//! This binary is used to inspect and convert infobox wiki sources into different formats.
//!
//! Usage:
//!   infobox parse `<path>` [--format `<format>`]  - Parse a file and print the result
//!   infobox check `<path>`                        - Parse only, report syntax errors
//!   infobox list-formats                          - List all available formats

use clap::{Arg, Command};

use infobox::wiki::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    let matches = Command::new("infobox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing infobox wiki sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the infobox source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'doc-json', 'lines-simple')")
                        .default_value("doc-json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a file, reporting syntax errors only")
                .arg(
                    Arg::new("path")
                        .help("Path to the infobox source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match infobox::wiki::parse(&source) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Syntax error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
