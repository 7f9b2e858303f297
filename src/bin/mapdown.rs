//! Command-line interface for mapdown
//! This binary parses structured text documents into node forests and back,
//! for inspection and for canonical formatting.
//!
//! Usage:
//!   mapdown inspect `<path>` [--format `<format>`]  - Parse and dump the node forest
//!   mapdown fmt `<path>`                          - Print the canonical serialization
//!   mapdown check `<path>`                        - Verify the round-trip fixpoint

use clap::{Arg, Command};
use mapdown::mapdown::ast::Forest;
use mapdown::mapdown::building::{parse, ParseOptions};
use mapdown::mapdown::formats::{serialize, treeviz};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = Command::new("mapdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting structured text documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Parse a document and dump the node forest")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('treeviz', 'json', 'yaml')")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("fmt")
                .about("Parse a document and print its canonical serialization")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Verify that a document serializes to a round-trip fixpoint")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_inspect(path, format);
        }
        Some(("fmt", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_fmt(path);
        }
        Some(("check", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_check(path);
        }
        _ => unreachable!(),
    }
}

fn handle_inspect(path: &str, format: &str) {
    let forest = load_forest(path);
    match format {
        "treeviz" => print!("{}", treeviz::render(&forest)),
        "json" => {
            let output = serde_json::to_string_pretty(&forest).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "yaml" => {
            let output = serde_yaml::to_string(&forest).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            print!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

fn handle_fmt(path: &str) {
    let forest = load_forest(path);
    print!("{}", serialize(&forest));
}

fn handle_check(path: &str) {
    let source = read_source(path);
    let first = serialize(&parse_source(&source));
    let second = serialize(&parse_source(&first));

    if first == second {
        println!("ok: {} round-trips to a fixpoint", path);
    } else {
        eprintln!("error: {} does not round-trip to a fixpoint", path);
        std::process::exit(1);
    }
}

fn load_forest(path: &str) -> Forest {
    let source = read_source(path);
    parse_source(&source)
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn parse_source(source: &str) -> Forest {
    parse(source, &ParseOptions::default()).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    })
}
