//! Lexa CLI
//!
//! Configurable lexical analysis from the command line.

use lexa_diagnostic::ColorMode;
use lexac::commands::{dump_symbols, dump_tokens, run_scan, ScanOptions};

fn main() {
    lexac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "scan" => {
            if args.len() < 3 {
                eprintln!("Usage: lexa scan <file> [--json] [--color=<mode>]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --json              Machine-readable JSON report");
                eprintln!("  --color=<mode>      Color output: auto (default), always, never");
                std::process::exit(1);
            }

            let mut options = ScanOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--json" {
                    options.json = true;
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    let Some(mode) = ColorMode::parse(value) else {
                        eprintln!(
                            "error: unknown color mode '{value}' (expected auto, always or never)"
                        );
                        std::process::exit(1);
                    };
                    options.color = mode;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: lexa scan <file> [--json] [--color=<mode>]");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lexa scan <file> [--json] [--color=<mode>]");
                std::process::exit(1);
            };

            run_scan(path, &options);
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: lexa tokens <file>");
                std::process::exit(1);
            }
            dump_tokens(&args[2]);
        }
        "symbols" => {
            if args.len() < 3 {
                eprintln!("Usage: lexa symbols <file>");
                std::process::exit(1);
            }
            dump_symbols(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Lexa {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lexa (configurable lexical analysis)");
    println!();
    println!("Usage: lexa <command> [options]");
    println!();
    println!("Commands:");
    println!("  scan <file>          Scan, validate brackets and print a report");
    println!("  tokens <file>        Tokenize and display tokens");
    println!("  symbols <file>       Display the interned symbol table");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Scan options:");
    println!("  --json               Machine-readable JSON report");
    println!("  --color=<mode>       Color output: auto (default), always, never");
    println!();
    println!("Examples:");
    println!("  lexa scan demo.src");
    println!("  lexa scan demo.src --json");
    println!("  lexa tokens demo.src");
    println!("  RUST_LOG=lexac=debug lexa scan demo.src");
}
