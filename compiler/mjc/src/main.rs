//! MiniJ front-end CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use mjc::commands::{explain_error, lex_file};
use mjc::{Driver, DriverConfig};

fn main() {
    mjc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("mjc {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mjc explain <ERROR_CODE>");
                eprintln!("Example: mjc explain E1001");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        "lex" => {
            let (config, paths) = configure(&args[2..]);
            let [path] = paths.as_slice() else {
                eprintln!("Usage: mjc lex <file> [--dialect=mini|extended]");
                std::process::exit(1);
            };
            let mut stdout = io::stdout().lock();
            match lex_file(Path::new(path), config.dialect, &mut stdout) {
                Ok(0) => {}
                Ok(_) => std::process::exit(1),
                Err(e) => fail(&e),
            }
        }
        "check" => check(&args[2..]),
        _ => check(&args[1..]),
    }
}

/// Check a file or a test directory; exit 1 on a rejected file or a
/// mismatch.
fn check(args: &[String]) {
    let (config, paths) = configure(args);
    let [path] = paths.as_slice() else {
        eprintln!("Usage: mjc [check] <file|directory> [options]");
        eprintln!();
        eprintln!("Run `mjc help` for the list of options.");
        std::process::exit(1);
    };

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut driver = Driver::new(config, stdout.lock()).with_tty(is_tty);
    match driver.run(Path::new(path)) {
        Ok(summary) if summary.passed() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => fail(&e),
    }
}

/// Build the configuration from `MJC_DIALECT` and `args`, exiting on a bad
/// option.
fn configure(args: &[String]) -> (DriverConfig, Vec<String>) {
    let parsed = DriverConfig::from_env().and_then(|mut config| {
        let paths: Vec<String> = config
            .apply_args(args)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok((config, paths))
    });
    parsed.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("MiniJ front end: lexical and syntactic checks");
    println!();
    println!("Usage: mjc [check] <file|directory> [options]");
    println!("       mjc <command> [args]");
    println!();
    println!("Commands:");
    println!("  check <path>        Check a file, or every file of a test directory");
    println!("  lex <file>          Print the token stream of a file");
    println!("  explain <code>      Explain an error code (e.g., E1001)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --dialect=<name>    Grammar: mini (default), extended");
    println!("  --mini, --extended  Shorthand for --dialect");
    println!("  -v, --verbose       Print diagnostics for mismatched directory files");
    println!("  --color=<mode>      Color: auto (default), always, never");
    println!();
    println!("Directory runs expect files whose name contains 'fail' to be rejected");
    println!("and every other file to be accepted.");
    println!();
    println!("Environment:");
    println!("  MJC_DIALECT         Default dialect when no option is given");
    println!("  RUST_LOG            Enable tracing, e.g. RUST_LOG=mj_parse=debug");
    println!("  MJC_LOG_TREE        Render tracing output as an indented tree");
}
