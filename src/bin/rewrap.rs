//! Command-line interface for rewrap
//! Reflows a file (or stdin) to a maximum column width and prints the result.
//!
//! Usage:
//!   rewrap [path] [--width <n>] [--tab-width <n>] [--spaced-tab-stop <n>]
//!          [--eol <lf|crlf|cr>] [--top <n>] [--bottom <n>] [--config <file>]
//!
//! When no path is given (or the path is "-"), input is read from stdin.
//! `--config` loads a partial options file (YAML or JSON); explicit flags
//! override values from the file.

use clap::{Arg, Command};
use rewrap::Options;
use std::io::Read;

fn main() {
    let matches = Command::new("rewrap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reflow monospace text to a maximum column width")
        .arg(
            Arg::new("path")
                .help("Input file to reflow (defaults to stdin, \"-\" for stdin)")
                .index(1),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Maximum column width (0 or less means unbounded)")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("tab-width")
                .long("tab-width")
                .help("Columns per tab stop (0 drops tabs; default 4)")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("spaced-tab-stop")
                .long("spaced-tab-stop")
                .help("Treat runs of this many spaces as indentation (0 disables)")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("eol")
                .long("eol")
                .help("Line terminator for the output (default: detect from input)")
                .value_parser(["lf", "crlf", "cr"]),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .help("Force exactly this many blank lines at the start")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("bottom")
                .long("bottom")
                .help("Force exactly this many blank lines at the end")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Options file (YAML or JSON); flags override file values"),
        )
        .get_matches();

    let mut options = match matches.get_one::<String>("config") {
        Some(path) => load_options(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => Options::default(),
    };

    if let Some(width) = matches.get_one::<i32>("width") {
        options.width = Some(*width);
    }
    if let Some(tab_width) = matches.get_one::<i32>("tab-width") {
        options.tab_width = Some(*tab_width);
    }
    if let Some(stop) = matches.get_one::<i32>("spaced-tab-stop") {
        options.spaced_tab_stop = Some(*stop);
    }
    if let Some(eol) = matches.get_one::<String>("eol") {
        options.eol = Some(
            match eol.as_str() {
                "crlf" => "\r\n",
                "cr" => "\r",
                _ => "\n",
            }
            .to_string(),
        );
    }
    if let Some(top) = matches.get_one::<i32>("top") {
        options.top = Some(*top);
    }
    if let Some(bottom) = matches.get_one::<i32>("bottom") {
        options.bottom = Some(*bottom);
    }

    let text = read_input(matches.get_one::<String>("path").map(String::as_str))
        .unwrap_or_else(|e| {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        });

    print!("{}", rewrap::reflow(&text, options));
}

/// Read the input text from a file, or from stdin when no path (or "-") was
/// given.
fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("stdin: {}", e))?;
            Ok(text)
        }
    }
}

/// Load a partial [`Options`] from a YAML (`.yaml`/`.yml`) or JSON file.
fn load_options(path: &str) -> Result<Options, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;

    if path.ends_with(".yaml") || path.ends_with(".yml") {
        serde_yaml::from_str(&raw).map_err(|e| format!("{}: {}", path, e))
    } else {
        serde_json::from_str(&raw).map_err(|e| format!("{}: {}", path, e))
    }
}
