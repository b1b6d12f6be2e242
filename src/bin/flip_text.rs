//! `flip_text` - mirror text and ASCII art from the command line
//!
//! # Usage
//!
//! ```bash
//! echo '<--this way---' | flip_text --preserve-words
//! flip_text --width wcwidth banner.txt
//! flip_text --validate --table my_table.json
//! ```

use flip_text_art::mirror::MirrorTable;
use flip_text_art::unicode::{GlyphMetrics, GraphemeCount, TerminalWidth, WidthMeasure, WidthMethod};
use flip_text_art::{FlipOptions, Flipper, MemoizedWidth, ParseOptions, UnicodeSegmenter};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "flip_text - mirror text and ASCII art horizontally

USAGE:
    flip_text [OPTIONS] [FILE]

Reads FILE (or stdin) and writes the mirrored text to stdout.

OPTIONS:
    -h, --help              Print this help message and exit
    --ascii-only            Only use ASCII mirror characters and plain spaces
    --preserve-words        Keep words in reading order
    --keep-trailing-space   Don't trim whitespace at the end of output lines

    --blockify              Pad lines to a common width instead of flipping
    --parse                 Print the parsed rows as JSON instead of flipping
    --validate              Check the mirror table and print a report

    --width <METHOD>        Width measure: count, wcwidth, unicode (default: count)
    --metrics <PATH>        Per-grapheme widths from a JSON file
    --table <PATH>          Use a mirror table from a JSON file
    -v, --verbose           Print diagnostics to stderr

EXAMPLES:
    echo '(-:' | flip_text                   # :-)
    flip_text --preserve-words sign.txt      # mirror art, keep words readable
    flip_text --validate                     # check the built-in table
";

/// What the binary should do with its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Flip,
    Blockify,
    Parse,
    Validate,
}

/// How line widths are measured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WidthChoice {
    #[default]
    Count,
    Terminal(WidthMethod),
    Metrics(PathBuf),
}

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub mode: Mode,
    pub options: FlipOptions,
    pub width: WidthChoice,
    pub table_path: Option<PathBuf>,
    pub input_path: Option<PathBuf>,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--ascii-only" => config.options.ascii_only = true,
                "--preserve-words" => config.options.preserve_words = true,
                "--keep-trailing-space" => config.options.trim_trailing_space = false,

                "--blockify" => config.mode = Mode::Blockify,
                "--parse" => config.mode = Mode::Parse,
                "--validate" => config.mode = Mode::Validate,

                "--width" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--width requires a value".to_string()),
                    };
                    if value.eq_ignore_ascii_case("count") {
                        config.width = WidthChoice::Count;
                    } else if let Some(method) = WidthMethod::from_name(&value) {
                        config.width = WidthChoice::Terminal(method);
                    } else {
                        return ParseResult::Error(format!(
                            "Unknown --width: {value} (valid: count, wcwidth, unicode)"
                        ));
                    }
                }

                "--metrics" => match args.next() {
                    Some(path) => config.width = WidthChoice::Metrics(PathBuf::from(path)),
                    None => return ParseResult::Error("--metrics requires a path".to_string()),
                },

                "--table" => match args.next() {
                    Some(path) => config.table_path = Some(PathBuf::from(path)),
                    None => return ParseResult::Error("--table requires a path".to_string()),
                },

                "-v" | "--verbose" => config.verbose = true,

                other => {
                    if other.starts_with('-') && other != "-" {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    if config.input_path.is_some() {
                        return ParseResult::Error(format!("Unexpected argument: {other}"));
                    }
                    if other != "-" {
                        config.input_path = Some(PathBuf::from(arg));
                    }
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Build the width measure this configuration asks for.
    fn width_measure(&self) -> flip_text_art::Result<Box<dyn WidthMeasure>> {
        Ok(match &self.width {
            WidthChoice::Count => Box::new(GraphemeCount),
            WidthChoice::Terminal(method) => Box::new(TerminalWidth::new(*method)),
            WidthChoice::Metrics(path) => Box::new(GlyphMetrics::from_path(path)?),
        })
    }
}

fn main() -> ExitCode {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => match run(&config) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            ExitCode::from(2)
        }
    }
}

fn run(config: &Config) -> flip_text_art::Result<ExitCode> {
    if config.verbose {
        flip_text_art::set_log_callback(|level, message| {
            eprintln!("[{}] {message}", level.as_str());
        });
    }

    let custom_table;
    let table = match &config.table_path {
        Some(path) => {
            custom_table = MirrorTable::from_path(path)?;
            &custom_table
        }
        None => MirrorTable::builtin(),
    };

    let mut stdout = io::stdout().lock();

    if config.mode == Mode::Validate {
        let report = table.validate();
        writeln!(stdout, "{report}")?;
        return Ok(if report.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let input = read_input(config.input_path.as_ref())?;
    let measure = config.width_measure()?;
    let flipper = Flipper::with_parts(
        table,
        UnicodeSegmenter,
        MemoizedWidth::new(&*measure),
    );

    match config.mode {
        Mode::Flip => write!(stdout, "{}", flipper.flip(&input, &config.options))?,
        Mode::Blockify => write!(stdout, "{}", flipper.blockify(&input))?,
        Mode::Parse => {
            let options = ParseOptions::default().with_preserve_words(config.options.preserve_words);
            let rows = flipper.parse(&input, &options);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        Mode::Validate => unreachable!("handled above"),
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParseResult {
        let mut all = vec![OsString::from("flip_text")];
        all.extend(args.iter().map(OsString::from));
        Config::from_args(all)
    }

    #[test]
    fn test_defaults() {
        let ParseResult::Config(config) = parse(&[]) else {
            panic!("expected config");
        };
        assert_eq!(config.mode, Mode::Flip);
        assert_eq!(config.options, FlipOptions::default());
        assert_eq!(config.width, WidthChoice::Count);
        assert!(config.input_path.is_none());
    }

    #[test]
    fn test_flags() {
        let ParseResult::Config(config) = parse(&[
            "--ascii-only",
            "--preserve-words",
            "--keep-trailing-space",
            "--width",
            "unicode",
            "art.txt",
        ]) else {
            panic!("expected config");
        };
        assert!(config.options.ascii_only);
        assert!(config.options.preserve_words);
        assert!(!config.options.trim_trailing_space);
        assert_eq!(config.width, WidthChoice::Terminal(WidthMethod::Unicode));
        assert_eq!(config.input_path, Some(PathBuf::from("art.txt")));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--width"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--width", "pixels"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--bogus"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["a.txt", "b.txt"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["-h"]), ParseResult::Help));
    }
}
