//! # Tally CLI Application
//!
//! Terminal front end for the total calculator. The amount "form field" comes
//! from `--amount` (or a line on stdin), the quantity prompt is a blocking
//! read from stdin, and the dialog is a single line on stdout. Logs go to
//! stderr.
//!
//! ```text
//! $ tally --amount 10
//! Enter quantity: 3
//! Total = 30.00
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tally_core::{compute_total, load_settings, Host, Outcome, Settings, TallyResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Multiply an amount by a quantity and show the total.
#[derive(Debug, Parser)]
#[command(name = "tally", author, version, about, long_about = None)]
struct Args {
    /// Text of the amount field (read from stdin when omitted)
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Answer to the quantity prompt (prompted on stdin when omitted)
    #[arg(long, allow_hyphen_values = true)]
    quantity: Option<String>,

    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Terminal implementation of [`Host`] over any reader/writer pair.
struct TerminalHost<R, W> {
    amount: Option<String>,
    quantity: Option<String>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    fn new(amount: Option<String>, quantity: Option<String>, input: R, output: W) -> Self {
        TerminalHost {
            amount,
            quantity,
            input,
            output,
        }
    }

    /// Show `label` and read one line; `None` on EOF or read failure.
    fn ask(&mut self, label: &str) -> Option<String> {
        if write!(self.output, "{} ", label).and_then(|_| self.output.flush()).is_err() {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn field_text(&mut self, name: &str) -> String {
        match self.amount.clone() {
            Some(text) => text,
            None => self.ask(&format!("{}:", capitalize(name))).unwrap_or_default(),
        }
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        match self.quantity.clone() {
            Some(text) => Some(text),
            None => self.ask(message),
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!(error = %e, "failed to write dialog");
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn setup_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_settings(config: Option<&PathBuf>) -> TallyResult<Settings> {
    match config {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}

fn run<R: BufRead, W: Write>(args: Args, input: R, output: W) -> TallyResult<Outcome> {
    let settings = resolve_settings(args.config.as_ref())?;
    let mut host = TerminalHost::new(args.amount, args.quantity, input, output);
    let outcome = compute_total(&mut host, &settings);

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => {
                let _ = writeln!(host.output, "{}", json);
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize outcome"),
        }
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logger(args.verbose);

    let stdin = io::stdin();
    match run(args, stdin.lock(), io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tally"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn run_with_stdin(argv: &[&str], stdin: &str) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome = run(args(argv), Cursor::new(stdin.as_bytes()), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompts_for_quantity() {
        let (outcome, output) = run_with_stdin(&["--amount", "10"], "3\n");
        assert!(outcome.is_total());
        assert_eq!(output, "Enter quantity: Total = 30.00\n");
    }

    #[test]
    fn test_reads_amount_from_stdin() {
        let (_, output) = run_with_stdin(&[], "2.5\n4\n");
        assert_eq!(output, "Amount: Enter quantity: Total = 10.00\n");
    }

    #[test]
    fn test_non_interactive() {
        let (_, output) = run_with_stdin(&["--amount", "10", "--quantity", "3"], "");
        assert_eq!(output, "Total = 30.00\n");
    }

    #[test]
    fn test_invalid_amount() {
        let (outcome, output) = run_with_stdin(&["--amount", "abc", "--quantity", "5"], "");
        assert!(!outcome.is_total());
        assert_eq!(output, "Please enter valid numbers.\n");
    }

    #[test]
    fn test_eof_cancels_prompt() {
        let (outcome, output) = run_with_stdin(&["--amount", "10"], "");
        assert!(!outcome.is_total());
        assert_eq!(output, "Enter quantity: Please enter valid numbers.\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (_, output) = run_with_stdin(&["--amount", "4"], "0.5\r\n");
        assert_eq!(output, "Enter quantity: Total = 2.00\n");
    }

    #[test]
    fn test_negative_values_as_arguments() {
        let (_, output) = run_with_stdin(&["--amount", "-2", "--quantity", "-3"], "");
        assert_eq!(output, "Total = 6.00\n");
    }

    #[test]
    fn test_json_output() {
        let (_, output) = run_with_stdin(&["--amount", "10", "--quantity", "3", "--json"], "");
        let (dialog, json) = output.split_once('\n').unwrap();
        assert_eq!(dialog, "Total = 30.00");
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["outcome"], "Total");
        assert_eq!(value["details"]["total_display"], "30.00");
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join("tally_cli_test_config.json");
        std::fs::write(&path, r#"{ "prompt_text": "Qty?", "decimals": 1 }"#).unwrap();

        let path_arg = path.display().to_string();
        let (_, output) = run_with_stdin(&["--amount", "1", "--config", &path_arg], "2\n");
        assert_eq!(output, "Qty? Total = 2.0\n");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let path = std::env::temp_dir().join("tally_cli_test_missing.json");
        let _ = std::fs::remove_file(&path);

        let argv = args(&["--amount", "1", "--config", &path.display().to_string()]);
        let err = run(argv, Cursor::new(&b""[..]), Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("amount"), "Amount");
        assert_eq!(capitalize(""), "");
    }
}
