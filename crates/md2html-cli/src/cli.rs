//! Command-line interface for markdown_to_html_converter
//!
//! Parses the process arguments with clap, then hands the positional
//! words to the library's mode table so that validation and dispatch stay
//! in one place.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use crate::console::{ColorChoice, Console};
use md2html::core::logging::init_logging;
use md2html::{AssumeYes, ConsolePrompt, ConversionReport, ConvertError, ModeTable};
use tracing::{debug, info};

const USAGE: &str = "markdown_to_html_converter <mode> <input-path> <output-path>";

/// Convert a Markdown file into an HTML file
#[derive(Parser, Debug)]
#[command(name = "markdown_to_html_converter")]
#[command(about = "Convert a Markdown file (tables, fenced code, emoji) into an HTML file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true)]
#[command(after_help = "Modes:\n  markdown    Markdown to HTML\n\n\
                        Options go before the mode; every word after it is taken as is.\n\
                        Run `markdown_to_html_converter help` to show this message.")]
pub struct Cli {
    /// Mode followed by its paths
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Print usage and exit
    #[arg(short, long)]
    pub help: bool,

    /// Overwrite an existing output file without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Print byte counts after a conversion
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level [default: MD2HTML_LOG_LEVEL, RUST_LOG, then warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format [default: MD2HTML_LOG_FORMAT, then compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Colorize console messages (auto|always|never)
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

impl Cli {
    /// Whether this invocation only asks for usage
    pub fn wants_usage(&self) -> bool {
        self.help || matches!(self.args.as_slice(), [word] if word == "help")
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Full usage text
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Main CLI application
///
/// Reads prompt answers from `R` and writes every operator-facing message
/// to `W`.
pub struct ConverterApp<R, W> {
    table: ModeTable,
    input: R,
    console: Console<W>,
}

impl ConverterApp<io::StdinLock<'static>, io::Stdout> {
    /// Application wired to the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), ColorChoice::Auto.enabled())
    }
}

impl<R: BufRead, W: Write> ConverterApp<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            table: ModeTable::new(),
            input,
            console: Console::new(output, color),
        }
    }

    /// Run one invocation and return the process exit status
    ///
    /// `argv` includes the program name. The closing message is printed
    /// whatever the outcome.
    pub fn run<I, T>(&mut self, argv: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        let code = match self.execute(&argv) {
            Ok(code) => code,
            Err(e) => {
                let error = ConvertError::Unexpected(e.to_string());
                let _ = self.console.error(&error.to_string());
                error.exit_code()
            }
        };

        if let Err(e) = self.console.closing() {
            eprintln!("Warning: Failed to write to stdout: {}", e);
        }
        code
    }

    fn execute(&mut self, argv: &[OsString]) -> Result<i32> {
        if argv.len() <= 1 {
            self.console.usage(&usage_text(), false)?;
            return Ok(0);
        }

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(e) if e.kind() == ErrorKind::DisplayVersion => {
                write!(self.console.writer(), "{}", e.render())?;
                return Ok(0);
            }
            Err(e) => {
                // clap's message carries its own "error:" label and usage line
                debug!(kind = ?e.kind(), "Command line rejected");
                write!(self.console.writer(), "{}", e.render())?;
                return Ok(2);
            }
        };

        configure_logging(&cli);
        self.console.set_color(cli.color.enabled());

        if cli.wants_usage() {
            self.console.usage(&usage_text(), false)?;
            return Ok(0);
        }

        debug!(args = ?cli.args, yes = cli.yes, "Parsed command line");
        let program = argv[0].to_string_lossy().into_owned();
        let args: Vec<String> = std::iter::once(program)
            .chain(cli.args.iter().cloned())
            .collect();

        let result = if cli.yes {
            self.table.dispatch(&args, &mut AssumeYes)
        } else {
            let mut prompt = ConsolePrompt::new(&mut self.input, self.console.writer());
            self.table.dispatch(&args, &mut prompt)
        };

        match result {
            Ok(report) => {
                info!(
                    output = %report.output.display(),
                    bytes = report.bytes_written,
                    "Conversion finished"
                );
                if cli.verbose {
                    self.console.note(&describe(&report))?;
                }
                self.console.success("Processing complete.")?;
                Ok(0)
            }
            Err(e) => {
                debug!(error = %e, code = e.exit_code(), "Conversion stopped");
                self.console.error(&e.to_string())?;
                if e.is_validation() {
                    self.console.usage(&usage_text(), true)?;
                }
                Ok(e.exit_code())
            }
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        self.console.writer_ref()
    }
}

/// Flags given on the command line win; the rest falls back to the environment
fn configure_logging(cli: &Cli) {
    let level = cli.log_level.map(|level| level.as_str());
    let format = cli.log_format.map(|format| format.as_str());

    if let Err(e) = init_logging(level, format) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}

fn describe(report: &ConversionReport) -> String {
    format!(
        "Read {} bytes from '{}', wrote {} bytes to '{}'{}.",
        report.bytes_read,
        report.input.display(),
        report.bytes_written,
        report.output.display(),
        if report.replaced { " (replaced)" } else { "" }
    )
}
