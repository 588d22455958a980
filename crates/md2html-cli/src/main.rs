//! markdown_to_html_converter - Convert Markdown files to HTML

mod cli;
mod console;

use std::io::Write;

use console::{ColorChoice, Console};
use md2html::ConvertError;

/// Exit status after Ctrl-C
const INTERRUPTED: i32 = 130;

fn main() {
    // A blocked prompt read is released by exiting from the handler
    if let Err(e) = ctrlc::set_handler(|| {
        let mut console = Console::new(std::io::stdout(), ColorChoice::Auto.enabled());
        let _ = writeln!(console.writer());
        let _ = console.error(&ConvertError::OperationCancelled.to_string());
        let _ = console.closing();
        std::process::exit(INTERRUPTED);
    }) {
        eprintln!("Warning: Failed to install Ctrl-C handler: {}", e);
    }

    let mut app = cli::ConverterApp::stdio();
    let code = app.run(std::env::args_os());
    std::process::exit(code);
}
