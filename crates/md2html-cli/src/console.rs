//! Operator-facing console messages
//!
//! Everything the operator reads goes to one writer (stdout in the
//! binary), optionally colored with crossterm.

use std::io::{self, Write};

use clap::ValueEnum;
use crossterm::style::{Color, Stylize};

/// When to colorize messages
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if stdout is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no for the process's stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&io::stdout())
            }
        }
    }
}

/// Message sink for the converter's fixed vocabulary of messages
pub struct Console<W> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Raw writer, for prompts that share the console
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn writer_ref(&self) -> &W {
        &self.out
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let label = self.paint("Error:", Color::Red);
        writeln!(self.out, "{} {}", label, message)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let text = self.paint(message, Color::Green);
        writeln!(self.out, "{}", text)
    }

    pub fn note(&mut self, message: &str) -> io::Result<()> {
        let text = self.paint(message, Color::DarkGrey);
        writeln!(self.out, "{}", text)
    }

    /// Usage text, preceded by a blank line when following a message
    pub fn usage(&mut self, usage: &str, after_message: bool) -> io::Result<()> {
        if after_message {
            writeln!(self.out)?;
        }
        write!(self.out, "{}", usage)?;
        if !usage.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Printed on every exit path
    pub fn closing(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting.")?;
        self.out.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}
