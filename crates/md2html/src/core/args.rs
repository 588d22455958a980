//! Conversion modes and command-line argument validation
//!
//! Argument lists are positional and always include the program name at
//! index 0: `[program, mode, input, output]`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, trace};

use super::ConvertError;

/// A conversion operation that can be requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Markdown file to HTML file
    Markdown,
}

impl Mode {
    /// Every supported mode, in the order they are listed to the user
    pub const ALL: &'static [Mode] = &[Mode::Markdown];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Markdown => "markdown",
        }
    }

    /// Minimum length of the full argument list, program name included
    pub fn required_args(&self) -> usize {
        match self {
            Mode::Markdown => 4,
        }
    }

    /// Names of every supported mode
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Mode::name).collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ConvertError::unknown_mode(s, &Self::names()))
    }
}

/// A fully resolved request: what to do, from where, to where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Invocation {
    /// Complete a validated mode and input with the output path from `args`
    ///
    /// The argument count is checked here, once; the output path is the
    /// third positional argument.
    pub fn resolve(mode: Mode, input: &Path, args: &[String]) -> Result<Self, ConvertError> {
        validate_arg_count(mode, args)?;
        Ok(Self {
            mode,
            input: input.to_path_buf(),
            output: PathBuf::from(&args[3]),
        })
    }
}

/// Check that `args` carries everything `mode` needs
pub fn validate_arg_count(mode: Mode, args: &[String]) -> Result<(), ConvertError> {
    let required = mode.required_args();
    trace!(mode = mode.name(), required, given = args.len(), "Checking argument count");

    if args.len() < required {
        return Err(ConvertError::InvalidArguments {
            mode: mode.name().to_string(),
            needed: required - 1,
        });
    }
    Ok(())
}

/// Check mode and input file, returning both
///
/// The input must name an existing regular file; the output path is not
/// looked at here.
pub fn validate_basic_args(args: &[String]) -> Result<(Mode, PathBuf), ConvertError> {
    let mode_arg = args.get(1).ok_or(ConvertError::MissingMode)?;
    let mode: Mode = mode_arg.parse()?;

    let input = args.get(2).ok_or(ConvertError::MissingInput)?;
    let input = PathBuf::from(input);
    if !is_regular_file(&input) {
        return Err(ConvertError::InputNotFound { path: input });
    }

    debug!(mode = mode.name(), input = %input.display(), "Arguments validated");
    Ok((mode, input))
}

fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
