//! Mode dispatch table
//!
//! Maps each [`Mode`] to the function that carries it out. [`Mode::ALL`]
//! drives both the table contents and argument validation.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, span, Level};

use crate::convert::{markdown_to_html, ConversionReport};
use crate::core::{validate_basic_args, Confirm, ConvertError, Mode};

/// A mode's implementation: input path, full argument list, prompt
pub type Handler =
    fn(&Path, &[String], &mut dyn Confirm) -> Result<ConversionReport, ConvertError>;

/// Lookup table from mode to handler
pub struct ModeTable {
    handlers: HashMap<Mode, Handler>,
}

impl ModeTable {
    /// Table holding a handler for every supported mode
    pub fn new() -> Self {
        let handlers = Mode::ALL
            .iter()
            .map(|&mode| (mode, handler_for(mode)))
            .collect();
        Self { handlers }
    }

    /// Handler registered for `mode`
    pub fn get(&self, mode: Mode) -> Option<Handler> {
        self.handlers.get(&mode).copied()
    }

    /// Modes with a registered handler
    pub fn modes(&self) -> Vec<Mode> {
        let mut modes: Vec<Mode> = self.handlers.keys().copied().collect();
        modes.sort_by_key(|mode| mode.name());
        modes
    }

    /// Validate `args`, then run the handler for the requested mode
    pub fn dispatch(
        &self,
        args: &[String],
        prompt: &mut dyn Confirm,
    ) -> Result<ConversionReport, ConvertError> {
        let (mode, input) = validate_basic_args(args)?;

        let dispatch_span = span!(Level::INFO, "dispatch", mode = mode.name());
        let _enter = dispatch_span.enter();

        let handler = self
            .get(mode)
            .ok_or_else(|| ConvertError::unknown_mode(mode.name(), &Mode::names()))?;
        debug!("Invoking handler");
        handler(&input, args, prompt)
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_for(mode: Mode) -> Handler {
    match mode {
        Mode::Markdown => markdown_to_html,
    }
}
