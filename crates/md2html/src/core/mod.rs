//! Core building blocks shared by every conversion mode
//!
//! Argument validation, the overwrite guard, errors, logging and the
//! renderer seam live here; the Markdown-specific pieces are in
//! [`crate::markdown`].

mod args;
mod error;
mod guard;
pub mod logging;
mod renderer;
mod types;

pub use args::*;
pub use error::*;
pub use guard::*;
pub use logging::*;
pub use renderer::*;
pub use types::*;
