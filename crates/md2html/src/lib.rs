//! md2html - Convert Markdown documents to HTML
//!
//! Rendering is delegated to `pulldown-cmark` with tables, fenced code
//! blocks and emoji shortcodes (`:smile:` becomes a Twemoji `<img>`).
//!
//! # Quick Start
//!
//! ```rust
//! let html = md2html::render("# Title\n\nHello :wave:").unwrap();
//! assert!(html.contains("<h1>Title</h1>"));
//! ```
//!
//! # Converting files
//!
//! [`convert_file`] runs the whole pipeline: confirm an existing
//! destination, read, render, write.
//!
//! ```rust,no_run
//! use md2html::prelude::*;
//! use std::path::Path;
//!
//! let mut prompt = ConsolePrompt::stdio();
//! let report = convert_file(
//!     Path::new("README.md"),
//!     Path::new("README.html"),
//!     &MarkdownRenderer::new(),
//!     &mut prompt,
//! )?;
//! println!("wrote {} bytes", report.bytes_written);
//! # Ok::<(), ConvertError>(())
//! ```

pub mod convert;
pub mod core;
pub mod markdown;
pub mod modes;

pub use convert::{convert_file, markdown_to_html, ConversionReport};
pub use crate::core::*;
pub use markdown::MarkdownRenderer;
pub use modes::{Handler, ModeTable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convert::{convert_file, ConversionReport};
    pub use crate::core::{
        AssumeYes, Confirm, ConsolePrompt, ConvertError, Extension, Invocation, Mode, Renderer,
    };
    pub use crate::markdown::MarkdownRenderer;
    pub use crate::modes::ModeTable;
}

/// Render Markdown to HTML with the default extensions
pub fn render(input: &str) -> Result<String, ConvertError> {
    MarkdownRenderer::new().render(input)
}
