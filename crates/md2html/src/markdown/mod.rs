//! Markdown rendering: pulldown-cmark plus emoji shortcodes

pub mod emoji;
mod renderer;

pub use renderer::MarkdownRenderer;
