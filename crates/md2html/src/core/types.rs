//! Core type definitions for Markdown rendering

/// An optional Markdown feature enabled on the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// GitHub-style pipe tables
    Tables,
    /// ```` ``` ```` / `~~~` blocks with a language class from the info string
    FencedCode,
    /// `:shortcode:` replaced by an emoji image
    Emoji,
}

impl Extension {
    /// The fixed extension set used by the converter
    pub const DEFAULT: &'static [Extension] =
        &[Extension::Tables, Extension::FencedCode, Extension::Emoji];

    /// Stable name of the extension
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Tables => "tables",
            Extension::FencedCode => "fenced_code",
            Extension::Emoji => "emoji",
        }
    }
}
