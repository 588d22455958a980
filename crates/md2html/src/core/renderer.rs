//! Renderer trait

use super::ConvertError;

/// Turns source text into an HTML fragment
///
/// Failures are reported as [`ConvertError`]; the converter attaches the
/// input path before surfacing them.
pub trait Renderer {
    /// Render `input` to HTML
    fn render(&self, input: &str) -> Result<String, ConvertError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
