//! File-to-file conversion
//!
//! The only place that touches the filesystem for writing. Order is
//! fixed: confirm the destination, read the source, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, span, Level};

use crate::core::{confirm_overwrite, Confirm, ConvertError, Invocation, Mode, Renderer};
use crate::markdown::MarkdownRenderer;

/// What a finished conversion did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    /// An existing file at `output` was replaced
    pub replaced: bool,
}

/// Convert `input` into `output` with `renderer`
///
/// Nothing is written unless the overwrite guard lets it through. A
/// failure during the write itself can leave a partial file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    renderer: &dyn Renderer,
    prompt: &mut dyn Confirm,
) -> Result<ConversionReport, ConvertError> {
    let convert_span = span!(
        Level::INFO,
        "convert_file",
        renderer = renderer.name(),
        input = %input.display(),
        output = %output.display()
    );
    let _enter = convert_span.enter();

    let replaced = confirm_overwrite(output, prompt)?;

    let content = fs::read_to_string(input).map_err(|e| ConvertError::from_io(input, e))?;
    debug!(bytes = content.len(), "Read input");

    let html = renderer.render(&content).map_err(|e| match e {
        ConvertError::Unexpected(message) => ConvertError::conversion_failed(input, message),
        other => other,
    })?;

    fs::write(output, &html).map_err(|e| ConvertError::from_io(output, e))?;
    info!(bytes = html.len(), replaced, "Wrote output");

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes_read: content.len(),
        bytes_written: html.len(),
        replaced,
    })
}

/// Handler for [`Mode::Markdown`]
///
/// `args` is the full argument list; the output path is taken from it
/// once the argument count has been checked.
pub fn markdown_to_html(
    input: &Path,
    args: &[String],
    prompt: &mut dyn Confirm,
) -> Result<ConversionReport, ConvertError> {
    let invocation = Invocation::resolve(Mode::Markdown, input, args)?;
    convert_file(
        &invocation.input,
        &invocation.output,
        &MarkdownRenderer::new(),
        prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AssumeYes;
    use std::io::Cursor;
    use tempfile::tempdir;

    struct Failing;

    impl Renderer for Failing {
        fn render(&self, _input: &str) -> Result<String, ConvertError> {
            Err(ConvertError::Unexpected("renderer exploded".into()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_report_counts_bytes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "# Title").unwrap();

        let report = convert_file(&input, &output, &MarkdownRenderer::new(), &mut AssumeYes)
            .unwrap();
        assert_eq!(report.bytes_read, 7);
        assert_eq!(report.bytes_written, fs::read(&output).unwrap().len());
        assert!(!report.replaced);
    }

    #[test]
    fn test_renderer_failure_is_conversion_failed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "text").unwrap();

        let err = convert_file(&input, &output, &Failing, &mut AssumeYes).unwrap_err();
        assert!(matches!(err, ConvertError::ConversionFailed { .. }));
        assert!(err.to_string().contains("renderer exploded"));
        assert!(!output.exists());
    }

    #[test]
    fn test_declined_before_reading_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.html");
        fs::write(&output, "keep").unwrap();

        // The input does not exist: declining must win over FileNotFound
        let mut prompt = crate::core::ConsolePrompt::new(Cursor::new(b"n\n".to_vec()), Vec::new());
        let err = convert_file(
            &dir.path().join("missing.md"),
            &output,
            &MarkdownRenderer::new(),
            &mut prompt,
        )
        .unwrap_err();
        assert!(err.is_cancellation());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep");
    }

    #[test]
    fn test_handler_requires_output_argument() {
        let args: Vec<String> = ["prog", "markdown", "in.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = markdown_to_html(Path::new("in.md"), &args, &mut AssumeYes).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArguments { needed: 3, .. }));
    }
}
