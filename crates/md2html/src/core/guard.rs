//! Overwrite confirmation
//!
//! Before anything is written, an existing destination must be confirmed
//! by the operator. The question is asked through [`Confirm`] so the
//! console prompt can be swapped for scripted answers.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use super::ConvertError;

/// Something that can put a yes/no question to the operator
pub trait Confirm {
    /// Ask `question` and return the raw answer
    ///
    /// `Ok(None)` means the input was closed before an answer was given.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Line-based prompt over any reader/writer pair
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsolePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the next message off the prompt line
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Answers yes to every question without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn ask(&mut self, _question: &str) -> io::Result<Option<String>> {
        Ok(Some("y".to_string()))
    }
}

/// Gate a write to `path` on operator confirmation
///
/// Returns `Ok(true)` when an existing entry will be replaced and
/// `Ok(false)` when nothing exists there. Anything but `y`/`Y`, a closed
/// input or an interrupted read is [`ConvertError::OperationCancelled`].
pub fn confirm_overwrite(path: &Path, prompt: &mut dyn Confirm) -> Result<bool, ConvertError> {
    if !path.exists() {
        return Ok(false);
    }

    let question = format!(
        "File '{}' already exists. Overwrite? (y/n): ",
        path.display()
    );
    let answer = match prompt.ask(&question) {
        Ok(Some(answer)) => answer,
        Ok(None) => {
            info!(path = %path.display(), "Prompt input closed, cancelling");
            return Err(ConvertError::OperationCancelled);
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            info!(path = %path.display(), "Prompt interrupted, cancelling");
            return Err(ConvertError::OperationCancelled);
        }
        Err(e) => return Err(ConvertError::Unexpected(e.to_string())),
    };

    if answer.trim().eq_ignore_ascii_case("y") {
        debug!(path = %path.display(), "Overwrite confirmed");
        Ok(true)
    } else {
        info!(path = %path.display(), answer = answer.trim(), "Overwrite declined");
        Err(ConvertError::OperationCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    struct Interrupted;

    impl Confirm for Interrupted {
        fn ask(&mut self, _question: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
        }
    }

    fn answering(answer: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(answer.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_missing_destination_is_not_asked() {
        let dir = tempdir().unwrap();
        let mut prompt = answering("");
        let replaced = confirm_overwrite(&dir.path().join("new.html"), &mut prompt).unwrap();
        assert!(!replaced);
        assert!(prompt.writer.is_empty(), "no question should be printed");
    }

    #[test]
    fn test_yes_in_any_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        for answer in ["y\n", "Y\n", "  y  \n"] {
            let mut prompt = answering(answer);
            assert!(confirm_overwrite(&path, &mut prompt).unwrap());
        }
    }

    #[test]
    fn test_question_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        let mut prompt = answering("y\n");
        confirm_overwrite(&path, &mut prompt).unwrap();
        let shown = String::from_utf8(prompt.writer).unwrap();
        assert!(shown.contains("out.html"));
        assert!(shown.contains("(y/n)"));
    }

    #[test]
    fn test_anything_else_cancels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        for answer in ["n\n", "yes\n", "\n", "N\n"] {
            let mut prompt = answering(answer);
            let err = confirm_overwrite(&path, &mut prompt).unwrap_err();
            assert!(err.is_cancellation(), "answer {answer:?} should cancel");
        }
    }

    #[test]
    fn test_closed_input_cancels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        let mut prompt = answering("");
        let err = confirm_overwrite(&path, &mut prompt).unwrap_err();
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_interrupted_read_cancels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        let err = confirm_overwrite(&path, &mut Interrupted).unwrap_err();
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_assume_yes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();

        assert!(confirm_overwrite(&path, &mut AssumeYes).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }
}
