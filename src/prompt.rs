//! Interactive directory selection.
//!
//! When no directory is given on the command line, the user is asked for one
//! until they supply an existing directory or type `quit` / `q`.

use crate::file_organizer::{OrganizeError, OrganizeResult};
use std::fs;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

/// Text shown every time the user is asked for a directory.
pub const PROMPT_MESSAGE: &str = "A directory was not specified. Please enter a directory to organize (or type \"quit\" or \"q\" to exit):";

/// Result of an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user entered a valid directory.
    Directory(PathBuf),
    /// The user chose to quit, or input ended.
    Quit,
}

/// Returns true if `path` is non-blank and names an existing directory.
///
/// Filesystem errors while checking count as "not a directory".
///
/// # Examples
///
/// ```
/// use dirsort::prompt::validate_directory;
///
/// assert!(!validate_directory(""));
/// assert!(!validate_directory("   "));
/// assert!(validate_directory("."));
/// ```
pub fn validate_directory<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return false;
    }

    fs::metadata(path)
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Returns true for the quit keywords, ignoring case.
fn is_quit_keyword(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}

/// An input/output pair for one prompting session.
///
/// The session is consumed by [`prompt_for_directory`] and closed when it
/// returns, whichever way it exits. Output is flushed on close.
pub struct InputSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl InputSession<StdinLock<'static>, Stdout> {
    /// Opens a session on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSession<R, W> {
    /// Creates a session over any reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `message` and reads one line of input.
    ///
    /// Returns `None` at end of input. Only the trailing line break is
    /// stripped; other whitespace is part of the answer.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Ends the session, returning the writer.
    pub fn close(mut self) -> W {
        if let Err(e) = self.writer.flush() {
            tracing::debug!(error = %e, "failed to flush prompt output");
        }
        self.writer
    }
}

/// Asks for a directory until a valid one is entered or the user quits.
///
/// Retries are unbounded. End of input is treated like `quit`.
///
/// # Examples
///
/// ```
/// use dirsort::prompt::{InputSession, PromptOutcome, prompt_for_directory};
/// use std::io::Cursor;
///
/// let session = InputSession::new(Cursor::new("q\n"), Vec::new());
/// let outcome = prompt_for_directory(session).unwrap();
/// assert_eq!(outcome, PromptOutcome::Quit);
/// ```
pub fn prompt_for_directory<R: BufRead, W: Write>(
    mut session: InputSession<R, W>,
) -> OrganizeResult<PromptOutcome> {
    let outcome = prompt_loop(&mut session);
    session.close();
    outcome
}

fn prompt_loop<R: BufRead, W: Write>(
    session: &mut InputSession<R, W>,
) -> OrganizeResult<PromptOutcome> {
    loop {
        let Some(input) = session
            .ask(PROMPT_MESSAGE)
            .map_err(|source| OrganizeError::Input { source })?
        else {
            tracing::debug!("input ended while prompting for a directory");
            return Ok(PromptOutcome::Quit);
        };

        if is_quit_keyword(&input) {
            return Ok(PromptOutcome::Quit);
        }

        if validate_directory(&input) {
            return Ok(PromptOutcome::Directory(PathBuf::from(input)));
        }

        tracing::debug!(input = %input, "rejected directory input");
        session
            .notify(&format!("\"{}\" is not an existing directory.", input))
            .map_err(|source| OrganizeError::Input { source })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_prompt(input: &str) -> (PromptOutcome, String) {
        let mut session = InputSession::new(Cursor::new(input.to_string()), Vec::new());
        let outcome = prompt_loop(&mut session).expect("prompt should not fail");
        let output = String::from_utf8(session.close()).expect("output is UTF-8");
        (outcome, output)
    }

    #[test]
    fn test_validate_directory_rejects_blank() {
        assert!(!validate_directory(""));
        assert!(!validate_directory(" \t "));
    }

    #[test]
    fn test_validate_directory_rejects_missing_and_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").expect("Failed to write test file");

        assert!(!validate_directory(&file_path));
        assert!(!validate_directory(temp_dir.path().join("missing")));
        assert!(validate_directory(temp_dir.path()));
    }

    #[test]
    fn test_quit_keywords_ignore_case() {
        for input in ["q\n", "Q\n", "quit\n", "QUIT\n", "Quit\r\n"] {
            let (outcome, _) = run_prompt(input);
            assert_eq!(outcome, PromptOutcome::Quit, "input {:?}", input);
        }
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().to_string_lossy().to_string();
        let input = format!("\n/definitely/not/here\n{}\n", dir);

        let (outcome, output) = run_prompt(&input);

        assert_eq!(outcome, PromptOutcome::Directory(PathBuf::from(&dir)));
        assert_eq!(output.matches(PROMPT_MESSAGE).count(), 3);
        assert!(output.contains("/definitely/not/here"));
    }

    #[test]
    fn test_prompt_keeps_surrounding_whitespace() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join(" my dir ");
        fs::create_dir(&dir).expect("Failed to create directory");

        let (outcome, _) = run_prompt(&format!("{}\r\n", dir.display()));

        assert_eq!(outcome, PromptOutcome::Directory(dir));
    }

    #[test]
    fn test_padded_quit_keyword_is_not_quit() {
        let (outcome, output) = run_prompt(" q \nquit\n");
        assert_eq!(outcome, PromptOutcome::Quit);
        assert_eq!(output.matches(PROMPT_MESSAGE).count(), 2);
        assert!(output.contains("\" q \" is not an existing directory."));
    }

    #[test]
    fn test_prompt_quits_after_invalid_input() {
        let (outcome, output) = run_prompt("nope\nq\n");
        assert_eq!(outcome, PromptOutcome::Quit);
        assert_eq!(output.matches(PROMPT_MESSAGE).count(), 2);
    }

    #[test]
    fn test_prompt_end_of_input_quits() {
        let (outcome, _) = run_prompt("");
        assert_eq!(outcome, PromptOutcome::Quit);

        let (outcome, _) = run_prompt("/missing/dir\n");
        assert_eq!(outcome, PromptOutcome::Quit);
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush rejected"))
        }
    }

    #[test]
    fn test_close_returns_writer_when_flush_fails() {
        let mut session = InputSession::new(Cursor::new(""), FailingFlush(Vec::new()));
        session.notify("done").expect("write should succeed");

        let writer = session.close();

        assert_eq!(writer.0, b"done\n");
    }

    #[test]
    fn test_prompt_for_directory_consumes_session() {
        let session = InputSession::new(Cursor::new("quit\n"), io::sink());
        let outcome = prompt_for_directory(session).expect("prompt should not fail");
        assert_eq!(outcome, PromptOutcome::Quit);
    }
}
