//! Source and sink resolution for `read` and `flush`.
//!
//! `read name` takes one line from the interactive stream, `read name file`
//! the whole contents of a file. `flush name` writes the raw value plus a
//! newline to the interactive stream, `flush name file` writes it to a file
//! verbatim.

use std::fs;
use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

/// Failures while resolving a source or sink.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("file \"{0}\" not found")]
    FileNotFound(String),

    #[error("cannot write file \"{0}\"")]
    WriteFailed(String),

    /// The interactive stream itself failed.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Where `read` pulls its text from.
pub enum Source<'a> {
    /// Prompt on the interactive stream and take one line.
    Line,
    /// Whole contents of a named file.
    File(&'a str),
}

/// Where `flush` sends a value.
pub enum Sink<'a> {
    /// The interactive stream, with a trailing newline.
    Console,
    /// A named file, verbatim.
    File(&'a str),
}

/// Resolve a `read` source to its raw text.
pub fn read_source<R: BufRead, W: Write>(
    source: Source<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<String, IoError> {
    match source {
        Source::Line => {
            write!(output, "text: ")?;
            output.flush()?;
            let mut text = String::new();
            input.read_line(&mut text)?;
            // Drop the line terminator, keep everything else verbatim.
            while text.ends_with('\n') || text.ends_with('\r') {
                text.pop();
            }
            Ok(text)
        }
        Source::File(name) => {
            let text = fs::read_to_string(name)
                .map_err(|_| IoError::FileNotFound(name.to_string()))?;
            debug!("read {} bytes from \"{}\"", text.len(), name);
            Ok(text)
        }
    }
}

/// Send a raw value to a `flush` sink.
pub fn write_sink<W: Write>(value: &str, sink: Sink<'_>, output: &mut W) -> Result<(), IoError> {
    match sink {
        Sink::Console => {
            writeln!(output, "{}", value)?;
            Ok(())
        }
        Sink::File(name) => {
            fs::write(name, value).map_err(|_| IoError::WriteFailed(name.to_string()))?;
            debug!("wrote {} bytes to \"{}\"", value.len(), name);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::{read_source, write_sink, Sink, Source};
    use std::io::Cursor;

    #[test]
    fn line_source_prompts_and_trims_test() {
        let mut input = Cursor::new(b"hello there\n".to_vec());
        let mut output = Vec::new();
        let text = read_source(Source::Line, &mut input, &mut output).unwrap();
        assert_eq!(text, "hello there");
        assert_eq!(output, b"text: ");
    }

    #[test]
    fn missing_file_reports_not_found_test() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let result = read_source(
            Source::File("no-such-file-anywhere.txt"),
            &mut input,
            &mut output,
        );
        assert!(result.is_err());
    }

    #[test]
    fn console_sink_appends_newline_test() {
        let mut output = Vec::new();
        write_sink("0101", Sink::Console, &mut output).unwrap();
        assert_eq!(output, b"0101\n");
    }
}
