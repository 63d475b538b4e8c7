use crate::cli::args::InvocationArgs;
use crate::domain::error::GreeterError;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Output writer trait for the two console streams
pub trait OutputWriter {
    /// Write the greeting line to standard output, blue when color is on.
    fn write_greeting(&mut self, greeting: &str) -> Result<(), OutputError>;
    /// Write a diagnostic line to standard error.
    fn write_diagnostic(&mut self, message: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for GreeterError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::IoError(e) => Self::Io(e),
            other => Self::Output(other.to_string()),
        }
    }
}

/// Console output writer
pub struct ConsoleWriter<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
    color: bool,
}

impl ConsoleWriter {
    /// Writer bound to the process's stdout and stderr. The greeting is
    /// styled only when stdout is a terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr()).with_color(atty::is(atty::Stream::Stdout))
    }
}

impl<O: Write, E: Write> ConsoleWriter<O, E> {
    /// Plain writer; see [`ConsoleWriter::with_color`].
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> OutputWriter for ConsoleWriter<O, E> {
    fn write_greeting(&mut self, greeting: &str) -> Result<(), OutputError> {
        if self.color {
            writeln!(self.out, "{}", greeting.blue())?;
        } else {
            writeln!(self.out, "{}", greeting)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_diagnostic(&mut self, message: &str) -> Result<(), OutputError> {
        writeln!(self.err, "{}", message)?;
        self.err.flush()?;
        Ok(())
    }
}

/// Debug trace line: `Called <command> with options <json>`.
pub fn debug_line(args: &InvocationArgs) -> Result<String, OutputError> {
    let options = serde_json::to_string(&args.options())?;
    Ok(format!(
        "Called {} with options {}",
        InvocationArgs::command_name(),
        options
    ))
}

/// Emit a rendered greeting, preceded by the debug trace when requested.
pub fn emit<W>(writer: &mut W, args: &InvocationArgs, rendered: &str) -> Result<(), OutputError>
where
    W: OutputWriter + ?Sized,
{
    if args.debug {
        writer.write_diagnostic(&debug_line(args)?)?;
    }
    writer.write_greeting(rendered)?;
    tracing::debug!(debug = args.debug, "greeting emitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stream {
        Out,
        Err,
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Stream, String)>,
    }

    impl OutputWriter for Recorder {
        fn write_greeting(&mut self, greeting: &str) -> Result<(), OutputError> {
            self.lines.push((Stream::Out, greeting.to_string()));
            Ok(())
        }

        fn write_diagnostic(&mut self, message: &str) -> Result<(), OutputError> {
            self.lines.push((Stream::Err, message.to_string()));
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args(debug: bool) -> InvocationArgs {
        InvocationArgs {
            name: "Ada".to_string(),
            title: Some("Dr.".to_string()),
            debug,
        }
    }

    #[test]
    fn test_debug_trace_precedes_greeting() {
        let mut recorder = Recorder::default();
        emit(&mut recorder, &args(true), "Hello Dr. Ada").unwrap();

        assert_eq!(recorder.lines.len(), 2);
        assert_eq!(recorder.lines[0].0, Stream::Err);
        assert_eq!(
            recorder.lines[0].1,
            r#"Called greeter with options {"title":"Dr.","debug":true}"#
        );
        assert_eq!(recorder.lines[1], (Stream::Out, "Hello Dr. Ada".to_string()));
    }

    #[test]
    fn test_no_trace_without_debug() {
        let mut recorder = Recorder::default();
        emit(&mut recorder, &args(false), "Hello Dr. Ada").unwrap();
        assert_eq!(recorder.lines, vec![(Stream::Out, "Hello Dr. Ada".to_string())]);
    }

    #[test]
    fn test_console_writer_streams() {
        let mut writer = ConsoleWriter::new(Vec::new(), Vec::new());
        emit(&mut writer, &args(false), "Hello Dr. Ada").unwrap();
        let (out, err) = writer.into_inner();

        assert_eq!(String::from_utf8(out).unwrap(), "Hello Dr. Ada\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_console_writer_styles_blue_when_colored() {
        let mut writer = ConsoleWriter::new(Vec::new(), Vec::new()).with_color(true);
        emit(&mut writer, &args(false), "Hello Dr. Ada").unwrap();
        let (out, _) = writer.into_inner();

        let expected = format!("{}\n", "Hello Dr. Ada".blue());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_console_writer_debug_goes_to_stderr() {
        let mut writer = ConsoleWriter::new(Vec::new(), Vec::new());
        emit(&mut writer, &args(true), "Hello Dr. Ada").unwrap();
        let (out, err) = writer.into_inner();

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Called greeter with options "));
        assert!(err.ends_with('\n'));
        assert_eq!(String::from_utf8(out).unwrap(), "Hello Dr. Ada\n");
    }

    #[test]
    fn test_write_failure_maps_to_io_error() {
        let mut writer = ConsoleWriter::new(BrokenPipe, Vec::new());
        let err = emit(&mut writer, &args(false), "Hello Dr. Ada").unwrap_err();
        assert!(matches!(GreeterError::from(err), GreeterError::Io(_)));
    }
}
