use thiserror::Error;

/// Greeter unified error type
#[derive(Error, Debug)]
pub enum GreeterError {
    /// Bad command line. Also carries clap's help/version displays.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

impl GreeterError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GreeterError::Usage(err) if !err.use_stderr() => 0,
            _ => 1,
        }
    }

    /// Whether this is an informational exit (`--help`, `--version`) rather than a failure.
    pub fn is_informational(&self) -> bool {
        self.exit_code() == 0
    }
}

pub type GreeterResult<T> = Result<T, GreeterError>;
