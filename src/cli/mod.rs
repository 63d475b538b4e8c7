// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{parse, InvocationArgs, InvocationOptions};
pub use commands::{execute, run};
pub use output::{emit, ConsoleWriter, OutputWriter};
