//! Greeter Library
//!
//! Command-line greeting utility: parses a name with an optional honorific,
//! renders `Hello <title ><name>` and prints it in blue.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use cli::{parse, execute, run, ConsoleWriter, InvocationArgs, OutputWriter};
pub use crate::core::greeting::render;
pub use domain::error::{GreeterError, GreeterResult};
