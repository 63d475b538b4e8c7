use crate::cli::args::{parse, InvocationArgs};
use crate::cli::output::{emit, OutputWriter};
use crate::core::greeting::render;
use crate::domain::error::GreeterResult;
use std::ffi::OsString;

/// Render the greeting for parsed arguments and emit it.
pub fn execute<W>(args: &InvocationArgs, writer: &mut W) -> GreeterResult<()>
where
    W: OutputWriter + ?Sized,
{
    tracing::debug!(name = %args.name, title = ?args.title, debug = args.debug, "executing");
    let rendered = render(args);
    emit(writer, args, &rendered)?;
    Ok(())
}

/// Full pipeline from raw tokens: parse, render, emit.
pub fn run<I, T, W>(tokens: I, writer: &mut W) -> GreeterResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: OutputWriter + ?Sized,
{
    let args = parse(tokens)?;
    execute(&args, writer)
}
