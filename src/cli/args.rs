use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use serde::Serialize;

use crate::domain::error::GreeterResult;

/// Command line arguments for Greeter
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "greeter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a colorized greeting"
)]
pub struct InvocationArgs {
    /// Name to greet
    #[arg(value_name = "NAME")]
    pub name: String,

    /// title to use before name
    #[arg(short, long, value_name = "HONORIFIC")]
    pub title: Option<String>,

    /// display some debugging
    #[arg(short, long)]
    pub debug: bool,
}

/// Flag values of an invocation, as shown by the debug trace.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct InvocationOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub debug: bool,
}

impl InvocationArgs {
    /// Title to prefix, if one was given and is non-empty.
    pub fn honorific(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    pub fn options(&self) -> InvocationOptions<'_> {
        InvocationOptions {
            title: self.title.as_deref(),
            debug: self.debug,
        }
    }

    /// Name of the command as registered with clap.
    pub fn command_name() -> String {
        Self::command().get_name().to_string()
    }
}

/// Parse raw tokens into [`InvocationArgs`]; the first token is the program name.
pub fn parse<I, T>(tokens: I) -> GreeterResult<InvocationArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(InvocationArgs::try_parse_from(tokens)?)
}
