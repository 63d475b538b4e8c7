use crate::cli::args::InvocationArgs;

const SALUTATION: &str = "Hello";

/// Compose the greeting line: `Hello <title ><name>`.
///
/// An empty title is treated as no title at all.
pub fn render(args: &InvocationArgs) -> String {
    let greeting = match args.honorific() {
        Some(title) => format!("{} {} {}", SALUTATION, title, args.name),
        None => format!("{} {}", SALUTATION, args.name),
    };
    tracing::debug!(%greeting, "rendered greeting");
    greeting
}
