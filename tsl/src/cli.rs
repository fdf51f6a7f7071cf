//! Command-line arguments.

use crate::render::OutputFormat;

/// Usage line printed on argument errors and for `--help`.
pub const USAGE: &str = "usage: tsl [--json] <origin> <destination>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit successfully
    Help,
    /// Look up trips between two stations
    Lookup {
        origin: String,
        destination: String,
        format: OutputFormat,
    },
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unexpected argument: {0}")]
    Unexpected(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut format = OutputFormat::Text;
    let mut positional = Vec::new();

    for arg in args {
        let arg: String = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => format = OutputFormat::Json,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ArgsError::UnknownOption(flag.to_string()));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let origin = positional.next().ok_or(ArgsError::Missing("origin"))?;
    let destination = positional.next().ok_or(ArgsError::Missing("destination"))?;
    if let Some(extra) = positional.next() {
        return Err(ArgsError::Unexpected(extra));
    }

    Ok(Command::Lookup {
        origin,
        destination,
        format,
    })
}
