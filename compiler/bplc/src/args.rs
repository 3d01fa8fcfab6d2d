//! Command-line arguments, parsed by hand.

use std::path::PathBuf;

use bpl_diagnostic::ColorMode;
use bpl_parse::ParseOptions;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: bplc [options] <file.bpl>...

Options:
  -D, --define <NAME>  Treat NAME as defined in #if directives (repeatable)
  --base-name          Report file base names instead of full paths
  --print              Print each parsed program to stdout
  --no-color           Never color diagnostics
  -h, --help           Show this message

The path stdin.bpl reads the program from standard input.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverOptions {
    pub parse: ParseOptions,
    pub print: bool,
    pub color: ColorMode,
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Parse(DriverOptions),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} needs a value")]
    MissingValue(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("no input files")]
    NoInputs,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = DriverOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-D" | "--define" => {
                let Some(name) = args.next() else {
                    return Err(ArgsError::MissingValue(arg));
                };
                options.parse.defines.push(name);
            }
            "--base-name" => options.parse.use_base_name = true,
            "--print" => options.print = true,
            "--no-color" => options.color = ColorMode::Never,
            _ => {
                if let Some(name) = arg.strip_prefix("--define=") {
                    options.parse.defines.push(name.to_string());
                } else if let Some(name) = arg.strip_prefix("-D").filter(|n| !n.is_empty()) {
                    options.parse.defines.push(name.to_string());
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(ArgsError::UnknownOption(arg));
                } else {
                    options.files.push(PathBuf::from(arg));
                }
            }
        }
    }

    if options.files.is_empty() {
        return Err(ArgsError::NoInputs);
    }
    Ok(Command::Parse(options))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ArgsError> {
        parse_args(args.iter().map(|a| (*a).to_string()))
    }

    fn options(args: &[&str]) -> DriverOptions {
        match parse(args).unwrap() {
            Command::Parse(options) => options,
            Command::Help => panic!("Expected parse command"),
        }
    }

    #[test]
    fn test_defines_in_every_spelling() {
        let opts = options(&["-D", "A", "--define", "B", "-DC", "--define=D", "x.bpl"]);
        assert_eq!(opts.parse.defines, ["A", "B", "C", "D"]);
        assert_eq!(opts.files, [PathBuf::from("x.bpl")]);
    }

    #[test]
    fn test_flags() {
        let opts = options(&["a.bpl", "--print", "--base-name", "--no-color", "b.bpl"]);
        assert!(opts.print);
        assert!(opts.parse.use_base_name);
        assert_eq!(opts.color, ColorMode::Never);
        assert_eq!(opts.files.len(), 2);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["a.bpl", "--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&[]), Err(ArgsError::NoInputs));
        assert_eq!(parse(&["a.bpl", "-D"]), Err(ArgsError::MissingValue("-D".into())));
        assert_eq!(
            parse(&["--verbose", "a.bpl"]),
            Err(ArgsError::UnknownOption("--verbose".into()))
        );
    }
}
