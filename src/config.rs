//! Command-line configuration for the `cpq` binary.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: cpq <file.ou> [outfile] [--numbered]";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("no input file given")]
    MissingInput,
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// Defaults to the input path with a `.qud` extension
    pub output: PathBuf,
    /// Prefix every written instruction with its line number
    pub numbered: bool,
}

impl Config {
    /// Builds the configuration from the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = vec![];
        let mut numbered = false;

        for arg in args {
            match arg.as_str() {
                "--numbered" | "-n" => numbered = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(arg))
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let input = PathBuf::from(positional.next().ok_or(ConfigError::MissingInput)?);
        let output = match positional.next() {
            Some(output) => PathBuf::from(output),
            None => input.with_extension("qud"),
        };

        if let Some(extra) = positional.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(Config {
            input,
            output,
            numbered,
        })
    }

    /// Name used for the input in diagnostics.
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.to_string_lossy().into_owned())
    }
}
