use std::fmt;

use crate::level::grid_size_for_level;

/// Environment variable holding the log level (`trace`, `debug`, `info`, `warn`, `error`).
pub const LOG_LEVEL_ENV: &str = "MAZECARVE_LOG";
/// File the binary writes its logs to, in the working directory.
pub const LOG_FILE_NAME: &str = "mazecarve.log";

/// Command-line configuration of the `mazecarve` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    /// Seed for a reproducible maze; OS entropy when absent.
    pub seed: Option<u64>,
    /// Print without colours.
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        let size = grid_size_for_level(1);
        Config {
            width: size,
            height: size,
            seed: None,
            plain: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A value could not be parsed as a number.
    InvalidNumber { name: &'static str, value: String },
    /// A flag was given without its value.
    MissingValue(&'static str),
    /// Only one of width and height was given.
    MissingHeight,
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "invalid {}: {:?} is not a valid number", name, value)
            }
            ConfigError::MissingValue(flag) => write!(f, "{} expects a value", flag),
            ConfigError::MissingHeight => write!(f, "width given without a height"),
            ConfigError::UnknownArgument(arg) => write!(f, "unknown argument {:?}", arg),
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl Config {
    pub const USAGE: &'static str = "Usage: mazecarve [WIDTH HEIGHT] [--seed N] [--level N] [--plain]";

    /// Parses arguments, excluding the executable name.
    ///
    /// `--level` sets a square size and wins over explicit dimensions.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut level = None;
        let mut dims = Vec::with_capacity(2);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = Some(parse_number("seed", &value)?);
                }
                "--level" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--level"))?;
                    level = Some(parse_number::<u32>("level", &value)?);
                }
                "--plain" => config.plain = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownArgument(flag.to_string()));
                }
                _ if dims.len() < 2 => {
                    let name = if dims.is_empty() { "width" } else { "height" };
                    dims.push(parse_number::<u16>(name, &arg)?);
                }
                _ => return Err(ConfigError::UnknownArgument(arg.clone())),
            }
        }

        match dims.as_slice() {
            [] => {}
            [width, height] => {
                config.width = *width;
                config.height = *height;
            }
            _ => return Err(ConfigError::MissingHeight),
        }
        if let Some(level) = level {
            let size = grid_size_for_level(level);
            config.width = size;
            config.height = size;
        }
        tracing::debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }
}
