use crate::error::{FreqError, FreqResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "data/ebook.txt";

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text corpus to analyze.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

impl Config {
    /// Reads a JSON configuration file. Missing fields fall back to defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FreqResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FreqError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the values that were typed on the command line.
    pub fn merge_from_cli(&mut self, cli_config: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field.clone();
                }
            };
        }

        update_if_present!(input, "input");
    }
}
