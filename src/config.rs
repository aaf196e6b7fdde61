//! Command-line configuration of the dictionary binary.

use log::LevelFilter;
use std::path::PathBuf;

/// The word-pair file read when no path is given.
pub const DEFAULT_PATH: &str = "data.txt";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub path: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    /// Builds a configuration from the program arguments, excluding the program name. The first
    /// positional argument is the word-pair file; `-v` or `--verbose` enables debug logging.
    /// Unrecognized flags are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_dictionary::config::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config::from_args(vec![String::from("words.txt")]);
    /// assert_eq!(config.path, PathBuf::from("words.txt"));
    /// ```
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut path = None;
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => config.log_level = LevelFilter::Debug,
                flag if flag.starts_with('-') => {},
                _ if path.is_none() => path = Some(PathBuf::from(&arg)),
                _ => {},
            }
        }
        if let Some(path) = path {
            config.path = path;
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: PathBuf::from(DEFAULT_PATH),
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_PATH};
    use log::LevelFilter;
    use std::path::PathBuf;

    fn args(args: &[&str]) -> Config {
        Config::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = args(&[]);
        assert_eq!(config.path, PathBuf::from(DEFAULT_PATH));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_path_and_verbose() {
        let config = args(&["--verbose", "words.txt", "ignored.txt"]);
        assert_eq!(config.path, PathBuf::from("words.txt"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(args(&["--colour", "-v"]), Config {
            path: PathBuf::from(DEFAULT_PATH),
            log_level: LevelFilter::Debug,
        });
    }
}
