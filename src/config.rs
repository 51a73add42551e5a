//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::selection::LineRange;

/// Command line configuration for unlink-md.
#[derive(Debug, Clone, Parser)]
#[command(name = "unlink-md", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to rewrite in place (standard input when omitted or "-")
    pub input: Option<PathBuf>,

    /// Only strip links on these lines (START:END, 1-based, inclusive)
    #[arg(short, long, value_name = "START:END")]
    pub lines: Option<LineRange>,

    /// Print the result to standard output instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    /// Suppress the summary notice on standard error
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or is not a file.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            if !path.is_file() {
                bail!("Input is not a file: {}", path.display());
            }
        }

        Ok(())
    }

    /// Returns input file path, or None when reading standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: Option<&str>) -> Config {
        Config {
            input: input.map(PathBuf::from),
            lines: None,
            stdout: false,
            quiet: false,
        }
    }

    #[test]
    fn test_input_path_for_file() {
        // Arrange
        let config = config(Some("notes.md"));

        // Act
        let path = config.input_path();

        // Assert
        assert_eq!(path, Some(Path::new("notes.md")));
    }

    #[test]
    fn test_input_path_dash_means_stdin() {
        // Arrange
        let config = config(Some("-"));

        // Act & Assert
        assert_eq!(config.input_path(), None);
    }

    #[test]
    fn test_validate_stdin() {
        // Arrange
        let config = config(None);

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Standard input needs no validation");
    }

    #[test]
    fn test_validate_existing_file() {
        // Arrange
        let config = config(Some("Cargo.toml"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Manifest should be a valid input");
    }

    #[test]
    fn test_validate_missing_file() {
        // Arrange
        let config = config(Some("does/not/exist.md"));

        // Act
        let result = config.validate();

        // Assert
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("does not exist"), "Unexpected error: {}", err_msg);
    }

    #[test]
    fn test_validate_directory() {
        // Arrange
        let config = config(Some("src"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Directories cannot be rewritten");
    }

    #[test]
    fn test_parse_from_args() {
        // Arrange
        let args = ["unlink-md", "README.md", "--lines", "2:4", "--stdout", "-q"];

        // Act
        let config = Config::try_parse_from(args).expect("Should parse arguments");

        // Assert
        assert_eq!(config.input, Some(PathBuf::from("README.md")));
        assert_eq!(config.lines, Some(LineRange::new(2, 4).expect("Valid range")));
        assert!(config.stdout);
        assert!(config.quiet);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        // Arrange
        let args = ["unlink-md", "--lines", "4:2"];

        // Act
        let result = Config::try_parse_from(args);

        // Assert
        assert!(result.is_err(), "Inverted range should be rejected");
    }

    #[test]
    fn test_config_debug_format() {
        // Arrange
        let config = config(None);

        // Act
        let debug_str = format!("{:?}", config);

        // Assert
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("lines"));
    }
}
