//! Library side of the `pdatagen` command-line tool.
//!
//! Commands and output formatting live here so they can be exercised
//! from tests without spawning the binary.

#![deny(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

use clap::ValueEnum;
use std::fmt;

pub mod commands;
pub mod formatters;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Compact single-line output for scripts
    Text,
    /// Colorized output for terminals
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process exit code with semantic meaning.
///
/// # Examples
///
/// ```
/// use pdatagen_cli::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert!(!ExitCode::ERROR.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution.
    pub const SUCCESS: Self = Self(0);

    /// Any failure: unknown package, template or write error.
    pub const ERROR: Self = Self(1);

    /// Returns the raw process exit code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` for a zero exit code.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}
