//! Runtime configuration for the `ident` binary.
//!
//! Configuration is resolved once at process startup and then passed into the command
//! handlers, so nothing reads environment variables while a command runs.

use ident_uuid::{GenerationMethod, OutputFormat, UuidResult};
use std::str::FromStr;

/// Environment variable selecting the default generation method.
pub const METHOD_ENV: &str = "IDENT_METHOD";

/// Environment variable selecting the default output format.
pub const FORMAT_ENV: &str = "IDENT_FORMAT";

/// Defaults resolved at startup. Command-line flags take precedence over these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    method: GenerationMethod,
    format: OutputFormat,
}

impl CliConfig {
    pub fn new(method: GenerationMethod, format: OutputFormat) -> Self {
        Self { method, format }
    }

    /// Resolve from `IDENT_METHOD` and `IDENT_FORMAT`.
    pub fn from_env() -> UuidResult<Self> {
        Self::from_values(
            std::env::var(METHOD_ENV).ok(),
            std::env::var(FORMAT_ENV).ok(),
        )
    }

    /// Resolve from optional raw values; missing or blank values fall back to the defaults.
    pub fn from_values(method: Option<String>, format: Option<String>) -> UuidResult<Self> {
        Ok(Self {
            method: parse_optional(method)?.unwrap_or_default(),
            format: parse_optional(format)?.unwrap_or_default(),
        })
    }

    pub fn method(&self) -> GenerationMethod {
        self.method
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

fn parse_optional<T>(value: Option<String>) -> UuidResult<Option<T>>
where
    T: FromStr<Err = ident_uuid::UuidError>,
{
    value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<T>())
        .transpose()
}
