//! Response formats understood by the config client.
//!
//! A config server serves the same configuration document under several
//! extensions; this crate supports the two structured ones, JSON and YAML.
//! The format selects both the file extension in the request URL and the
//! decoder applied to the response body.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Serialization format of the configuration document.
///
/// Determines the extension of the requested file
/// (`{application}-{profile}.{format}`) and which decoder is used on the
/// response body. The default is [`Format::Json`].
///
/// # Examples
///
/// ```
/// use cloud_config_client::Format;
///
/// assert_eq!(Format::default(), Format::Json);
/// assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
/// assert!("toml".parse::<Format>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON (`.json`), decoded with `serde_json`.
    #[default]
    Json,
    /// YAML (`.yaml`), decoded with `serde_yaml`.
    Yaml,
}

impl Format {
    /// File extension used when building the request URL.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(ConfigError::Validation(format!(
                "[{other}] is not an acceptable format"
            ))),
        }
    }
}
