//! Validated construction options for [`ConfigClient`].
//!
//! Options are applied in order by [`ConfigClient::new`]; each one validates
//! its input before mutating the client, and construction aborts on the
//! first option that fails.

use crate::client::fetch::{BasicAuth, ConfigClient};
use crate::error::{ConfigError, Result};
use crate::format::Format;

/// A construction option for [`ConfigClient`].
///
/// Each variant is validated when applied. Invalid values produce a
/// [`ConfigError::Validation`] and abort construction.
///
/// # Examples
///
/// ```no_run
/// use cloud_config_client::{ClientOption, ConfigClient, Format};
///
/// let client = ConfigClient::new(
///     "http://localhost:8888",
///     "accounts",
///     "production",
///     [
///         ClientOption::Branch("develop".into()),
///         ClientOption::Format(Format::Yaml),
///         ClientOption::BasicAuth {
///             username: "user".into(),
///             password: "secret".into(),
///         },
///     ],
/// )?;
/// # Ok::<(), cloud_config_client::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Select a source-control branch; inserted as a path segment between
    /// the host and the configuration file. Must be non-empty.
    Branch(String),
    /// Select the response format (default is [`Format::Json`]).
    Format(Format),
    /// Attach HTTP basic auth credentials to every fetch. The username must
    /// be non-empty; the password may be empty.
    BasicAuth {
        /// Basic auth username.
        username: String,
        /// Basic auth password.
        password: String,
    },
}

impl ClientOption {
    /// Validate and apply this option to a client under construction.
    pub(crate) fn apply(self, client: &mut ConfigClient) -> Result<()> {
        match self {
            ClientOption::Branch(branch) => {
                if branch.is_empty() {
                    return Err(ConfigError::Validation(
                        "branch must not be empty".into(),
                    ));
                }
                client.branch = Some(branch);
            }
            ClientOption::Format(format) => {
                client.format = format;
            }
            ClientOption::BasicAuth { username, password } => {
                if username.is_empty() {
                    return Err(ConfigError::Validation(
                        "username must not be empty".into(),
                    ));
                }
                client.basic_auth = Some(BasicAuth { username, password });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_client() -> ConfigClient {
        ConfigClient::new("http://localhost:8888", "app", "dev", []).unwrap()
    }

    #[test]
    fn test_branch_sets_segment() {
        let mut client = base_client();
        ClientOption::Branch("develop".into())
            .apply(&mut client)
            .unwrap();
        assert_eq!(client.branch.as_deref(), Some("develop"));
    }

    #[test]
    fn test_empty_branch_rejected() {
        let mut client = base_client();
        let err = ClientOption::Branch(String::new())
            .apply(&mut client)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(client.branch.is_none());
    }

    #[test]
    fn test_format_overrides_default() {
        let mut client = base_client();
        ClientOption::Format(Format::Yaml)
            .apply(&mut client)
            .unwrap();
        assert_eq!(client.format, Format::Yaml);
    }

    #[test]
    fn test_basic_auth_allows_empty_password() {
        let mut client = base_client();
        ClientOption::BasicAuth {
            username: "user".into(),
            password: String::new(),
        }
        .apply(&mut client)
        .unwrap();
        assert!(client.basic_auth.is_some());
    }

    #[test]
    fn test_basic_auth_requires_username() {
        let mut client = base_client();
        let err = ClientOption::BasicAuth {
            username: String::new(),
            password: "secret".into(),
        }
        .apply(&mut client)
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(client.basic_auth.is_none());
    }
}
