//! Main config client implementation.
//!
//! Provides [`ConfigClient`], which builds the request URL for an
//! application/profile pair, fetches the configuration document over HTTP,
//! decodes it, and answers key-path lookups against the cached document.
//!
//! # Examples
//!
//! ## Resolving a single value
//!
//! ```ignore
//! use cloud_config_client::ConfigClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = ConfigClient::new(
//!         "http://localhost:8888",
//!         "accounts",
//!         "production",
//!         [],
//!     )?;
//!
//!     // First lookup fetches and caches the document.
//!     if let Some(level) = client.get(&["logging", "level"]).await? {
//!         println!("log level: {level}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding into a typed structure
//!
//! ```ignore
//! use cloud_config_client::ConfigClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     database_url: String,
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ConfigClient::new("http://localhost:8888", "accounts", "dev", [])?;
//! let settings: Settings = client.decode().await?;
//! # Ok(())
//! # }
//! ```

use crate::client::options::ClientOption;
use crate::error::{ConfigError, Result};
use crate::format::Format;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

/// HTTP basic auth credentials attached to every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BasicAuth {
    pub(crate) username: String,
    pub(crate) password: String,
}

/// Client for a remote configuration server.
///
/// Holds the connection parameters (`host`, `application`, `profile`,
/// optional branch and credentials, response format) and a lazily populated
/// cache of the decoded configuration document.
///
/// The first [`get`](ConfigClient::get) triggers a fetch and caches the
/// decoded document; later lookups reuse the cache. [`raw`](ConfigClient::raw)
/// always fetches fresh and replaces the cache wholesale.
///
/// Cache-mutating operations take `&mut self`, so concurrent use of one
/// client requires external synchronization by construction.
#[derive(Debug, Clone)]
pub struct ConfigClient {
    client: reqwest::Client,
    host: String,
    application: String,
    profile: String,
    pub(crate) branch: Option<String>,
    pub(crate) format: Format,
    pub(crate) basic_auth: Option<BasicAuth>,
    document: Option<Map<String, Value>>,
}

impl ConfigClient {
    /// Create a client for `application`/`profile` served by `host`.
    ///
    /// All three arguments are required and must be non-empty. Options are
    /// applied in order; construction fails on the first invalid one.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] if a required argument is empty or an
    /// option rejects its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloud_config_client::{ClientOption, ConfigClient};
    ///
    /// let client = ConfigClient::new(
    ///     "http://localhost:8888",
    ///     "accounts",
    ///     "production",
    ///     [ClientOption::Branch("develop".into())],
    /// )?;
    /// # Ok::<(), cloud_config_client::ConfigError>(())
    /// ```
    pub fn new(
        host: impl Into<String>,
        application: impl Into<String>,
        profile: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        let host = host.into();
        let application = application.into();
        let profile = profile.into();

        if host.is_empty() {
            return Err(ConfigError::Validation("server is required".into()));
        }
        if application.is_empty() {
            return Err(ConfigError::Validation("application is required".into()));
        }
        if profile.is_empty() {
            return Err(ConfigError::Validation("a base profile is required".into()));
        }

        let mut client = ConfigClient {
            client: reqwest::Client::new(),
            host,
            application,
            profile,
            branch: None,
            format: Format::default(),
            basic_auth: None,
            document: None,
        };

        for option in options {
            option.apply(&mut client)?;
        }

        Ok(client)
    }

    /// Build the request URL: `host[/branch]/application-profile.extension`.
    ///
    /// No URL-encoding is performed; the parts are expected to be URL-safe
    /// already. Syntax is validated by `fetch`, not here.
    fn url(&self) -> String {
        let mut url = self.host.clone();

        if let Some(branch) = &self.branch {
            url = format!("{url}/{branch}");
        }

        format!(
            "{url}/{}-{}.{}",
            self.application,
            self.profile,
            self.format.extension()
        )
    }

    /// Fetch the configuration document, returning the raw response body.
    ///
    /// Issues exactly one GET against the constructed URL, attaching basic
    /// auth when configured. No retry is performed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidUrl`] if the constructed URL fails to parse.
    /// - [`ConfigError::Transport`] if the request cannot be sent or the
    ///   response body cannot be read.
    /// - [`ConfigError::UnexpectedStatus`] for any status above 299.
    pub async fn fetch(&self) -> Result<Bytes> {
        let url = self.url();

        if let Err(source) = Url::parse(&url) {
            return Err(ConfigError::InvalidUrl { url, source });
        }

        let mut request = self.client.get(&url);
        if let Some(auth) = &self.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        debug!(%url, "fetching configuration");
        let response = request.send().await?;

        let status = response.status().as_u16();
        if status > 299 {
            warn!(%url, status, "config server rejected request");
            return Err(ConfigError::UnexpectedStatus { status, url });
        }

        Ok(response.bytes().await?)
    }

    /// Fetch and decode the configuration document into `T`.
    ///
    /// The response body is fully read and released as part of decoding. A
    /// decode failure discards any partially built structure.
    ///
    /// # Errors
    ///
    /// Everything [`fetch`](ConfigClient::fetch) can fail with, plus
    /// [`ConfigError::Decode`] when the body is not valid JSON/YAML for the
    /// configured format.
    pub async fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.fetch().await?;

        match self.format {
            Format::Json => serde_json::from_slice(&body).map_err(|e| ConfigError::Decode {
                format: self.format,
                message: e.to_string(),
            }),
            Format::Yaml => serde_yaml::from_slice(&body).map_err(|e| ConfigError::Decode {
                format: self.format,
                message: e.to_string(),
            }),
        }
    }

    /// Fetch fresh, cache the decoded document, and return it.
    ///
    /// Always performs a new fetch regardless of cache state. On success the
    /// cached document is replaced wholesale; on failure it is left
    /// untouched.
    pub async fn raw(&mut self) -> Result<Map<String, Value>> {
        let raw: Map<String, Value> = self.decode().await?;
        debug!(keys = raw.len(), "configuration document cached");
        self.document = Some(raw.clone());
        Ok(raw)
    }

    /// Look up a value by key path in the cached document.
    ///
    /// If no document has been fetched yet, this calls
    /// [`raw`](ConfigClient::raw) first (one network round trip). The walk
    /// starts at the whole document and indexes one key at a time; a missing
    /// key or an explicit null short-circuits to `Ok(None)`. An empty path
    /// returns the whole document.
    ///
    /// # Errors
    ///
    /// Everything [`raw`](ConfigClient::raw) can fail with on first use,
    /// plus [`ConfigError::InvalidKeyPath`] when the path indexes through a
    /// value that is not a mapping.
    ///
    /// # Examples
    ///
    /// Given the document `{"logging": {"level": "info"}}`:
    ///
    /// ```ignore
    /// assert_eq!(
    ///     client.get(&["logging", "level"]).await?,
    ///     Some("info".into())
    /// );
    /// assert_eq!(client.get(&["logging", "format"]).await?, None);
    /// ```
    pub async fn get(&mut self, path: &[&str]) -> Result<Option<Value>> {
        if self.document.is_none() {
            self.raw().await?;
        }
        let document = match &self.document {
            Some(document) => document,
            None => return Ok(None),
        };

        let mut keys = path.iter();
        let mut value = match keys.next() {
            Some(key) => match document.get(*key) {
                Some(value) => value,
                None => return Ok(None),
            },
            None => return Ok(Some(Value::Object(document.clone()))),
        };

        for key in keys {
            if value.is_null() {
                return Ok(None);
            }
            let mapping = value.as_object().ok_or_else(|| ConfigError::InvalidKeyPath {
                key: (*key).to_string(),
            })?;
            value = match mapping.get(*key) {
                Some(value) => value,
                None => return Ok(None),
            };
        }

        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value.clone()))
        }
    }

    /// Whether a configuration document is currently cached.
    pub fn is_cached(&self) -> bool {
        self.document.is_some()
    }
}
