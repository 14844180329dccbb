//! Config server client.
//!
//! This module provides the HTTP client for a remote configuration server,
//! enabling applications to:
//!
//! - **Fetch** the configuration document for an application/profile pair
//! - **Decode** it as JSON or YAML, into a typed structure or a generic tree
//! - **Look up nested values** by key path against a cached document
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch    - ConfigClient and HTTP operations
//! └── options  - Validated construction options
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConfigClient`] | Client holding connection parameters and the document cache |
//! | [`ClientOption`] | Per-construction option (branch, format, basic auth) |
//!
//! # Examples
//!
//! ```
//! use cloud_config_client::{ClientOption, ConfigClient, Format};
//!
//! let client = ConfigClient::new(
//!     "http://localhost:8888",
//!     "accounts",
//!     "production",
//!     [ClientOption::Format(Format::Yaml)],
//! )?;
//! # Ok::<(), cloud_config_client::ConfigError>(())
//! ```

mod fetch;
mod options;

pub use fetch::ConfigClient;
pub use options::ClientOption;
