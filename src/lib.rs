#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Cloud Config Client
//!
//! This crate implements a consumer client for Spring Cloud Config style
//! configuration servers: it builds the well-known URL for an
//! application/profile pair, fetches the configuration document over HTTP,
//! decodes it as JSON or YAML, and exposes nested values by key path.
//!
//! ## Overview
//!
//! Two cooperating pieces:
//!
//! 1. **Client** - connection parameters, URL construction, fetch, decode,
//!    and key-path lookup against a cached document
//! 2. **Options** - small validated settings (branch, format, basic auth)
//!    applied at construction time
//!
//! Control flow: construct the client with its mandatory fields and options,
//! then the first value access triggers a fetch and decode; the result is
//! cached and later lookups reuse it. [`ConfigClient::raw`] always fetches
//! fresh.
//!
//! ## Key Features
//!
//! - **Well-known URL construction**: `host[/branch]/application-profile.ext`
//! - **JSON and YAML** response decoding into one uniform value tree
//! - **Typed decoding**: deserialize straight into your own `Deserialize`
//!   structures
//! - **Key-path lookup**: `get(&["a", "b"])` walks nested mappings, with
//!   missing keys and nulls resolving to `None`
//! - **HTTP basic auth** support
//! - **Explicit errors**: every fallible operation returns a [`ConfigError`]
//!
//! ## Usage
//!
//! ```ignore
//! use cloud_config_client::{ClientOption, ConfigClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = ConfigClient::new(
//!         "http://localhost:8888",
//!         "accounts",
//!         "production",
//!         [ClientOption::Branch("develop".into())],
//!     )?;
//!
//!     match client.get(&["database", "url"]).await? {
//!         Some(url) => println!("database url: {url}"),
//!         None => println!("not configured"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - `ConfigClient` and its construction options
//! - **[error]** - Error types and result handling
//! - **[format]** - Supported response formats (JSON, YAML)

pub mod client;
pub mod error;
pub mod format;

pub use client::{ClientOption, ConfigClient};
pub use error::{ConfigError, Result};
pub use format::Format;
