//! # Identicole Client
//!
//! Stateless request/response wrappers around the school proxy.
//!
//! This crate provides:
//! - [`LocationApi`]: province, district and level lookups, each answered with
//!   a token-array envelope
//! - [`SearchApi`]: the school search, answered with plain JSON
//! - [`RemoteClient`]: the shared `reqwest` transport both implementations use
//!
//! The traits are the seam the search session depends on, so tests can swap
//! in an in-memory backend.
//!
//! # Example
//!
//! ```ignore
//! use identicole_client::{LocationApi, LocationClient, RemoteClient};
//! use identicole_config::ClientConfig;
//!
//! let remote = RemoteClient::from_config(&ClientConfig::from_env())?;
//! let locations = LocationClient::new(remote);
//! let provinces = locations.list_provinces("15").await?;
//! ```

pub mod location;
pub mod remote;
pub mod search;
pub mod span;

pub use location::{LocationApi, LocationClient};
pub use remote::{RemoteClient, RemoteError};
pub use search::{SearchApi, SearchClient};
