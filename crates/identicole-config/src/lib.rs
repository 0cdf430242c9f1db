//! # Identicole Config
//!
//! Configuration types for the Identicole client.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`client`]: proxy location, request timeout and search defaults
//!
//! # Example
//!
//! ```ignore
//! use identicole_config::ClientConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = ClientConfig::from_env();
//! println!("Using proxy at {}", config.base_url);
//! ```

pub mod client;

// Re-export commonly used types at crate root
pub use client::ClientConfig;
