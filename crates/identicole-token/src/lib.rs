//! # Identicole Token
//!
//! Decoding for the proxy's token-array envelope.
//!
//! The lookup endpoints answer with a JSON array whose first element is a
//! dot-delimited token. The token's second segment is a base64-encoded JSON
//! array holding the actual records. Nothing in the token is verified: the
//! signature segment is ignored and the payload is trusted as-is.
//!
//! # Example
//!
//! ```ignore
//! use identicole_token::decode_array;
//!
//! let provinces: Vec<Province> = decode_array(&token)?;
//! ```

pub mod envelope;

pub use envelope::{TokenError, decode_array, decode_envelope, encode_array};
