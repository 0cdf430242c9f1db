//! Token-array envelope decoding.
//!
//! A token has the shape `<ignored>.<base64 JSON array>.<ignored...>`. Only
//! the segment at index 1 is read. It is decoded with the standard base64
//! alphabet; padding is accepted but not required.
//!
//! Decoding performs no schema validation beyond what the caller's record
//! type demands through serde. Record types meant for this envelope default
//! their missing fields instead of failing.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose},
};
use serde::{Serialize, de::DeserializeOwned};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error type for envelope decoding.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token: expected at least 2 dot-delimited segments, found {segments}")]
    MalformedToken { segments: usize },

    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not the expected JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("envelope array is empty")]
    EmptyEnvelope,
}

impl TokenError {
    /// True for payload failures, false for a structurally malformed token.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, TokenError::MalformedToken { .. })
    }
}

/// Decodes the JSON array carried in the payload segment of `token`.
///
/// # Errors
///
/// - [`TokenError::MalformedToken`] if the token has fewer than 2 segments
/// - [`TokenError::Base64`] if the payload segment is not base64
/// - [`TokenError::Json`] if the decoded payload is not a JSON array of `T`
pub fn decode_array<T>(token: &str) -> Result<Vec<T>, TokenError>
where
    T: DeserializeOwned,
{
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => return Err(TokenError::MalformedToken { segments: 1 }),
    };

    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    let records = serde_json::from_slice(&bytes)?;

    Ok(records)
}

/// Decodes the first token of an envelope response (`["<token>", ...]`).
pub fn decode_envelope<T>(envelope: &[String]) -> Result<Vec<T>, TokenError>
where
    T: DeserializeOwned,
{
    let token = envelope.first().ok_or(TokenError::EmptyEnvelope)?;
    decode_array(token)
}

/// Wraps `records` in a token the same way the proxy does, with placeholder
/// header and signature segments.
pub fn encode_array<T>(records: &[T]) -> Result<String, TokenError>
where
    T: Serialize,
{
    let json = serde_json::to_vec(records)?;
    let payload = general_purpose::STANDARD.encode(json);
    Ok(format!("e30.{payload}.unsigned"))
}
