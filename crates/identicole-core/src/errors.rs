use std::fmt;

use anyhow::Error;

/// The three reference-data lookups the proxy exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Provinces,
    Districts,
    Levels,
}

impl Lookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookup::Provinces => "provinces",
            Lookup::Districts => "districts",
            Lookup::Levels => "levels",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the Identicole client.
///
/// None of these are fatal: the session records [`ClientError::user_message`]
/// in its state and stays interactive.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to load {lookup}: {source:#}")]
    LocationLookupFailed {
        lookup: Lookup,
        #[source]
        source: Error,
    },

    #[error("school search failed: {0:#}")]
    SearchFailed(#[source] Error),

    #[error("incomplete selection: {missing} is not selected")]
    IncompleteSelection { missing: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    pub fn lookup<E>(lookup: Lookup, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::LocationLookupFailed {
            lookup,
            source: err.into(),
        }
    }

    pub fn search<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::SearchFailed(err.into())
    }

    pub fn incomplete_selection(missing: &'static str) -> Self {
        Self::IncompleteSelection { missing }
    }

    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::LocationLookupFailed { lookup, .. } => {
                format!("Could not load {lookup}.")
            }
            ClientError::SearchFailed(_) => {
                "Could not reach the school search service.".to_string()
            }
            ClientError::IncompleteSelection { .. } => {
                "Select department, province and district.".to_string()
            }
            ClientError::InvalidConfig(msg) => format!("Invalid configuration: {msg}"),
        }
    }

    pub fn is_incomplete_selection(&self) -> bool {
        matches!(self, ClientError::IncompleteSelection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_user_messages() {
        let err = ClientError::lookup(Lookup::Provinces, anyhow::anyhow!("connection refused"));
        assert_eq!(err.user_message(), "Could not load provinces.");

        let err = ClientError::lookup(Lookup::Districts, anyhow::anyhow!("timeout"));
        assert_eq!(err.user_message(), "Could not load districts.");

        let err = ClientError::lookup(Lookup::Levels, anyhow::anyhow!("bad token"));
        assert_eq!(err.user_message(), "Could not load levels.");
    }

    #[test]
    fn test_lookup_display_keeps_cause() {
        let err = ClientError::lookup(Lookup::Districts, anyhow::anyhow!("status 502"));
        let rendered = err.to_string();
        assert!(rendered.contains("districts"));
        assert!(rendered.contains("status 502"));
    }

    #[test]
    fn test_search_failed_message() {
        let err = ClientError::search(anyhow::anyhow!("dns error"));
        assert_eq!(
            err.user_message(),
            "Could not reach the school search service."
        );
        assert!(!err.is_incomplete_selection());
    }

    #[test]
    fn test_incomplete_selection() {
        let err = ClientError::incomplete_selection("district");
        assert!(err.is_incomplete_selection());
        assert_eq!(err.user_message(), "Select department, province and district.");
        assert_eq!(err.to_string(), "incomplete selection: district is not selected");
    }
}
