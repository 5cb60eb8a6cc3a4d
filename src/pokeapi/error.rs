use thiserror::Error;

/// Why a pokemon lookup did not produce a [`super::Pokemon`]
#[derive(Debug, Error)]
pub enum FetchError {
    /// The identifier was empty or only whitespace
    #[error("pokemon identifier must not be empty")]
    InvalidIdentifier,

    /// The configured base URL cannot carry a path
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be set up, e.g. an invalid user agent
    #[error("could not create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, or a body that could not be read
    #[error("request to PokeAPI failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// PokeAPI answered 404
    #[error("pokemon '{identifier}' was not found")]
    NotFound { identifier: String },

    /// Any other non-2xx answer
    #[error("PokeAPI returned HTTP {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not JSON, or not a pokemon
    #[error("could not decode PokeAPI response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_should_describe_not_found() {
        let err = FetchError::NotFound {
            identifier: "missingno".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "pokemon 'missingno' was not found");
    }

    #[test]
    fn fetch_error_should_describe_unexpected_status() {
        let err = FetchError::UnexpectedStatus {
            status: 503,
            url: "https://pokeapi.co/api/v2/pokemon/ditto".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "PokeAPI returned HTTP 503 for https://pokeapi.co/api/v2/pokemon/ditto"
        );
    }

    #[test]
    fn fetch_error_should_wrap_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::from(json_err);
        assert!(err.is_decode());
        assert!(err
            .to_string()
            .starts_with("could not decode PokeAPI response"));
    }
}
