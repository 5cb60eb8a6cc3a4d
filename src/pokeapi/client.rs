//! # PokeAPI Client
//!
//! One blocking GET per lookup. The status code is checked before the body is
//! touched, and a body that does not decode is an error rather than an empty
//! pokemon.

use reqwest::{blocking::Client, StatusCode, Url};

use super::{FetchError, Pokemon};
use crate::config::{ClientConfig, POKEMON_ENDPOINT_SEGMENTS};

/// Blocking client for the pokemon endpoint
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(config.base_url())
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| FetchError::InvalidBaseUrl(config.base_url().to_string()))?;

        tracing::debug!("Creating PokeAPI client for {}", base_url);
        let http = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/api/v2/pokemon/<identifier>`
    ///
    /// The identifier becomes a single path segment, so characters such as
    /// `/` or `?` are percent-encoded instead of changing the route.
    pub fn endpoint_url(&self, identifier: &str) -> Result<Url, FetchError> {
        if identifier.trim().is_empty() {
            return Err(FetchError::InvalidIdentifier);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(POKEMON_ENDPOINT_SEGMENTS)
            .push(identifier);

        Ok(url)
    }

    /// Fetch a pokemon by name or pokedex number
    pub fn fetch_by_name(&self, identifier: &str) -> Result<Pokemon, FetchError> {
        let url = self.endpoint_url(identifier)?;
        tracing::debug!("Fetching pokemon '{}' from {}", identifier, url);

        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        tracing::debug!("PokeAPI answered {} for '{}'", status, identifier);

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                identifier: identifier.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!("Unexpected status {} from {}", status, url);
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        let pokemon = decode_pokemon(&body)?;
        tracing::info!("Fetched pokemon '{}' (#{})", pokemon.name, pokemon.id);

        Ok(pokemon)
    }
}

/// Decode a pokemon response body
pub fn decode_pokemon(body: &str) -> Result<Pokemon, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Can not unmarshal pokemon JSON: {}", e);
        FetchError::Decode(e)
    })
}

/// Fetch a pokemon from the public PokeAPI with default settings
pub fn fetch_by_name(identifier: &str) -> Result<Pokemon, FetchError> {
    PokeApiClient::new(&ClientConfig::default())?.fetch_by_name(identifier)
}
