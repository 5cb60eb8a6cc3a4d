use serde::{Deserialize, Serialize};

/// A name plus the URL of the full resource on PokeAPI
///
/// The URL is kept as text and never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}
