//! The pokemon resource returned by `/api/v2/pokemon/{identifier}`

use serde::{Deserialize, Serialize};

use super::{NamedApiResource, OfficialArtwork, PokemonSprites};

/// One pokemon as described by PokeAPI
///
/// Built once from a response body and only read afterwards. `id`, `name`
/// and `order` must be present; every list defaults to empty and every
/// sprite defaults to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Sort order; alternate forms use `-1`
    pub order: i32,
    /// `null` for some forms that cannot be battled
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub is_default: bool,
    /// URL of the encounter list; absent rather than empty when not sent
    #[serde(default)]
    pub location_area_encounters: Option<String>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub forms: Vec<NamedApiResource>,
    #[serde(default)]
    pub game_indices: Vec<VersionGameIndex>,
    #[serde(default)]
    pub held_items: Vec<PokemonHeldItem>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    /// Types from earlier generations. The entries change shape between API
    /// versions so they are kept as raw JSON.
    #[serde(default)]
    pub past_types: Vec<serde_json::Value>,
    #[serde(default)]
    pub past_abilities: Vec<serde_json::Value>,
    #[serde(default)]
    pub species: Option<NamedApiResource>,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub cries: Option<PokemonCries>,
}

impl Pokemon {
    /// Official artwork block of the sprite tree
    pub fn artwork(&self) -> &OfficialArtwork {
        &self.sprites.other.official_artwork
    }

    /// URL of the default official artwork, if the API has one
    pub fn artwork_url(&self) -> Option<&str> {
        self.artwork().url()
    }

    /// Names of the pokemon's types ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.iter().map(|t| t.r#type.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedApiResource,
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    pub game_index: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub rarity: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub r#move: NamedApiResource,
    #[serde(default)]
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub level_learned_at: u32,
    /// Position among moves learned at the same level, `null` for most moves
    #[serde(default)]
    pub order: Option<u32>,
    pub move_learn_method: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub r#type: NamedApiResource,
}

/// Audio files for the pokemon's cry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}
