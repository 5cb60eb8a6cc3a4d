//! Sprite image URLs, grouped by artwork source and game generation
//!
//! Every leaf is an `Option<String>`: PokeAPI sends `null` for any image that
//! does not exist (female variants of genderless pokemon, back sprites in
//! games without them, ...). Every group defaults to all-absent so a response
//! that omits a whole generation still decodes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonSprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
    pub other: OtherSprites,
    pub versions: VersionSprites,
}

/// Artwork that does not come from a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherSprites {
    pub dream_world: FrontSprites,
    pub home: FrontGenderedSprites,
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
    pub showdown: GenderedSprites,
}

/// The official Sugimori-style artwork
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficialArtwork {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

impl OfficialArtwork {
    pub fn url(&self) -> Option<&str> {
        self.front_default.as_deref()
    }
}

/// Renders as `{<url>}`, or `{}` when there is no artwork
impl fmt::Display for OfficialArtwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.url().unwrap_or_default())
    }
}

/// Default and female front sprites
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontSprites {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
}

/// Front sprites with shiny and female variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontGenderedSprites {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

/// Front and back sprites with shiny and female variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderedSprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

/// Front and back sprites with shiny variants. Emerald has no back sprites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShinySprites {
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionSprites {
    #[serde(rename = "generation-i")]
    pub generation_i: GenerationI,
    #[serde(rename = "generation-ii")]
    pub generation_ii: GenerationII,
    #[serde(rename = "generation-iii")]
    pub generation_iii: GenerationIII,
    #[serde(rename = "generation-iv")]
    pub generation_iv: GenerationIV,
    #[serde(rename = "generation-v")]
    pub generation_v: GenerationV,
    #[serde(rename = "generation-vi")]
    pub generation_vi: GenerationVI,
    #[serde(rename = "generation-vii")]
    pub generation_vii: GenerationVII,
    #[serde(rename = "generation-viii")]
    pub generation_viii: GenerationVIII,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationI {
    #[serde(rename = "red-blue")]
    pub red_blue: GrayscaleSprites,
    pub yellow: GrayscaleSprites,
}

/// Generation I sprites, including the gray Game Boy renditions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayscaleSprites {
    pub back_default: Option<String>,
    pub back_gray: Option<String>,
    pub back_transparent: Option<String>,
    pub front_default: Option<String>,
    pub front_gray: Option<String>,
    pub front_transparent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationII {
    pub crystal: TransparentShinySprites,
    pub gold: TransparentShinySprites,
    pub silver: TransparentShinySprites,
}

/// Generation II sprites. Only crystal has the back and shiny transparent variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransparentShinySprites {
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_transparent: Option<String>,
    pub back_transparent: Option<String>,
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_transparent: Option<String>,
    pub front_transparent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationIII {
    pub emerald: ShinySprites,
    #[serde(rename = "firered-leafgreen")]
    pub firered_leafgreen: ShinySprites,
    #[serde(rename = "ruby-sapphire")]
    pub ruby_sapphire: ShinySprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationIV {
    #[serde(rename = "diamond-pearl")]
    pub diamond_pearl: GenderedSprites,
    #[serde(rename = "heartgold-soulsilver")]
    pub heartgold_soulsilver: GenderedSprites,
    pub platinum: GenderedSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationV {
    #[serde(rename = "black-white")]
    pub black_white: BlackWhiteSprites,
}

/// Black/White sprites plus their animated GIF counterparts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackWhiteSprites {
    pub animated: GenderedSprites,
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationVI {
    #[serde(rename = "omegaruby-alphasapphire")]
    pub omegaruby_alphasapphire: FrontGenderedSprites,
    #[serde(rename = "x-y")]
    pub x_y: FrontGenderedSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationVII {
    pub icons: FrontSprites,
    #[serde(rename = "ultra-sun-ultra-moon")]
    pub ultra_sun_ultra_moon: FrontGenderedSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationVIII {
    pub icons: FrontSprites,
}
