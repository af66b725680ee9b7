//! Frontend Models
//!
//! Data structures matching the character API payloads.

use serde::{Deserialize, Serialize};

/// Portrait shown when a character has no usable first image
pub const PLACEHOLDER_PORTRAIT: &str = "dummy.png";

/// Text shown when debut or affiliation info is missing
pub const PLACEHOLDER_TEXT: &str = "none";

/// One character as returned by the API
///
/// Replaced wholesale on every page fetch; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    /// Image URLs; the API sometimes ships a null first entry
    #[serde(default)]
    pub images: Vec<Option<String>>,
    #[serde(default)]
    pub debut: Option<Debut>,
    #[serde(default)]
    pub personal: Option<Personal>,
}

/// Debut info (only the field the cards render)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debut {
    #[serde(rename = "appearsIn", default)]
    pub appears_in: Option<String>,
}

/// Personal info (only the field the cards render)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub affiliation: Option<String>,
}

/// Response envelope for `GET /character`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

impl CharacterRecord {
    /// First image URL, or the placeholder when absent or null
    pub fn portrait(&self) -> &str {
        match self.images.first() {
            Some(Some(url)) => url.as_str(),
            _ => PLACEHOLDER_PORTRAIT,
        }
    }

    /// Debut text for the card, falling back to the placeholder string
    pub fn debut_text(&self) -> &str {
        self.debut
            .as_ref()
            .and_then(|d| d.appears_in.as_deref())
            .unwrap_or(PLACEHOLDER_TEXT)
    }

    /// Affiliation text for the card, falling back to the placeholder string
    pub fn affiliation_text(&self) -> &str {
        self.personal
            .as_ref()
            .and_then(|p| p.affiliation.as_deref())
            .unwrap_or(PLACEHOLDER_TEXT)
    }
}
