//! Raw catalog records as they come back from the movie API.
//!
//! These are the per-endpoint shapes the aggregator decodes before it
//! assembles a [`MovieView`](crate::MovieView). Fields the catalog may omit
//! or send as `null` are `Option`s; unknown fields are ignored.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, Result};
use crate::images::{ImageSize, image_url};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque movie key supplied by the caller.
///
/// The only validation is that it is not blank; whatever the catalog
/// accepts in its `/movie/{id}` path is fine here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for MovieId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for MovieId {
    type Error = CatalogError;

    fn try_from(id: String) -> Result<Self> {
        Self::new(id)
    }
}

impl From<MovieId> for String {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Details
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Core record returned by `GET /movie/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    /// `YYYY-MM-DD`, or empty when the catalog has no date
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub original_language: String,
    /// Genres in catalog order
    #[serde(default)]
    pub genres: Vec<Genre>,
}

// =============================================================================
// Credits
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastMember {
    /// Headshot URL, if the catalog has one for this person
    pub fn profile_url(&self) -> Option<String> {
        self.profile_path
            .as_deref()
            .map(|path| image_url(path, ImageSize::W185))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub job: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Record returned by `GET /movie/{id}/credits`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCredits {
    /// Billing order as sent by the catalog
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

// =============================================================================
// Watch providers
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl Provider {
    pub fn logo_url(&self) -> Option<String> {
        self.logo_path
            .as_deref()
            .map(|path| image_url(path, ImageSize::Original))
    }
}

/// Streaming, rental and purchase offers for one region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionAvailability {
    /// Catalog page listing the offers for this region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flatrate: Option<Vec<Provider>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<Vec<Provider>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<Vec<Provider>>,
}

impl RegionAvailability {
    /// True when no category lists a single provider
    pub fn is_empty(&self) -> bool {
        [&self.flatrate, &self.rent, &self.buy]
            .into_iter()
            .all(|providers| providers.as_ref().is_none_or(|p| p.is_empty()))
    }
}

/// Record returned by `GET /movie/{id}/watch/providers`.
///
/// Regions keep the order in which the payload lists them. That order is
/// what the non-preferred fallback picks from.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawWatchProviders {
    #[serde(rename = "results", default, deserialize_with = "ordered_regions")]
    pub regions: Vec<(String, RegionAvailability)>,
}

impl RawWatchProviders {
    pub fn get(&self, region: &str) -> Option<&RegionAvailability> {
        self.regions
            .iter()
            .find(|(code, _)| code == region)
            .map(|(_, availability)| availability)
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(code, _)| code.as_str())
    }
}

/// Decode the `results` object into (region, availability) pairs in
/// payload order. A repeated region code overwrites the earlier value but
/// keeps the earlier position, like a JSON object would.
fn ordered_regions<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, RegionAvailability)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RegionsVisitor;

    impl<'de> Visitor<'de> for RegionsVisitor {
        type Value = Vec<(String, RegionAvailability)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of region codes to provider availability")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut regions: Vec<(String, RegionAvailability)> =
                Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((code, availability)) =
                map.next_entry::<String, RegionAvailability>()?
            {
                match regions.iter_mut().find(|(existing, _)| *existing == code) {
                    Some(slot) => slot.1 = availability,
                    None => regions.push((code, availability)),
                }
            }
            Ok(regions)
        }
    }

    deserializer.deserialize_map(RegionsVisitor)
}
