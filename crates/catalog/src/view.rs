//! The merged movie view handed to presentation.
//!
//! A [`MovieView`] is built exactly once, from three successfully decoded
//! raw records, by [`MovieView::assemble`]. It has no setters; callers get
//! read-only accessors and own the value until they drop it.

use serde::Serialize;

use crate::images::{ImageSize, image_url};
use crate::types::{
    CastMember, CrewMember, Genre, RawCredits, RawDetails, RawWatchProviders, RegionAvailability,
};

/// How many cast entries a view keeps
pub const CAST_LIMIT: usize = 5;

/// Crew job that identifies the director
pub const DIRECTOR_JOB: &str = "Director";

/// Region whose offers are shown when the catalog lists it
pub const DEFAULT_REGION: &str = "US";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    #[serde(flatten)]
    details: RawDetails,
    cast: Vec<CastMember>,
    director: Option<CrewMember>,
    watch_region: Option<String>,
    watch_providers: Option<RegionAvailability>,
}

impl MovieView {
    /// Merge the three raw records into one view.
    ///
    /// - `cast`: the first [`CAST_LIMIT`] entries, billing order untouched
    /// - `director`: the first crew entry whose job is [`DIRECTOR_JOB`]
    /// - `watch_providers`: `preferred_region` if listed, otherwise the first
    ///   region in payload order, otherwise none
    pub fn assemble(
        details: RawDetails,
        credits: RawCredits,
        providers: RawWatchProviders,
        preferred_region: &str,
    ) -> Self {
        let director = select_director(&credits.crew);
        let cast = select_cast(credits.cast);
        let (watch_region, watch_providers) = match select_region(providers, preferred_region) {
            Some((region, availability)) => (Some(region), Some(availability)),
            None => (None, None),
        };

        Self {
            details,
            cast,
            director,
            watch_region,
            watch_providers,
        }
    }

    pub fn details(&self) -> &RawDetails {
        &self.details
    }

    pub fn id(&self) -> u64 {
        self.details.id
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn overview(&self) -> &str {
        &self.details.overview
    }

    pub fn runtime(&self) -> Option<u32> {
        self.details.runtime
    }

    pub fn vote_average(&self) -> f64 {
        self.details.vote_average
    }

    pub fn release_date(&self) -> &str {
        &self.details.release_date
    }

    pub fn original_language(&self) -> &str {
        &self.details.original_language
    }

    pub fn genres(&self) -> &[Genre] {
        &self.details.genres
    }

    pub fn cast(&self) -> &[CastMember] {
        &self.cast
    }

    pub fn director(&self) -> Option<&CrewMember> {
        self.director.as_ref()
    }

    /// Region code the offers were taken from
    pub fn watch_region(&self) -> Option<&str> {
        self.watch_region.as_deref()
    }

    pub fn watch_providers(&self) -> Option<&RegionAvailability> {
        self.watch_providers.as_ref()
    }

    pub fn poster_url(&self) -> Option<String> {
        self.details
            .poster_path
            .as_deref()
            .map(|path| image_url(path, ImageSize::W500))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.details
            .backdrop_path
            .as_deref()
            .map(|path| image_url(path, ImageSize::Original))
    }

    /// Year from `release_date`; `None` when the date is missing or malformed
    pub fn release_year(&self) -> Option<u16> {
        self.details
            .release_date
            .get(..4)
            .and_then(|year| year.parse().ok())
    }

    /// Vote average with one decimal, e.g. `7.3/10`.
    ///
    /// Halfway values round away from zero, so `8.25` reads `8.3/10`.
    pub fn rating_label(&self) -> String {
        format!("{}/10", one_decimal(self.details.vote_average))
    }

    pub fn language_label(&self) -> String {
        self.details.original_language.to_uppercase()
    }
}

/// `{:.1}` rounds exact ties to even. A float is an exact tie at one
/// decimal only when it is an odd number of quarters (x.25, x.75); those
/// are rounded away from zero instead.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}", value)
}

/// First [`CAST_LIMIT`] cast entries in source order
pub fn select_cast(mut cast: Vec<CastMember>) -> Vec<CastMember> {
    cast.truncate(CAST_LIMIT);
    cast
}

/// First crew entry credited as director; later ones are ignored
pub fn select_director(crew: &[CrewMember]) -> Option<CrewMember> {
    crew.iter().find(|member| member.job == DIRECTOR_JOB).cloned()
}

/// Pick the preferred region, else the first one the payload listed
pub fn select_region(
    providers: RawWatchProviders,
    preferred_region: &str,
) -> Option<(String, RegionAvailability)> {
    let mut regions = providers.regions;
    if regions.is_empty() {
        return None;
    }

    let index = regions
        .iter()
        .position(|(code, _)| code == preferred_region)
        .unwrap_or(0);
    Some(regions.swap_remove(index))
}
