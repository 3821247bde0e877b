//! # Catalog Crate
//!
//! Domain types for movie metadata fetched from the catalog API, and the
//! rules that merge them into a single [`MovieView`].
//!
//! ## Main Components
//!
//! - **types**: Raw per-endpoint records (details, credits, watch providers)
//! - **view**: `MovieView` and the cast / director / region selection rules
//! - **resource**: The three catalog endpoints and their paths
//! - **images**: Artwork URL helpers
//! - **error**: `FetchError` (with which-resource provenance) and `CatalogError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{MovieView, DEFAULT_REGION};
//!
//! let details = serde_json::from_str(details_json)?;
//! let credits = serde_json::from_str(credits_json)?;
//! let providers = serde_json::from_str(providers_json)?;
//!
//! let view = MovieView::assemble(details, credits, providers, DEFAULT_REGION);
//! println!("{} ({:?})", view.title(), view.release_year());
//! ```

pub mod error;
pub mod images;
pub mod resource;
pub mod types;
pub mod view;

// Re-export commonly used types for convenience
pub use error::{CatalogError, FailureKind, FetchError, Result};
pub use images::{IMAGE_BASE_URL, ImageSize, image_url};
pub use resource::Resource;
pub use types::{
    CastMember,
    CrewMember,
    Genre,
    MovieId,
    Provider,
    RawCredits,
    RawDetails,
    RawWatchProviders,
    RegionAvailability,
};
pub use view::{CAST_LIMIT, DEFAULT_REGION, DIRECTOR_JOB, MovieView};
