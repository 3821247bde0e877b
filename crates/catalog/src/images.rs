//! Image URLs for catalog artwork paths.

/// Base of the catalog image CDN; a size segment and the path follow it
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// Cast headshots
    W185,
    /// Posters
    W500,
    /// Backdrops and provider logos
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Full URL for an artwork path such as `/abc.jpg`
pub fn image_url(path: &str, size: ImageSize) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path)
}
