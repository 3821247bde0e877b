//! The three catalog resources a movie view is assembled from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// One of the per-movie endpoints of the catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Details,
    Credits,
    WatchProviders,
}

impl Resource {
    /// Path of this resource relative to the catalog base URL.
    ///
    /// The identifier is percent-encoded so it always stays a single path
    /// segment.
    pub fn path(&self, id: &MovieId) -> String {
        let id = urlencoding::encode(id.as_str());
        match self {
            Resource::Details => format!("/movie/{id}"),
            Resource::Credits => format!("/movie/{id}/credits"),
            Resource::WatchProviders => format!("/movie/{id}/watch/providers"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Resource::Details => "details",
            Resource::Credits => "credits",
            Resource::WatchProviders => "watch providers",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_for_each_resource() {
        let id = MovieId::from(550);
        assert_eq!(Resource::Details.path(&id), "/movie/550");
        assert_eq!(Resource::Credits.path(&id), "/movie/550/credits");
        assert_eq!(Resource::WatchProviders.path(&id), "/movie/550/watch/providers");
    }

    #[test]
    fn test_path_encodes_identifier() {
        let id = MovieId::new("a/b c").unwrap();
        assert_eq!(Resource::Details.path(&id), "/movie/a%2Fb%20c");
    }
}
