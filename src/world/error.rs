use thiserror::Error;

use super::direction::Direction;

/// Errors raised while building or loading a world.
///
/// `EmptyAsset` and `IncompleteViews` are the construction-time invalid
/// argument cases; everything else comes from wiring a graph together or
/// reading a world file.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("item '{item}' has an empty asset reference")]
    EmptyAsset { item: String },

    #[error("location '{location}' is missing views for: {}", list_directions(.missing))]
    IncompleteViews {
        location: String,
        missing: Vec<Direction>,
    },

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("duplicate location name: {0}")]
    DuplicateLocation(String),

    #[error("duplicate item name: {0}")]
    DuplicateItem(String),

    #[error("location '{0}' cannot be its own neighbour")]
    SelfLink(String),

    #[error("world has no locations")]
    Empty,

    #[error("world file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn list_directions(dirs: &[Direction]) -> String {
    dirs.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
