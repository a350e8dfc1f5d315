use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::direction::Direction;
use super::error::WorldError;
use super::model::World;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct TourFile {
    tour: TourHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
    #[serde(default)]
    link: Vec<LinkConfig>, // [[link]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct TourHeader {
    name: String,
    start: String,
    #[serde(default)]
    desc: String,

    /// Omitted => the default cap; 0 => no cap.
    #[serde(default)]
    display_slots: Option<usize>,
}

#[derive(Deserialize)]
struct LocationConfig {
    name: String,
    views: ViewsConfig,
}

#[derive(Deserialize)]
struct ViewsConfig {
    #[serde(default)]
    north: String,
    #[serde(default)]
    south: String,
    #[serde(default)]
    east: String,
    #[serde(default)]
    west: String,
}

#[derive(Deserialize)]
struct LinkConfig {
    from: String,
    direction: Direction,
    to: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    asset: String,
    /// Name of the location the item starts in.
    at: String,
}

impl ViewsConfig {
    /// Empty entries are left out so the location reports them as missing.
    fn into_map(self) -> HashMap<Direction, String> {
        [
            (Direction::North, self.north),
            (Direction::South, self.south),
            (Direction::East, self.east),
            (Direction::West, self.west),
        ]
        .into_iter()
        .filter(|(_, asset)| !asset.trim().is_empty())
        .map(|(d, asset)| (d, asset.trim().to_string()))
        .collect()
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a tour from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Load a tour from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let file: TourFile = toml::from_str(contents)?;

    if file.tour.start.trim().is_empty() {
        return Err(WorldError::UnknownLocation(String::new()));
    }

    let slots = match file.tour.display_slots {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(super::model::DEFAULT_DISPLAY_SLOTS),
    };

    let mut builder = World::builder(file.tour.name)
        .desc(normalize_multiline_desc(&file.tour.desc))
        .start(file.tour.start.trim())
        .display_slots(slots);

    for loc in file.location {
        builder = builder.location(loc.name, loc.views.into_map());
    }
    for link in file.link {
        builder = builder.link(link.from, link.direction, link.to);
    }
    for item in file.item {
        builder = builder.item(item.at, item.name, item.asset);
    }

    builder.build()
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            // Wrapped lines join with a space; any blank line keeps a paragraph break.
            if pending_blank_lines == 0 {
                result.push(' ');
            } else {
                result.push_str("\n\n");
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
