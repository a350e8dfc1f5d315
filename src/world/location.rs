use std::collections::HashMap;

use super::direction::Direction;
use super::error::WorldError;
use super::item::Item;

/// Stable handle of a location inside its world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the walk: four photographed views, the heading the viewer
/// currently has here, links to neighbouring locations and whatever items
/// lie around.
///
/// Neighbour links are stored as ids; the symmetric `a <-> b` wiring is done
/// by [`World::link`](super::World::link) since it touches two locations.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    views: HashMap<Direction, String>,
    facing: Direction,
    neighbours: HashMap<Direction, LocationId>,
    content: Vec<Item>,
}

impl Location {
    /// Fails unless every direction has a non-empty view asset.
    pub fn new(
        name: impl Into<String>,
        views: HashMap<Direction, String>,
    ) -> Result<Self, WorldError> {
        let name = name.into();
        let missing: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| views.get(d).is_none_or(|asset| asset.is_empty()))
            .collect();

        if !missing.is_empty() {
            return Err(WorldError::IncompleteViews {
                location: name,
                missing,
            });
        }

        Ok(Location {
            name,
            views,
            facing: Direction::North,
            neighbours: HashMap::new(),
            content: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn set_facing(&mut self, direction: Direction) {
        self.facing = direction;
    }

    pub fn view(&self, direction: Direction) -> &str {
        // Construction guarantees all four keys.
        self.views.get(&direction).map(String::as_str).unwrap_or_default()
    }

    pub fn current_view(&self) -> &str {
        self.view(self.facing)
    }

    pub fn turn_left(&mut self) -> &str {
        self.turn_to(self.facing.left())
    }

    pub fn turn_right(&mut self) -> &str {
        self.turn_to(self.facing.right())
    }

    pub fn turn_around(&mut self) -> &str {
        self.turn_to(self.facing.opposite())
    }

    fn turn_to(&mut self, direction: Direction) -> &str {
        self.facing = direction;
        self.current_view()
    }

    pub fn neighbour(&self, direction: Direction) -> Option<LocationId> {
        self.neighbours.get(&direction).copied()
    }

    /// Neighbour on the heading currently faced, if any.
    pub fn neighbour_ahead(&self) -> Option<LocationId> {
        self.neighbour(self.facing)
    }

    pub fn is_neighbour(&self, id: LocationId) -> bool {
        self.neighbours.values().any(|n| *n == id)
    }

    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        self.neighbours.iter().map(|(d, id)| (*d, *id))
    }

    pub(crate) fn set_neighbour(&mut self, direction: Direction, id: LocationId) -> Option<LocationId> {
        self.neighbours.insert(direction, id)
    }

    pub(crate) fn clear_neighbour(&mut self, direction: Direction) -> Option<LocationId> {
        self.neighbours.remove(&direction)
    }

    /// No capacity check here; display limits belong to the world and the UI.
    pub fn add_content(&mut self, item: Item) {
        self.content.push(item);
    }

    /// Removes every item called `name` and hands them back in their original order.
    pub fn remove_item(&mut self, name: &str) -> Vec<Item> {
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.content)
            .into_iter()
            .partition(|item| item.name() == name);
        self.content = kept;
        removed
    }

    /// Removes only the first item called `name`; later matches keep their places.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.content.iter().position(|item| item.name() == name)?;
        Some(self.content.remove(pos))
    }

    /// First item called `name`.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.content.iter().find(|item| item.name() == name)
    }

    pub fn content(&self) -> &[Item] {
        &self.content
    }

    pub fn item_names(&self) -> Vec<String> {
        self.content.iter().map(|i| i.name().to_string()).collect()
    }

    pub fn item_assets(&self) -> Vec<String> {
        self.content.iter().map(|i| i.asset().to_string()).collect()
    }

    pub fn item_count(&self) -> usize {
        self.content.len()
    }
}

/// Views named `<prefix>North.jpg`, `<prefix>South.jpg` and so on.
pub fn compass_views(prefix: &str) -> HashMap<Direction, String> {
    Direction::ALL
        .into_iter()
        .map(|d| {
            let label = match d {
                Direction::North => "North",
                Direction::South => "South",
                Direction::East => "East",
                Direction::West => "West",
            };
            (d, format!("{prefix}{label}.jpg"))
        })
        .collect()
}
