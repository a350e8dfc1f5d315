use std::collections::{HashMap, HashSet};

use log::info;

use super::direction::Direction;
use super::error::WorldError;
use super::item::Item;
use super::location::{Location, LocationId, compass_views};
use super::model::{DEFAULT_DISPLAY_SLOTS, World};

/// Collects locations, links and items by name and assembles a [`World`]
/// in one go. Any bad piece fails the whole build.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    name: String,
    desc: String,
    start: Option<String>,
    display_slots: Option<Option<usize>>,
    locations: Vec<(String, HashMap<Direction, String>)>,
    links: Vec<(String, Direction, String)>,
    items: Vec<(String, String, String)>,
}

impl WorldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        WorldBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Where the viewer begins. Defaults to the first location added.
    pub fn start(mut self, location: impl Into<String>) -> Self {
        self.start = Some(location.into());
        self
    }

    /// `None` lifts the cap on how many items a location can be given.
    pub fn display_slots(mut self, slots: Option<usize>) -> Self {
        self.display_slots = Some(slots);
        self
    }

    pub fn location(mut self, name: impl Into<String>, views: HashMap<Direction, String>) -> Self {
        self.locations.push((name.into(), views));
        self
    }

    pub fn link(
        mut self,
        from: impl Into<String>,
        direction: Direction,
        to: impl Into<String>,
    ) -> Self {
        self.links.push((from.into(), direction, to.into()));
        self
    }

    pub fn item(
        mut self,
        at: impl Into<String>,
        name: impl Into<String>,
        asset: impl Into<String>,
    ) -> Self {
        self.items.push((at.into(), name.into(), asset.into()));
        self
    }

    pub fn build(self) -> Result<World, WorldError> {
        if self.locations.is_empty() {
            return Err(WorldError::Empty);
        }

        let mut world = World::from_parts(
            self.name,
            self.desc,
            Vec::new(),
            LocationId(0),
            self.display_slots.unwrap_or(Some(DEFAULT_DISPLAY_SLOTS)),
        );

        let mut ids: HashMap<String, LocationId> = HashMap::new();
        for (name, views) in self.locations {
            if ids.contains_key(&name) {
                return Err(WorldError::DuplicateLocation(name));
            }
            let id = world.push_location(Location::new(name.clone(), views)?);
            ids.insert(name, id);
        }

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| WorldError::UnknownLocation(name.to_string()))
        };

        for (from, direction, to) in &self.links {
            world.link(lookup(from)?, *direction, lookup(to)?)?;
        }

        let mut item_names: HashSet<String> = HashSet::new();
        for (at, name, asset) in self.items {
            let id = lookup(&at)?;
            if !item_names.insert(name.clone()) {
                return Err(WorldError::DuplicateItem(name));
            }
            let item = Item::new(name, asset)?;
            if let Some(loc) = world.location_mut(id) {
                loc.add_content(item);
            }
        }

        let start = match &self.start {
            Some(name) => lookup(name)?,
            None => LocationId(0),
        };
        world.set_current(start);

        info!(
            "built world '{}': {} locations, {} links, {} items",
            world.name,
            ids.len(),
            self.links.len(),
            item_names.len()
        );
        Ok(world)
    }
}

impl World {
    pub fn builder(name: impl Into<String>) -> WorldBuilder {
        WorldBuilder::new(name)
    }

    /// The five Vilnius University courtyards, entered from the street
    /// outside facing north.
    pub fn vilnius() -> Result<World, WorldError> {
        World::builder("Vilnius University courtyards")
            .desc("Walk the old university courtyards and collect what you find.")
            .location("outside", compass_views("outside"))
            .location("sarbievijus", compass_views("sarbievijus"))
            .location("sDaukantas", compass_views("sDaukantas"))
            .location("pSkarga", compass_views("pSkarga"))
            .location("observatory", compass_views("observatory"))
            .link("outside", Direction::North, "sarbievijus")
            .link("sarbievijus", Direction::North, "sDaukantas")
            .link("sarbievijus", Direction::East, "pSkarga")
            .link("pSkarga", Direction::South, "observatory")
            .item("sarbievijus", "Sarbievijus", "sarbievijus.png")
            .item("pSkarga", "Petras Skarga", "pSkarga.png")
            .item("sDaukantas", "Simonas Daukantas", "sDaukantas.png")
            .item("observatory", "Telescope", "telescope.png")
            .item("outside", "Basket", "basket.png")
            .start("outside")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_location_fails() {
        let err = World::builder("w")
            .location("a", compass_views("a"))
            .location("a", compass_views("b"))
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateLocation(n) if n == "a"));
    }

    #[test]
    fn unknown_link_target_fails() {
        let err = World::builder("w")
            .location("a", compass_views("a"))
            .link("a", Direction::North, "nowhere")
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::UnknownLocation(n) if n == "nowhere"));
    }

    #[test]
    fn bad_views_fail_the_whole_build() {
        let mut views = compass_views("b");
        views.remove(&Direction::South);
        let err = World::builder("w")
            .location("a", compass_views("a"))
            .location("b", views)
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::IncompleteViews { .. }));
    }

    #[test]
    fn duplicate_item_names_fail() {
        let err = World::builder("w")
            .location("a", compass_views("a"))
            .location("b", compass_views("b"))
            .item("a", "Coin", "coin.png")
            .item("b", "Coin", "coin2.png")
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateItem(n) if n == "Coin"));
    }

    #[test]
    fn empty_item_asset_fails() {
        let err = World::builder("w")
            .location("a", compass_views("a"))
            .item("a", "Coin", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::EmptyAsset { .. }));
    }

    #[test]
    fn empty_builder_fails() {
        assert!(matches!(World::builder("w").build(), Err(WorldError::Empty)));
    }

    #[test]
    fn start_defaults_to_first_location() {
        let world = World::builder("w")
            .location("a", compass_views("a"))
            .location("b", compass_views("b"))
            .build()
            .unwrap();
        assert_eq!(world.current_location().name(), "a");
        assert_eq!(world.display_slots(), Some(DEFAULT_DISPLAY_SLOTS));
    }

    #[test]
    fn vilnius_tour_layout() {
        let world = World::vilnius().unwrap();
        assert_eq!(world.locations().count(), 5);
        assert_eq!(world.current_location().name(), "outside");

        let id = |n: &str| world.find_location(n).unwrap();
        let sarb = world.location(id("sarbievijus")).unwrap();
        assert_eq!(sarb.neighbour(Direction::South), Some(id("outside")));
        assert_eq!(sarb.neighbour(Direction::North), Some(id("sDaukantas")));
        assert_eq!(sarb.neighbour(Direction::East), Some(id("pSkarga")));
        assert_eq!(sarb.neighbour(Direction::West), None);

        let obs = world.location(id("observatory")).unwrap();
        assert_eq!(obs.neighbour(Direction::North), Some(id("pSkarga")));
        assert_eq!(obs.item_names(), vec!["Telescope"]);
    }
}
