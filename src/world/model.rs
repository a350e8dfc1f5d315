use std::collections::BTreeMap;

use log::debug;

use super::direction::Direction;
use super::error::WorldError;
use super::item::Item;
use super::location::{Location, LocationId};

/// Display slots a location offers when nothing else is configured.
pub const DEFAULT_DISPLAY_SLOTS: usize = 3;

/// Result of moving an item between a location and the collected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Moved,
    /// Nothing by that name where we looked.
    Missing,
    /// The current location already shows as many items as it has slots for.
    Full,
    /// An item with this name is already collected.
    Carried,
}

/// Runtime world: owns every location, knows where the viewer stands and
/// what has been collected.
#[derive(Debug, Clone)]
pub struct World {
    pub name: String,
    pub desc: String,
    locations: Vec<Location>,
    current: LocationId,
    collected: BTreeMap<String, Item>,
    display_slots: Option<usize>,
}

impl World {
    pub(crate) fn from_parts(
        name: String,
        desc: String,
        locations: Vec<Location>,
        current: LocationId,
        display_slots: Option<usize>,
    ) -> Self {
        World {
            name,
            desc,
            locations,
            current,
            collected: BTreeMap::new(),
            display_slots,
        }
    }

    ///////////////////////
    /// GRAPH AND LOOKUP ///
    ///////////////////////

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.name() == name)
            .map(LocationId)
    }

    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i), l))
    }

    pub(crate) fn push_location(&mut self, location: Location) -> LocationId {
        self.locations.push(location);
        LocationId(self.locations.len() - 1)
    }

    /// Makes `to` the neighbour of `from` on `direction` and `from` the
    /// neighbour of `to` on the opposite heading.
    ///
    /// A link that previously occupied either slot is dropped on both of its
    /// ends, so no location is left pointing at a partner that no longer
    /// points back.
    pub fn link(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> Result<(), WorldError> {
        let back = direction.opposite();
        if from == to {
            return Err(WorldError::SelfLink(self.name_of(from)));
        }
        if self.location(from).is_none() {
            return Err(WorldError::UnknownLocation(format!("#{}", from.0)));
        }
        if self.location(to).is_none() {
            return Err(WorldError::UnknownLocation(format!("#{}", to.0)));
        }

        if let Some(old) = self.locations[from.0].clear_neighbour(direction) {
            self.locations[old.0].clear_neighbour(back);
        }
        if let Some(old) = self.locations[to.0].clear_neighbour(back) {
            self.locations[old.0].clear_neighbour(direction);
        }

        self.locations[from.0].set_neighbour(direction, to);
        self.locations[to.0].set_neighbour(back, from);
        Ok(())
    }

    /// Steps forward out of `id`: the neighbour ahead is entered facing the
    /// same heading the traveller had. Without a neighbour ahead `id` comes
    /// back untouched.
    pub fn move_forward_from(&mut self, id: LocationId) -> LocationId {
        let Some(here) = self.location(id) else {
            return id;
        };
        let heading = here.facing();
        match here.neighbour(heading) {
            Some(next) => {
                if let Some(loc) = self.location_mut(next) {
                    loc.set_facing(heading);
                }
                next
            }
            None => id,
        }
    }

    fn name_of(&self, id: LocationId) -> String {
        self.location(id)
            .map(|l| l.name().to_string())
            .unwrap_or_else(|| format!("#{}", id.0))
    }

    /////////////////
    /// NAVIGATION ///
    /////////////////

    pub fn current_id(&self) -> LocationId {
        self.current
    }

    pub(crate) fn set_current(&mut self, id: LocationId) {
        if id.0 < self.locations.len() {
            self.current = id;
        }
    }

    pub fn current_location(&self) -> &Location {
        &self.locations[self.current.0]
    }

    fn current_mut(&mut self) -> &mut Location {
        &mut self.locations[self.current.0]
    }

    pub fn current_direction(&self) -> Direction {
        self.current_location().facing()
    }

    pub fn current_view(&self) -> &str {
        self.current_location().current_view()
    }

    pub fn go_left(&mut self) -> &str {
        let loc = self.current_mut();
        loc.turn_left();
        debug!("turned left in {}, now facing {}", loc.name(), loc.facing());
        loc.current_view()
    }

    pub fn go_right(&mut self) -> &str {
        let loc = self.current_mut();
        loc.turn_right();
        debug!("turned right in {}, now facing {}", loc.name(), loc.facing());
        loc.current_view()
    }

    pub fn go_around(&mut self) -> &str {
        let loc = self.current_mut();
        loc.turn_around();
        debug!("turned around in {}, now facing {}", loc.name(), loc.facing());
        loc.current_view()
    }

    /// Always succeeds; when nothing lies ahead the viewer stays put.
    /// Use [`World::can_move_forward`] to tell the two apart.
    pub fn go_forward(&mut self) -> &str {
        let next = self.move_forward_from(self.current);
        if next != self.current {
            debug!(
                "moved from {} to {} heading {}",
                self.name_of(self.current),
                self.name_of(next),
                self.current_direction()
            );
        }
        self.current = next;
        self.current_view()
    }

    pub fn can_move_forward(&self) -> bool {
        self.current_location().neighbour_ahead().is_some()
    }

    ////////////////
    /// INVENTORY ///
    ////////////////

    pub fn display_slots(&self) -> Option<usize> {
        self.display_slots
    }

    pub fn set_display_slots(&mut self, slots: Option<usize>) {
        self.display_slots = slots;
    }

    /// Moves the item called `name` from the current location into the
    /// collected set.
    ///
    /// Collected items are keyed by name, so a second item under a name
    /// already held stays where it is.
    pub fn pick_item(&mut self, name: &str) -> Transfer {
        if self.collected.contains_key(name) {
            debug!("cannot pick {}: already carrying one", name);
            return Transfer::Carried;
        }
        let Some(item) = self.current_mut().take_item(name) else {
            return Transfer::Missing;
        };
        debug!("picked {} in {}", name, self.current_location().name());
        self.collected.insert(name.to_string(), item);
        Transfer::Moved
    }

    /// Puts a collected item back down in the current location, unless the
    /// location's display slots are all taken.
    pub fn put_item(&mut self, name: &str) -> Transfer {
        if !self.collected.contains_key(name) {
            return Transfer::Missing;
        }
        if let Some(slots) = self.display_slots {
            if self.location_item_count() >= slots {
                debug!(
                    "cannot put {} in {}: {} slots taken",
                    name,
                    self.current_location().name(),
                    slots
                );
                return Transfer::Full;
            }
        }
        match self.collected.remove(name) {
            Some(item) => {
                self.current_mut().add_content(item);
                debug!("put {} in {}", name, self.current_location().name());
                Transfer::Moved
            }
            None => Transfer::Missing,
        }
    }

    pub fn item_names(&self) -> Vec<String> {
        self.current_location().item_names()
    }

    pub fn item_assets(&self) -> Vec<String> {
        self.current_location().item_assets()
    }

    /// Sorted by name.
    pub fn collected_item_names(&self) -> Vec<String> {
        self.collected.keys().cloned().collect()
    }

    pub fn collected_items(&self) -> impl Iterator<Item = &Item> {
        self.collected.values()
    }

    pub fn is_collected(&self, name: &str) -> bool {
        self.collected.contains_key(name)
    }

    pub fn location_item_count(&self) -> usize {
        self.current_location().item_count()
    }
}
