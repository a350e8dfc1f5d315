mod builder;
mod direction;
mod error;
mod item;
mod loader;
mod location;
mod model;
mod validator;

pub use loader::{load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the session/engine uses.
pub use builder::WorldBuilder;
pub use direction::Direction;
pub use error::WorldError;
pub use item::Item;
pub use location::{Location, LocationId, compass_views};
pub use model::{DEFAULT_DISPLAY_SLOTS, Transfer, World};
pub use validator::{ValidationError, validate_world};
