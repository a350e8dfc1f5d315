mod items;
mod movement;
mod output;
mod render;

pub use items::{handle_inventory, handle_pick, handle_put};
pub use movement::try_handle_movement;
pub use output::{Output, OutputBlock};
pub use render::{render_ahead, render_items, render_view};
