use crate::engine::output::Output;
use crate::engine::render::render_items;
use crate::world::{self, Transfer};

/// Names are matched case-insensitively against what the viewer can see
/// (or carries) and resolved to the exact stored name.
fn resolve_name(candidates: &[String], query: &str) -> Option<String> {
    let query = query.trim();
    candidates
        .iter()
        .find(|c| c.as_str() == query)
        .or_else(|| candidates.iter().find(|c| c.eq_ignore_ascii_case(query)))
        .cloned()
}

pub fn handle_inventory(out: &mut Output, world: &world::World) {
    let carried = world.collected_item_names();

    if carried.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for name in carried {
        out.say(format!("  {}", name));
    }
}

pub fn handle_pick(out: &mut Output, world: &mut world::World, target_name: &str) {
    if target_name.trim().is_empty() {
        out.say("Pick up what?");
        return;
    }

    let Some(name) = resolve_name(&world.item_names(), target_name) else {
        out.say("You don't see that here.");
        return;
    };

    match world.pick_item(&name) {
        Transfer::Moved => {
            out.event(format!("Picked up: {}", name));
            render_items(out, world);
        }
        Transfer::Carried => out.say(format!("You are already carrying a {}.", name)),
        Transfer::Missing | Transfer::Full => out.say("You don't see that here."),
    }
}

pub fn handle_put(out: &mut Output, world: &mut world::World, target_name: &str) {
    if target_name.trim().is_empty() {
        out.say("Put down what?");
        return;
    }

    let Some(name) = resolve_name(&world.collected_item_names(), target_name) else {
        out.say("You aren't carrying that.");
        return;
    };

    match world.put_item(&name) {
        Transfer::Moved => {
            out.event(format!("Put down: {}", name));
            render_items(out, world);
        }
        Transfer::Full => out.say(format!(
            "There is no room for the {} here. At most {} items fit.",
            name,
            world.display_slots().unwrap_or_default()
        )),
        Transfer::Missing | Transfer::Carried => out.say("You aren't carrying that."),
    }
}
