use crate::engine::output::Output;
use crate::world;

pub fn render_view(out: &mut Output, world: &world::World) {
    let loc = world.current_location();

    out.title(loc.name());
    out.view(loc.current_view());
    out.say(format!("You are facing {}.", loc.facing()));

    render_items(out, world);
    render_ahead(out, world);
}

/// Item names and their images, one per display slot. An uncapped world
/// shows everything.
pub fn render_items(out: &mut Output, world: &world::World) {
    let names = world.item_names();
    let assets = world.item_assets();
    let slots = world.display_slots().unwrap_or(names.len());

    let shown: Vec<String> = names
        .iter()
        .zip(assets.iter())
        .take(slots)
        .map(|(name, asset)| format!("{} [{}]", name, asset))
        .collect();

    if shown.is_empty() {
        return;
    }

    let mut line = format!("You see: {}", shown.join(", "));
    if names.len() > slots {
        line.push_str(&format!(" (and {} more)", names.len() - slots));
    }
    out.items(line);
}

pub fn render_ahead(out: &mut Output, world: &world::World) {
    if world.can_move_forward() {
        out.set_ahead(format!("You can walk {}.", world.current_direction()));
    } else {
        out.set_ahead("Nothing ahead.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;

    fn five_items(slots: Option<usize>) -> world::World {
        let mut builder = world::World::builder("w")
            .location("a", world::compass_views("a"))
            .display_slots(slots);
        for n in ["A", "B", "C", "D", "E"] {
            builder = builder.item("a", n, format!("{n}.png"));
        }
        builder.build().unwrap()
    }

    #[test]
    fn shows_as_many_items_as_the_world_has_slots() {
        let mut out = Output::new();
        render_items(&mut out, &five_items(Some(5)));
        assert_eq!(
            out.blocks,
            vec![OutputBlock::Items(
                "You see: A [A.png], B [B.png], C [C.png], D [D.png], E [E.png]".into()
            )]
        );
    }

    #[test]
    fn overflow_beyond_the_slots_is_counted() {
        let mut out = Output::new();
        render_items(&mut out, &five_items(Some(3)));
        assert_eq!(
            out.blocks,
            vec![OutputBlock::Items(
                "You see: A [A.png], B [B.png], C [C.png] (and 2 more)".into()
            )]
        );

        let mut out = Output::new();
        render_items(&mut out, &five_items(None));
        assert!(matches!(&out.blocks[0], OutputBlock::Items(l) if l.ends_with("E [E.png]")));
    }
}
