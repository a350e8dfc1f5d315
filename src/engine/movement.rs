use crate::engine::output::Output;
use crate::engine::render::{render_ahead, render_items, render_view};
use crate::world;

enum Motion {
    Left,
    Right,
    Around,
    Forward,
}

fn parse_motion(cmd: &str) -> Option<Motion> {
    let tokens: Vec<String> = cmd.split_whitespace().map(|t| t.to_lowercase()).collect();

    // "turn left", "go forward", "walk" etc.
    let rest: Vec<&str> = match tokens.first().map(String::as_str) {
        Some("turn") | Some("go") | Some("walk") | Some("move") => {
            tokens[1..].iter().map(String::as_str).collect()
        }
        _ => tokens.iter().map(String::as_str).collect(),
    };

    match (tokens.first().map(String::as_str), rest.as_slice()) {
        (Some("go") | Some("walk") | Some("move"), []) => Some(Motion::Forward),
        (_, ["left"] | ["l"]) => Some(Motion::Left),
        (_, ["right"] | ["r"]) => Some(Motion::Right),
        (_, ["around"] | ["back"] | ["b"]) => Some(Motion::Around),
        (_, ["forward"] | ["forwards"] | ["ahead"] | ["f"]) => Some(Motion::Forward),
        _ => None,
    }
}

/// Returns false when `cmd` is not a movement command at all.
pub fn try_handle_movement(out: &mut Output, world: &mut world::World, cmd: &str) -> bool {
    let Some(motion) = parse_motion(cmd) else {
        return false;
    };

    match motion {
        Motion::Left => {
            let view = world.go_left().to_string();
            out.view(view);
            out.say(format!("You turn left to face {}.", world.current_direction()));
        }
        Motion::Right => {
            let view = world.go_right().to_string();
            out.view(view);
            out.say(format!("You turn right to face {}.", world.current_direction()));
        }
        Motion::Around => {
            let view = world.go_around().to_string();
            out.view(view);
            out.say(format!("You turn around to face {}.", world.current_direction()));
        }
        Motion::Forward => {
            if !world.can_move_forward() {
                out.say("You can't go that way.");
                return true;
            }
            world.go_forward();
            out.say(format!("You walk {}.", world.current_direction()));
            render_view(out, world);
            return true;
        }
    }

    render_items(out, world);
    render_ahead(out, world);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;

    #[test]
    fn parses_motions() {
        assert!(matches!(parse_motion("L"), Some(Motion::Left)));
        assert!(matches!(parse_motion("turn right"), Some(Motion::Right)));
        assert!(matches!(parse_motion("turn around"), Some(Motion::Around)));
        assert!(matches!(parse_motion("go"), Some(Motion::Forward)));
        assert!(matches!(parse_motion("go forward"), Some(Motion::Forward)));
        assert!(parse_motion("turn").is_none());
        assert!(parse_motion("pick basket").is_none());
        assert!(parse_motion("").is_none());
    }

    #[test]
    fn blocked_forward_keeps_the_viewer_in_place() {
        let mut world = world::World::vilnius().unwrap();
        world.go_right();
        let mut out = Output::new();

        assert!(try_handle_movement(&mut out, &mut world, "forward"));
        assert_eq!(world.current_location().name(), "outside");
        assert_eq!(out.blocks, vec![OutputBlock::Text("You can't go that way.".into())]);
    }

    #[test]
    fn forward_renders_the_new_location() {
        let mut world = world::World::vilnius().unwrap();
        let mut out = Output::new();

        assert!(try_handle_movement(&mut out, &mut world, "f"));
        assert_eq!(out.blocks[1], OutputBlock::Title("sarbievijus".into()));
        assert_eq!(out.last_view(), Some("sarbievijusNorth.jpg"));
        assert_eq!(
            out.blocks.last(),
            Some(&OutputBlock::Ahead("You can walk north.".into()))
        );
    }
}
