pub mod engine;
pub mod world;

use engine::{Output, handle_inventory, handle_pick, handle_put, render_view, try_handle_movement};
use world::World;

pub use world::{load_world_from_file, load_world_from_str};

const HELP: &str = "Commands: left (l), right (r), around (b), forward (f), look, \
pick <item>, put <item>, inventory (i), quit.";

/// One viewer walking one world. The world is handed in, so callers decide
/// whether it is the built-in tour or one loaded from a file.
pub struct Session {
    pub world: World,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmTour {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmTour {
        /// Create a tour from TOML text, or the built-in courtyards when the text is empty.
        #[wasm_bindgen(constructor)]
        pub fn new(tour_toml: &str) -> Result<WasmTour, JsValue> {
            let world = if tour_toml.trim().is_empty() {
                World::vilnius()
            } else {
                load_world_from_str(tour_toml)
            }
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmTour {
                session: Session::new(world),
            })
        }

        /// Initial render output.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            let out = self.session.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a viewer command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Session {
    pub fn new(world: World) -> Self {
        Session { world }
    }

    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_view(&mut out, &self.world);
        out
    }

    /// Process a single viewer input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        let input = input.trim();
        let lower = input.to_lowercase();
        let mut quit = false;

        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.collect::<Vec<&str>>().join(" ");

        if lower.is_empty() {
            // nothing to do
        } else if lower == "quit" || lower == "exit" {
            out.say("Goodbye.");
            quit = true;
        } else if lower == "help" || lower == "?" {
            out.say(HELP);
        } else if lower == "inventory" || lower == "i" {
            handle_inventory(&mut out, &self.world);
        } else if lower == "look" {
            render_view(&mut out, &self.world);
        } else if matches!(verb.as_str(), "pick" | "take" | "get") {
            let target = rest.strip_prefix("up ").unwrap_or(&rest);
            handle_pick(&mut out, &mut self.world, target);
        } else if matches!(verb.as_str(), "put" | "drop") {
            let target = rest.strip_suffix(" down").unwrap_or(&rest);
            handle_put(&mut out, &mut self.world, target);
        } else if try_handle_movement(&mut out, &mut self.world, &lower) {
            // handled
        } else {
            out.say("I don't understand that command.");
        }

        (out, quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::OutputBlock;

    fn session() -> Session {
        Session::new(World::vilnius().unwrap())
    }

    #[test]
    fn initial_render_shows_outside_north() {
        let out = session().initialize();
        assert_eq!(out.blocks[0], OutputBlock::Title("outside".into()));
        assert_eq!(out.last_view(), Some("outsideNorth.jpg"));
    }

    #[test]
    fn pick_up_and_put_down_phrasing() {
        let mut s = session();
        s.step("pick up basket");
        assert!(s.world.is_collected("Basket"));
        s.step("put basket down");
        assert!(!s.world.is_collected("Basket"));
        assert_eq!(s.world.item_names(), vec!["Basket"]);
    }

    #[test]
    fn quit_and_unknown_commands() {
        let mut s = session();
        let (out, quit) = s.step("dance");
        assert!(!quit);
        assert_eq!(out.blocks, vec![OutputBlock::Text("I don't understand that command.".into())]);

        let (_, quit) = s.step("QUIT");
        assert!(quit);
    }

    #[test]
    fn empty_input_is_ignored() {
        let (out, quit) = session().step("   ");
        assert!(out.blocks.is_empty());
        assert!(!quit);
    }
}
