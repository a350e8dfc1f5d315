use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::warn;

use courtyard_walk::Session;
use courtyard_walk::engine::{Output, OutputBlock};
use courtyard_walk::world::{self, World};

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n== {} ==", t);
                printed_anything = true;
            }
            OutputBlock::View(asset) => {
                println!("[view: {}]", asset);
                printed_anything = true;
            }
            OutputBlock::Items(line) | OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Ahead(line) => {
                println!("\n{}", line);
                printed_anything = true;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let world = world::load_world_from_file(&path)
                .with_context(|| format!("failed to load tour file '{}'", path.display()))?;
            println!("Using tour file: {}", path.display());
            world
        }
        None => World::vilnius().context("failed to build the built-in tour")?,
    };

    for problem in world::validate_world(&world) {
        warn!("{}", problem.message);
    }

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!();
    println!("Type 'help' for commands, 'quit' to exit.");

    let mut session = Session::new(world);
    flush_output(session.initialize());

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (out, quit) = session.step(input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
