//! Wildlands - demo entry point
//!
//! A minimal text loop over the simulation core: reads commands from
//! stdin and prints the session log. Real rendering and input live
//! outside this crate.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;

use wildlands::advisor::HttpAdvisor;
use wildlands::player::EquipSlot;
use wildlands::{Catalog, Game};

const WORLD_SIZE: i32 = 40;
/// Simulated time credited to each entered command
const COMMAND_TIME: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting wildlands v{}", env!("CARGO_PKG_VERSION"));

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xda7e);

    let catalog = Catalog::load()?;
    let mut game = Game::new(catalog, WORLD_SIZE, seed, "warrior", "Wanderer")?;
    if let Ok(url) = std::env::var("WILDLANDS_ADVISOR_URL") {
        game = game.with_advisor(Box::new(HttpAdvisor::new(url)));
    }

    println!("Wildlands. Commands: n/s/e/w, status, use <item>, equip <item>, unequip <slot>, reset <seed>, quit");
    print_surroundings(&game);

    let stdin = io::stdin();
    let mut printed = 0;
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();

        game.update(COMMAND_TIME);
        let result = match (words.next(), words.next()) {
            (Some("n"), _) => game.move_player(0, -1).err(),
            (Some("s"), _) => game.move_player(0, 1).err(),
            (Some("w"), _) => game.move_player(-1, 0).err(),
            (Some("e"), _) => game.move_player(1, 0).err(),
            (Some("use"), Some(id)) => game.use_item(id).err(),
            (Some("equip"), Some(id)) => game.equip(id).err(),
            (Some("unequip"), Some(slot)) => match parse_slot(slot) {
                Some(slot) => game.unequip(slot).err(),
                None => {
                    println!("unknown slot '{slot}'");
                    None
                }
            },
            (Some("reset"), Some(seed)) => match seed.parse() {
                Ok(seed) => game.reset_world(seed).err().map(Into::into),
                Err(_) => {
                    println!("reset needs a numeric seed");
                    None
                }
            },
            (Some("status"), _) => {
                print_status(&game);
                None
            }
            (Some("quit"), _) => break,
            (Some(other), _) => {
                println!("unknown command '{other}'");
                None
            }
            (None, _) => None,
        };
        // Recoverable failures already show up in the session log.
        drop(result);

        for message in &game.messages()[printed..] {
            println!("{}", message.text);
        }
        printed = game.messages().len();
        print_surroundings(&game);
    }

    Ok(())
}

fn parse_slot(name: &str) -> Option<EquipSlot> {
    match name {
        "weapon" => Some(EquipSlot::Weapon),
        "helmet" => Some(EquipSlot::Helmet),
        "armor" => Some(EquipSlot::Armor),
        "belt" => Some(EquipSlot::Belt),
        _ => None,
    }
}

/// Print a small window of terrain around the player
fn print_surroundings(game: &Game) {
    const RADIUS: i32 = 6;
    let player = game.player();
    for y in (player.y - RADIUS)..=(player.y + RADIUS) {
        let mut row = String::new();
        for x in (player.x - RADIUS)..=(player.x + RADIUS) {
            let glyph = if (x, y) == (player.x, player.y) {
                player.icon
            } else {
                match game.world().tile(x, y) {
                    Some(tile) => tile
                        .monster
                        .as_ref()
                        .map(|m| m.template.icon)
                        .or_else(|| tile.item.as_ref().map(|i| i.template.icon))
                        .unwrap_or_else(|| tile.terrain.glyph()),
                    None => ' ',
                }
            };
            row.push(glyph);
        }
        println!("{row}");
    }
}

fn print_status(game: &Game) {
    let player = game.player();
    println!(
        "{} the {} ({}) hp {}/{} energy {}/{} at ({}, {})",
        player.name,
        player.class_id,
        player.race,
        player.hp.current(),
        player.hp.max(),
        player.energy.current(),
        player.energy.max(),
        player.x,
        player.y
    );
    for item in player.inventory.items() {
        println!("  pack: {} x{}", item.name(), item.quantity);
    }
    for slot in [EquipSlot::Weapon, EquipSlot::Helmet, EquipSlot::Armor, EquipSlot::Belt] {
        if let Some(item) = player.equipment.get(slot) {
            println!("  {slot}: {}", item.name());
        }
    }
}
