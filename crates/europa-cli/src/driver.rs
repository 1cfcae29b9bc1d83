//! The main menu loop and the combat loop.
//!
//! The driver only reads choices and renders events. Every rule lives in
//! [`Game`]; rejected actions come back as errors and are shown as-is.

use std::io;

use colored::Colorize;
use tracing::debug;

use europa_combat::CombatAction;
use europa_core::Describe;
use europa_game::{Game, GameEvent, GameResult};

use crate::console::Console;
use crate::render;

const MAIN_MENU: [&str; 8] = [
    "Examine area",
    "Move to another location",
    "Interact with environment",
    "Pick up item",
    "Use item",
    "Check inventory",
    "Status report / quests",
    "Quit",
];

const COMBAT_MENU: [&str; 2] = ["Attack", "Use EMP (overcharge)"];

const BACK: &str = "Back";

/// Play until the player escapes, quits, or input runs out.
pub fn run<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    console.say(&render::location_view(game.current_location()))?;

    while !game.is_over() {
        if game.in_combat() {
            combat_round(game, console)?;
        } else {
            main_menu(game, console)?;
        }
    }

    let report = game.status();
    if game.has_escaped() {
        console.say(&format!("\n{}", "VICTORY!".green().bold()))?;
    } else {
        console.say("\nThe station hums on without you. Goodbye.")?;
    }
    console.say(&render::final_statistics(&report))
}

fn main_menu<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    console.say(&render::menu("Options:", &MAIN_MENU))?;
    let Some(choice) = console.request_choice("Enter your choice (1-8): ", MAIN_MENU.len())?
    else {
        game.quit();
        return Ok(());
    };
    debug!(choice, "main menu");

    match choice {
        0 => console.say(&render::location_view(game.current_location())),
        1 => move_menu(game, console),
        2 => interact_menu(game, console),
        3 => pick_up_menu(game, console),
        4 => use_menu(game, console),
        5 => console.say(&render::inventory_table(game.player().inventory())),
        6 => console.say(&render::status_tables(&game.status())),
        _ => confirm_quit(game, console),
    }
}

fn move_menu<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    let mut entries: Vec<&str> = game.locations().iter().map(|l| l.name()).collect();
    entries.push(BACK);
    let Some(index) = choose(console, "Available locations:", &entries)? else {
        return Ok(());
    };
    let moved = show(console, game.move_to(index))?;
    if moved && !game.in_combat() {
        console.say(&render::location_view(game.current_location()))?;
    }
    Ok(())
}

fn interact_menu<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    let location = game.current_location();
    if location.interactions().is_empty() {
        return console.say("No interactions available here.");
    }
    let mut entries: Vec<&str> = location.interactions().iter().map(String::as_str).collect();
    entries.push(BACK);
    let Some(index) = choose(console, "Available interactions:", &entries)? else {
        return Ok(());
    };
    show(console, game.interact_at(index)).map(|_| ())
}

fn pick_up_menu<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    let items = game.current_location().items();
    if items.is_empty() {
        return show(console, game.pick_up(0)).map(|_| ());
    }
    let mut entries: Vec<String> = items
        .iter()
        .map(|item| format!("{}: {}", item.name(), item.description()))
        .collect();
    entries.push(BACK.to_string());
    let Some(index) = choose(console, "Available items to pick up:", &entries)? else {
        return Ok(());
    };
    show(console, game.pick_up(index)).map(|_| ())
}

fn use_menu<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    let inventory = game.player().inventory();
    if inventory.is_empty() {
        return show(console, game.use_item(0)).map(|_| ());
    }
    let mut entries: Vec<String> = inventory
        .iter()
        .map(|item| format!("{}: {}", item.name(), item.use_description()))
        .collect();
    entries.push(BACK.to_string());
    let Some(index) = choose(console, "Choose an item to use:", &entries)? else {
        return Ok(());
    };
    show(console, game.use_item(index)).map(|_| ())
}

fn confirm_quit<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    let answer = console.request_text("Are you sure you want to quit? (y/n): ")?;
    match answer {
        None => game.quit(),
        Some(a) if a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes") => game.quit(),
        Some(_) => {}
    }
    Ok(())
}

fn combat_round<C: Console>(game: &mut Game, console: &mut C) -> io::Result<()> {
    if let Some(encounter) = game.encounter() {
        console.say(&render::combat_status(encounter))?;
    }
    console.say(&render::menu("Your move:", &COMBAT_MENU))?;
    let Some(choice) = console.request_choice("Choose (1-2): ", COMBAT_MENU.len())? else {
        game.quit();
        return Ok(());
    };
    let action = if choice == 1 {
        CombatAction::Overcharge
    } else {
        CombatAction::Attack
    };
    debug!(%action, "combat turn");
    show(console, game.combat_turn(action))?;
    if !game.in_combat() && !game.is_over() {
        console.say(&render::location_view(game.current_location()))?;
    }
    Ok(())
}

/// Offer a menu whose last entry is "Back". Returns `None` for Back or end of input.
fn choose<C: Console, S: AsRef<str>>(
    console: &mut C,
    heading: &str,
    entries: &[S],
) -> io::Result<Option<usize>> {
    console.say(&render::menu(heading, entries))?;
    let prompt = format!("Choose (1-{}): ", entries.len());
    Ok(console
        .request_choice(&prompt, entries.len())?
        .filter(|&index| index + 1 < entries.len()))
}

/// Render an action's events, or its error. Returns true on success.
fn show<C: Console>(console: &mut C, result: GameResult<Vec<GameEvent>>) -> io::Result<bool> {
    match result {
        Ok(events) => {
            for event in &events {
                console.render(event)?;
            }
            Ok(true)
        }
        Err(e) => {
            console.say(&e.to_string().yellow().to_string())?;
            Ok(false)
        }
    }
}
