//! Turning game state and events into terminal text.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use europa_combat::{CombatAction, Encounter};
use europa_core::{Describe, Inventory, Location};
use europa_game::{GameEvent, StatusReport};

const STATION_ART: &str = r"
                 .        *            .
        *    ____________________________    .
            /  ____  ____  ____  ____   /|
     .     /  |____||____||____||____| / |      *
          /______________________________/  |
          |  [==]   E U R O P A   [==]  |  /
     *    |______________________________|/    .
                 |  |          |  |
              ___|__|___    ___|__|___
             |__________|  |__________|
   .                  *                     .
";

/// The title screen.
pub fn title() -> String {
    format!(
        "{}\n{}\n{}",
        STATION_ART.cyan(),
        "            EUROPA: THE LAST FRONTIER".bold(),
        "   Welcome to Space Station Europa. Your mission: escape and reveal the truth.",
    )
}

/// Whether an event reads as story text and should be paced.
pub fn is_story(event: &GameEvent) -> bool {
    matches!(
        event,
        GameEvent::Narration(_)
            | GameEvent::CombatStarted { .. }
            | GameEvent::CombatRound { .. }
            | GameEvent::CombatVictory { .. }
            | GameEvent::CombatDefeat { .. }
            | GameEvent::Escaped
    )
}

/// Text for one event.
pub fn event_text(event: &GameEvent) -> String {
    match event {
        GameEvent::Narration(text) => text.clone(),
        GameEvent::Notice(text) => text.yellow().to_string(),
        GameEvent::Moved { location } => {
            format!("You make your way to the {}.", location.blue().bold())
        }
        GameEvent::ItemPickedUp(item) => format!("Picked up {}", item.green()),
        GameEvent::FlagSet(flag) => format!("[{}]", flag.replace('_', " ")).dimmed().to_string(),
        GameEvent::ExperienceGained(xp) => format!("+{xp} XP").cyan().to_string(),
        GameEvent::LevelUp(level) => format!("Level up! You are now level {level}.")
            .green()
            .bold()
            .to_string(),
        GameEvent::EnergySpent(energy) => {
            format!("EMP deployed successfully! (-{energy} energy)")
                .magenta()
                .to_string()
        }
        GameEvent::CombatStarted {
            enemy,
            enemy_health,
            fighter_health,
        } => format!(
            "{}\nYour Health: {fighter_health} | {enemy}'s Health: {enemy_health}",
            format!("Combat with {enemy} initiated!").red().bold(),
        ),
        GameEvent::CombatRound { enemy, report } => {
            let mut text = match report.action {
                CombatAction::Attack => format!("You deal {} damage!", report.dealt),
                CombatAction::Overcharge => {
                    format!("Your overcharged strike deals {} damage!", report.dealt)
                }
            };
            if let Some(taken) = report.taken {
                text.push_str(&format!("\n{enemy} deals {taken} damage!"));
            }
            text.push_str(&format!(
                "\nYour Health: {}\n{enemy}'s Health: {}",
                report.fighter_health, report.enemy_health
            ));
            text
        }
        GameEvent::CombatVictory { enemy } => {
            format!("You defeated {enemy}!").green().bold().to_string()
        }
        GameEvent::CombatDefeat { enemy, health_lost } => format!(
            "{enemy} overpowers you. You stagger back, losing {health_lost} health."
        )
        .red()
        .to_string(),
        GameEvent::ObjectiveCompleted(objective) => {
            format!("Objective complete: {objective}").green().to_string()
        }
        GameEvent::QuestCompleted(quest) => {
            format!("Quest complete: {quest}").green().bold().to_string()
        }
        GameEvent::Escaped => "Congratulations! You've escaped and can now reveal the truth!"
            .green()
            .bold()
            .to_string(),
    }
}

/// The "examine area" view of a location.
pub fn location_view(location: &Location) -> String {
    let mut out = format!(
        "\n{} {}\n{}\n",
        "Location:".blue(),
        location.name().blue().bold(),
        location.description()
    );
    if !location.items().is_empty() {
        out.push_str("\nYou see:\n");
        for item in location.items() {
            out.push_str(&format!("- {}: {}\n", item.name(), item.description()));
        }
    }
    out.push_str("\nPossible interactions:\n");
    for key in location.interactions() {
        out.push_str(&format!("- {key}\n"));
    }
    out
}

/// A numbered menu, one entry per line.
pub fn menu<S: AsRef<str>>(heading: &str, entries: &[S]) -> String {
    let mut out = format!("\n{}\n", heading.bold());
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, entry.as_ref()));
    }
    out
}

/// Carried items as a table.
pub fn inventory_table(inventory: &Inventory) -> String {
    if inventory.is_empty() {
        return "Your inventory is empty.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Description", "Use"]);
    for item in inventory.iter() {
        table.add_row(vec![item.name(), item.description(), item.use_description()]);
    }
    table.to_string()
}

/// Both sides' health during an encounter.
pub fn combat_status(encounter: &Encounter) -> String {
    let fighter = encounter.fighter();
    let enemy = encounter.enemy();
    format!(
        "\n{} {}/{} | {} {}/{}",
        "You:".bold(),
        fighter.health(),
        fighter.max_health(),
        format!("{}:", enemy.name()).red().bold(),
        enemy.health(),
        enemy.max_health(),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// The status report and quest log.
pub fn status_tables(report: &StatusReport) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Status", ""]);
    table.add_row(vec!["Name".to_string(), report.name.clone()]);
    table.add_row(vec!["Location".to_string(), report.location.clone()]);
    table.add_row(vec![
        "Health".to_string(),
        format!("{}/{}", report.health, report.max_health),
    ]);
    table.add_row(vec![
        "Energy".to_string(),
        format!("{}/{}", report.energy, report.max_energy),
    ]);
    table.add_row(vec![
        "Level".to_string(),
        format!("{} ({} XP)", report.level, report.experience),
    ]);
    table.add_row(vec![
        "Terminal Hacked".to_string(),
        yes_no(report.terminal_hacked).to_string(),
    ]);
    table.add_row(vec![
        "Security Defeated".to_string(),
        yes_no(report.security_defeated).to_string(),
    ]);
    table.add_row(vec![
        "Spacesuit Equipped".to_string(),
        yes_no(report.spacesuit_equipped).to_string(),
    ]);
    table.add_row(vec!["Escaped".to_string(), yes_no(report.escaped).to_string()]);

    let mut quests = Table::new();
    quests.set_content_arrangement(ContentArrangement::Dynamic);
    quests.set_header(vec!["Quest", "Objective", "Done"]);
    for quest in &report.quests {
        for objective in &quest.objectives {
            quests.add_row(vec![
                quest.name.as_str(),
                objective.description.as_str(),
                yes_no(objective.completed),
            ]);
        }
    }

    format!("{table}\n{quests}")
}

/// End-of-session summary.
pub fn final_statistics(report: &StatusReport) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Final Statistics", ""]);
    table.add_row(vec!["Name".to_string(), report.name.clone()]);
    table.add_row(vec![
        "Level".to_string(),
        format!("{} ({} XP)", report.level, report.experience),
    ]);
    table.add_row(vec!["Steps taken".to_string(), report.steps.to_string()]);
    table.add_row(vec![
        "Items collected".to_string(),
        report.items_collected.to_string(),
    ]);
    table.add_row(vec![
        "Locations explored".to_string(),
        format!("{}/{}", report.locations_explored, report.locations_total),
    ]);
    table.add_row(vec!["Escaped".to_string(), yes_no(report.escaped).to_string()]);
    table.to_string()
}
