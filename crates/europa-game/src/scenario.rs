//! The fixed world content: locations, items, quests, and the enemy roster.
//!
//! Indices into the built vectors are stable and exported as constants so
//! the orchestrator and item effects can refer to places and enemies
//! without string lookups.

use europa_combat::Combatant;
use europa_core::{EffectContext, Item, Location, Quest};

use crate::enemy::Enemy;
use crate::flags;

/// Starting location.
pub const MAINTENANCE_BAY: usize = 0;
/// Where the terminal and keycard are.
pub const TERMINAL_ROOM: usize = 1;
/// Guarded area holding the EMP device.
pub const SECURITY_POST: usize = 2;
/// The way out.
pub const AIRLOCK: usize = 3;

/// Roster index of the Security Bot.
pub const SECURITY_BOT: usize = 0;
/// Roster index of the Elite Guard Bot.
pub const ELITE_GUARD: usize = 1;

/// Search the workbench in the Maintenance Bay.
pub const EXAMINE_WORKBENCH: &str = "examine workbench";
/// Look inside the emergency locker in the Maintenance Bay.
pub const INSPECT_EMERGENCY_LOCKER: &str = "inspect emergency locker";
/// Attempt to break into the terminal.
pub const HACK_TERMINAL: &str = "hack terminal";
/// Read the terminal's diagnostics.
pub const EXAMINE_TERMINAL: &str = "examine terminal";
/// Study the security systems.
pub const EXAMINE_SECURITY: &str = "examine security";
/// Try to slip past the Security Post.
pub const SNEAK_PAST_GUARDS: &str = "sneak past guards";
/// Inspect the airlock.
pub const CHECK_AIRLOCK: &str = "check airlock";
/// Cycle the airlock.
pub const ACTIVATE_AIRLOCK: &str = "activate airlock";

/// Name of the datapad item.
pub const DATAPAD: &str = "Datapad";
/// Name of the keycard item.
pub const KEYCARD: &str = "Keycard";
/// Name of the EMP item that enables overcharged strikes.
pub const EMP_DEVICE: &str = "EMP Device";
/// Name of the spacesuit item.
pub const SPACESUIT: &str = "Spacesuit";
/// Name of the fixed console at the Security Post.
pub const SECURITY_CONSOLE: &str = "Security Console";

/// Line shown when the airlock is activated without a sealed suit.
pub const AIRLOCK_REFUSAL: &str =
    "The airlock controls flash red: no sealed spacesuit detected. The cycle is aborted.";

/// Name of the main quest.
pub const ESCAPE_QUEST: &str = "Escape Europa";

/// Build the four station locations with their interactions and items.
pub fn build_locations() -> Vec<Location> {
    vec![
        Location::new(
            "Maintenance Bay",
            "A sterile white room filled with repair equipment.",
        )
        .with_interaction(
            EXAMINE_WORKBENCH,
            "You find various repair tools and a hidden datapad.",
        )
        .with_interaction(
            INSPECT_EMERGENCY_LOCKER,
            "The emergency locker is empty. A faded label reads: EVA suits stored at the airlock.",
        )
        .with_item(datapad()),
        Location::new(
            "Terminal Room",
            "A quiet room with a terminal. Red light pulses steadily.",
        )
        .with_interaction(
            HACK_TERMINAL,
            "You begin hacking the terminal... Security has been alerted!",
        )
        .with_interaction(
            EXAMINE_TERMINAL,
            "The terminal displays various system diagnostics.",
        )
        .with_item(keycard()),
        Location::new(
            "Security Post",
            "A heavily guarded area with advanced security bots.",
        )
        .with_interaction(
            EXAMINE_SECURITY,
            "The security systems are active but might be vulnerable to EMPs.",
        )
        .with_interaction(
            SNEAK_PAST_GUARDS,
            "You edge along the wall toward the far door... a red optic swivels toward you.",
        )
        .with_item(emp_device())
        .with_item(
            Item::new(SECURITY_CONSOLE, "Bolted to the floor, watching every corridor.").fixed(),
        ),
        Location::new(
            "Airlock",
            "The gateway between the station and the void of space.",
        )
        .with_interaction(
            CHECK_AIRLOCK,
            "The airlock appears functional. A spacesuit would be required for EVA.",
        )
        .with_interaction(
            ACTIVATE_AIRLOCK,
            "The airlock cycles... This is your chance to escape!",
        )
        .with_item(spacesuit()),
    ]
}

fn datapad() -> Item {
    Item::new(DATAPAD, "A tablet containing classified information").with_effect(
        "Access classified information about the mysterious signals",
        |ctx: &mut EffectContext<'_>| {
            ctx.say("You carefully read through the classified information...");
            ctx.say(
                "The data reveals coordinates for a potentially habitable planet beyond Pluto.",
            );
            ctx.award_flag(flags::READ_CLASSIFIED_INFO, 20);
        },
    )
}

fn keycard() -> Item {
    Item::new(KEYCARD, "A security keycard").with_effect(
        "Use at terminals to gain access",
        |ctx: &mut EffectContext<'_>| {
            if ctx.location() == TERMINAL_ROOM {
                ctx.say("You swipe the keycard through the terminal...");
                ctx.award_flag(flags::TERMINAL_ACCESS_GRANTED, 15);
            } else {
                ctx.say("There's nowhere to use the keycard here.");
            }
        },
    )
}

fn emp_device() -> Item {
    Item::new(EMP_DEVICE, "Can disable security systems").with_effect(
        "Overcharge your strikes against robots in combat",
        |ctx: &mut EffectContext<'_>| {
            ctx.say("The EMP Device hums in your hand. Save its charge for a fight with a robot.");
        },
    )
}

fn spacesuit() -> Item {
    Item::new(SPACESUIT, "Required for space travel").with_effect(
        "Required for EVA activities",
        |ctx: &mut EffectContext<'_>| {
            if ctx.location() == AIRLOCK {
                ctx.say("You put on the spacesuit, checking all seals...");
                ctx.award_flag(flags::SPACESUIT_EQUIPPED, 10);
            } else {
                ctx.say("You should wait until you're at the airlock.");
            }
        },
    )
}

/// Build the quest list.
pub fn build_quests() -> Vec<Quest> {
    vec![
        Quest::new(ESCAPE_QUEST, "Find a way to escape and reveal the truth")
            .with_objective("Access classified data", 1)
            .with_objective("Bypass security", 1)
            .with_objective("Escape via airlock", 1),
    ]
}

/// Build the enemy roster.
pub fn build_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(
            Combatant::enemy("Security Bot", 50, 10, 3),
            "Robot",
            flags::SECURITY_DEFEATED,
            50,
        ),
        Enemy::new(
            Combatant::enemy("Elite Guard Bot", 75, 15, 5),
            "Robot",
            flags::ELITE_GUARD_DEFEATED,
            50,
        ),
    ]
}
