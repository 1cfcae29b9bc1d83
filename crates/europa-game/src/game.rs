//! The game orchestrator.
//!
//! `Game` owns the player, the station, the quest list, the enemy roster
//! and the active encounter. Every public action validates its input,
//! mutates state, then runs the after-action rules in a fixed order:
//! the Terminal Room ambush, quest objective refresh, the win check, and
//! level-up detection.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use europa_combat::{CombatAction, Combatant, Encounter, EncounterState};
use europa_core::{Describe, EffectContext, Location, Player, Quest};

use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::error::{GameError, GameResult};
use crate::event::GameEvent;
use crate::flags;
use crate::scenario::{
    self, AIRLOCK, ELITE_GUARD, MAINTENANCE_BAY, SECURITY_BOT, SECURITY_POST, TERMINAL_ROOM,
};
use crate::status::{ObjectiveStatus, QuestStatus, StatusReport};

/// Experience for picking up an item.
pub const PICKUP_XP: u32 = 5;
/// Experience for using a usable item.
pub const ITEM_USE_XP: u32 = 10;
/// Persistent health lost when an encounter is lost.
pub const DEFEAT_PENALTY: u32 = 50;
/// Energy spent on one overcharged strike.
pub const OVERCHARGE_ENERGY_COST: i32 = 25;

const NO_ITEMS_HERE: &str = "There are no items to pick up here.";
const CANNOT_PICK_UP: &str = "This item cannot be picked up.";
const CANNOT_USE: &str = "This item cannot be used.";
const NOTHING_TO_USE: &str = "You don't have any items to use.";
const AMBUSH: &str = "A Security Bot has detected your presence!";
const OVERCHARGE_UNAVAILABLE: &str =
    "The EMP Device needs to be carried and charged with 25 energy. You attack normally.";
const GUARDS_CLEARED: &str = "The post is quiet now. You slip through unchallenged.";

struct ActiveEncounter {
    enemy: usize,
    encounter: Encounter,
}

/// A single play session.
pub struct Game {
    config: GameConfig,
    player: Player,
    locations: Vec<Location>,
    current: usize,
    visited: BTreeSet<usize>,
    quests: Vec<Quest>,
    enemies: Vec<Enemy>,
    encounter: Option<ActiveEncounter>,
    game_over: bool,
    escaped: bool,
    level: u32,
    rng: StdRng,
}

impl Game {
    /// Start a new session in the Maintenance Bay.
    ///
    /// Fails if the player name is empty after trimming.
    pub fn new(name: &str, config: GameConfig) -> GameResult<Self> {
        let player = Player::new(name)?;
        let level = player.progress().level();
        debug!(player = player.name(), seed = config.seed, "session started");
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            player,
            locations: scenario::build_locations(),
            current: MAINTENANCE_BAY,
            visited: BTreeSet::from([MAINTENANCE_BAY]),
            quests: scenario::build_quests(),
            enemies: scenario::build_enemies(),
            encounter: None,
            game_over: false,
            escaped: false,
            level,
        })
    }

    /// The configuration this session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Every location, in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Index of the location the player is in.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The location the player is in.
    pub fn current_location(&self) -> &Location {
        &self.locations[self.current]
    }

    /// The quest list.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// The enemy roster.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// The encounter in progress, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref().map(|active| &active.encounter)
    }

    /// Whether an encounter is in progress.
    pub fn in_combat(&self) -> bool {
        self.encounter.is_some()
    }

    /// Whether the session has ended, by escape or by quitting.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether the player escaped.
    pub fn has_escaped(&self) -> bool {
        self.escaped
    }

    /// Whether an overcharged strike is possible right now.
    pub fn can_overcharge(&self) -> bool {
        self.player.inventory().contains(scenario::EMP_DEVICE)
            && self.player.vitals().energy.current() >= OVERCHARGE_ENERGY_COST
    }

    /// Move to the location at `index`.
    pub fn move_to(&mut self, index: usize) -> GameResult<Vec<GameEvent>> {
        self.ensure_exploring()?;
        if index >= self.locations.len() {
            return Err(GameError::InvalidLocation(index));
        }

        self.current = index;
        self.visited.insert(index);
        self.player.progress_mut().record_step();
        let location = self.locations[index].name().to_string();
        debug!(%location, "moved");

        let mut events = vec![GameEvent::Moved { location }];
        self.after_action(&mut events);
        Ok(events)
    }

    /// Run the interaction `key` at the current location.
    ///
    /// Unknown keys get the location's default response.
    pub fn interact(&mut self, key: &str) -> GameResult<Vec<GameEvent>> {
        self.ensure_exploring()?;
        let mut events = Vec::new();
        self.apply_interaction(key, &mut events);
        self.after_action(&mut events);
        Ok(events)
    }

    /// Run the interaction at position `index` in the current location's menu.
    pub fn interact_at(&mut self, index: usize) -> GameResult<Vec<GameEvent>> {
        self.ensure_exploring()?;
        let key = self
            .current_location()
            .interactions()
            .get(index)
            .cloned()
            .ok_or(GameError::InvalidInteraction(index))?;
        self.interact(&key)
    }

    /// Pick up the item at `index` in the current location.
    pub fn pick_up(&mut self, index: usize) -> GameResult<Vec<GameEvent>> {
        self.ensure_exploring()?;
        let location = &mut self.locations[self.current];
        if location.items().is_empty() {
            return Ok(vec![GameEvent::Notice(NO_ITEMS_HERE.to_string())]);
        }
        let Some(candidate) = location.items().get(index) else {
            return Err(GameError::InvalidItem(index));
        };
        if !candidate.can_pick_up() {
            return Ok(vec![GameEvent::Notice(CANNOT_PICK_UP.to_string())]);
        }
        let Some(item) = location.take_item(index) else {
            return Err(GameError::InvalidItem(index));
        };

        let name = item.name().to_string();
        debug!(item = %name, "picked up");
        self.player.inventory_mut().add(item);
        let progress = self.player.progress_mut();
        progress.record_pickup();
        progress.gain_experience(PICKUP_XP);

        let mut events = vec![
            GameEvent::ItemPickedUp(name),
            GameEvent::ExperienceGained(PICKUP_XP),
        ];
        self.after_action(&mut events);
        Ok(events)
    }

    /// Use the item at `index` in the inventory.
    pub fn use_item(&mut self, index: usize) -> GameResult<Vec<GameEvent>> {
        self.ensure_exploring()?;
        if self.player.inventory().is_empty() {
            return Ok(vec![GameEvent::Notice(NOTHING_TO_USE.to_string())]);
        }

        let location = self.current;
        let (inventory, vitals, progress) = self.player.split_for_use();
        let item = inventory.get(index).ok_or(GameError::InvalidItem(index))?;
        if !item.can_use() {
            return Ok(vec![GameEvent::Notice(CANNOT_USE.to_string())]);
        }
        debug!(item = item.name(), location, "item used");

        let mut ctx = EffectContext::new(location, vitals, progress);
        item.use_with(&mut ctx);
        let outcome = ctx.finish();
        progress.gain_experience(ITEM_USE_XP);

        let mut events: Vec<GameEvent> = outcome
            .lines
            .into_iter()
            .map(GameEvent::Narration)
            .collect();
        events.extend(outcome.flags_set.into_iter().map(GameEvent::FlagSet));
        events.push(GameEvent::ExperienceGained(outcome.experience + ITEM_USE_XP));
        self.after_action(&mut events);
        Ok(events)
    }

    /// Play one round of the active encounter.
    ///
    /// An `Overcharge` without the EMP Device or enough energy falls back
    /// to a normal attack.
    pub fn combat_turn(&mut self, action: CombatAction) -> GameResult<Vec<GameEvent>> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.encounter.is_none() {
            return Err(GameError::NotInCombat);
        }

        let mut events = Vec::new();
        let action = match action {
            CombatAction::Overcharge if self.can_overcharge() => {
                self.player
                    .vitals_mut()
                    .energy
                    .modify(-OVERCHARGE_ENERGY_COST);
                events.push(GameEvent::EnergySpent(OVERCHARGE_ENERGY_COST));
                CombatAction::Overcharge
            }
            CombatAction::Overcharge => {
                events.push(GameEvent::Notice(OVERCHARGE_UNAVAILABLE.to_string()));
                CombatAction::Attack
            }
            CombatAction::Attack => CombatAction::Attack,
        };

        let Some(active) = self.encounter.as_mut() else {
            return Err(GameError::NotInCombat);
        };
        let report = active.encounter.play_round(action, &mut self.rng)?;
        let finished = report.state.is_over();
        events.push(GameEvent::CombatRound {
            enemy: active.encounter.enemy().name().to_string(),
            report,
        });

        if !finished {
            self.after_action(&mut events);
            return Ok(events);
        }
        // A lost encounter leaves the player one free action before any ambush.
        if self.finish_encounter(&mut events) == EncounterState::Defeat {
            self.settle(&mut events);
        } else {
            self.after_action(&mut events);
        }
        Ok(events)
    }

    /// End the session.
    pub fn quit(&mut self) {
        debug!("session quit");
        self.game_over = true;
    }

    /// Snapshot of the session.
    pub fn status(&self) -> StatusReport {
        let vitals = self.player.vitals();
        let progress = self.player.progress();
        StatusReport {
            name: self.player.name().to_string(),
            location: self.current_location().name().to_string(),
            health: vitals.health.current(),
            max_health: vitals.health.maximum(),
            energy: vitals.energy.current(),
            max_energy: vitals.energy.maximum(),
            level: progress.level(),
            experience: progress.experience(),
            steps: progress.steps(),
            items_collected: progress.items_collected(),
            inventory: self
                .player
                .inventory()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            flags: progress.flags().map(str::to_string).collect(),
            terminal_hacked: progress.has_flag(flags::TERMINAL_HACKED),
            security_defeated: progress.has_flag(flags::SECURITY_DEFEATED),
            spacesuit_equipped: progress.has_flag(flags::SPACESUIT_EQUIPPED),
            escaped: self.escaped,
            locations_explored: self.visited.len(),
            locations_total: self.locations.len(),
            quests: self
                .quests
                .iter()
                .map(|quest| QuestStatus {
                    name: quest.name().to_string(),
                    description: quest.description().to_string(),
                    objectives: quest
                        .objectives()
                        .iter()
                        .map(|o| ObjectiveStatus {
                            description: o.description().to_string(),
                            completed: o.is_completed(),
                        })
                        .collect(),
                    completed: quest.is_completed(),
                })
                .collect(),
        }
    }

    fn ensure_exploring(&self) -> GameResult<()> {
        if self.game_over {
            Err(GameError::GameOver)
        } else if self.encounter.is_some() {
            Err(GameError::InCombat)
        } else {
            Ok(())
        }
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.player.progress().has_flag(flag)
    }

    fn award(&mut self, flag: &str, experience: u32, events: &mut Vec<GameEvent>) {
        if self.player.progress_mut().award_flag(flag, experience) {
            debug!(flag, experience, "flag set");
            events.push(GameEvent::FlagSet(flag.to_string()));
            if experience > 0 {
                events.push(GameEvent::ExperienceGained(experience));
            }
        }
    }

    fn apply_interaction(&mut self, key: &str, events: &mut Vec<GameEvent>) {
        let response = self.locations[self.current].interact(key).to_string();

        if self.current == AIRLOCK && key == scenario::ACTIVATE_AIRLOCK {
            if self.has_flag(flags::SPACESUIT_EQUIPPED) {
                events.push(GameEvent::Narration(response));
                self.award(flags::AIRLOCK_ACTIVATED, 10, events);
            } else {
                events.push(GameEvent::Notice(scenario::AIRLOCK_REFUSAL.to_string()));
            }
            return;
        }

        events.push(GameEvent::Narration(response));
        match (self.current, key) {
            (MAINTENANCE_BAY, scenario::EXAMINE_WORKBENCH) => {
                self.award(flags::EXAMINED_WORKBENCH, 10, events);
            }
            (MAINTENANCE_BAY, scenario::INSPECT_EMERGENCY_LOCKER) => {
                self.award(flags::FOUND_SPACESUIT_HINT, 15, events);
            }
            (TERMINAL_ROOM, scenario::HACK_TERMINAL) => {
                self.award(flags::TERMINAL_HACKED, 0, events);
                if !self.has_flag(flags::SECURITY_DEFEATED) {
                    self.start_encounter(SECURITY_BOT, events);
                }
            }
            (SECURITY_POST, scenario::SNEAK_PAST_GUARDS) => {
                if self.has_flag(flags::ELITE_GUARD_DEFEATED) {
                    events.push(GameEvent::Narration(GUARDS_CLEARED.to_string()));
                } else {
                    self.start_encounter(ELITE_GUARD, events);
                }
            }
            _ => {}
        }
    }

    fn start_encounter(&mut self, enemy: usize, events: &mut Vec<GameEvent>) {
        if self.encounter.is_some() {
            return;
        }
        let fighter = Combatant::fighter(self.player.name(), self.player.progress().level());
        let opponent = self.enemies[enemy].combatant.clone();
        events.push(GameEvent::CombatStarted {
            enemy: opponent.name().to_string(),
            enemy_health: opponent.health(),
            fighter_health: fighter.health(),
        });

        let encounter = Encounter::new(fighter, opponent);
        let decided = encounter.is_over();
        self.encounter = Some(ActiveEncounter { enemy, encounter });
        if decided {
            self.finish_encounter(events);
        }
    }

    fn finish_encounter(&mut self, events: &mut Vec<GameEvent>) -> EncounterState {
        let Some(ActiveEncounter { enemy, encounter }) = self.encounter.take() else {
            return EncounterState::InProgress;
        };
        let state = encounter.state();
        self.enemies[enemy].combatant = encounter.into_enemy();
        let name = self.enemies[enemy].name().to_string();
        debug!(enemy = %name, ?state, "encounter ended");

        match state {
            EncounterState::Victory => {
                events.push(GameEvent::CombatVictory { enemy: name });
                let (flag, reward) = (self.enemies[enemy].defeat_flag, self.enemies[enemy].reward);
                self.award(flag, reward, events);
            }
            EncounterState::Defeat => {
                let health_lost = self.player.suffer_setback(DEFEAT_PENALTY);
                events.push(GameEvent::CombatDefeat {
                    enemy: name,
                    health_lost,
                });
            }
            EncounterState::InProgress => {}
        }
        state
    }

    fn after_action(&mut self, events: &mut Vec<GameEvent>) {
        if !self.game_over
            && self.current == TERMINAL_ROOM
            && self.encounter.is_none()
            && self.has_flag(flags::TERMINAL_ACCESS_GRANTED)
            && !self.has_flag(flags::SECURITY_DEFEATED)
        {
            events.push(GameEvent::Narration(AMBUSH.to_string()));
            self.start_encounter(SECURITY_BOT, events);
        }
        self.settle(events);
    }

    /// The after-action rules that follow the ambush check.
    fn settle(&mut self, events: &mut Vec<GameEvent>) {
        self.refresh_objectives(events);

        if !self.escaped && flags::is_won(self.player.progress()) {
            self.escaped = true;
            self.game_over = true;
            info!(player = self.player.name(), "escaped Europa");
            events.push(GameEvent::Escaped);
        }

        let level = self.player.progress().level();
        if level > self.level {
            self.level = level;
            debug!(level, "level up");
            events.push(GameEvent::LevelUp(level));
        }
    }

    fn refresh_objectives(&mut self, events: &mut Vec<GameEvent>) {
        let progress = self.player.progress();
        let Some(quest) = self
            .quests
            .iter_mut()
            .find(|q| q.name() == scenario::ESCAPE_QUEST)
        else {
            return;
        };

        let was_completed = quest.is_completed();
        for (index, flag) in flags::ESCAPE_OBJECTIVE_FLAGS.iter().enumerate() {
            let before = quest.objectives()[index].is_completed();
            quest.update_objective(index, u32::from(progress.has_flag(flag)));
            let objective = &quest.objectives()[index];
            if objective.is_completed() && !before {
                events.push(GameEvent::ObjectiveCompleted(
                    objective.description().to_string(),
                ));
            }
        }
        if quest.is_completed() && !was_completed {
            events.push(GameEvent::QuestCompleted(quest.name().to_string()));
        }
    }
}
