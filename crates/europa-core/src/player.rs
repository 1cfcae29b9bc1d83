//! The persistent protagonist.
//!
//! A `Player` is created once from the chosen name and lives for the
//! whole session. Its state is split into `Vitals` (health and energy),
//! an `Inventory`, and `Progress` (quest flags and counters) so item
//! effects can borrow the mutable parts while the inventory is read.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::describe::Describe;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::stat::Stat;

/// Starting (and maximum) health.
pub const MAX_HEALTH: i32 = 100;
/// Starting (and maximum) energy.
pub const MAX_ENERGY: i32 = 100;
/// Experience needed per level.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

const PLAYER_DESCRIPTION: &str = "A maintenance worker on Europa";

/// Health and energy gauges.
#[derive(Debug, Clone, Serialize)]
pub struct Vitals {
    /// Health gauge.
    pub health: Stat,
    /// Energy gauge, spent on EMP overcharges.
    pub energy: Stat,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: Stat::new("Health", MAX_HEALTH),
            energy: Stat::new("Energy", MAX_ENERGY),
        }
    }
}

/// Quest flags and progress counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Progress {
    flags: BTreeSet<String>,
    experience: u32,
    steps: u32,
    items_collected: u32,
}

impl Progress {
    /// Create empty progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a quest flag is set.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Set a quest flag. Returns true only if the flag was not already set.
    pub fn set_flag(&mut self, flag: impl Into<String>) -> bool {
        self.flags.insert(flag.into())
    }

    /// Set a flag and grant experience the first time it is set.
    ///
    /// Returns true if the flag was newly set (and the reward granted).
    pub fn award_flag(&mut self, flag: impl Into<String>, experience: u32) -> bool {
        let newly_set = self.set_flag(flag);
        if newly_set {
            self.gain_experience(experience);
        }
        newly_set
    }

    /// All set flags, in sorted order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Add experience. Returns the new total.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        self.experience
    }

    /// Total experience earned.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Level derived from experience, starting at 1.
    pub fn level(&self) -> u32 {
        1 + self.experience / EXPERIENCE_PER_LEVEL
    }

    /// Count one move.
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    /// Count one picked-up item.
    pub fn record_pickup(&mut self) {
        self.items_collected += 1;
    }

    /// Number of moves made.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Number of items picked up.
    pub fn items_collected(&self) -> u32 {
        self.items_collected
    }
}

/// The player character.
#[derive(Debug)]
pub struct Player {
    name: String,
    vitals: Vitals,
    inventory: Inventory,
    progress: Progress,
}

impl Player {
    /// Create a player. The name is trimmed and must not be empty.
    pub fn new(name: &str) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            vitals: Vitals::default(),
            inventory: Inventory::new(),
            progress: Progress::new(),
        })
    }

    /// Health and energy.
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Mutable health and energy.
    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    /// Carried items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable carried items.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Flags and counters.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Mutable flags and counters.
    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    /// Borrow the inventory immutably alongside mutable vitals and progress.
    pub fn split_for_use(&mut self) -> (&Inventory, &mut Vitals, &mut Progress) {
        (&self.inventory, &mut self.vitals, &mut self.progress)
    }

    /// Apply damage to health. Negative amounts are rejected without effect.
    ///
    /// Returns the remaining health.
    pub fn take_damage(&mut self, damage: i32) -> CoreResult<i32> {
        if damage < 0 {
            warn!(player = %self.name, damage, "rejected negative damage");
            return Err(CoreError::NegativeDamage(damage));
        }
        Ok(self.vitals.health.modify(-damage))
    }

    /// Apply a penalty that never drops health below 1. Returns the health lost.
    pub fn suffer_setback(&mut self, penalty: u32) -> i32 {
        let allowed = (self.vitals.health.current() - 1).max(0);
        let loss = i32::try_from(penalty).unwrap_or(i32::MAX).min(allowed);
        self.take_damage(loss).map_or(0, |_| loss)
    }
}

impl Describe for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        PLAYER_DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn new_player() {
        let player = Player::new("Riley").unwrap();
        assert_eq!(player.name(), "Riley");
        assert_eq!(player.vitals().health.current(), MAX_HEALTH);
        assert_eq!(player.vitals().energy.current(), MAX_ENERGY);
        assert!(player.inventory().is_empty());
        assert_eq!(player.progress().experience(), 0);
        assert_eq!(player.progress().level(), 1);
    }

    #[test]
    fn name_is_trimmed() {
        let player = Player::new("  Riley \n").unwrap();
        assert_eq!(player.name(), "Riley");
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(Player::new("").unwrap_err(), CoreError::EmptyName);
        assert_eq!(Player::new("   ").unwrap_err(), CoreError::EmptyName);
    }

    #[test]
    fn flags_are_set_once() {
        let mut progress = Progress::new();
        assert!(!progress.has_flag("terminal_hacked"));
        assert!(progress.set_flag("terminal_hacked"));
        assert!(progress.has_flag("terminal_hacked"));
        assert!(!progress.set_flag("terminal_hacked"));
        assert_eq!(progress.flags().count(), 1);
    }

    #[test]
    fn award_flag_grants_reward_once() {
        let mut progress = Progress::new();
        assert!(progress.award_flag("read_classified_info", 20));
        assert!(!progress.award_flag("read_classified_info", 20));
        assert_eq!(progress.experience(), 20);
    }

    #[test]
    fn level_follows_experience() {
        let mut progress = Progress::new();
        progress.gain_experience(99);
        assert_eq!(progress.level(), 1);
        progress.gain_experience(1);
        assert_eq!(progress.level(), 2);
        progress.gain_experience(150);
        assert_eq!(progress.level(), 3);
    }

    #[test]
    fn counters() {
        let mut progress = Progress::new();
        progress.record_step();
        progress.record_step();
        progress.record_pickup();
        assert_eq!(progress.steps(), 2);
        assert_eq!(progress.items_collected(), 1);
    }

    #[test]
    fn take_damage() {
        let mut player = Player::new("Riley").unwrap();
        assert_eq!(player.take_damage(30).unwrap(), 70);
        assert_eq!(player.take_damage(500).unwrap(), 0);
    }

    #[test]
    fn negative_damage_is_rejected() {
        let mut player = Player::new("Riley").unwrap();
        assert_eq!(
            player.take_damage(-5).unwrap_err(),
            CoreError::NegativeDamage(-5)
        );
        assert_eq!(player.vitals().health.current(), MAX_HEALTH);
    }

    #[test]
    fn setback_is_non_lethal() {
        let mut player = Player::new("Riley").unwrap();
        assert_eq!(player.suffer_setback(50), 50);
        assert_eq!(player.suffer_setback(50), 49);
        assert_eq!(player.vitals().health.current(), 1);
        assert_eq!(player.suffer_setback(50), 0);
        assert_eq!(player.vitals().health.current(), 1);
    }

    #[test]
    fn setback_after_damage_keeps_one_health() {
        let mut player = Player::new("Riley").unwrap();
        player.take_damage(95).unwrap();
        assert_eq!(player.suffer_setback(50), 4);
        assert_eq!(player.vitals().health.current(), 1);
    }

    #[test]
    fn split_for_use_borrows_disjoint_parts() {
        let mut player = Player::new("Riley").unwrap();
        player
            .inventory_mut()
            .add(Item::new("Datapad", "A tablet containing classified information"));
        let (inventory, vitals, progress) = player.split_for_use();
        assert_eq!(inventory.len(), 1);
        vitals.energy.modify(-10);
        progress.set_flag("read_classified_info");
        assert_eq!(player.vitals().energy.current(), 90);
        assert!(player.progress().has_flag("read_classified_info"));
    }
}
