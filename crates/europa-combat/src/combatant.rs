//! Combat participants and damage rolls.
//!
//! Both sides of a fight share one `Combatant` struct. The variant tag
//! picks the jitter band used when rolling damage.

use rand::Rng;

/// Base health of the player's combat stand-in.
pub const FIGHTER_BASE_HEALTH: u32 = 100;
/// Base attack of the player's combat stand-in.
pub const FIGHTER_BASE_ATTACK: u32 = 15;
/// Base defense of the player's combat stand-in.
pub const FIGHTER_BASE_DEFENSE: u32 = 5;
/// Health gained per level above 1.
pub const HEALTH_PER_LEVEL: u32 = 10;
/// Attack gained per level above 1.
pub const ATTACK_PER_LEVEL: u32 = 5;
/// Defense gained per level above 1.
pub const DEFENSE_PER_LEVEL: u32 = 3;
/// Multiplier applied to an overcharged strike.
pub const OVERCHARGE_MULTIPLIER: u32 = 2;

/// An inclusive range of integer offsets added to a base attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterBand {
    /// Lowest offset.
    pub low: i32,
    /// Highest offset.
    pub high: i32,
}

impl JitterBand {
    /// A band of `-spread..=spread`.
    pub const fn symmetric(spread: i32) -> Self {
        Self {
            low: -spread,
            high: spread,
        }
    }

    /// Draw an offset from the band.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.low..=self.high)
    }
}

/// Jitter for the player's combat stand-in.
pub const FIGHTER_JITTER: JitterBand = JitterBand::symmetric(2);
/// Jitter for enemies.
pub const ENEMY_JITTER: JitterBand = JitterBand::symmetric(1);

/// Which side a combatant fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantKind {
    /// The player's stand-in.
    Fighter,
    /// A hostile.
    Enemy,
}

impl CombatantKind {
    /// Jitter band used by this variant.
    pub fn jitter(self) -> JitterBand {
        match self {
            Self::Fighter => FIGHTER_JITTER,
            Self::Enemy => ENEMY_JITTER,
        }
    }
}

/// What the fighter does on their half of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// A normal strike.
    Attack,
    /// An EMP-boosted strike dealing double damage.
    Overcharge,
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Overcharge => write!(f, "Overcharge"),
        }
    }
}

/// A participant in an encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    kind: CombatantKind,
    health: u32,
    max_health: u32,
    attack: u32,
    defense: u32,
}

impl Combatant {
    /// Build the player's stand-in for a given level (1-based).
    pub fn fighter(name: impl Into<String>, level: u32) -> Self {
        let bonus = level.saturating_sub(1);
        let health = FIGHTER_BASE_HEALTH + HEALTH_PER_LEVEL * bonus;
        Self {
            name: name.into(),
            kind: CombatantKind::Fighter,
            health,
            max_health: health,
            attack: FIGHTER_BASE_ATTACK + ATTACK_PER_LEVEL * bonus,
            defense: FIGHTER_BASE_DEFENSE + DEFENSE_PER_LEVEL * bonus,
        }
    }

    /// Build an enemy.
    pub fn enemy(name: impl Into<String>, health: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            kind: CombatantKind::Enemy,
            health,
            max_health: health,
            attack,
            defense,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which side this combatant is on.
    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    /// Remaining health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Health at construction.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Base attack.
    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Damage soaked from each hit.
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Returns true while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Roll outgoing damage: base attack plus jitter, floored at zero.
    pub fn roll_damage<R: Rng + ?Sized>(&self, action: CombatAction, rng: &mut R) -> u32 {
        let jitter = self.kind.jitter().roll(rng);
        let base = self.attack.saturating_add_signed(jitter);
        match action {
            CombatAction::Attack => base,
            CombatAction::Overcharge => base.saturating_mul(OVERCHARGE_MULTIPLIER),
        }
    }

    /// Absorb a raw hit. Defense is subtracted first; health never goes below zero.
    ///
    /// Returns the damage actually taken.
    pub fn take_hit(&mut self, raw: u32) -> u32 {
        let net = raw.saturating_sub(self.defense).min(self.health);
        self.health -= net;
        net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fighter_base_stats() {
        let f = Combatant::fighter("Riley", 1);
        assert_eq!(f.kind(), CombatantKind::Fighter);
        assert_eq!(f.health(), 100);
        assert_eq!(f.attack(), 15);
        assert_eq!(f.defense(), 5);
    }

    #[test]
    fn fighter_scales_with_level() {
        let f = Combatant::fighter("Riley", 3);
        assert_eq!(f.health(), 120);
        assert_eq!(f.attack(), 25);
        assert_eq!(f.defense(), 11);
    }

    #[test]
    fn level_zero_is_treated_as_one() {
        assert_eq!(Combatant::fighter("Riley", 0), Combatant::fighter("Riley", 1));
    }

    #[test]
    fn jitter_bands() {
        assert_eq!(CombatantKind::Fighter.jitter(), JitterBand::symmetric(2));
        assert_eq!(CombatantKind::Enemy.jitter(), JitterBand::symmetric(1));
    }

    #[test]
    fn fighter_rolls_stay_in_band() {
        let f = Combatant::fighter("Riley", 1);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dmg = f.roll_damage(CombatAction::Attack, &mut rng);
            assert!((13..=17).contains(&dmg), "{dmg} out of band");
        }
    }

    #[test]
    fn enemy_rolls_stay_in_band() {
        let e = Combatant::enemy("Security Bot", 50, 10, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dmg = e.roll_damage(CombatAction::Attack, &mut rng);
            assert!((9..=11).contains(&dmg), "{dmg} out of band");
        }
    }

    #[test]
    fn overcharge_doubles() {
        let f = Combatant::fighter("Riley", 1);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let dmg = f.roll_damage(CombatAction::Overcharge, &mut rng);
            assert!((26..=34).contains(&dmg), "{dmg} out of band");
            assert_eq!(dmg % 2, 0);
        }
    }

    #[test]
    fn zero_attack_never_goes_negative() {
        let e = Combatant::enemy("Drone", 10, 0, 0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(e.roll_damage(CombatAction::Attack, &mut rng) <= 1);
        }
    }

    #[test]
    fn defense_reduces_hits() {
        let mut e = Combatant::enemy("Security Bot", 50, 10, 3);
        assert_eq!(e.take_hit(15), 12);
        assert_eq!(e.health(), 38);
    }

    #[test]
    fn weak_hits_do_not_heal() {
        let mut e = Combatant::enemy("Security Bot", 50, 10, 3);
        assert_eq!(e.take_hit(2), 0);
        assert_eq!(e.health(), 50);
    }

    #[test]
    fn health_floors_at_zero() {
        let mut e = Combatant::enemy("Security Bot", 5, 10, 0);
        assert_eq!(e.take_hit(40), 5);
        assert_eq!(e.health(), 0);
        assert!(!e.is_alive());
    }

    #[test]
    fn action_display() {
        assert_eq!(CombatAction::Attack.to_string(), "Attack");
        assert_eq!(CombatAction::Overcharge.to_string(), "Overcharge");
    }
}
