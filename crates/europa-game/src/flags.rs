//! Quest flag names and the win condition.

use europa_core::Progress;

/// The datapad's classified data has been read.
pub const READ_CLASSIFIED_INFO: &str = "read_classified_info";
/// The keycard was swiped at the terminal.
pub const TERMINAL_ACCESS_GRANTED: &str = "terminal_access_granted";
/// A hack of the terminal was attempted.
pub const TERMINAL_HACKED: &str = "terminal_hacked";
/// The Security Bot was defeated.
pub const SECURITY_DEFEATED: &str = "security_defeated";
/// The Elite Guard Bot was defeated.
pub const ELITE_GUARD_DEFEATED: &str = "elite_guard_defeated";
/// The spacesuit is on and sealed.
pub const SPACESUIT_EQUIPPED: &str = "spacesuit_equipped";
/// The airlock has been cycled.
pub const AIRLOCK_ACTIVATED: &str = "airlock_activated";
/// The workbench was searched.
pub const EXAMINED_WORKBENCH: &str = "examined_workbench";
/// The emergency locker was inspected.
pub const FOUND_SPACESUIT_HINT: &str = "found_spacesuit_hint";

/// Flags that together mean the player has escaped.
pub const WIN_FLAGS: [&str; 4] = [
    READ_CLASSIFIED_INFO,
    SECURITY_DEFEATED,
    SPACESUIT_EQUIPPED,
    AIRLOCK_ACTIVATED,
];

/// Flag driving each objective of the main quest, by objective index.
pub const ESCAPE_OBJECTIVE_FLAGS: [&str; 3] =
    [READ_CLASSIFIED_INFO, SECURITY_DEFEATED, AIRLOCK_ACTIVATED];

/// Returns true when every win flag is set.
pub fn is_won(progress: &Progress) -> bool {
    WIN_FLAGS.iter().all(|flag| progress.has_flag(flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flags_win() {
        let mut progress = Progress::new();
        for flag in WIN_FLAGS {
            progress.set_flag(flag);
        }
        assert!(is_won(&progress));
    }

    #[test]
    fn any_missing_flag_does_not_win() {
        for missing in WIN_FLAGS {
            let mut progress = Progress::new();
            for flag in WIN_FLAGS.iter().filter(|f| **f != missing) {
                progress.set_flag(*flag);
            }
            assert!(!is_won(&progress), "won without {missing}");
        }
    }

    #[test]
    fn unrelated_flags_do_not_win() {
        let mut progress = Progress::new();
        progress.set_flag(TERMINAL_HACKED);
        progress.set_flag(ELITE_GUARD_DEFEATED);
        progress.set_flag("touched_monolith");
        assert!(!is_won(&progress));
    }
}
