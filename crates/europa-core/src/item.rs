//! Items and their use effects.
//!
//! An item's behavior lives entirely in its effect: a boxed closure that
//! receives an [`EffectContext`] with the player's vitals, progress, and
//! current location. Items are moved, never cloned, so a given item is in
//! exactly one place at a time.

use crate::describe::Describe;
use crate::player::{Progress, Vitals};

/// A side-effecting action run when an item is used.
pub type UseEffect = Box<dyn Fn(&mut EffectContext<'_>)>;

const DEFAULT_USE_DESCRIPTION: &str = "No specific use instructions.";

/// State an item effect may read and modify.
pub struct EffectContext<'a> {
    location: usize,
    vitals: &'a mut Vitals,
    progress: &'a mut Progress,
    lines: Vec<String>,
    flags_set: Vec<String>,
    experience: u32,
}

impl<'a> EffectContext<'a> {
    /// Create a context for the player standing at `location`.
    pub fn new(location: usize, vitals: &'a mut Vitals, progress: &'a mut Progress) -> Self {
        Self {
            location,
            vitals,
            progress,
            lines: Vec::new(),
            flags_set: Vec::new(),
            experience: 0,
        }
    }

    /// Index of the location the player is standing in.
    pub fn location(&self) -> usize {
        self.location
    }

    /// Player health and energy.
    pub fn vitals(&mut self) -> &mut Vitals {
        &mut *self.vitals
    }

    /// Player flags and counters.
    pub fn progress(&self) -> &Progress {
        &*self.progress
    }

    /// Emit a line of narration.
    pub fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Set a flag, granting `experience` only the first time.
    pub fn award_flag(&mut self, flag: &str, experience: u32) -> bool {
        let newly_set = self.progress.award_flag(flag, experience);
        if newly_set {
            self.flags_set.push(flag.to_string());
            self.experience += experience;
        }
        newly_set
    }

    /// Consume the context, returning what the effect did.
    pub fn finish(self) -> EffectOutcome {
        EffectOutcome {
            lines: self.lines,
            flags_set: self.flags_set,
            experience: self.experience,
        }
    }
}

/// What an effect produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectOutcome {
    /// Narration lines, in order.
    pub lines: Vec<String>,
    /// Flags newly set by the effect.
    pub flags_set: Vec<String>,
    /// Experience granted by the effect.
    pub experience: u32,
}

/// An object that can sit in a location or be carried.
pub struct Item {
    name: String,
    description: String,
    pickable: bool,
    usable: bool,
    effect: Option<UseEffect>,
    use_description: String,
}

impl Item {
    /// Create a pickable, non-usable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            pickable: true,
            usable: false,
            effect: None,
            use_description: DEFAULT_USE_DESCRIPTION.to_string(),
        }
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.pickable = false;
        self
    }

    /// Mark the item usable without attaching an effect.
    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    /// Attach an effect and its description. Marks the item usable.
    pub fn with_effect<F>(mut self, use_description: impl Into<String>, effect: F) -> Self
    where
        F: Fn(&mut EffectContext<'_>) + 'static,
    {
        self.effect = Some(Box::new(effect));
        self.use_description = use_description.into();
        self.usable = true;
        self
    }

    /// Whether the item can be picked up.
    pub fn can_pick_up(&self) -> bool {
        self.pickable
    }

    /// Whether the item can be used.
    pub fn can_use(&self) -> bool {
        self.usable
    }

    /// How the item is used.
    pub fn use_description(&self) -> &str {
        &self.use_description
    }

    /// Run the effect. Does nothing unless the item is usable and has an effect.
    pub fn use_with(&self, ctx: &mut EffectContext<'_>) {
        if !self.usable {
            return;
        }
        if let Some(effect) = &self.effect {
            effect(ctx);
        }
    }
}

impl Describe for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("pickable", &self.pickable)
            .field("usable", &self.usable)
            .field("has_effect", &self.effect.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datapad() -> Item {
        Item::new("Datapad", "A tablet containing classified information").with_effect(
            "Access classified information",
            |ctx| {
                ctx.say("You read the classified information.");
                ctx.award_flag("read_classified_info", 20);
            },
        )
    }

    #[test]
    fn defaults() {
        let item = Item::new("Wrench", "A heavy wrench");
        assert!(item.can_pick_up());
        assert!(!item.can_use());
        assert_eq!(item.use_description(), DEFAULT_USE_DESCRIPTION);
    }

    #[test]
    fn fixed_item() {
        let item = Item::new("Console", "Bolted to the floor").fixed();
        assert!(!item.can_pick_up());
    }

    #[test]
    fn effect_marks_usable() {
        let item = datapad();
        assert!(item.can_use());
        assert_eq!(item.use_description(), "Access classified information");
    }

    #[test]
    fn use_runs_effect() {
        let mut vitals = Vitals::default();
        let mut progress = Progress::new();
        let item = datapad();

        let mut ctx = EffectContext::new(0, &mut vitals, &mut progress);
        item.use_with(&mut ctx);
        let outcome = ctx.finish();

        assert_eq!(outcome.lines, vec!["You read the classified information."]);
        assert_eq!(outcome.flags_set, vec!["read_classified_info"]);
        assert_eq!(outcome.experience, 20);
        assert!(progress.has_flag("read_classified_info"));
    }

    #[test]
    fn repeated_use_does_not_reaward() {
        let mut vitals = Vitals::default();
        let mut progress = Progress::new();
        let item = datapad();

        for _ in 0..3 {
            let mut ctx = EffectContext::new(0, &mut vitals, &mut progress);
            item.use_with(&mut ctx);
        }

        assert_eq!(progress.experience(), 20);
    }

    #[test]
    fn non_usable_item_is_silent() {
        let mut vitals = Vitals::default();
        let mut progress = Progress::new();
        let item = Item::new("Rock", "Just a rock");

        let mut ctx = EffectContext::new(0, &mut vitals, &mut progress);
        item.use_with(&mut ctx);
        assert_eq!(ctx.finish(), EffectOutcome::default());
    }

    #[test]
    fn usable_without_effect_is_silent() {
        let mut vitals = Vitals::default();
        let mut progress = Progress::new();
        let item = Item::new("EMP Device", "Can disable security systems").usable();
        assert!(item.can_use());

        let mut ctx = EffectContext::new(2, &mut vitals, &mut progress);
        item.use_with(&mut ctx);
        assert!(ctx.finish().lines.is_empty());
    }

    #[test]
    fn effect_sees_location() {
        let mut vitals = Vitals::default();
        let mut progress = Progress::new();
        let item = Item::new("Spacesuit", "Required for space travel").with_effect(
            "Required for EVA activities",
            |ctx| {
                if ctx.location() == 3 {
                    ctx.award_flag("spacesuit_equipped", 10);
                } else {
                    ctx.say("You should wait until you're at the airlock.");
                }
            },
        );

        let mut ctx = EffectContext::new(0, &mut vitals, &mut progress);
        item.use_with(&mut ctx);
        assert!(!ctx.progress().has_flag("spacesuit_equipped"));

        let mut ctx = EffectContext::new(3, &mut vitals, &mut progress);
        item.use_with(&mut ctx);
        assert!(ctx.progress().has_flag("spacesuit_equipped"));
    }
}
