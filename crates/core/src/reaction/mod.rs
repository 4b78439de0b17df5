use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::GestureLabel;

/// Named visual cue the rendering layer reacts with. The core only decides
/// which cues fire; instantiating particles and playing clips stays with the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionCue {
    /// Flinch animation on the target model.
    HitReact,
    BlueFlame,
    Sparkles,
    Smoke,
    /// Terminal animation once the hit counter reaches its threshold.
    DeathClip,
}

/// Routes a classified gesture to the visual cues it should trigger.
#[derive(Debug, Clone, Default)]
pub struct ReactionMap {
    routes: HashMap<GestureLabel, Vec<ReactionCue>>,
}

impl ReactionMap {
    /// Creates an empty map that fires nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wiring the original game ships: a peace sign lands a hit and
    /// ignites the blue flame, a thumbs up showers sparkles, an open palm
    /// puffs smoke.
    pub fn default_wiring() -> Self {
        let mut map = Self::new();
        map.route(
            GestureLabel::PeaceSign,
            vec![ReactionCue::HitReact, ReactionCue::BlueFlame],
        );
        map.route(GestureLabel::ThumbsUp, vec![ReactionCue::Sparkles]);
        map.route(GestureLabel::OpenPalm, vec![ReactionCue::Smoke]);
        map
    }

    /// Replaces the cue list for a gesture.
    pub fn route(&mut self, label: GestureLabel, cues: Vec<ReactionCue>) {
        self.routes.insert(label, cues);
    }

    /// Cues for a gesture; unrouted gestures (including `None`) fire nothing.
    pub fn cues_for(&self, label: GestureLabel) -> &[ReactionCue] {
        self.routes.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }
}
