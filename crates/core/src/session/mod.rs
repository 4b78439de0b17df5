use serde::Serialize;

use crate::{
    GamePhase, GameState, GestureClassifier, GestureLabel, Landmark, ReactionCue, ReactionMap,
    Result,
};

/// Everything that happened in one processed frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutcome {
    /// One label per hand, in the order the hands were supplied.
    pub labels: Vec<GestureLabel>,
    /// Visual cues the rendering layer should fire this frame.
    pub cues: Vec<ReactionCue>,
    /// Hits landed this frame.
    pub hits: u32,
    /// Game phase after the frame was applied.
    pub phase: GamePhase,
}

/// Per-frame façade wiring the classifier, reaction map, and game state
/// together, mirroring the host's results callback: the external estimator
/// delivers zero or more hands per frame, the session classifies each one,
/// fires cues, and advances the hit counter.
///
/// The session is the one stateful object in the crate and is single-owner
/// by construction; everything it composes is pure.
#[derive(Debug, Clone)]
pub struct GameSession {
    classifier: GestureClassifier,
    reactions: ReactionMap,
    state: GameState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with default thresholds and the original's wiring.
    pub fn new() -> Self {
        Self {
            classifier: GestureClassifier::new(),
            reactions: ReactionMap::default_wiring(),
            state: GameState::default(),
        }
    }

    /// Creates a session from explicitly configured parts.
    pub fn from_parts(
        classifier: GestureClassifier,
        reactions: ReactionMap,
        state: GameState,
    ) -> Self {
        Self {
            classifier,
            reactions,
            state,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn hit_count(&self) -> u32 {
        self.state.hit_count()
    }

    /// Restarts the game while keeping the configured wiring.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Processes one frame's worth of hands.
    ///
    /// Any malformed hand fails the whole call with `InvalidInput` before
    /// the frame mutates the game state.
    pub fn process_frame(&mut self, hands: &[Vec<Landmark>]) -> Result<FrameOutcome> {
        let mut labels = Vec::with_capacity(hands.len());
        for hand in hands {
            labels.push(self.classifier.classify(hand)?);
        }

        let mut cues = Vec::new();
        let mut hits = 0;
        for &label in &labels {
            cues.extend_from_slice(self.reactions.cues_for(label));
            let was_alive = self.state.phase() != GamePhase::Dead;
            if self.state.observe(label) {
                hits += 1;
                if was_alive && self.state.phase() == GamePhase::Dead {
                    cues.push(ReactionCue::DeathClip);
                }
            }
        }

        let phase = self.state.phase();
        tracing::debug!(?labels, hits, ?phase, "processed frame");

        Ok(FrameOutcome {
            labels,
            cues,
            hits,
            phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandJoint, HAND_LANDMARK_COUNT};

    fn peace_sign_hand() -> Vec<Landmark> {
        let mut hand = vec![Landmark::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT];
        hand[HandJoint::Wrist.index()] = Landmark::new(0.5, 0.9, 0.0);
        hand[HandJoint::ThumbTip.index()] = Landmark::new(0.65, 0.55, 0.0);
        hand[HandJoint::IndexTip.index()] = Landmark::new(0.4, 0.2, 0.0);
        hand[HandJoint::MiddleTip.index()] = Landmark::new(0.5, 0.2, 0.0);
        hand[HandJoint::RingTip.index()] = Landmark::new(0.55, 0.6, 0.0);
        hand[HandJoint::PinkyTip.index()] = Landmark::new(0.6, 0.7, 0.0);
        hand
    }

    fn idle_hand() -> Vec<Landmark> {
        let mut hand = vec![Landmark::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT];
        hand[HandJoint::Wrist.index()] = Landmark::new(0.0, 0.0, 0.0);
        hand
    }

    #[test]
    fn empty_frames_change_nothing() {
        let mut session = GameSession::new();
        let outcome = session.process_frame(&[]).unwrap();

        assert!(outcome.labels.is_empty());
        assert!(outcome.cues.is_empty());
        assert_eq!(outcome.phase, GamePhase::Idle);
    }

    #[test]
    fn peace_sign_lands_a_hit_with_cues() {
        let mut session = GameSession::new();
        let outcome = session.process_frame(&[peace_sign_hand()]).unwrap();

        assert_eq!(outcome.labels, [GestureLabel::PeaceSign]);
        assert_eq!(outcome.hits, 1);
        assert_eq!(
            outcome.cues,
            [ReactionCue::HitReact, ReactionCue::BlueFlame]
        );
        assert_eq!(outcome.phase, GamePhase::Hit(1));
    }

    #[test]
    fn fifth_hit_plays_the_death_clip_once() {
        let mut session = GameSession::new();
        for _ in 0..4 {
            session.process_frame(&[peace_sign_hand()]).unwrap();
        }

        let fifth = session.process_frame(&[peace_sign_hand()]).unwrap();
        assert_eq!(fifth.phase, GamePhase::Dead);
        assert!(fifth.cues.contains(&ReactionCue::DeathClip));

        let sixth = session.process_frame(&[peace_sign_hand()]).unwrap();
        assert_eq!(sixth.phase, GamePhase::Dead);
        assert!(!sixth.cues.contains(&ReactionCue::DeathClip));
    }

    #[test]
    fn unrecognised_hands_fire_nothing() {
        let mut session = GameSession::new();
        let outcome = session.process_frame(&[idle_hand()]).unwrap();

        assert_eq!(outcome.labels, [GestureLabel::None]);
        assert!(outcome.cues.is_empty());
        assert_eq!(outcome.hits, 0);
    }

    #[test]
    fn malformed_hand_fails_the_frame() {
        let mut session = GameSession::new();
        let short = peace_sign_hand()[..20].to_vec();

        assert!(session.process_frame(&[short]).is_err());
        assert_eq!(session.phase(), GamePhase::Idle);
    }

    #[test]
    fn two_hands_classify_independently() {
        let mut session = GameSession::new();
        let outcome = session
            .process_frame(&[peace_sign_hand(), idle_hand()])
            .unwrap();

        assert_eq!(
            outcome.labels,
            [GestureLabel::PeaceSign, GestureLabel::None]
        );
        assert_eq!(outcome.hits, 1);
    }
}
