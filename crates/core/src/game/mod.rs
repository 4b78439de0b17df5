use serde::{Deserialize, Serialize};

use crate::GestureLabel;

/// Where the target currently is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    /// Hit `n` times so far, still alive.
    Hit(u32),
    /// Terminal: the death clip has played, further hits are absorbed.
    Dead,
}

/// Configuration for the hit-count state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hits required to reach [`GamePhase::Dead`].
    pub death_threshold: u32,
    /// Gestures that count as a hit on the target.
    pub hit_gestures: Vec<GestureLabel>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            death_threshold: 5,
            hit_gestures: vec![GestureLabel::PeaceSign],
        }
    }
}

/// Explicit, caller-owned state machine `Idle -> Hit(n) -> Dead`, driven by
/// classifier output. Replaces the original's global mutable hit counter.
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    config: GameConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Hits landed so far.
    pub fn hit_count(&self) -> u32 {
        match self.phase {
            GamePhase::Idle => 0,
            GamePhase::Hit(n) => n,
            GamePhase::Dead => self.config.death_threshold,
        }
    }

    /// Feeds one classified gesture into the machine. Returns `true` when
    /// the gesture counted as a hit.
    pub fn observe(&mut self, label: GestureLabel) -> bool {
        if !self.config.hit_gestures.contains(&label) {
            return false;
        }
        self.register_hit();
        true
    }

    /// Applies a single hit, transitioning to [`GamePhase::Dead`] at the
    /// configured threshold. Dead is terminal.
    pub fn register_hit(&mut self) -> GamePhase {
        self.phase = match self.phase {
            GamePhase::Idle => {
                if self.config.death_threshold <= 1 {
                    GamePhase::Dead
                } else {
                    GamePhase::Hit(1)
                }
            }
            GamePhase::Hit(n) => {
                let n = n + 1;
                if n >= self.config.death_threshold {
                    GamePhase::Dead
                } else {
                    GamePhase::Hit(n)
                }
            }
            GamePhase::Dead => GamePhase::Dead,
        };
        self.phase
    }

    /// Returns to [`GamePhase::Idle`], keeping the configuration.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
    }
}
