//! Core library for the Pigeon Smash AR mini-game.
//!
//! The crate holds the engine-agnostic game logic: hand-landmark gesture
//! classification, non-overlapping prop placement, reaction routing, and the
//! hit-count state machine. Each module owns a distinct subsystem. Camera
//! capture, pose estimation, and 3D rendering stay with external
//! collaborators; the crate only consumes landmark sets they deliver and
//! hands back labels, cues, and placements for them to act on.

pub mod config;
pub mod error;
pub mod game;
pub mod gesture;
pub mod landmark;
pub mod placement;
pub mod props;
pub mod reaction;
pub mod session;

pub use config::AppConfig;
pub use error::{PigeonSmashError, Result};
pub use game::{GameConfig, GamePhase, GameState};
pub use gesture::{GestureClassifier, GestureConfig, GestureLabel};
pub use landmark::{Finger, HandJoint, HandLandmarkSet, Landmark, HAND_LANDMARK_COUNT};
pub use placement::{
    NonOverlappingPlacer, PlacedItem, PlacementBatch, PlacementRegion, PlacerConfig,
    SeparationRule,
};
pub use props::{PlacedProp, PropCatalog, PropSprite, ScatterBatch, ScatterConfig};
pub use reaction::{ReactionCue, ReactionMap};
pub use session::{FrameOutcome, GameSession};
