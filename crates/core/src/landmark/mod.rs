use serde::{Deserialize, Serialize};

use crate::{PigeonSmashError, Result};

/// Number of landmarks delivered per hand by the pose estimator.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single tracked point on a hand.
///
/// Coordinates are normalised to the camera frame: `x` grows to the right,
/// `y` grows downwards (so "up" in image space means a *smaller* `y`), both
/// nominally in `[0, 1]`. `z` is the estimator's relative depth and is
/// carried through untouched; none of the gesture predicates read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Anatomical names for the 21 hand landmarks, in the fixed order the pose
/// estimator emits them (MediaPipe hand-model convention).
///
/// Predicate code addresses landmarks through this enum rather than through
/// bare indices, so comparisons read as named anatomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum HandJoint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandJoint {
    /// Position of this joint within a [`HandLandmarkSet`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The five fingers, each resolving to its tip and knuckle joints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first, in anatomical order across the hand.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// The fingertip joint.
    pub const fn tip(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbTip,
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Pinky => HandJoint::PinkyTip,
        }
    }

    /// The knuckle used to decide whether the finger is extended: the joint
    /// two positions below the tip (the PIP for the four fingers, the MCP
    /// for the thumb).
    pub const fn knuckle(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbMcp,
            Finger::Index => HandJoint::IndexPip,
            Finger::Middle => HandJoint::MiddlePip,
            Finger::Ring => HandJoint::RingPip,
            Finger::Pinky => HandJoint::PinkyPip,
        }
    }
}

/// A validated set of exactly [`HAND_LANDMARK_COUNT`] landmarks for one hand,
/// produced fresh every frame by the external pose estimator.
///
/// The length invariant is enforced at construction; everything downstream
/// can rely on it without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarkSet {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandLandmarkSet {
    /// Builds a set from a slice, failing fast when the slice is not exactly
    /// 21 landmarks long.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            landmarks.try_into().map_err(|_| {
                PigeonSmashError::invalid_input(format!(
                    "expected {} hand landmarks, got {}",
                    HAND_LANDMARK_COUNT,
                    landmarks.len()
                ))
            })?;
        Ok(Self { landmarks })
    }

    /// Returns the landmark at the named joint.
    pub fn point(&self, joint: HandJoint) -> Landmark {
        self.landmarks[joint.index()]
    }

    /// Returns the wrist landmark.
    pub fn wrist(&self) -> Landmark {
        self.point(HandJoint::Wrist)
    }

    /// Returns the fingertip landmark for the given finger.
    pub fn tip(&self, finger: Finger) -> Landmark {
        self.point(finger.tip())
    }

    /// Returns the knuckle landmark for the given finger.
    pub fn knuckle(&self, finger: Finger) -> Landmark {
        self.point(finger.knuckle())
    }

    /// Returns all landmarks in estimator order.
    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarkSet {
    type Error = PigeonSmashError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::from_slice(&landmarks)
    }
}
