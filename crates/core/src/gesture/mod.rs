use serde::{Deserialize, Serialize};

use crate::{Finger, HandLandmarkSet, Landmark, Result};

/// Named hand pose recognised from a single frame's landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    ThumbsUp,
    PeaceSign,
    Fist,
    OpenPalm,
    OkSign,
    /// No known pattern matched. This is an ordinary outcome, not an error.
    None,
}

/// Tunable thresholds for the gesture predicates, all in normalised image
/// units. The defaults reproduce the behaviour of the original game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// How close a fingertip must sit to the wrist, on both axes, before the
    /// finger counts as curled into a fist.
    pub curl_tolerance: f32,
    /// How close the thumb and index tips must sit to each other, on both
    /// axes, before they count as pinched into the OK ring.
    pub pinch_tolerance: f32,
    /// How far apart adjacent fingertips must be horizontally before an
    /// extended hand counts as a spread open palm.
    pub spread_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            curl_tolerance: 0.1,
            pinch_tolerance: 0.1,
            spread_distance: 0.1,
        }
    }
}

/// Stateless single-frame gesture classifier.
///
/// Classification is a fixed-order, first-match decision list over pure
/// predicates, each expressed as comparisons between fingertip landmarks and
/// either the wrist or the finger's own knuckle. Image-space Y grows
/// downwards, so "above" always means a smaller `y`.
///
/// Evaluation order, most specific first: Fist, OkSign, ThumbsUp, PeaceSign,
/// OpenPalm. The PeaceSign predicate is the four-way tip comparison shipped
/// by the original game (index and middle above both ring and pinky); ring
/// and pinky are not additionally required to sit below the middle knuckle.
///
/// The classifier keeps no state across calls, so concurrent classification
/// of several hands in one frame is safe by construction.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    /// Creates a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with explicit thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Returns the thresholds the classifier operates with.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classifies one hand's landmarks for a single frame.
    ///
    /// Fails with [`crate::PigeonSmashError::InvalidInput`] when the slice is
    /// not exactly 21 landmarks; a malformed set is never reported as a
    /// silent [`GestureLabel::None`].
    pub fn classify(&self, landmarks: &[Landmark]) -> Result<GestureLabel> {
        let set = HandLandmarkSet::from_slice(landmarks)?;
        Ok(self.classify_set(&set))
    }

    /// Classifies an already-validated landmark set. Infallible.
    pub fn classify_set(&self, set: &HandLandmarkSet) -> GestureLabel {
        if self.is_fist(set) {
            GestureLabel::Fist
        } else if self.is_ok_sign(set) {
            GestureLabel::OkSign
        } else if self.is_thumbs_up(set) {
            GestureLabel::ThumbsUp
        } else if self.is_peace_sign(set) {
            GestureLabel::PeaceSign
        } else if self.is_open_palm(set) {
            GestureLabel::OpenPalm
        } else {
            GestureLabel::None
        }
    }

    /// Every fingertip curled in near the palm base.
    fn is_fist(&self, set: &HandLandmarkSet) -> bool {
        let wrist = set.wrist();
        Finger::ALL.iter().all(|&finger| {
            within_tolerance(set.tip(finger), wrist, self.config.curl_tolerance)
        })
    }

    /// Thumb and index tips pinched into a ring, remaining fingers extended.
    fn is_ok_sign(&self, set: &HandLandmarkSet) -> bool {
        let pinched = within_tolerance(
            set.tip(Finger::Thumb),
            set.tip(Finger::Index),
            self.config.pinch_tolerance,
        );
        pinched
            && extended(set, Finger::Middle)
            && extended(set, Finger::Ring)
            && extended(set, Finger::Pinky)
    }

    /// Thumb tip strictly above all four other fingertips.
    fn is_thumbs_up(&self, set: &HandLandmarkSet) -> bool {
        let thumb = set.tip(Finger::Thumb);
        [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]
            .iter()
            .all(|&finger| thumb.y < set.tip(finger).y)
    }

    /// Index and middle extended above the folded ring and pinky.
    fn is_peace_sign(&self, set: &HandLandmarkSet) -> bool {
        let index = set.tip(Finger::Index);
        let middle = set.tip(Finger::Middle);
        let ring = set.tip(Finger::Ring);
        let pinky = set.tip(Finger::Pinky);

        index.y < ring.y && middle.y < ring.y && middle.y < pinky.y && index.y < pinky.y
    }

    /// All five fingers extended and spread apart horizontally.
    fn is_open_palm(&self, set: &HandLandmarkSet) -> bool {
        let all_extended = Finger::ALL.iter().all(|&finger| extended(set, finger));
        let spread = Finger::ALL.windows(2).all(|pair| {
            let a = set.tip(pair[0]);
            let b = set.tip(pair[1]);
            (a.x - b.x).abs() > self.config.spread_distance
        });
        all_extended && spread
    }
}

/// The fingertip sits above its own knuckle, i.e. the finger is extended.
fn extended(set: &HandLandmarkSet, finger: Finger) -> bool {
    set.tip(finger).y < set.knuckle(finger).y
}

fn within_tolerance(a: Landmark, b: Landmark, tolerance: f32) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandJoint, HAND_LANDMARK_COUNT};

    fn uniform(x: f32, y: f32) -> Vec<Landmark> {
        vec![Landmark::new(x, y, 0.0); HAND_LANDMARK_COUNT]
    }

    fn set_joint(landmarks: &mut [Landmark], joint: HandJoint, x: f32, y: f32) {
        landmarks[joint.index()] = Landmark::new(x, y, 0.0);
    }

    #[test]
    fn classification_is_pure() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.6);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.4, 0.1);

        let first = classifier.classify(&landmarks).unwrap();
        let second = classifier.classify(&landmarks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn detects_thumbs_up() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.9);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.4, 0.1);
        set_joint(&mut landmarks, HandJoint::IndexTip, 0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::MiddleTip, 0.55, 0.55);
        set_joint(&mut landmarks, HandJoint::RingTip, 0.6, 0.6);
        set_joint(&mut landmarks, HandJoint::PinkyTip, 0.65, 0.6);

        assert_eq!(
            classifier.classify(&landmarks).unwrap(),
            GestureLabel::ThumbsUp
        );
    }

    #[test]
    fn detects_peace_sign() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.9);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.65, 0.55);
        set_joint(&mut landmarks, HandJoint::IndexTip, 0.4, 0.2);
        set_joint(&mut landmarks, HandJoint::MiddleTip, 0.5, 0.2);
        set_joint(&mut landmarks, HandJoint::RingTip, 0.55, 0.6);
        set_joint(&mut landmarks, HandJoint::PinkyTip, 0.6, 0.7);

        assert_eq!(
            classifier.classify(&landmarks).unwrap(),
            GestureLabel::PeaceSign
        );
    }

    #[test]
    fn detects_fist_when_tips_sit_on_the_wrist() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.47, 0.52);
        set_joint(&mut landmarks, HandJoint::IndexTip, 0.53, 0.48);
        set_joint(&mut landmarks, HandJoint::MiddleTip, 0.5, 0.46);
        set_joint(&mut landmarks, HandJoint::RingTip, 0.46, 0.5);
        set_joint(&mut landmarks, HandJoint::PinkyTip, 0.54, 0.53);

        assert_eq!(classifier.classify(&landmarks).unwrap(), GestureLabel::Fist);
    }

    #[test]
    fn detects_ok_sign() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.9);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.3, 0.5);
        set_joint(&mut landmarks, HandJoint::IndexTip, 0.33, 0.52);
        set_joint(&mut landmarks, HandJoint::MiddleTip, 0.5, 0.2);
        set_joint(&mut landmarks, HandJoint::MiddlePip, 0.5, 0.4);
        set_joint(&mut landmarks, HandJoint::RingTip, 0.56, 0.2);
        set_joint(&mut landmarks, HandJoint::RingPip, 0.56, 0.4);
        set_joint(&mut landmarks, HandJoint::PinkyTip, 0.62, 0.2);
        set_joint(&mut landmarks, HandJoint::PinkyPip, 0.62, 0.4);

        assert_eq!(
            classifier.classify(&landmarks).unwrap(),
            GestureLabel::OkSign
        );
    }

    #[test]
    fn detects_open_palm() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.9);
        let tips = [
            (HandJoint::ThumbTip, HandJoint::ThumbMcp, 0.1),
            (HandJoint::IndexTip, HandJoint::IndexPip, 0.3),
            (HandJoint::MiddleTip, HandJoint::MiddlePip, 0.5),
            (HandJoint::RingTip, HandJoint::RingPip, 0.7),
            (HandJoint::PinkyTip, HandJoint::PinkyPip, 0.9),
        ];
        for (tip, knuckle, x) in tips {
            set_joint(&mut landmarks, tip, x, 0.2);
            set_joint(&mut landmarks, knuckle, x, 0.4);
        }

        assert_eq!(
            classifier.classify(&landmarks).unwrap(),
            GestureLabel::OpenPalm
        );
    }

    #[test]
    fn unknown_pose_maps_to_none() {
        let classifier = GestureClassifier::new();
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.0, 0.0);

        assert_eq!(classifier.classify(&landmarks).unwrap(), GestureLabel::None);
    }

    #[test]
    fn malformed_sets_error_instead_of_returning_none() {
        let classifier = GestureClassifier::new();
        let twenty = uniform(0.5, 0.5)[..20].to_vec();
        let mut twenty_two = uniform(0.5, 0.5);
        twenty_two.push(Landmark::default());

        for bad in [twenty, twenty_two] {
            assert!(classifier.classify(&bad).is_err());
        }
    }

    #[test]
    fn curl_tolerance_is_tunable() {
        let loose = GestureClassifier::with_config(GestureConfig {
            curl_tolerance: 0.4,
            ..GestureConfig::default()
        });
        let mut landmarks = uniform(0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::Wrist, 0.5, 0.5);
        set_joint(&mut landmarks, HandJoint::ThumbTip, 0.2, 0.5);

        assert_eq!(loose.classify(&landmarks).unwrap(), GestureLabel::Fist);
        assert_ne!(
            GestureClassifier::new().classify(&landmarks).unwrap(),
            GestureLabel::Fist
        );
    }
}
