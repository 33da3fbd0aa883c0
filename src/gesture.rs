//! Hand gesture classification.
//!
//! The recognizer reports, per hand, a ranked list of gesture categories and
//! 21 normalized landmarks. Only the first hand's top category matters here.

use glam::Vec2;

/// Thumb-to-index distance below which the hand counts as pinching.
pub const PINCH_THRESHOLD: f32 = 0.038;
/// Landmark index of the thumb tip.
pub const THUMB_TIP: usize = 4;
/// Landmark index of the index finger tip.
pub const INDEX_TIP: usize = 8;

/// One hand landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_screen(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance in the image plane. Depth is ignored: fingertips that
    /// touch on screen rarely report the same `z`.
    pub fn screen_distance(self, other: Landmark) -> f32 {
        self.to_screen().distance(other.to_screen())
    }
}

/// A named gesture with its confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureCategory {
    pub name: String,
    pub score: f32,
}

/// Everything the recognizer reported for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recognition {
    /// Ranked categories per detected hand.
    pub gestures: Vec<Vec<GestureCategory>>,
    /// Landmarks per detected hand.
    pub landmarks: Vec<Vec<Landmark>>,
}

impl Recognition {
    pub fn has_hand(&self) -> bool {
        !self.gestures.is_empty() && !self.landmarks.is_empty()
    }
}

/// What the first hand is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Steering with an open palm; carries the index tip's horizontal position.
    OpenPalm { index_tip_x: f32 },
    /// Victory sign: dismiss.
    Victory,
    /// Thumb and index tips touching: draw.
    Pinch,
    /// A hand is present but doing nothing recognized.
    Other,
}

/// Classify the first hand of `recognition`, or `None` if there is no hand.
pub fn classify(recognition: &Recognition) -> Option<Gesture> {
    if !recognition.has_hand() {
        return None;
    }
    let landmarks = recognition.landmarks.first()?;
    let top = recognition
        .gestures
        .first()
        .and_then(|categories| categories.first())
        .map(|category| category.name.as_str());

    let gesture = match top {
        Some("Open_Palm") => Gesture::OpenPalm {
            index_tip_x: landmarks.get(INDEX_TIP).map_or(0.5, |l| l.x),
        },
        Some("Victory") => Gesture::Victory,
        _ => match (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) {
            (Some(thumb), Some(index)) if thumb.screen_distance(*index) < PINCH_THRESHOLD => {
                Gesture::Pinch
            }
            _ => Gesture::Other,
        },
    };
    Some(gesture)
}

/// Whether the recognizer should run on the frame at `time` seconds.
///
/// Runs on one of every three 1/30 s slots.
pub fn poll_due(time: f32) -> bool {
    let slot = (time * 30.0).floor();
    slot >= 0.0 && (slot as u64) % 3 == 0
}
