//! End-to-end tests driving a [`Session`] the way the window does.
//!
//! A scripted camera and recognizer stand in for the hand tracker so the
//! whole gesture path (throttle, classification, mode changes, camera
//! release) runs without hardware.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use galactic_tarot::error::SensorError;
use galactic_tarot::gesture::{GestureCategory, Landmark, Recognition};
use galactic_tarot::i18n::Status;
use galactic_tarot::input::{Action, InputEvent, PointerEvent};
use galactic_tarot::prelude::*;
use galactic_tarot::sensors::{Camera, CameraFrame, GestureRecognizer};

// ============================================================================
// Scripted sensors
// ============================================================================

#[derive(Clone, Default)]
struct ScriptedCamera {
    active: Rc<Cell<bool>>,
}

impl Camera for ScriptedCamera {
    fn open(&mut self) -> Result<(), SensorError> {
        self.active.set(true);
        Ok(())
    }

    fn close(&mut self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn frame(&mut self) -> Option<CameraFrame> {
        Some(CameraFrame {
            width: 1,
            height: 1,
            data: vec![0; 4],
        })
    }
}

/// Reports whatever gesture name the test last scripted.
#[derive(Clone, Default)]
struct ScriptedRecognizer {
    gesture: Rc<RefCell<Option<&'static str>>>,
}

impl GestureRecognizer for ScriptedRecognizer {
    fn recognize(
        &mut self,
        _frame: &CameraFrame,
        _timestamp_ms: u64,
    ) -> Result<Option<Recognition>, SensorError> {
        let Some(name) = *self.gesture.borrow() else {
            return Ok(None);
        };
        // Thumb and index tips coincide, so an unrecognized category pinches.
        let landmarks = (0..21).map(|_| Landmark::new(0.3, 0.4, 0.0)).collect();
        Ok(Some(Recognition {
            gestures: vec![vec![GestureCategory {
                name: name.to_string(),
                score: 0.9,
            }]],
            landmarks: vec![landmarks],
        }))
    }

    fn close(&mut self) {}
}

fn english() -> SceneConfig {
    SceneConfig::new()
        .with_particle_count(1_200)
        .with_language(Language::En)
}

fn manual_session() -> Session {
    let content = ContentTable::embedded().unwrap();
    Session::with_seed(english(), content, Sensors::unavailable(), 0.0, 11)
}

fn tracked_session() -> (Session, ScriptedCamera, ScriptedRecognizer) {
    let camera = ScriptedCamera::default();
    let recognizer = ScriptedRecognizer::default();
    let sensors = Sensors::new(Box::new(camera.clone()), Ok(Box::new(recognizer.clone())));
    let content = ContentTable::embedded().unwrap();
    let session = Session::with_seed(english(), content, sensors, 0.0, 11);
    (session, camera, recognizer)
}

// ============================================================================
// Manual control
// ============================================================================

#[test]
fn test_fool_reading_then_dismiss() {
    let mut session = manual_session();

    assert!(session.draw_card("fool", 0.0));
    for frame in 1..=60 {
        session.frame(frame as f32 / 60.0);
    }
    assert_eq!(session.mode(), Mode::Drawing);

    session.frame(2.0);
    assert_eq!(session.mode(), Mode::Card);
    let reading = session.reading().unwrap();
    assert_eq!(reading.card_name, "The Fool");
    assert!(reading.energy <= 5);

    session.handle_input(InputEvent::Action(Action::Dismiss), 2.5);
    assert_eq!(session.mode(), Mode::Galaxy);
    assert!(session.reading().is_none());
    assert_eq!(session.status(), Status::ManualOnly);
}

#[test]
fn test_trigger_while_drawing_is_ignored() {
    let mut session = manual_session();
    assert!(session.draw_card("star", 0.0));
    assert!(!session.draw_reading(0.5));
    assert!(!session.draw_card("fool", 1.0));

    session.frame(2.0);
    assert_eq!(session.reading().map(|r| r.card_name.as_str()), Some("The Star"));

    // Card mode also refuses a new draw until dismissed.
    assert!(!session.draw_reading(2.5));
}

#[test]
fn test_unknown_card_falls_back() {
    let mut session = manual_session();
    assert!(session.draw_card("the-void", 0.0));
    session.frame(2.0);
    assert_eq!(session.mode(), Mode::Card);
    assert_eq!(session.reading().map(|r| r.card_name.as_str()), Some("the-void"));
}

#[test]
fn test_failed_resolution_returns_to_galaxy() {
    // The Chinese table has neither the drawn card nor the fallback entry.
    let content = ContentTable::from_json(
        r#"{
            "deck": [{"id": "star", "en": "The Star", "cn": "星星"}],
            "entries": {
                "en": {"fool": {"insight": "Leap", "meaning": "Begin", "action": "Go", "energy": 4}},
                "cn": {"sun": {"insight": "光", "meaning": "明", "action": "照", "energy": 3}}
            }
        }"#,
    )
    .unwrap();
    let config = english().with_language(Language::Cn);
    let mut session = Session::with_seed(config, content, Sensors::unavailable(), 0.0, 11);

    assert!(session.draw_card("star", 0.0));
    session.frame(2.0);

    assert_eq!(session.mode(), Mode::Galaxy);
    assert!(session.reading().is_none());
    assert_eq!(session.status(), Status::FluxInterference);
    assert!(!session.is_resolving());

    // The failure is recoverable: the next draw goes through.
    assert!(session.draw_reading(2.5));
    assert_eq!(session.mode(), Mode::Drawing);
}

#[test]
fn test_drag_sets_yaw_velocity() {
    let mut session = manual_session();
    session.handle_input(InputEvent::Pointer(PointerEvent::Pressed(Vec2::new(100.0, 100.0))), 0.0);
    session.handle_input(InputEvent::Pointer(PointerEvent::Moved(Vec2::new(150.0, 100.0))), 0.0);

    let rotation = session.rotation();
    assert!((rotation.yaw_velocity - 0.0516).abs() < 1e-6);
    assert!(rotation.pitch_velocity.abs() < 1e-6);

    // Held pointer: velocity survives the frame untouched.
    session.frame(0.016);
    assert!((session.rotation().yaw_velocity - 0.0516).abs() < 1e-6);

    session.handle_input(InputEvent::Pointer(PointerEvent::Released), 0.02);
    session.frame(0.033);
    assert!(session.rotation().yaw_velocity < 0.0516);
}

#[test]
fn test_regenerate_keeps_two_members() {
    let mut session = manual_session();
    for _ in 0..3 {
        session.apply(Action::Regenerate, 0.0);
        assert_eq!(session.scene().member_count(), 2);
    }
    assert_eq!(session.scene().generation(), 4);
}

#[test]
fn test_frames_mark_points_dirty() {
    let mut session = manual_session();
    session.frame(0.1);
    let points = session.scene_mut().points_mut().unwrap();
    assert!(points.take_dirty());
    assert!(!points.take_dirty());
}

// ============================================================================
// Gesture control
// ============================================================================

#[test]
fn test_pinch_draws_and_victory_releases_camera() {
    let (mut session, camera, recognizer) = tracked_session();
    assert!(session.gestures_available());
    assert_eq!(session.status(), Status::Ready);
    assert!(!session.is_preloaded(0.0));
    assert!(session.is_preloaded(1.2));

    session.apply(Action::ToggleSensors, 0.0);
    assert!(camera.active.get());

    *recognizer.gesture.borrow_mut() = Some("None");
    session.frame(0.0);
    assert_eq!(session.mode(), Mode::Drawing);

    session.frame(2.0);
    assert_eq!(session.mode(), Mode::Card);

    *recognizer.gesture.borrow_mut() = Some("Victory");
    session.frame(2.5);
    assert_eq!(session.mode(), Mode::Galaxy);
    assert!(session.reading().is_none());
    assert!(!camera.active.get());
    assert!(!session.sensors_active());
}

#[test]
fn test_open_palm_steers() {
    let (mut session, _camera, recognizer) = tracked_session();
    session.toggle_sensors();

    *recognizer.gesture.borrow_mut() = Some("Open_Palm");
    session.frame(0.0);
    // Index tip at x = 0.3, left of center: positive yaw.
    assert!(session.rotation().yaw_velocity > 0.002);
    assert_eq!(session.mode(), Mode::Galaxy);
}

#[test]
fn test_recognizer_throttle() {
    let (mut session, _camera, recognizer) = tracked_session();
    session.toggle_sensors();
    *recognizer.gesture.borrow_mut() = Some("None");

    // Slot 1 of 3 is skipped.
    session.frame(1.0 / 30.0 + 0.001);
    assert_eq!(session.mode(), Mode::Galaxy);

    session.frame(0.1 + 0.001);
    assert_eq!(session.mode(), Mode::Drawing);
}

#[test]
fn test_shutdown_releases_camera() {
    let (mut session, camera, _recognizer) = tracked_session();
    session.toggle_sensors();
    assert!(camera.active.get());
    session.shutdown();
    assert!(!camera.active.get());
    session.shutdown();
}
