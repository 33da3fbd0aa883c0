//! All mutable application state, driven from the event loop.
//!
//! A [`Session`] owns the scene, the mode machine, the rotation, the
//! resolver and the sensors. Input arrives through
//! [`handle_input`](Session::handle_input) and
//! [`apply`](Session::apply); [`frame`](Session::frame) advances everything
//! by one display refresh. Time is always passed in explicitly as seconds
//! since startup.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animator::{Animator, FrameInput, FrameOutput};
use crate::config::SceneConfig;
use crate::error::SensorError;
use crate::galaxy;
use crate::gesture::{self, Gesture};
use crate::i18n::{self, Hint, Status, Strings};
use crate::input::{Action, InputEvent, PointerDrag, PointerEvent};
use crate::mode::{Mode, ModeMachine};
use crate::reading::{ContentTable, Language, Reading, ReadingResolver, TarotCard};
use crate::rotation::RotationState;
use crate::scene::Scene;
use crate::sensors::Sensors;

/// Seconds the preloading screen stays up after the recognizer is ready.
pub const PRELOAD_DELAY: f32 = 1.2;

pub struct Session {
    config: SceneConfig,
    content: ContentTable,
    scene: Scene,
    animator: Animator,
    machine: ModeMachine,
    resolver: ReadingResolver,
    rotation: RotationState,
    drag: PointerDrag,
    sensors: Sensors,
    language: Language,
    status: Status,
    hint: Hint,
    preloaded_at: f32,
    help_open: bool,
    last_frame: Option<FrameOutput>,
    rng: StdRng,
}

impl Session {
    /// Start a session at time `now` with an entropy-seeded RNG.
    pub fn new(config: SceneConfig, content: ContentTable, sensors: Sensors, now: f32) -> Self {
        Self::with_rng(config, content, sensors, now, StdRng::from_entropy())
    }

    /// Start a session with a reproducible RNG.
    pub fn with_seed(
        config: SceneConfig,
        content: ContentTable,
        sensors: Sensors,
        now: f32,
        seed: u64,
    ) -> Self {
        Self::with_rng(config, content, sensors, now, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: SceneConfig,
        content: ContentTable,
        sensors: Sensors,
        now: f32,
        mut rng: StdRng,
    ) -> Self {
        let mut scene = Scene::new();
        scene.install(galaxy::generate(&config, &mut rng));

        let gestures = sensors.gestures_available();
        let status = if gestures {
            Status::Ready
        } else {
            Status::ManualOnly
        };
        let preloaded_at = if gestures { now + PRELOAD_DELAY } else { now };

        Self {
            animator: Animator::new(&config),
            language: config.language,
            config,
            content,
            scene,
            machine: ModeMachine::new(),
            resolver: ReadingResolver::new(),
            rotation: RotationState::new(),
            drag: PointerDrag::new(),
            sensors,
            status,
            hint: Hint::Ready,
            preloaded_at,
            help_open: false,
            last_frame: None,
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    pub fn reading(&self) -> Option<&Reading> {
        self.machine.reading()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static Strings {
        i18n::strings(self.language)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn hint(&self) -> Hint {
        self.hint
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn is_preloaded(&self, now: f32) -> bool {
        now >= self.preloaded_at
    }

    pub fn sensors_active(&self) -> bool {
        self.sensors.is_active()
    }

    pub fn gestures_available(&self) -> bool {
        self.sensors.gestures_available()
    }

    /// Whether a reading request is in flight.
    pub fn is_resolving(&self) -> bool {
        self.resolver.is_pending()
    }

    /// Uniforms of the most recent frame.
    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last_frame.as_ref()
    }

    /// Status line followed by the gesture hint, localized.
    pub fn status_line(&self) -> String {
        let strings = self.strings();
        format!("{} · {}", self.status.text(strings), self.hint.text(strings))
    }

    fn resting_status(&self) -> Status {
        if self.sensors.gestures_available() {
            Status::Ready
        } else {
            Status::ManualOnly
        }
    }

    /// Route one translated window event.
    pub fn handle_input(&mut self, event: InputEvent, now: f32) {
        match event {
            InputEvent::Pointer(pointer) => self.pointer(pointer),
            InputEvent::Action(action) => self.apply(action, now),
        }
    }

    /// Pointer drag rotates the galaxy.
    pub fn pointer(&mut self, event: PointerEvent) {
        if let Some(delta) = self.drag.handle(event) {
            self.rotation.drag(delta);
        }
    }

    pub fn apply(&mut self, action: Action, now: f32) {
        match action {
            Action::DrawReading => {
                self.draw_reading(now);
            }
            Action::Dismiss => self.dismiss(),
            Action::ToggleSensors => self.toggle_sensors(),
            Action::ToggleLanguage => self.toggle_language(),
            Action::Regenerate => self.regenerate(),
            Action::ToggleHelp => self.help_open = !self.help_open,
        }
    }

    /// Draw a random card. Returns `false` if a reading is already underway.
    pub fn draw_reading(&mut self, now: f32) -> bool {
        let card = self.content.random_card(&mut self.rng).clone();
        self.request_card(card, now)
    }

    /// Draw a specific card by id. Unknown ids resolve to the fallback entry.
    pub fn draw_card(&mut self, id: &str, now: f32) -> bool {
        let card = self.content.card(id).cloned().unwrap_or_else(|| TarotCard {
            id: id.to_string(),
            en: id.to_string(),
            cn: id.to_string(),
        });
        self.request_card(card, now)
    }

    fn request_card(&mut self, card: TarotCard, now: f32) -> bool {
        if self.mode() != Mode::Galaxy || self.resolver.is_pending() {
            log::debug!("draw ignored in {:?}", self.mode());
            return false;
        }
        let id = card.id.clone();
        if !self.resolver.request(card, now) {
            return false;
        }
        self.machine.begin_drawing(now);
        self.status = Status::Reading;
        log::info!("drawing card {id}");
        true
    }

    /// Return to the galaxy, drop any reading and stop the camera.
    pub fn dismiss(&mut self) {
        self.resolver.cancel();
        self.machine.dismiss();
        self.sensors.stop();
        self.hint = Hint::Ready;
        self.status = self.resting_status();
    }

    pub fn toggle_sensors(&mut self) {
        if self.sensors.is_active() {
            self.sensors.stop();
            self.hint = Hint::Ready;
            return;
        }
        match self.sensors.start() {
            Ok(()) => {}
            Err(SensorError::PermissionDenied) => {
                log::warn!("camera access denied, pointer control only");
                self.status = Status::AccessDenied;
            }
            Err(err) => {
                log::warn!("camera unavailable: {err}");
                self.status = Status::AccessDenied;
            }
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        log::info!("language: {}", self.language.code());
    }

    /// Replace the whole particle field with a freshly generated one.
    pub fn regenerate(&mut self) {
        let field = galaxy::generate(&self.config, &mut self.rng);
        self.scene.install(field);
    }

    /// React to a classified gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: f32) {
        match gesture {
            Gesture::OpenPalm { index_tip_x } => {
                self.rotation.steer(index_tip_x);
                self.hint = Hint::Palm;
            }
            Gesture::Victory => {
                self.dismiss();
                self.hint = Hint::Victory;
            }
            Gesture::Pinch => {
                if self.mode() == Mode::Galaxy && !self.resolver.is_pending() {
                    self.draw_reading(now);
                }
                self.hint = Hint::Pinch;
            }
            Gesture::Other => self.hint = Hint::Ready,
        }
    }

    /// Advance one display refresh.
    pub fn frame(&mut self, now: f32) -> FrameOutput {
        match self.resolver.poll(now, self.language, &self.content) {
            Some(Ok(reading)) => {
                if self.machine.reveal(reading) {
                    self.status = Status::Done;
                }
            }
            Some(Err(err)) => {
                log::warn!("reading failed: {err}");
                self.dismiss();
                self.status = Status::FluxInterference;
            }
            None => {}
        }

        if let Some(gesture) = self.sensors.poll(now).as_ref().and_then(gesture::classify) {
            self.handle_gesture(gesture, now);
        }

        self.rotation.advance(self.drag.is_held());

        let input = FrameInput {
            time: now,
            mode: self.machine.mode(),
            drawing_since: self.machine.drawing_since(),
            rotation: self.rotation,
        };
        let output = self.animator.step(&mut self.scene, &input);
        self.last_frame = Some(output);
        output
    }

    /// Release the sensors. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.resolver.cancel();
        self.sensors.shutdown();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode())
            .field("language", &self.language)
            .field("status", &self.status)
            .field("hint", &self.hint)
            .field("sensors", &self.sensors)
            .field("generation", &self.scene.generation())
            .finish()
    }
}
