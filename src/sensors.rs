//! Camera and gesture recognizer lifecycle.
//!
//! Both devices sit behind traits so a platform backend can be plugged in.
//! The binary ships without one: [`NoCamera`] refuses every open request and
//! [`Sensors::unavailable`] starts with no recognizer, which leaves the
//! session in pointer-only mode.

use crate::error::SensorError;
use crate::gesture::{self, Recognition};

/// One captured camera image.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA pixels.
    pub data: Vec<u8>,
}

/// A permission-gated video source.
pub trait Camera {
    /// Ask for access and start streaming.
    fn open(&mut self) -> Result<(), SensorError>;
    /// Stop streaming and release the device.
    fn close(&mut self);
    fn is_active(&self) -> bool;
    /// The latest frame, if one is ready.
    fn frame(&mut self) -> Option<CameraFrame>;
}

/// A hand gesture recognition engine.
pub trait GestureRecognizer {
    fn recognize(
        &mut self,
        frame: &CameraFrame,
        timestamp_ms: u64,
    ) -> Result<Option<Recognition>, SensorError>;
    fn close(&mut self);
}

/// A camera that is never available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl Camera for NoCamera {
    fn open(&mut self) -> Result<(), SensorError> {
        Err(SensorError::PermissionDenied)
    }

    fn close(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }

    fn frame(&mut self) -> Option<CameraFrame> {
        None
    }
}

/// Camera plus recognizer, owned by the session.
pub struct Sensors {
    camera: Box<dyn Camera>,
    recognizer: Option<Box<dyn GestureRecognizer>>,
    shut_down: bool,
}

impl Sensors {
    /// Wrap a camera and the outcome of recognizer initialization.
    ///
    /// A failed recognizer leaves gestures disabled; the camera is still
    /// owned so it can be shut down.
    pub fn new(
        camera: Box<dyn Camera>,
        recognizer: Result<Box<dyn GestureRecognizer>, SensorError>,
    ) -> Self {
        let recognizer = match recognizer {
            Ok(recognizer) => {
                log::info!("gesture recognizer ready");
                Some(recognizer)
            }
            Err(err) => {
                log::warn!("gestures disabled: {err}");
                None
            }
        };
        Self {
            camera,
            recognizer,
            shut_down: false,
        }
    }

    /// No camera and no recognizer.
    pub fn unavailable() -> Self {
        Self::new(
            Box::new(NoCamera),
            Err(SensorError::RecognizerUnavailable(
                "no gesture backend built in".to_string(),
            )),
        )
    }

    /// Whether a recognizer initialized successfully.
    pub fn gestures_available(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.camera.is_active()
    }

    /// Open the camera.
    pub fn start(&mut self) -> Result<(), SensorError> {
        if self.shut_down {
            return Err(SensorError::CameraUnavailable("sensors shut down".to_string()));
        }
        if self.camera.is_active() {
            return Ok(());
        }
        self.camera.open()?;
        log::info!("camera started");
        Ok(())
    }

    /// Close the camera. A no-op when it is not running.
    pub fn stop(&mut self) {
        if self.camera.is_active() {
            self.camera.close();
            log::info!("camera stopped");
        }
    }

    /// Run the recognizer on the current frame if the throttle allows.
    ///
    /// Recognition failures are logged and dropped.
    pub fn poll(&mut self, time: f32) -> Option<Recognition> {
        if !gesture::poll_due(time) || !self.camera.is_active() {
            return None;
        }
        let recognizer = self.recognizer.as_mut()?;
        let frame = self.camera.frame()?;
        let timestamp_ms = (time.max(0.0) * 1000.0) as u64;
        match recognizer.recognize(&frame, timestamp_ms) {
            Ok(result) => result,
            Err(err) => {
                log::debug!("recognition failed: {err}");
                None
            }
        }
    }

    /// Release the recognizer and the camera. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        if let Some(mut recognizer) = self.recognizer.take() {
            recognizer.close();
        }
        self.camera.close();
        self.shut_down = true;
        log::debug!("sensors shut down");
    }
}

impl std::fmt::Debug for Sensors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sensors")
            .field("camera_active", &self.camera.is_active())
            .field("gestures", &self.gestures_available())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

impl Drop for Sensors {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureCategory, Landmark};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeCamera {
        active: bool,
        closes: Rc<Cell<u32>>,
    }

    impl Camera for FakeCamera {
        fn open(&mut self) -> Result<(), SensorError> {
            self.active = true;
            Ok(())
        }
        fn close(&mut self) {
            self.active = false;
            self.closes.set(self.closes.get() + 1);
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn frame(&mut self) -> Option<CameraFrame> {
            self.active.then(|| CameraFrame {
                width: 1,
                height: 1,
                data: vec![0; 4],
            })
        }
    }

    struct FakeRecognizer {
        fail: bool,
        closes: Rc<Cell<u32>>,
    }

    impl GestureRecognizer for FakeRecognizer {
        fn recognize(
            &mut self,
            _frame: &CameraFrame,
            _timestamp_ms: u64,
        ) -> Result<Option<Recognition>, SensorError> {
            if self.fail {
                return Err(SensorError::Recognition("blurry".into()));
            }
            Ok(Some(Recognition {
                gestures: vec![vec![GestureCategory {
                    name: "Victory".into(),
                    score: 1.0,
                }]],
                landmarks: vec![vec![Landmark::default(); 21]],
            }))
        }
        fn close(&mut self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn sensors(fail: bool) -> (Sensors, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let camera_closes = Rc::new(Cell::new(0));
        let recognizer_closes = Rc::new(Cell::new(0));
        let sensors = Sensors::new(
            Box::new(FakeCamera {
                active: false,
                closes: camera_closes.clone(),
            }),
            Ok(Box::new(FakeRecognizer {
                fail,
                closes: recognizer_closes.clone(),
            })),
        );
        (sensors, camera_closes, recognizer_closes)
    }

    #[test]
    fn test_unavailable_denies() {
        let mut sensors = Sensors::unavailable();
        assert!(!sensors.gestures_available());
        assert_eq!(sensors.start(), Err(SensorError::PermissionDenied));
        assert!(!sensors.is_active());
        assert_eq!(sensors.poll(0.0), None);
    }

    #[test]
    fn test_start_poll_stop() {
        let (mut sensors, _, _) = sensors(false);
        assert_eq!(sensors.poll(0.0), None);
        assert!(sensors.start().is_ok());
        assert!(sensors.is_active());
        assert!(sensors.poll(0.0).is_some());
        // Throttled slot.
        assert!(sensors.poll(1.5 / 30.0).is_none());
        sensors.stop();
        assert!(!sensors.is_active());
    }

    #[test]
    fn test_recognition_errors_are_swallowed() {
        let (mut sensors, _, _) = sensors(true);
        sensors.start().unwrap();
        assert_eq!(sensors.poll(0.0), None);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (mut sensors, camera_closes, recognizer_closes) = sensors(false);
        sensors.start().unwrap();
        sensors.shutdown();
        sensors.shutdown();
        drop(sensors);
        assert_eq!(camera_closes.get(), 1);
        assert_eq!(recognizer_closes.get(), 1);
    }

    #[test]
    fn test_no_start_after_shutdown() {
        let (mut sensors, _, _) = sensors(false);
        sensors.shutdown();
        assert!(sensors.start().is_err());
    }
}
