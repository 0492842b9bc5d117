//! SecurityCoordinator - the main entry point for Homewatch clients.
//!
//! The coordinator owns the authoritative security state (through its
//! repository), applies the transition rules in [`crate::state::transition`],
//! and fans out notifications to registered observers. It is designed to be:
//! - **Synchronous**: No async runtime required
//! - **Not thread-safe**: Callers serialize access (a UI event loop, or a
//!   `Mutex` around the whole coordinator). The deactivation rule reads the
//!   full sensor set to decide whether to clear a pending alarm, so the
//!   triad {alarm status, arming status, sensor set} must mutate as one unit.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use homewatch_core::{FakeImageAnalyzer, SecurityCoordinator, SecurityStore};
//!
//! let store = SecurityStore::new_in_memory();
//! let mut coordinator = SecurityCoordinator::new(store, FakeImageAnalyzer::new());
//! coordinator.set_arming_status(ArmingStatus::ArmedAway);
//! ```

use crate::config::DEFAULT_CAT_CONFIDENCE;
use crate::image::ImageAnalyzer;
use crate::observer::{ListenerId, StatusObserver};
use crate::state::transition;
use crate::state::SecurityRepository;
use crate::types::{AlarmStatus, ArmingStatus, CameraImage, Sensor, SensorType};

/// Consolidates sensor events, arming changes, and image analysis into a
/// single consistent alarm status.
pub struct SecurityCoordinator<R: SecurityRepository, A: ImageAnalyzer> {
    repository: R,
    analyzer: A,
    confidence_threshold: f32,
    observers: Vec<(ListenerId, Box<dyn StatusObserver>)>,
    next_listener_id: u64,
    /// Verdict of the most recently processed camera frame. Consulted when
    /// arming at home: a cat already in view fires the alarm immediately.
    cat_detected: bool,
}

impl<R: SecurityRepository, A: ImageAnalyzer> SecurityCoordinator<R, A> {
    pub fn new(repository: R, analyzer: A) -> Self {
        Self::with_confidence_threshold(repository, analyzer, DEFAULT_CAT_CONFIDENCE)
    }

    pub fn with_confidence_threshold(
        repository: R,
        analyzer: A,
        confidence_threshold: f32,
    ) -> Self {
        SecurityCoordinator {
            repository,
            analyzer,
            confidence_threshold,
            observers: Vec::new(),
            next_listener_id: 0,
            cat_detected: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arming
    // ─────────────────────────────────────────────────────────────────────────────

    /// Changes the arming status.
    ///
    /// Disarming stands the alarm down. Arming resets every sensor to
    /// inactive as a bulk operation (no per-sensor alarm evaluation); arming
    /// at home while the last frame showed a cat fires the alarm.
    pub fn set_arming_status(&mut self, status: ArmingStatus) {
        if let Some(next) = transition::on_arming_changed(status, self.cat_detected) {
            self.set_alarm_status(next);
        }
        if status.is_armed() {
            self.reset_all_sensors();
        }
        self.repository.set_arming_status(status);
        tracing::info!(arming = %status, "arming status changed");
    }

    fn reset_all_sensors(&mut self) {
        for mut sensor in self.repository.sensors() {
            if sensor.active {
                sensor.active = false;
                self.repository.update_sensor(sensor);
            }
        }
        self.notify_sensor_set_changed();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sensors
    // ─────────────────────────────────────────────────────────────────────────────

    /// Reports a sensor going active or inactive.
    ///
    /// A report matching the sensor's current state is a complete no-op.
    /// Otherwise the sensor is updated and persisted first, then the alarm
    /// status is evaluated against the post-update sensor set.
    pub fn change_sensor_activation_status(&mut self, sensor: &Sensor, active: bool) {
        let Some(current) = self.repository.sensor(&sensor.name, sensor.kind) else {
            tracing::warn!(name = %sensor.name, kind = %sensor.kind, "activation report for unmanaged sensor");
            return;
        };
        if current.active == active {
            return;
        }

        let mut updated = current;
        updated.active = active;
        self.repository.update_sensor(updated);
        self.notify_sensor_set_changed();

        let alarm = self.repository.alarm_status();
        let next = if active {
            transition::on_sensor_activated(alarm, self.repository.arming_status())
        } else {
            transition::on_sensor_deactivated(alarm, self.repository.any_sensor_active())
        };
        if let Some(next) = next {
            self.set_alarm_status(next);
        }
    }

    /// Adds a sensor to the managed set. No alarm-status side effects.
    pub fn add_sensor(&mut self, sensor: Sensor) {
        self.repository.add_sensor(sensor);
        self.notify_sensor_set_changed();
    }

    /// Removes a sensor from the managed set. No alarm-status side effects.
    pub fn remove_sensor(&mut self, name: &str, kind: SensorType) {
        self.repository.remove_sensor(name, kind);
        self.notify_sensor_set_changed();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Camera
    // ─────────────────────────────────────────────────────────────────────────────

    /// Runs a camera frame through the analyzer and applies the result.
    ///
    /// The cat verdict is fanned out to observers on every frame, whether or
    /// not the alarm status moved.
    pub fn process_image(&mut self, image: &CameraImage) {
        let cat = self
            .analyzer
            .contains_cat(image, self.confidence_threshold);
        self.cat_detected = cat;
        tracing::debug!(cat_detected = cat, "camera frame analyzed");

        if let Some(next) = transition::on_image_scanned(
            self.repository.arming_status(),
            cat,
            self.repository.any_sensor_active(),
        ) {
            self.set_alarm_status(next);
        }

        for (_, observer) in &self.observers {
            observer.on_cat_detected(cat);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Observers
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers an observer. Notifications are delivered in registration
    /// order; the returned id removes the registration.
    pub fn add_status_listener(&mut self, observer: Box<dyn StatusObserver>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove_status_listener(&mut self, id: ListenerId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repository.arming_status()
    }

    pub fn sensors(&self) -> Vec<Sensor> {
        self.repository.sensors()
    }

    // Single set-and-notify path for every alarm-status mutation.
    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.repository.set_alarm_status(status);
        tracing::info!(alarm = %status, "alarm status set");
        for (_, observer) in &self.observers {
            observer.on_alarm_status_changed(status);
        }
    }

    fn notify_sensor_set_changed(&self) {
        for (_, observer) in &self.observers {
            observer.on_sensor_set_changed();
        }
    }
}
