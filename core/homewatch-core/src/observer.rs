//! Observer contract for alarm and sensor notifications.
//!
//! The coordinator fans out three kinds of events through this trait.
//! Hooks default to no-ops so an observer implements only what it needs:
//! a status display cares about alarm changes, a sensor list about the
//! sensor set, a camera panel about cat verdicts.
//!
//! Handlers run synchronously on the coordinator's call path and must be
//! fast; an observer that needs to do real work should hand off internally.

use crate::types::AlarmStatus;

/// Receiver of alarm-status and sensor-activity change notifications.
pub trait StatusObserver {
    /// The authoritative alarm status changed (or was re-asserted).
    fn on_alarm_status_changed(&self, _status: AlarmStatus) {}

    /// A camera frame was analyzed; `present` is the cat verdict.
    /// Fired on every processed frame, whether or not the alarm moved.
    fn on_cat_detected(&self, _present: bool) {}

    /// The sensor set changed: added, removed, or an active flag flipped.
    /// UIs use this to refresh their sensor lists.
    fn on_sensor_set_changed(&self) {}
}

/// Handle returned by listener registration, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
