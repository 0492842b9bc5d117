//! Maps security events to alarm-status transitions.
//! `None` always means "leave the current status alone".

use crate::types::{AlarmStatus, ArmingStatus};

/// A sensor went from inactive to active.
///
/// A disarmed system ignores sensors entirely. Otherwise each activation
/// escalates one step; a firing alarm is sticky and stays put.
pub fn on_sensor_activated(
    current: AlarmStatus,
    arming: ArmingStatus,
) -> Option<AlarmStatus> {
    if arming == ArmingStatus::Disarmed {
        return None;
    }
    match current {
        AlarmStatus::NoAlarm => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
        AlarmStatus::Alarm => None,
    }
}

/// A sensor went from active to inactive.
///
/// `any_sensor_active` must be computed over the post-update sensor set: the
/// sensor being deactivated has already been written back, so a lone active
/// sensor going quiet reads as "none active" here.
pub fn on_sensor_deactivated(
    current: AlarmStatus,
    any_sensor_active: bool,
) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::PendingAlarm if !any_sensor_active => Some(AlarmStatus::NoAlarm),
        _ => None,
    }
}

/// A camera frame was analyzed.
///
/// A cat seen while armed-home always fires the alarm, even over a status
/// that is otherwise sticky. No cat and no active sensors stands the system
/// down. Anything else leaves the status untouched.
pub fn on_image_scanned(
    arming: ArmingStatus,
    cat_detected: bool,
    any_sensor_active: bool,
) -> Option<AlarmStatus> {
    if cat_detected {
        if arming == ArmingStatus::ArmedHome {
            Some(AlarmStatus::Alarm)
        } else {
            None
        }
    } else if !any_sensor_active {
        Some(AlarmStatus::NoAlarm)
    } else {
        None
    }
}

/// The arming status is about to change.
///
/// Disarming always stands the alarm down. Arming at home while the last
/// processed frame contained a cat fires it immediately; the detection
/// result persists until the next frame is processed.
pub fn on_arming_changed(
    new_status: ArmingStatus,
    cat_detected: bool,
) -> Option<AlarmStatus> {
    match new_status {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome if cat_detected => Some(AlarmStatus::Alarm),
        _ => None,
    }
}
