//! Core types shared by the coordinator, the store, and clients.
//!
//! These are closed enumerations: transition logic matches them exhaustively
//! so a new status variant cannot silently fall through.

use std::fmt;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// Alarm / Arming Status
// ═══════════════════════════════════════════════════════════════════════════════

/// Severity of the security system, from quiet to firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

impl AlarmStatus {
    /// Human-readable description shown by UIs.
    pub fn description(&self) -> &'static str {
        match self {
            AlarmStatus::NoAlarm => "All Clear",
            AlarmStatus::PendingAlarm => "Pending Alarm",
            AlarmStatus::Alarm => "ALARM!",
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlarmStatus::NoAlarm => "no_alarm",
            AlarmStatus::PendingAlarm => "pending_alarm",
            AlarmStatus::Alarm => "alarm",
        };
        f.write_str(name)
    }
}

/// Whether the system is currently monitoring its sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    /// True for either armed mode.
    pub fn is_armed(&self) -> bool {
        matches!(self, ArmingStatus::ArmedHome | ArmingStatus::ArmedAway)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ArmingStatus::Disarmed => "Disarmed",
            ArmingStatus::ArmedHome => "Armed - At Home",
            ArmingStatus::ArmedAway => "Armed - Away",
        }
    }
}

impl fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArmingStatus::Disarmed => "disarmed",
            ArmingStatus::ArmedHome => "armed_home",
            ArmingStatus::ArmedAway => "armed_away",
        };
        f.write_str(name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Sensors
// ═══════════════════════════════════════════════════════════════════════════════

/// The kind of monitored point a sensor watches.
///
/// `Ord` so sensor sets iterate in a stable order (door, window, motion is
/// not meaningful; name is the primary sort key in the store).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorType::Door => "door",
            SensorType::Window => "window",
            SensorType::Motion => "motion",
        };
        f.write_str(name)
    }
}

/// A named, typed boolean-active monitored point.
///
/// Identity is `name` + `kind`; names are not required to be unique on their
/// own. `active` is mutable state and is only changed through
/// [`SecurityCoordinator::change_sensor_activation_status`](crate::coordinator::SecurityCoordinator::change_sensor_activation_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub kind: SensorType,
    #[serde(default)]
    pub active: bool,
}

impl Sensor {
    /// Creates an inactive sensor.
    pub fn new(name: impl Into<String>, kind: SensorType) -> Self {
        Sensor {
            name: name.into(),
            kind,
            active: false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Camera frames
// ═══════════════════════════════════════════════════════════════════════════════

/// An opaque camera frame handed to the image analyzer.
///
/// The core never inspects pixels; analyzers decide what the bytes mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CameraImage {
    /// A blank frame, handy for tests and the console front end.
    pub fn blank(width: u32, height: u32) -> Self {
        CameraImage {
            width,
            height,
            data: Vec::new(),
        }
    }
}
