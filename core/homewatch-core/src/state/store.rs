//! File-backed security state persistence.
//!
//! The store holds the authoritative triad the coordinator mutates: alarm
//! status, arming status, and the sensor set.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "alarm_status": "no_alarm",
//!   "arming_status": "disarmed",
//!   "sensors": [ { "name": "Front door", "kind": "door", "active": false } ],
//!   "updated_at": "2026-08-23T12:00:00Z"
//! }
//! ```
//!
//! # Defensive Design
//!
//! A monitoring system should come up even when its state file is damaged:
//! - Missing file → default state
//! - Empty file → default state
//! - Corrupt JSON → default state, warning logged
//! - Unsupported version → default state, warning logged
//!
//! # Atomic Writes
//!
//! Uses temp file + rename so a crash mid-write never leaves a torn file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Result, SecurityError};
use crate::types::{AlarmStatus, ArmingStatus, Sensor, SensorType};

/// Schema version. We only load files with version == 1.
const STORE_VERSION: u32 = 1;

/// Durable store contract consumed by the coordinator.
///
/// Mutations are infallible from the caller's perspective: the store owns
/// its persistence and must surface read-your-writes behavior in memory even
/// when the disk is unhappy.
pub trait SecurityRepository {
    fn alarm_status(&self) -> AlarmStatus;
    fn set_alarm_status(&mut self, status: AlarmStatus);

    fn arming_status(&self) -> ArmingStatus;
    fn set_arming_status(&mut self, status: ArmingStatus);

    /// Sensors in stable (name, kind) order.
    fn sensors(&self) -> Vec<Sensor>;
    fn sensor(&self, name: &str, kind: SensorType) -> Option<Sensor>;
    fn add_sensor(&mut self, sensor: Sensor);
    fn remove_sensor(&mut self, name: &str, kind: SensorType);
    /// Replaces the stored sensor with the same identity, if present.
    fn update_sensor(&mut self, sensor: Sensor);

    fn any_sensor_active(&self) -> bool {
        self.sensors().iter().any(|s| s.active)
    }
}

/// The on-disk JSON structure for the state file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: Vec<Sensor>,
    updated_at: DateTime<Utc>,
}

/// In-memory security state, optionally backed by a file.
///
/// Create with [`SecurityStore::load`] to read the state file, or
/// [`SecurityStore::new_in_memory`] for tests. File-backed stores persist on
/// every mutation; persistence failures are logged and the in-memory state
/// stays authoritative.
pub struct SecurityStore {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: BTreeMap<(String, SensorType), Sensor>,
    file_path: Option<PathBuf>,
}

impl SecurityStore {
    pub fn new_in_memory() -> Self {
        SecurityStore {
            alarm_status: AlarmStatus::NoAlarm,
            arming_status: ArmingStatus::Disarmed,
            sensors: BTreeMap::new(),
            file_path: None,
        }
    }

    pub fn new(file_path: &Path) -> Self {
        SecurityStore {
            alarm_status: AlarmStatus::NoAlarm,
            arming_status: ArmingStatus::Disarmed,
            sensors: BTreeMap::new(),
            file_path: Some(file_path.to_path_buf()),
        }
    }

    pub fn load(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            return Ok(SecurityStore::new(file_path));
        }

        let content = fs::read_to_string(file_path).map_err(|e| SecurityError::Io {
            context: format!("reading state file {}", file_path.display()),
            source: e,
        })?;

        if content.trim().is_empty() {
            tracing::warn!(path = %file_path.display(), "empty state file, starting from defaults");
            return Ok(SecurityStore::new(file_path));
        }

        match serde_json::from_str::<StoreFile>(&content) {
            Ok(file) if file.version == STORE_VERSION => Ok(SecurityStore {
                alarm_status: file.alarm_status,
                arming_status: file.arming_status,
                sensors: file
                    .sensors
                    .into_iter()
                    .map(|s| ((s.name.clone(), s.kind), s))
                    .collect(),
                file_path: Some(file_path.to_path_buf()),
            }),
            Ok(file) => {
                tracing::warn!(
                    version = file.version,
                    expected = STORE_VERSION,
                    "unsupported state file version, starting from defaults"
                );
                Ok(SecurityStore::new(file_path))
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse state file, starting from defaults");
                Ok(SecurityStore::new(file_path))
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let file_path = self.file_path.as_ref().ok_or(SecurityError::InMemoryOnly)?;

        let file = StoreFile {
            version: STORE_VERSION,
            alarm_status: self.alarm_status,
            arming_status: self.arming_status,
            sensors: self.sensors.values().cloned().collect(),
            updated_at: Utc::now(),
        };

        let content = serde_json::to_string_pretty(&file).map_err(|e| SecurityError::Json {
            context: "serializing state file".to_string(),
            source: e,
        })?;

        let parent_dir = file_path.parent().ok_or_else(|| SecurityError::Io {
            context: "state file path has no parent directory".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })?;
        fs::create_dir_all(parent_dir).map_err(|e| SecurityError::Io {
            context: format!("creating {}", parent_dir.display()),
            source: e,
        })?;

        let mut temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| SecurityError::Io {
                context: "creating temp state file".to_string(),
                source: e,
            })?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| SecurityError::Io {
                context: "writing temp state file".to_string(),
                source: e,
            })?;
        temp_file.flush().map_err(|e| SecurityError::Io {
            context: "flushing temp state file".to_string(),
            source: e,
        })?;
        temp_file
            .persist(file_path)
            .map_err(|e| SecurityError::Io {
                context: format!("persisting state file {}", file_path.display()),
                source: e.error,
            })?;

        Ok(())
    }

    /// Persist if file-backed; in-memory stores skip silently.
    fn persist(&self) {
        if self.file_path.is_none() {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to persist security state");
        }
    }
}

impl SecurityRepository for SecurityStore {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.alarm_status = status;
        self.persist();
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.arming_status = status;
        self.persist();
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.sensors.values().cloned().collect()
    }

    fn sensor(&self, name: &str, kind: SensorType) -> Option<Sensor> {
        self.sensors.get(&(name.to_string(), kind)).cloned()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors
            .insert((sensor.name.clone(), sensor.kind), sensor);
        self.persist();
    }

    fn remove_sensor(&mut self, name: &str, kind: SensorType) {
        self.sensors.remove(&(name.to_string(), kind));
        self.persist();
    }

    fn update_sensor(&mut self, sensor: Sensor) {
        let key = (sensor.name.clone(), sensor.kind);
        if self.sensors.contains_key(&key) {
            self.sensors.insert(key, sensor);
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_store_has_defaults() {
        let store = SecurityStore::new_in_memory();
        assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
        assert_eq!(store.arming_status(), ArmingStatus::Disarmed);
        assert!(store.sensors().is_empty());
    }

    #[test]
    fn test_add_and_get_sensor() {
        let mut store = SecurityStore::new_in_memory();
        store.add_sensor(Sensor::new("Front door", SensorType::Door));
        let sensor = store.sensor("Front door", SensorType::Door).unwrap();
        assert!(!sensor.active);
    }

    #[test]
    fn test_same_name_different_kind_are_distinct() {
        let mut store = SecurityStore::new_in_memory();
        store.add_sensor(Sensor::new("Garage", SensorType::Door));
        store.add_sensor(Sensor::new("Garage", SensorType::Motion));
        assert_eq!(store.sensors().len(), 2);

        store.remove_sensor("Garage", SensorType::Door);
        assert_eq!(store.sensors().len(), 1);
        assert!(store.sensor("Garage", SensorType::Motion).is_some());
    }

    #[test]
    fn test_update_sensor_replaces_active_flag() {
        let mut store = SecurityStore::new_in_memory();
        store.add_sensor(Sensor::new("Window", SensorType::Window));

        let mut updated = store.sensor("Window", SensorType::Window).unwrap();
        updated.active = true;
        store.update_sensor(updated);

        assert!(store.sensor("Window", SensorType::Window).unwrap().active);
        assert!(store.any_sensor_active());
    }

    #[test]
    fn test_update_unknown_sensor_is_noop() {
        let mut store = SecurityStore::new_in_memory();
        store.update_sensor(Sensor::new("Ghost", SensorType::Motion));
        assert!(store.sensors().is_empty());
    }

    #[test]
    fn test_sensors_iterate_in_name_order() {
        let mut store = SecurityStore::new_in_memory();
        store.add_sensor(Sensor::new("Zulu", SensorType::Motion));
        store.add_sensor(Sensor::new("Alpha", SensorType::Door));
        let names: Vec<_> = store.sensors().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("store.json");

        {
            let mut store = SecurityStore::new(&file);
            store.set_arming_status(ArmingStatus::ArmedAway);
            store.set_alarm_status(AlarmStatus::PendingAlarm);
            store.add_sensor(Sensor::new("Front door", SensorType::Door));
        }

        let store = SecurityStore::load(&file).unwrap();
        assert_eq!(store.arming_status(), ArmingStatus::ArmedAway);
        assert_eq!(store.alarm_status(), AlarmStatus::PendingAlarm);
        assert_eq!(store.sensors().len(), 1);
    }

    #[test]
    fn test_load_nonexistent_file_returns_defaults() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("nonexistent.json");
        let store = SecurityStore::load(&file).unwrap();
        assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn test_load_empty_file_returns_defaults() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("empty.json");
        std::fs::write(&file, "").unwrap();

        let store = SecurityStore::load(&file).unwrap();
        assert!(store.sensors().is_empty());
    }

    #[test]
    fn test_load_corrupt_json_returns_defaults() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("corrupt.json");
        std::fs::write(&file, "{invalid json}").unwrap();

        let store = SecurityStore::load(&file).unwrap();
        assert_eq!(store.arming_status(), ArmingStatus::Disarmed);
    }

    #[test]
    fn test_load_unsupported_version_returns_defaults() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("v0.json");
        std::fs::write(
            &file,
            r#"{"version":0,"alarm_status":"alarm","arming_status":"armed_away","sensors":[],"updated_at":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let store = SecurityStore::load(&file).unwrap();
        assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn test_save_in_memory_store_is_error() {
        let store = SecurityStore::new_in_memory();
        assert!(store.save().is_err());
    }
}
