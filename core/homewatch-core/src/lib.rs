//! # homewatch-core
//!
//! Core library for Homewatch, a home-security monitoring system:
//! door/window/motion sensors and a camera feed drive an alarm state
//! machine, with observers notified of every change.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients can wrap with async if needed.
//! - **Not thread-safe**: Clients provide their own synchronization (`Mutex`, `RwLock`).
//!   The coordinator's deactivation rule is a check-then-act over the sensor
//!   set and must not interleave with concurrent mutations.
//! - **Graceful degradation**: A damaged state file yields default state and
//!   a warning, never a refusal to start.
//! - **Single authoritative state**: alarm status, arming status, and the
//!   sensor set live behind the repository and mutate only through the
//!   coordinator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use homewatch_core::{ArmingStatus, FakeImageAnalyzer, SecurityCoordinator, SecurityStore};
//!
//! let store = SecurityStore::load(&homewatch_core::get_store_path().unwrap())?;
//! let mut coordinator = SecurityCoordinator::new(store, FakeImageAnalyzer::new());
//! coordinator.set_arming_status(ArmingStatus::ArmedAway);
//! ```

// Public modules
pub mod config;
pub mod coordinator;
pub mod error;
pub mod image;
pub mod observer;
pub mod state;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    get_config_path, get_homewatch_dir, get_log_dir, get_store_path, load_monitor_config,
    save_monitor_config, MonitorConfig, DEFAULT_CAT_CONFIDENCE,
};
pub use coordinator::SecurityCoordinator;
pub use error::{Result, SecurityError};
pub use image::{FakeImageAnalyzer, ImageAnalyzer};
pub use observer::{ListenerId, StatusObserver};
pub use state::{SecurityRepository, SecurityStore};
pub use types::{AlarmStatus, ArmingStatus, CameraImage, Sensor, SensorType};
