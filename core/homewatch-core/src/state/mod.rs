//! Alarm State (v1)
//!
//! The authoritative security state and the rules that move it.
//!
//! # Architecture
//!
//! The coordinator is the only writer; everything downstream observes.
//!
//! ```text
//! UI / sensors / camera → SecurityCoordinator → SecurityStore → observers
//!        (events)            (transitions)       (storage)      (fan-out)
//! ```
//!
//! # Module Structure
//!
//! - [`transition`]: Pure event → alarm-status transition rules
//! - [`store`]: The repository contract and the JSON-file-backed store
//!
//! # Key Entry Points
//!
//! - [`SecurityRepository`]: Storage contract consumed by the coordinator
//! - [`SecurityStore`]: File-backed (or in-memory) implementation
//! - [`transition`]: Transition rules, usable standalone in tests

pub mod transition;

mod store;

pub use store::{SecurityRepository, SecurityStore};
