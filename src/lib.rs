//! Attendance and payroll core behind the WorkerTrack UI.
//!
//! The UI layer supplies events and wall-clock timestamps; this crate owns
//! session routing, the attendance store, payroll aggregation and worker
//! search. Everything crossing the boundary is a plain serde value object,
//! and all timestamps are caller-supplied so the logic stays deterministic.

pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod payroll;
pub mod session;
pub mod store;
