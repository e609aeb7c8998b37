//! gradebook-core — Course participants, grading and the scripted scenario.
//!
//! This crate defines the participant model, the grading capability shared by
//! students and lecturers, course-level aggregates, and the scenario driver
//! that the `gradebook` binary runs.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod generator;
pub mod grading;
pub mod model;
pub mod report;
pub mod scenario;

pub use error::ValidationError;
pub use grading::Gradeable;
