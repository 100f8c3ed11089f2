//! # syl-core
//!
//! Core types, input normalization, and plan partitioning for Syllabus.
//!
//! This crate provides the foundational, I/O-free pieces shared across all
//! Syllabus crates:
//! - Value types for study requests, plans, days, and resources
//! - Lesson-list and duration normalization helpers
//! - The plan partitioner that chunks lessons into days
//! - Input-validation error types
//! - CLI response envelopes

pub mod duration;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod lessons;
pub mod partition;
pub mod responses;

pub use errors::PlanError;
pub use partition::{Partitioner, partition};
