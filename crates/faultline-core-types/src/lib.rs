//! Core types shared across faultline crates
//!
//! This crate provides foundational types used by both the error
//! taxonomy and the logging adapter:
//!
//! - **Correlation types**: RequestId, TraceId
//! - **Schema constants**: Canonical record keys, context keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestId, TraceId};
