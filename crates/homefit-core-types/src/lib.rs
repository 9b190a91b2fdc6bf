//! Core types shared across Homefit facilities
//!
//! Holds the canonical field keys and event names used by both the error
//! facility and the structured logging facility, so every layer emits the
//! same vocabulary.

pub mod schema;
