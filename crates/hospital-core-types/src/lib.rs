//! Core types shared across the hospital store facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! logging facility and the error facility, so every crate in the workspace
//! emits the same structured shape.

pub mod schema;
