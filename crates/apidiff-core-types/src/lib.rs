//! Core types shared across apidiff facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error facility and the logging facility, so that log consumers
//! and test assertions agree on a single vocabulary.

pub mod schema;
