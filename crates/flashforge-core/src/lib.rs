//! flashforge-core — Scoring, mastery and badge progression engine.
//!
//! This crate defines the flashcard data model, the grade rule table, the
//! scoring engine and badge evaluator, and the [`engine::ReviewEngine`]
//! façade that a presentation layer drives.

pub mod badges;
pub mod builtin;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod statistics;
