//! # Interface Layer
//!
//! User-facing entry points: one handler per chat command.

pub mod commands;
