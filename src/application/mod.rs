//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes the recommendation engine, report formatting, occupancy
//! updates, command routing, state management and logging setup.

pub mod logging;
pub mod occupancy;
pub mod recommend;
pub mod report;
pub mod router;
pub mod state;
