//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., /status, /set).
//! These handlers are invoked by the Router.

pub mod set;
pub mod status;
