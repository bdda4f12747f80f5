//! # Status and Help Commands
//!
//! Handles `/start`, `/status` and `/help`. None of them touch state or need
//! permissions; they reply with the occupancy report or the command list.

use crate::application::report::format_report;
use crate::application::state::SharedState;
use crate::domain::traits::ChatProvider;
use crate::strings::help;
use anyhow::Result;

pub async fn handle_status(state: &SharedState, chat: &impl ChatProvider) -> Result<()> {
    let report = {
        let guard = state.lock().await;
        format_report(&guard.registry, guard.threshold_percent)
    };
    reply(chat, &report).await
}

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    reply(chat, help::MAIN).await
}

async fn reply(chat: &impl ChatProvider, text: &str) -> Result<()> {
    chat.send_message(text).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
