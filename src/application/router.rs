//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the message into a `BotCommand` and dispatches it with the necessary context.

use anyhow::Result;

use crate::application::state::SharedState;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::BotCommand;
use crate::interface::commands;

#[derive(Clone)]
pub struct CommandRouter {
    config: AppConfig,
    state: SharedState,
}

impl CommandRouter {
    pub fn new(config: AppConfig, state: SharedState) -> Self {
        Self { config, state }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(command) = BotCommand::parse(message) else {
            tracing::debug!("Ignoring non-command message from {}", sender);
            return Ok(());
        };

        let args: &[String] = match &command {
            BotCommand::Set { args } => args,
            _ => &[],
        };
        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}' room='{}'",
            command.name(),
            args.join(" "),
            sender,
            chat.room_id()
        );

        match command {
            BotCommand::Start | BotCommand::Status => {
                commands::status::handle_status(&self.state, chat).await
            }
            BotCommand::Help => commands::status::handle_help(chat).await,
            BotCommand::Set { args } => {
                commands::set::handle_set(&self.config, &self.state, chat, sender, &args).await
            }
        }
    }
}
