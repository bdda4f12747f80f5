//! # Domain Types
//!
//! Chat commands understood by the bot and the user-input errors they can fail with.

use crate::strings::messages;
use thiserror::Error;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Status,
    Help,
    /// Raw argument tokens; validated by the handler after the permission check.
    Set { args: Vec<String> },
}

impl BotCommand {
    /// Parses `/name args...`. Command names are case-sensitive.
    /// Returns `None` for plain text and unrecognised commands.
    pub fn parse(message: &str) -> Option<Self> {
        let mut tokens = message.split_whitespace();
        let name = tokens.next()?.strip_prefix('/')?;
        match name {
            "start" => Some(BotCommand::Start),
            "status" => Some(BotCommand::Status),
            "help" => Some(BotCommand::Help),
            "set" => Some(BotCommand::Set {
                args: tokens.map(str::to_string).collect(),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Status => "status",
            BotCommand::Help => "help",
            BotCommand::Set { .. } => "set",
        }
    }
}

/// Rejections of a `/set` command. The display text is the reply sent back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", messages::PERMISSION_DENIED)]
    Unauthorized,
    #[error("{}", messages::SET_USAGE)]
    MalformedArguments,
    #[error("{}", messages::unknown_facility(.0))]
    UnknownFacility(String),
    #[error("{}", messages::COUNT_NOT_A_NUMBER)]
    InvalidCount(String),
    #[error("{}", messages::COUNT_NEGATIVE)]
    NegativeCount(String),
    #[error("{}", messages::COUNT_TOO_LARGE)]
    CountTooLarge(String),
}
