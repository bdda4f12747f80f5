//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration, Facilities and Types
//! - Infrastructure: Matrix
//! - Application: Router, Recommendation, Report, State, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;

use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::messages;

/// Facility occupancy status bot for Matrix.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.system.log_dir)?;
    tracing::info!("Starting facility-bot...");

    // 3. State
    let state = BotState::from_config(&config)?;
    tracing::info!(
        "{}",
        messages::config_loaded(&cli.config.display().to_string(), state.registry.len())
    );
    let state = state.shared();
    let router = CommandRouter::new(config.clone(), state);

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .send()
        .await
        .context("Matrix login failed")?;

    tracing::info!("Logged in as {}", matrix.username);

    if let Some(name) = &matrix.display_name
        && let Err(e) = client.account().set_display_name(Some(name.as_str())).await
    {
        tracing::warn!("{}", messages::set_display_name_fail(&e.to_string()));
    }

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let body = &text_content.body;
                tracing::debug!("Received message from {}: {}", original_msg.sender, body);

                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("Failed to route message: {}", e);
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", messages::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", messages::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync Loop
    tracing::info!("{}", messages::SYNC_LOOP_START);
    client
        .sync(SyncSettings::default())
        .await
        .context("Matrix sync loop stopped")?;

    Ok(())
}
