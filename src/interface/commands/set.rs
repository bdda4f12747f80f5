//! # Set Command
//!
//! Handles `/set <facility_id> <count>`.
//! Admin-only; overwrites the occupancy of one facility and confirms the new load.

use crate::application::occupancy::set_occupancy;
use crate::application::state::SharedState;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_set(
    config: &AppConfig,
    state: &SharedState,
    chat: &impl ChatProvider,
    sender: &str,
    args: &[String],
) -> Result<()> {
    let reply = {
        let mut guard = state.lock().await;
        match set_occupancy(&mut guard.registry, config.is_admin(sender), args) {
            Ok(facility) => {
                tracing::info!(
                    "{} set {} to {}/{}",
                    sender,
                    facility.id,
                    facility.occupancy,
                    facility.capacity
                );
                messages::occupancy_updated(facility)
            }
            Err(e) => {
                tracing::warn!("Rejected /set from {}: {:?}", sender, e);
                e.to_string()
            }
        }
    };

    chat.send_notification(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::BotState;
    use crate::domain::config::testing::sample_config;
    use crate::domain::traits::testing::RecordingChat;

    const ADMIN: &str = "@admin:example.org";

    async fn run(sender: &str, tokens: &[&str]) -> (SharedState, String) {
        let config = sample_config(2.0);
        let state = BotState::from_config(&config).unwrap().shared();
        let chat = RecordingChat::default();
        let args: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        handle_set(&config, &state, &chat, sender, &args).await.unwrap();
        (state, chat.last().unwrap())
    }

    async fn occupancy(state: &SharedState, id: &str) -> u32 {
        state.lock().await.registry.get(id).unwrap().occupancy
    }

    #[tokio::test]
    async fn test_non_admin_is_denied() {
        let (state, reply) = run("@guest:example.org", &["stol1", "120"]).await;
        assert_eq!(reply, messages::PERMISSION_DENIED);
        assert_eq!(occupancy(&state, "stol1").await, 100);
    }

    #[tokio::test]
    async fn test_non_numeric_count() {
        let (state, reply) = run(ADMIN, &["stol2", "abc"]).await;
        assert_eq!(reply, messages::COUNT_NOT_A_NUMBER);
        assert_eq!(occupancy(&state, "stol2").await, 25);
    }

    #[tokio::test]
    async fn test_unknown_facility() {
        let (state, reply) = run(ADMIN, &["stol9", "5"]).await;
        assert_eq!(reply, messages::unknown_facility("stol9"));
        let guard = state.lock().await;
        assert!(guard.registry.get("stol9").is_none());
        assert_eq!(guard.registry.get("stol1").unwrap().occupancy, 100);
    }

    #[tokio::test]
    async fn test_usage_and_negative() {
        let (_, reply) = run(ADMIN, &["stol2"]).await;
        assert_eq!(reply, messages::SET_USAGE);

        let (state, reply) = run(ADMIN, &["stol2", "-1"]).await;
        assert_eq!(reply, messages::COUNT_NEGATIVE);
        assert_eq!(occupancy(&state, "stol2").await, 25);

        let (state, reply) = run(ADMIN, &["stol2", "-99999999999999999999"]).await;
        assert_eq!(reply, messages::COUNT_NEGATIVE);
        assert_eq!(occupancy(&state, "stol2").await, 25);

        let (state, reply) = run(ADMIN, &["stol2", "5000000000"]).await;
        assert_eq!(reply, messages::COUNT_TOO_LARGE);
        assert_eq!(occupancy(&state, "stol2").await, 25);
    }

    #[tokio::test]
    async fn test_admin_update_confirms() {
        let (state, reply) = run(ADMIN, &["stol3", "150"]).await;
        assert_eq!(reply, "✅ Updated: Canteen No. 3: 150/300 (50.0% occupied)");
        assert_eq!(occupancy(&state, "stol3").await, 150);
    }
}
