use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use shift_request_calendar::{
    app_state::AppState,
    domain::{
        default_roster, ChangeSource, DeadlineGate, StoreChange, SystemClock,
    },
    utils::{
        constants::{APP_ADDRESS, SUBMISSION_DEADLINE_DAY},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let deadline_gate = DeadlineGate::new(*SUBMISSION_DEADLINE_DAY)?;
    let app_state = AppState::in_memory(
        default_roster(),
        Arc::new(SystemClock),
        deadline_gate,
    );

    let _change_log = app_state.change_feed.subscribe(Box::new(|change: &StoreChange| {
        match serde_json::to_string(change) {
            Ok(json) => tracing::info!(change = %json, "store changed"),
            Err(e) => tracing::warn!("failed to serialize store change: {e}"),
        }
    }));

    let app = Application::build(app_state, &APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;

    Ok(())
}
