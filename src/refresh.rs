//! Background dashboard refresh: the old client re-rendered the dashboard on
//! a fixed timer; here a task re-fetches the snapshot on the same fixed
//! interval, independent of any in-flight page render.

use std::sync::Arc;
use std::time::Duration;

use crate::config::config;
use crate::server::AppState;
use crate::views::dashboard;

pub fn spawn_dashboard_refresh(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    let interval = Duration::from_secs(config().demo.refresh_secs.max(5));

    tokio::spawn(async move {
        loop {
            match dashboard::fetch(&state.client).await {
                Ok(data) => {
                    *state.dashboard.write().await = Some(data);
                    tracing::debug!("dashboard snapshot refreshed");
                }
                Err(e) => {
                    tracing::warn!("dashboard snapshot refresh failed: {}", e);
                }
            }
            tokio::time::sleep(interval).await;
        }
    })
}
