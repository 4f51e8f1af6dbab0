//! Persisted console state.
//!
//! The browser build kept a handful of key-value flags in local storage; here
//! they live in one small JSON file loaded at startup and rewritten after
//! every mutation. Saves are best-effort: a failed write logs a warning and
//! the request carries on with the in-memory copy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::config;
use crate::types::Role;

/// Everything the console persists between restarts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientState {
    pub auth_token: Option<String>,
    pub demo_mode: bool,
    pub demo_role: Role,
    pub banner_hidden: bool,
    /// Ids of navigation sections the user has expanded, no duplicates
    pub expanded_sections: Vec<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        let cfg = config();
        Self {
            auth_token: None,
            demo_mode: cfg.demo.enabled,
            demo_role: cfg.demo.default_role,
            banner_hidden: false,
            expanded_sections: Vec::new(),
        }
    }
}

pub struct StateStore {
    path: Option<PathBuf>,
    state: RwLock<ClientState>,
}

impl StateStore {
    /// Store without a backing file; state lives only as long as the process
    pub fn in_memory(initial: ClientState) -> Self {
        Self {
            path: None,
            state: RwLock::new(initial),
        }
    }

    /// Load persisted state from `path`, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let state = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<ClientState>(&text) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("state file {} is not valid, starting fresh: {}", path.display(), e);
                    ClientState::default()
                }
            },
            Err(_) => ClientState::default(),
        };

        Self {
            path: Some(path),
            state: RwLock::new(state),
        }
    }

    pub async fn snapshot(&self) -> ClientState {
        self.state.read().await.clone()
    }

    pub async fn auth_token(&self) -> Option<String> {
        self.state.read().await.auth_token.clone()
    }

    pub async fn set_auth_token(&self, token: Option<String>) {
        let mut state = self.state.write().await;
        state.auth_token = token;
        self.persist(&state).await;
    }

    pub async fn demo_mode(&self) -> bool {
        self.state.read().await.demo_mode
    }

    pub async fn demo_role(&self) -> Role {
        self.state.read().await.demo_role
    }

    pub async fn set_demo_role(&self, role: Role) {
        let mut state = self.state.write().await;
        state.demo_role = role;
        self.persist(&state).await;
    }

    pub async fn banner_hidden(&self) -> bool {
        self.state.read().await.banner_hidden
    }

    pub async fn set_banner_hidden(&self, hidden: bool) {
        let mut state = self.state.write().await;
        state.banner_hidden = hidden;
        self.persist(&state).await;
    }

    pub async fn expanded_sections(&self) -> Vec<String> {
        self.state.read().await.expanded_sections.clone()
    }

    /// Flip the expand/collapse flag for a navigation section.
    /// Returns true when the section ends up expanded.
    pub async fn toggle_section(&self, section_id: &str) -> bool {
        let mut state = self.state.write().await;
        let expanded = if let Some(pos) = state
            .expanded_sections
            .iter()
            .position(|id| id == section_id)
        {
            state.expanded_sections.remove(pos);
            false
        } else {
            state.expanded_sections.push(section_id.to_string());
            true
        };
        self.persist(&state).await;
        expanded
    }

    async fn persist(&self, state: &ClientState) {
        let Some(path) = &self.path else {
            return;
        };
        let text = match serde_json::to_string_pretty(state) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to serialize console state: {}", e);
                return;
            }
        };
        if let Err(e) = tokio::fs::write(path, text).await {
            tracing::warn!("failed to save console state to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path() -> PathBuf {
        std::env::temp_dir().join(format!("gateway-console-state-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn toggle_expands_then_collapses_without_duplicates() {
        let store = StateStore::in_memory(ClientState::default());

        assert!(store.toggle_section("management").await);
        assert!(store.toggle_section("billing").await);
        assert_eq!(store.expanded_sections().await, vec!["management", "billing"]);

        // Toggling again removes rather than duplicating
        assert!(!store.toggle_section("management").await);
        assert_eq!(store.expanded_sections().await, vec!["billing"]);
        assert!(store.toggle_section("management").await);
        let sections = store.expanded_sections().await;
        assert_eq!(
            sections.iter().filter(|id| *id == "management").count(),
            1
        );
    }

    #[tokio::test]
    async fn expanded_sections_survive_a_reload() {
        let path = temp_state_path();

        let store = StateStore::load(&path);
        store.toggle_section("finance").await;
        store.set_banner_hidden(true).await;

        // A fresh store over the same file sees the persisted flags
        let reloaded = StateStore::load(&path);
        assert_eq!(reloaded.expanded_sections().await, vec!["finance"]);
        assert!(reloaded.banner_hidden().await);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn unreadable_state_file_falls_back_to_defaults() {
        let path = temp_state_path();
        std::fs::write(&path, "not json").unwrap();

        let store = StateStore::load(&path);
        assert!(store.auth_token().await.is_none());
        assert!(store.expanded_sections().await.is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
