//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind the HTTP API. Wrapped in
//! `Arc` at startup; `RwLock` allows concurrent reads (most endpoints)
//! while blocking only on writes (log submission, preference updates).
//! There is no persistence layer — the working set lives and dies with the
//! process.

use std::sync::RwLock;

use crate::assistant::LocalAssistant;
use crate::models::MaintenanceLog;
use crate::preferences::Preferences;
use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("shared state lock poisoned")]
    LockPoisoned,
}

pub struct CoreState {
    logs: RwLock<Vec<MaintenanceLog>>,
    preferences: RwLock<Preferences>,
    /// Deterministic responder behind the chat endpoint.
    responder: LocalAssistant,
}

impl CoreState {
    /// Empty state (tests, custom bootstraps).
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(Vec::new()),
            preferences: RwLock::new(Preferences::default()),
            responder: LocalAssistant,
        }
    }

    /// State pre-loaded with the reference dataset.
    pub fn seeded() -> Self {
        let state = Self::new();
        if let Ok(mut logs) = state.logs.write() {
            *logs = seed::maintenance_logs();
        }
        state
    }

    pub fn responder(&self) -> &LocalAssistant {
        &self.responder
    }

    // ── Logs ──

    pub fn logs(&self) -> Result<Vec<MaintenanceLog>, CoreError> {
        Ok(self
            .logs
            .read()
            .map_err(|_| CoreError::LockPoisoned)?
            .clone())
    }

    pub fn log_count(&self) -> Result<usize, CoreError> {
        Ok(self.logs.read().map_err(|_| CoreError::LockPoisoned)?.len())
    }

    pub fn add_log(&self, log: MaintenanceLog) -> Result<(), CoreError> {
        self.logs
            .write()
            .map_err(|_| CoreError::LockPoisoned)?
            .push(log);
        Ok(())
    }

    // ── Preferences ──

    pub fn preferences(&self) -> Result<Preferences, CoreError> {
        Ok(self
            .preferences
            .read()
            .map_err(|_| CoreError::LockPoisoned)?
            .clone())
    }

    pub fn set_preferences(&self, prefs: Preferences) -> Result<(), CoreError> {
        *self
            .preferences
            .write()
            .map_err(|_| CoreError::LockPoisoned)? = prefs;
        Ok(())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
