use std::sync::Arc;

use crate::auth::AccessGate;
use crate::models::candidate::Roster;
use crate::store::JobStore;

/// Shared by every handler. The roster is loaded once and never changes.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<JobStore>,
    pub roster: Arc<Roster>,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(store: JobStore, roster: Roster, gate: AccessGate) -> Self {
        Self {
            store: Arc::new(store),
            roster: Arc::new(roster),
            gate: Arc::new(gate),
        }
    }
}
