use crate::auth::AccessPolicy;
use crate::session::SessionStore;
use crate::sheets::SheetsClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sheets: SheetsClient,
    pub sessions: SessionStore,
    pub policy: Arc<dyn AccessPolicy>,
}

impl AppState {
    pub fn new(sheets: SheetsClient, policy: Arc<dyn AccessPolicy>) -> Self {
        Self {
            sheets,
            sessions: SessionStore::new(),
            policy,
        }
    }
}
