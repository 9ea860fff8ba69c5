use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "ponto_session";

/// In-memory set of authenticated dashboard sessions. Tokens live until they
/// are explicitly closed or the process exits; the cookie carrying them has
/// no Max-Age, so the browser drops it when the browsing session ends.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<Mutex<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.lock().await.insert(token.clone());
        token
    }

    pub async fn is_active(&self, token: &str) -> bool {
        self.tokens.lock().await.contains(token)
    }

    pub async fn close(&self, token: &str) -> bool {
        self.tokens.lock().await.remove(token)
    }
}

/// Pulls the session token out of a `Cookie` request header.
pub fn token_from_cookies(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_then_check_then_close() {
        let store = SessionStore::new();
        let token = store.open().await;
        assert!(store.is_active(&token).await);
        assert!(store.close(&token).await);
        assert!(!store.is_active(&token).await);
        assert!(!store.close(&token).await);
    }

    #[tokio::test]
    async fn unknown_token_is_not_active() {
        let store = SessionStore::new();
        assert!(!store.is_active("nope").await);
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let header = format!("theme=dark; {SESSION_COOKIE}=abc-123; lang=pt");
        assert_eq!(token_from_cookies(&header), Some("abc-123"));
    }

    #[test]
    fn missing_token_yields_none() {
        assert_eq!(token_from_cookies("theme=dark"), None);
        assert_eq!(token_from_cookies(""), None);
    }
}
