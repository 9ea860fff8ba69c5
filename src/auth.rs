use sha2::{Digest, Sha256};

/// Decides whether a presented secret grants access to the dashboard.
pub trait AccessPolicy: Send + Sync {
    fn verify(&self, secret: &str) -> bool;
}

/// Policy backed by a single configured secret. Only the SHA-256 digest is
/// retained; verification compares digests.
pub struct StaticSecret {
    digest: [u8; 32],
}

impl StaticSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }
}

impl AccessPolicy for StaticSecret {
    fn verify(&self, secret: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
        candidate == self.digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_secret_is_accepted() {
        let policy = StaticSecret::new("Pimenta1");
        assert!(policy.verify("Pimenta1"));
    }

    #[test]
    fn anything_else_is_rejected() {
        let policy = StaticSecret::new("Pimenta1");
        assert!(!policy.verify("pimenta1"));
        assert!(!policy.verify("Pimenta1 "));
        assert!(!policy.verify(""));
    }
}
