//! Server host key verification

use russh::client;
use russh::keys::{HashAlg, PublicKey};

/// SSH client handler that checks the server key against an optional pin
///
/// Without a pin every host key is accepted.
#[derive(Debug, Clone, Default)]
pub struct HostKeyCheck {
    expected: Option<String>,
}

impl HostKeyCheck {
    pub fn new(expected: Option<String>) -> Self {
        Self { expected }
    }

    /// Compare a `SHA256:...` fingerprint with the pin
    ///
    /// The `SHA256:` prefix and base64 padding are optional on the pin.
    pub fn accepts(&self, fingerprint: &str) -> bool {
        match &self.expected {
            None => true,
            Some(expected) => normalize(expected) == normalize(fingerprint),
        }
    }
}

fn normalize(fingerprint: &str) -> &str {
    let trimmed = fingerprint.trim();
    trimmed
        .strip_prefix("SHA256:")
        .unwrap_or(trimmed)
        .trim_end_matches('=')
}

impl client::Handler for HostKeyCheck {
    type Error = russh::Error;

    async fn check_server_key(&mut self, server_public_key: &PublicKey) -> Result<bool, Self::Error> {
        let fingerprint = server_public_key.fingerprint(HashAlg::Sha256).to_string();
        Ok(self.accepts(&fingerprint))
    }
}
