use sha2::{Digest, Sha256};

use crate::application::error::{ApplicationError, ApplicationResult};

/// Static operator credential. Only its SHA-256 digest is kept in memory and
/// presented tokens are compared digest to digest.
#[derive(Clone)]
pub struct AdminCredential {
    digest: [u8; 32],
}

impl AdminCredential {
    pub fn new(token: &str) -> Self {
        Self {
            digest: digest(token),
        }
    }

    pub fn verify(&self, presented: &str) -> ApplicationResult<()> {
        if digest(presented) == self.digest {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid admin token"))
        }
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential").finish_non_exhaustive()
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
