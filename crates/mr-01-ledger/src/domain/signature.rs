//! Signature verification policy.
//!
//! An absent or empty signature is accepted unless `require_signature` is
//! set. A supplied signature is always checked against the shared secret.

use super::errors::LedgerError;
use shared_types::{TicketId, TicketSigner};

#[derive(Debug, Clone, Default)]
pub struct SignaturePolicy {
    signer: TicketSigner,
    require_signature: bool,
}

impl SignaturePolicy {
    pub fn new(signer: TicketSigner, require_signature: bool) -> Self {
        Self {
            signer,
            require_signature,
        }
    }

    /// Accept unsigned requests (demo bypass) with the given secret.
    pub fn permissive(secret: impl AsRef<[u8]>) -> Self {
        Self::new(TicketSigner::new(secret), false)
    }

    /// Reject unsigned requests.
    pub fn strict(secret: impl AsRef<[u8]>) -> Self {
        Self::new(TicketSigner::new(secret), true)
    }

    pub fn requires_signature(&self) -> bool {
        self.require_signature
    }

    pub fn signer(&self) -> &TicketSigner {
        &self.signer
    }

    pub fn verify(&self, ticket: &TicketId, signature: Option<&str>) -> bool {
        match signature {
            None | Some("") => !self.require_signature,
            Some(sig) => self.signer.matches(ticket, sig),
        }
    }

    pub fn check(&self, ticket: &TicketId, signature: Option<&str>) -> Result<(), LedgerError> {
        if self.verify(ticket, signature) {
            Ok(())
        } else {
            Err(LedgerError::InvalidSignature)
        }
    }
}
