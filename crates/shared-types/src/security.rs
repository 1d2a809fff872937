//! # Ticket Signing
//!
//! A ticket signature is `hex(HMAC-SHA256(shared_secret, ticket_id))`,
//! lowercase. QR codes printed by the operator can carry it so the balance
//! API can tell issued tickets from typed-in identifiers.
//!
//! ## Security Properties
//!
//! - **Keyed**: only holders of the shared secret can produce signatures.
//! - **Exact Match**: the supplied string must equal the lowercase hex digest
//!   byte for byte; the comparison runs in constant time.
//! - **No Replay Protection / No Expiry**: a signature is valid forever for
//!   its ticket.

use crate::entities::TicketId;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Shared secret used by the demo deployment when none is configured.
pub const DEFAULT_SIGNING_KEY: &str = "metro-secure-key-2026";

/// Produces and checks ticket signatures with one shared secret.
#[derive(Clone)]
pub struct TicketSigner {
    mac: HmacSha256,
}

impl TicketSigner {
    /// Create a signer keyed with `secret`.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .expect("HMAC can take key of any size");
        Self { mac }
    }

    /// Lowercase hex HMAC-SHA256 of the ticket identifier.
    pub fn sign(&self, ticket: &TicketId) -> String {
        let mut mac = self.mac.clone();
        mac.update(ticket.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// True iff `candidate` is exactly the signature of `ticket`.
    pub fn matches(&self, ticket: &TicketId, candidate: &str) -> bool {
        let expected = self.sign(ticket);
        constant_time_compare(expected.as_bytes(), candidate.as_bytes())
    }
}

impl Default for TicketSigner {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNING_KEY)
    }
}

impl std::fmt::Debug for TicketSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketSigner").finish_non_exhaustive()
    }
}

/// Constant-time byte comparison. Length mismatch returns early.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
