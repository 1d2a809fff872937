//! Ticket references carried by navigation URLs and QR payloads.

use reqwest::Url;
use shared_types::TicketId;

/// Ticket id plus the optional signature printed alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRef {
    pub id: TicketId,
    pub signature: Option<String>,
}

/// Extract `?id=` (and `&sig=`) from a URL.
///
/// Returns `None` when the text is not a URL or the `id` parameter is
/// missing or empty.
pub fn ticket_from_url(url: &str) -> Option<TicketRef> {
    let parsed = Url::parse(url).ok()?;

    let mut id = None;
    let mut signature = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "id" if id.is_none() => id = Some(value.into_owned()),
            "sig" if signature.is_none() => signature = Some(value.into_owned()),
            _ => {}
        }
    }

    let id = id.filter(|id| !id.is_empty())?;
    Some(TicketRef {
        id: TicketId::new(id),
        signature: signature.filter(|sig| !sig.is_empty()),
    })
}

/// Interpret a decoded QR payload.
///
/// A link with `?id=` yields that ticket; anything else is the ticket id
/// itself. Blank payloads yield `None`.
pub fn ticket_from_scan(payload: &str) -> Option<TicketRef> {
    let payload = payload.trim();
    if payload.is_empty() {
        return None;
    }

    ticket_from_url(payload).or_else(|| {
        Some(TicketRef {
            id: TicketId::from(payload),
            signature: None,
        })
    })
}
