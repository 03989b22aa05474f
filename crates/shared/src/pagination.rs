//! Keyset pagination for ticket listings.
//!
//! Listings are newest-first. A [`ListingCursor`] names the last row a client
//! saw, keyed by `(created_at, id)`; the id breaks ties between tickets
//! created in the same instant so pages never skip or repeat rows.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Error type for cursor operations.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("Cursor is not valid base64")]
    Encoding,
    #[error("Cursor payload is malformed")]
    Format,
    #[error("Cursor timestamp is invalid")]
    Timestamp,
    #[error("Cursor id is invalid")]
    Id,
}

/// Opaque position in a ticket listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl ListingCursor {
    pub fn new(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { created_at, id }
    }

    /// Serialize as base64(RFC3339_timestamp:id), URL-safe for query strings.
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            self.id
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    /// Parse a cursor previously produced by [`ListingCursor::encode`].
    pub fn decode(raw: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw)
            .map_err(|_| CursorError::Encoding)?;
        let text = String::from_utf8(bytes).map_err(|_| CursorError::Format)?;

        // The timestamp itself contains colons; the id starts after the last one
        let (timestamp, id) = text.rsplit_once(':').ok_or(CursorError::Format)?;

        let created_at = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|_| CursorError::Timestamp)?
            .with_timezone(&Utc);
        let id: Uuid = id.parse().map_err(|_| CursorError::Id)?;

        Ok(Self { created_at, id })
    }

    /// Does a row strictly follow this cursor in listing order?
    ///
    /// Rows sort newest-first by `(created_at, id)` descending; a follower is
    /// strictly smaller on that key. The cursor's own row never follows
    /// itself, which is what lets a client resume without duplicates.
    pub fn follows(&self, created_at: DateTime<Utc>, id: Uuid) -> bool {
        (created_at, id) < (self.created_at, self.id)
    }
}
