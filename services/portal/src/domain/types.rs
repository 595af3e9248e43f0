use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The single resource an access code unlocks. Persisted as two mutually
/// exclusive nullable columns; the tagged form exists everywhere above the
/// persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef {
    Proposal(Uuid),
    Invoice(Uuid),
}

impl ResourceRef {
    /// Wire name of the resource kind, as returned by the validate endpoint.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Proposal(_) => "proposal",
            Self::Invoice(_) => "invoice",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Proposal(id) | Self::Invoice(id) => *id,
        }
    }
}

/// Bearer share code granting public read access to one resource.
/// Reusable until expiry — validation does not consume it.
#[derive(Debug, Clone)]
pub struct AccessCode {
    pub id: Uuid,
    pub code: String,
    pub resource: ResourceRef,
    /// Display label copied from the resource at creation, never re-synced.
    pub client_name: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AccessCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Client proposal shared through the portal.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub id: Uuid,
    pub client_name: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Invoice header; line items are separate rows.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: Uuid,
    pub client_name: String,
    pub title: String,
    pub total_cents: i64,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// Access code length in characters.
pub const CODE_LEN: usize = 8;

/// Access code time-to-live in hours.
pub const CODE_TTL_HOURS: i64 = 24;

/// Generation attempts before giving up on a non-colliding code.
pub const MAX_CODE_ATTEMPTS: usize = 3;
