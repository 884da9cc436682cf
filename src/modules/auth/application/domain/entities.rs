use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Single-use credential proving control of `email`.
///
/// Tokens reference their user by email value only, never by id.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationToken {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl VerificationToken {
    /// A token is expired only once `expires` is strictly earlier than `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub email_verified: Option<DateTime<Utc>>, // None = unverified
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.email_verified.is_some()
    }
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq)]
pub struct EmailVerified {
    pub user_id: Uuid,
    pub email: String,
    pub verified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid expiry timestamp: {0}")]
pub struct InvalidExpiry(pub String);

/// Parse an expiry that was stored or submitted as text.
///
/// Accepts RFC 3339 (`2099-01-01T00:00:00Z`, any offset) or a bare
/// `YYYY-MM-DD` date, which is read as midnight UTC of that day.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, InvalidExpiry> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| InvalidExpiry(raw.to_string()))
}
