use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Write side of the verification flow.
///
/// Marking the user verified and deleting the consumed token is one unit of
/// work: either both happen or neither does.
#[async_trait]
pub trait EmailVerificationRepository {
    async fn verify_and_consume(
        &self,
        user_id: Uuid,
        email: String,
        verified_at: DateTime<Utc>,
        token_id: Uuid,
    ) -> Result<(), EmailVerificationRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailVerificationRepositoryError {
    /// The token row was already gone when the unit of work ran.
    #[error("Verification token already consumed")]
    TokenAlreadyConsumed,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
