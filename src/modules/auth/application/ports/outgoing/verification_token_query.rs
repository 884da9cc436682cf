use crate::modules::auth::application::domain::entities::VerificationToken;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationTokenQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VerificationTokenQuery: Send + Sync {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, VerificationTokenQueryError>;
}
