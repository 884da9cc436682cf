// application/ports/outgoing/user_query.rs
use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// More than one user holds this email. Emails are unique by contract,
    /// so this is a broken precondition rather than a lookup miss.
    #[error("Email is not unique: {0}")]
    AmbiguousEmail(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
}
