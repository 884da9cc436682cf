use crate::modules::auth::application::domain::entities::EmailVerified;
use crate::modules::auth::application::ports::outgoing::{
    EmailVerificationRepository, EmailVerificationRepositoryError, UserQuery, UserQueryError,
    VerificationTokenQuery, VerificationTokenQueryError,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info};

pub const EMAIL_VERIFIED_MESSAGE: &str = "Email verified!";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Token does not exist!")]
    TokenNotFound,

    #[error("Token has expired!")]
    TokenExpired,

    #[error("Email does not exist!")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl VerifyEmailError {
    /// Message safe to show the person holding the link.
    pub fn user_message(&self) -> String {
        match self {
            VerifyEmailError::DatabaseError(_) => "Something went wrong!".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<VerificationTokenQueryError> for VerifyEmailError {
    fn from(e: VerificationTokenQueryError) -> Self {
        VerifyEmailError::DatabaseError(e.to_string())
    }
}

impl From<UserQueryError> for VerifyEmailError {
    fn from(e: UserQueryError) -> Self {
        VerifyEmailError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait IVerifyEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<EmailVerified, VerifyEmailError>;
}

#[derive(Debug, Clone)]
pub struct VerifyEmailUseCase<T, U, R>
where
    T: VerificationTokenQuery,
    U: UserQuery,
    R: EmailVerificationRepository + Send + Sync,
{
    token_query: T,
    user_query: U,
    repository: R,
}

impl<T, U, R> VerifyEmailUseCase<T, U, R>
where
    T: VerificationTokenQuery,
    U: UserQuery,
    R: EmailVerificationRepository + Send + Sync,
{
    pub fn new(token_query: T, user_query: U, repository: R) -> Self {
        Self {
            token_query,
            user_query,
            repository,
        }
    }
}

#[async_trait]
impl<T, U, R> IVerifyEmailUseCase for VerifyEmailUseCase<T, U, R>
where
    T: VerificationTokenQuery,
    U: UserQuery,
    R: EmailVerificationRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<EmailVerified, VerifyEmailError> {
        debug!(token, "Verifying email");

        let existing_token = self
            .token_query
            .find_by_token(token)
            .await
            .inspect_err(|e| error!(error = %e, "Verification token lookup failed"))?
            .ok_or(VerifyEmailError::TokenNotFound)?;
        debug!(?existing_token, "Found verification token");

        let now = Utc::now();
        if existing_token.is_expired_at(now) {
            return Err(VerifyEmailError::TokenExpired);
        }

        let existing_user = self
            .user_query
            .find_by_email(&existing_token.email)
            .await
            .inspect_err(|e| error!(error = %e, "User lookup failed"))?
            .ok_or(VerifyEmailError::UserNotFound)?;
        debug!(
            ?existing_user,
            already_verified = existing_user.is_verified(),
            "Found user for token"
        );

        self.repository
            .verify_and_consume(
                existing_user.id,
                existing_token.email.clone(),
                now,
                existing_token.id,
            )
            .await
            .map_err(|e| match e {
                // Lost the race against a concurrent request holding the same token
                EmailVerificationRepositoryError::TokenAlreadyConsumed => {
                    VerifyEmailError::TokenNotFound
                }
                EmailVerificationRepositoryError::UserNotFound => VerifyEmailError::UserNotFound,
                EmailVerificationRepositoryError::DatabaseError(msg) => {
                    error!(error = %msg, "Failed to persist email verification");
                    VerifyEmailError::DatabaseError(msg)
                }
            })?;

        info!(user_id = %existing_user.id, "Email verified");

        Ok(EmailVerified {
            user_id: existing_user.id,
            email: existing_token.email,
            verified_at: now,
        })
    }
}
