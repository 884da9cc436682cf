pub mod email_verification_repository;
pub mod user_query;
pub mod verification_token_query;

pub use email_verification_repository::{
    EmailVerificationRepository, EmailVerificationRepositoryError,
};
pub use user_query::{UserQuery, UserQueryError};
pub use verification_token_query::{VerificationTokenQuery, VerificationTokenQueryError};
