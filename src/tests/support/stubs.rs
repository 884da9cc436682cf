use async_trait::async_trait;

use crate::auth::application::domain::entities::EmailVerified;
use crate::auth::application::use_cases::verify_email::{IVerifyEmailUseCase, VerifyEmailError};

#[derive(Default, Clone)]
pub struct StubVerifyEmailUseCase;

#[async_trait]
impl IVerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<EmailVerified, VerifyEmailError> {
        unimplemented!("Not used in this test")
    }
}
