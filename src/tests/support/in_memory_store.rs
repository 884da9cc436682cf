//! Mutex-backed stand-in for the Postgres adapters.
//!
//! `verify_and_consume` runs under a single lock, which gives the same
//! all-or-nothing behaviour as the database transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, VerificationToken};
use crate::auth::application::ports::outgoing::{
    EmailVerificationRepository, EmailVerificationRepositoryError, UserQuery, UserQueryError,
    VerificationTokenQuery, VerificationTokenQueryError,
};

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    tokens: HashMap<Uuid, VerificationToken>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.state.lock().unwrap().users.insert(user.id, user);
    }

    pub fn insert_token(&self, token: VerificationToken) {
        self.state.lock().unwrap().tokens.insert(token.id, token);
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.state.lock().unwrap().users.get(&id).cloned()
    }

    pub fn has_token(&self, id: Uuid) -> bool {
        self.state.lock().unwrap().tokens.contains_key(&id)
    }

    /// Number of successful verify-and-consume units applied
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

#[async_trait]
impl VerificationTokenQuery for InMemoryStore {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, VerificationTokenQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.tokens.values().find(|t| t.token == token).cloned())
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let state = self.state.lock().unwrap();
        let mut matches = state.users.values().filter(|u| u.email == email);

        match (matches.next(), matches.next()) {
            (Some(_), Some(_)) => Err(UserQueryError::AmbiguousEmail(email.to_string())),
            (found, _) => Ok(found.cloned()),
        }
    }
}

#[async_trait]
impl EmailVerificationRepository for InMemoryStore {
    async fn verify_and_consume(
        &self,
        user_id: Uuid,
        email: String,
        verified_at: DateTime<Utc>,
        token_id: Uuid,
    ) -> Result<(), EmailVerificationRepositoryError> {
        let mut state = self.state.lock().unwrap();

        // Same order as the Postgres adapter: token first, then user
        if !state.tokens.contains_key(&token_id) {
            return Err(EmailVerificationRepositoryError::TokenAlreadyConsumed);
        }
        let Some(user) = state.users.get_mut(&user_id) else {
            return Err(EmailVerificationRepositoryError::UserNotFound);
        };

        user.email = email;
        user.email_verified = Some(verified_at);
        state.tokens.remove(&token_id);
        state.writes += 1;

        Ok(())
    }
}
