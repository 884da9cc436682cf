use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_domain(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            email_verified: model
                .email_verified
                .map(|verified| verified.with_timezone(&chrono::Utc)),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        // Fetch up to two rows so a duplicated email surfaces instead of
        // silently picking one of the users.
        let mut users = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .limit(2)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        if users.len() > 1 {
            return Err(UserQueryError::AmbiguousEmail(email.to_string()));
        }

        Ok(users.pop().map(Self::map_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_mock_user_model(id: Uuid, email: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            email: email.to_string(),
            email_verified: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_success() {
        let user_id = Uuid::new_v4();
        let mock_user = create_mock_user_model(user_id, "old@x.com");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("old@x.com").await;

        let user = result
            .expect("query should succeed")
            .expect("user should be found");
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "old@x.com");
        assert!(user.email_verified.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_maps_verified_timestamp() {
        let user_id = Uuid::new_v4();
        let verified_at = Utc::now();
        let mut mock_user = create_mock_user_model(user_id, "a@x.com");
        mock_user.email_verified = Some(verified_at.into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_email("a@x.com")
            .await
            .expect("query should succeed")
            .expect("user should be found");

        assert_eq!(user.email_verified, Some(verified_at));
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("nobody@x.com").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_find_by_email_duplicate_rows_is_ambiguous() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                create_mock_user_model(Uuid::new_v4(), "dup@x.com"),
                create_mock_user_model(Uuid::new_v4(), "dup@x.com"),
            ]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("dup@x.com").await;

        assert!(matches!(result, Err(UserQueryError::AmbiguousEmail(email)) if email == "dup@x.com"));
    }

    #[tokio::test]
    async fn test_find_by_email_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("a@x.com").await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
