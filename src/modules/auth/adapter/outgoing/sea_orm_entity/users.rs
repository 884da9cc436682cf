use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub email_verified: Option<DateTimeWithTimeZone>,
    // Maintained by the database defaults and the update_users_updated_at trigger
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue::NotSet;
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    #[tokio::test]
    async fn test_insert_leaves_timestamps_to_the_database() {
        let now = chrono::Utc::now().fixed_offset();
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![Model {
                id,
                email: "a@x.com".to_string(),
                email_verified: None,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let inserted = ActiveModel {
            id: Set(id),
            email: Set("a@x.com".to_string()),
            email_verified: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&db)
        .await
        .expect("insert should succeed");
        assert_eq!(inserted.id, id);

        let log = db.into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        let columns = sql.split("RETURNING").next().unwrap_or_default();
        assert!(columns.starts_with(r#"INSERT INTO "users""#), "unexpected sql: {}", sql);
        assert!(!columns.contains("created_at"), "created_at should not be written: {}", sql);
        assert!(!columns.contains("updated_at"), "updated_at should not be written: {}", sql);
    }
}
