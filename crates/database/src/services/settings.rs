use crate::entities::setting;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, sea_query::OnConflict,
};
use serde_json::json;

/// Read-check-write access to the durable key-value settings store
pub struct SettingsService;

impl SettingsService {
    /// Key guarding the one-time seed import
    pub const SEED_FLAG: &'static str = "courses_init_has_run";

    pub async fn get_flag(db: &DatabaseConnection, key: &str) -> Result<bool, DbErr> {
        let setting = setting::Entity::find_by_id(key).one(db).await?;

        Ok(setting
            .map(|s| s.value.as_bool().unwrap_or(false))
            .unwrap_or(false))
    }

    pub async fn set_flag(db: &DatabaseConnection, key: &str, value: bool) -> Result<(), DbErr> {
        let setting = setting::ActiveModel {
            key: Set(key.to_owned()),
            value: Set(json!(value)),
        };

        setting::Entity::insert(setting)
            .on_conflict(
                OnConflict::column(setting::Column::Key)
                    .update_column(setting::Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn missing_key_reads_as_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<setting::Model>::new()])
            .into_connection();

        assert!(!SettingsService::get_flag(&db, SettingsService::SEED_FLAG)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn set_key_reads_back_true() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![setting::Model {
                key: SettingsService::SEED_FLAG.to_owned(),
                value: json!(true),
            }]])
            .into_connection();

        assert!(SettingsService::get_flag(&db, SettingsService::SEED_FLAG)
            .await
            .unwrap());
    }
}
