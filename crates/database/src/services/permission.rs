use crate::entities::permission;
use chrono::Utc;
use futures::future::try_join_all;
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

pub struct PermissionService;

impl PermissionService {
    /// Role granted to unauthenticated callers
    pub const PUBLIC_ROLE: &'static str = "public";

    /// Creates one permission row per (content type, action) pair. The rows
    /// are independent, so all inserts are dispatched together and awaited
    /// jointly.
    pub async fn grant_public(
        db: &DatabaseConnection,
        grants: &[(&str, &[&str])],
    ) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let inserts = grants.iter().flat_map(|(content_type, actions)| {
            actions.iter().map(move |action| {
                let permission = permission::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    action: Set(format!("api::{content_type}.{content_type}.{action}")),
                    role: Set(Self::PUBLIC_ROLE.to_owned()),
                    created_at: Set(now),
                };

                permission::Entity::insert(permission).exec_without_returning(db)
            })
        });

        try_join_all(inserts).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn grants_one_row_per_type_and_action() {
        let exec_results: Vec<MockExecResult> = (0..4)
            .map(|_| MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            })
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(exec_results)
            .into_connection();

        let actions: &[&str] = &["find", "findOne"];
        PermissionService::grant_public(&db, &[("course", actions), ("tag", actions)])
            .await
            .unwrap();

        assert_eq!(db.into_transaction_log().len(), 4);
    }
}
