//! Dashboard repository: the Postgres implementation of the store contract.
//!
//! Every read and bulk write is owner-scoped; single-record writes go by id.
//! Database errors surface as [`StoreError`] with a readable description so
//! the session can render or return them.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use pulseboard_core::dashboard::{
    Activity, DashboardStore, DashboardSummary, NotificationRow, StoreError,
};
use pulseboard_shared::types::{ActivityId, NotificationId, SummaryId, UserId};

use crate::entities::{activities, dashboard_summaries, notifications};

/// Repository for the three dashboard tables.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn store_error(err: DbErr) -> StoreError {
    StoreError::new(err.to_string())
}

fn summary_from_model(model: dashboard_summaries::Model) -> DashboardSummary {
    DashboardSummary {
        id: SummaryId::from_uuid(model.id),
        total_users: model.total_users,
        new_signups_today: model.new_signups_today,
        active_users: model.active_users,
        revenue_today: model.revenue_today,
        conversion_rate: model.conversion_rate,
    }
}

fn notification_from_model(model: notifications::Model) -> NotificationRow {
    NotificationRow {
        id: NotificationId::from_uuid(model.id),
        kind: model.kind,
        title: model.title,
        message: model.message,
        read: model.read,
        severity: model.severity,
        created_at: model.created_at.into(),
    }
}

fn activity_from_model(model: activities::Model) -> Activity {
    Activity {
        id: ActivityId::from_uuid(model.id),
        user_name: model.user_name,
        action: model.action,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn load_summary(&self, owner: UserId) -> Result<Option<DashboardSummary>, StoreError> {
        let model = dashboard_summaries::Entity::find()
            .filter(dashboard_summaries::Column::UserId.eq(owner.into_inner()))
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(summary_from_model))
    }

    async fn load_notifications(&self, owner: UserId) -> Result<Vec<NotificationRow>, StoreError> {
        let models = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(owner.into_inner()))
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(notification_from_model).collect())
    }

    async fn load_activities(&self, owner: UserId) -> Result<Vec<Activity>, StoreError> {
        let models = activities::Entity::find()
            .filter(activities::Column::UserId.eq(owner.into_inner()))
            .order_by_desc(activities::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(activity_from_model).collect())
    }

    async fn set_notification_read(
        &self,
        id: NotificationId,
        read: bool,
    ) -> Result<(), StoreError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::Read, Expr::value(read))
            .filter(notifications::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        debug!(id = %id, read, rows = result.rows_affected, "notification read flag updated");
        Ok(())
    }

    async fn delete_notification(&self, id: NotificationId) -> Result<(), StoreError> {
        // Idempotent: zero rows affected is still success.
        notifications::Entity::delete_many()
            .filter(notifications::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn delete_activity(&self, id: ActivityId) -> Result<(), StoreError> {
        activities::Entity::delete_many()
            .filter(activities::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn clear_notifications(&self, owner: UserId) -> Result<u64, StoreError> {
        let result = notifications::Entity::delete_many()
            .filter(notifications::Column::UserId.eq(owner.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }

    async fn clear_activities(&self, owner: UserId) -> Result<u64, StoreError> {
        let result = activities::Entity::delete_many()
            .filter(activities::Column::UserId.eq(owner.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }
}
