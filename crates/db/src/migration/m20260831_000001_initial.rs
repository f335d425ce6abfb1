//! Initial schema for the dashboard tables.
//!
//! Creates dashboard_summaries, notifications, and activities. Every table is
//! owner-scoped by user_id; identity itself lives with the external provider,
//! so there is no users table here.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS activities CASCADE;
             DROP TABLE IF EXISTS notifications CASCADE;
             DROP TABLE IF EXISTS dashboard_summaries CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Headline metrics, at most one row per owner
CREATE TABLE dashboard_summaries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    total_users BIGINT NOT NULL DEFAULT 0,
    new_signups_today INTEGER NOT NULL DEFAULT 0,
    active_users BIGINT NOT NULL DEFAULT 0,
    revenue_today NUMERIC(20, 4) NOT NULL DEFAULT 0,
    conversion_rate NUMERIC(8, 4) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- One summary per owner
CREATE UNIQUE INDEX idx_dashboard_summaries_user ON dashboard_summaries(user_id);

-- Per-user notifications; kind is open text, narrowed by the application
CREATE TABLE notifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    kind TEXT NOT NULL DEFAULT 'info',
    title TEXT NOT NULL,
    message TEXT NOT NULL,
    read BOOLEAN NOT NULL DEFAULT FALSE,
    severity TEXT NOT NULL DEFAULT 'info',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for the owner's feed, newest first
CREATE INDEX idx_notifications_user ON notifications(user_id, created_at DESC);

-- Index for the unread badge
CREATE INDEX idx_notifications_unread ON notifications(user_id) WHERE NOT read;

-- Per-user activity feed
CREATE TABLE activities (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    user_name TEXT NOT NULL,
    action TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for the owner's feed, newest first
CREATE INDEX idx_activities_user ON activities(user_id, created_at DESC);
";
