//! Database seeder for Pulseboard development and testing.
//!
//! Seeds a dashboard summary, notifications, and an activity feed for the
//! fixed test user, for local development and testing purposes.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use pulseboard_db::entities::{activities, dashboard_summaries, notifications};

/// Test user ID (consistent for all seeds)
const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000002";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = pulseboard_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding dashboard summary...");
    seed_summary(&db).await;

    println!("Seeding notifications...");
    seed_notifications(&db).await;

    println!("Seeding activities...");
    seed_activities(&db).await;

    println!("Seeding complete!");
}

fn test_user_id() -> Uuid {
    Uuid::parse_str(TEST_USER_ID).unwrap()
}

/// Seeds the headline metrics for the test user.
async fn seed_summary(db: &DatabaseConnection) {
    // Check if a summary already exists (one row per owner)
    if dashboard_summaries::Entity::find()
        .filter(dashboard_summaries::Column::UserId.eq(test_user_id()))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Summary already exists, skipping...");
        return;
    }

    let summary = dashboard_summaries::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(test_user_id()),
        total_users: Set(12_345),
        new_signups_today: Set(78),
        active_users: Set(5_678),
        revenue_today: Set(dec!(12450.00)),
        conversion_rate: Set(dec!(4.2)),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = summary.insert(db).await {
        eprintln!("Failed to insert summary: {e}");
    } else {
        println!("  Created dashboard summary");
    }
}

/// Seeds a small mixed batch of notifications.
async fn seed_notifications(db: &DatabaseConnection) {
    let user_id = test_user_id();

    let existing = notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Notifications already exist, skipping...");
        return;
    }

    // (kind, title, message, read, severity, minutes ago)
    let rows = [
        (
            "warning",
            "Trial Ending Soon",
            "Your trial ends in 3 days. Upgrade to keep access.",
            false,
            "high",
            10_i64,
        ),
        (
            "info",
            "New Feature Available",
            "Custom dashboards are now available on your plan.",
            true,
            "info",
            120,
        ),
        (
            "success",
            "Payment Received",
            "Invoice #1042 was paid in full.",
            false,
            "info",
            300,
        ),
    ];

    let mut inserted = 0;
    for (kind, title, message, read, severity, minutes_ago) in rows {
        let notification = notifications::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            kind: Set(kind.to_string()),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            read: Set(read),
            severity: Set(severity.to_string()),
            created_at: Set((Utc::now() - Duration::minutes(minutes_ago)).into()),
        };

        if let Err(e) = notification.insert(db).await {
            eprintln!("Failed to insert notification {title}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} notifications");
}

/// Seeds a recent activity feed.
async fn seed_activities(db: &DatabaseConnection) {
    let user_id = test_user_id();

    let existing = activities::Entity::find()
        .filter(activities::Column::UserId.eq(user_id))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Activities already exist, skipping...");
        return;
    }

    // (user name, action, minutes ago)
    let rows = [
        ("JohnDoe", "signed up", 2_i64),
        ("Acme Corp", "purchased Pro Plan", 35),
        ("JaneSmith", "logged in", 90),
    ];

    let mut inserted = 0;
    for (user_name, action, minutes_ago) in rows {
        let activity = activities::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            user_name: Set(user_name.to_string()),
            action: Set(action.to_string()),
            created_at: Set((Utc::now() - Duration::minutes(minutes_ago)).into()),
        };

        if let Err(e) = activity.insert(db).await {
            eprintln!("Failed to insert activity for {user_name}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} activities");
}
