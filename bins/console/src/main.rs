//! Pulseboard console renderer.
//!
//! Fetches the configured user's dashboard once and prints it: metric cards,
//! the notification feed with the unread badge, and recent activity.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulseboard_core::dashboard::{DashboardSession, DashboardState, Phase};
use pulseboard_core::identity::{CurrentUser, IdentityProvider, StaticIdentity};
use pulseboard_db::{DashboardRepository, connect};
use pulseboard_shared::AppConfig;
use pulseboard_shared::format::{format_currency, format_number, format_percent};
use pulseboard_shared::types::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulseboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // The console takes its identity from configuration; a deployed renderer
    // would receive it from the external provider instead.
    let identity = StaticIdentity::new(config.identity.user_id.map(|id| CurrentUser {
        id: UserId::from_uuid(id),
        email: config.identity.email.clone().unwrap_or_default(),
        display_name: config.identity.display_name.clone(),
    }));

    let repository = DashboardRepository::new(db);
    let session = match identity.current_user() {
        Some(user) => {
            info!(user = %user.id, initials = %user.initials(), "rendering dashboard");
            DashboardSession::with_user(repository, user)
        }
        None => {
            info!("no user configured, dashboard stays empty");
            DashboardSession::new(repository)
        }
    };

    session.refresh().await;
    render(&*session.state().await);

    Ok(())
}

fn render(state: &DashboardState) {
    match state.phase() {
        Phase::Uninitialized => {
            println!("Sign in to see your dashboard.");
            return;
        }
        Phase::Errored => {
            println!(
                "Error loading dashboard data: {}",
                state.error().unwrap_or("unknown error")
            );
            if state.summary().is_none() && state.notifications().is_empty() {
                return;
            }
            println!("Showing last known data.\n");
        }
        Phase::Loading | Phase::Ready => {}
    }

    match state.summary() {
        Some(summary) => {
            println!("== Overview ==");
            println!("  Total Users        {}", format_number(summary.total_users));
            println!(
                "  New Signups Today  {}",
                format_number(i64::from(summary.new_signups_today))
            );
            println!("  Active Users       {}", format_number(summary.active_users));
            println!("  Revenue Today      {}", format_currency(summary.revenue_today));
            println!("  Conversion Rate    {}", format_percent(summary.conversion_rate));
        }
        None => println!("== Overview ==\n  No metrics yet."),
    }

    println!("\n== Notifications ({} unread) ==", state.unread_count());
    if state.notifications().is_empty() {
        println!("  All caught up.");
    }
    for notification in state.notifications() {
        let marker = if notification.read { " " } else { "*" };
        println!(
            "  {marker} [{}] {} - {}",
            notification.kind, notification.title, notification.message
        );
    }

    println!("\n== Recent Activity ==");
    if state.activities().is_empty() {
        println!("  Nothing yet.");
    }
    for activity in state.activities() {
        println!(
            "  {} {} ({})",
            activity.user_name,
            activity.action,
            activity.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}
