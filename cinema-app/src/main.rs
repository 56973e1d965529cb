mod app_config;
mod demo;

use anyhow::Context;
use app_config::AppConfig;
use cinema_order::{CinemaManager, SeatMap, SharedCinema};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_app=debug,cinema_order=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load config")?;
    tracing::info!(
        "Starting cinema desk: {} price categories, seat map width {}",
        config.pricing.categories.len(),
        config.seat_map.wrap_width
    );

    let mut manager = CinemaManager::new()
        .with_pricing(config.pricing.to_multipliers()?)
        .with_seat_map(SeatMap::new(config.seat_map.wrap_width));
    demo::seed(&mut manager, &config.demo)?;

    let cinema = SharedCinema::new(manager);
    demo::run(&cinema, &config.demo).await
}
