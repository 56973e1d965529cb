use crate::app_config::DemoSettings;
use anyhow::Context;
use chrono::{Duration, Utc};
use cinema_catalog::{Movie, Seat, Theater, VIP};
use cinema_order::{CinemaManager, SharedCinema};

pub const SHOWTIME_ID: u32 = 1;
const THEATER_ID: u32 = 1;

/// Register one movie, Hall1 (A1 Standard, A2 VIP, plus extra standard seats) and one showtime
pub fn seed(manager: &mut CinemaManager, settings: &DemoSettings) -> anyhow::Result<()> {
    let movie = manager.add_movie(
        Movie::new(settings.movie_title.clone(), 148, "PG-13")?.with_genre("Sci-Fi"),
    );
    manager.add_movie(Movie::new("The Grand Budapest Hotel", 99, "R")?.with_genre("Comedy"));

    let mut hall = Theater::new(THEATER_ID, "Hall1", 2 + settings.extra_standard_seats);
    hall.add_seat(Seat::new("A1", "A", 1))?;
    hall.add_seat(Seat::new("A2", "A", 2).with_category(VIP))?;
    for n in 0..settings.extra_standard_seats {
        hall.add_seat(Seat::new(format!("B{}", n + 1), "B", n + 1))?;
    }
    manager.add_theater(hall)?;

    let start = Utc::now() + Duration::hours(2);
    manager.schedule_showtime(SHOWTIME_ID, &movie, THEATER_ID, start, settings.base_price)?;
    Ok(())
}

/// Purchase, conflicting purchase, cancellation, re-purchase and an unknown cancellation
pub async fn run(cinema: &SharedCinema, settings: &DemoSettings) -> anyhow::Result<()> {
    {
        let manager = cinema.lock().await;
        for movie in manager.filter_movies(Some("sci-fi")) {
            println!("{}", movie);
        }
        if let Some(theater) = manager.theater(THEATER_ID) {
            println!("{}", theater);
        }
        manager.showtime(SHOWTIME_ID).context("demo showtime missing")?;
        for showtime in manager.showtimes() {
            println!("{}", showtime);
        }
        println!();
    }

    println!("{}\n", cinema.display_seat_map(SHOWTIME_ID).await?);

    let first = cinema
        .purchase_ticket(&settings.first_customer, SHOWTIME_ID, &["A1".to_string(), "A2".to_string()])
        .await?;
    println!("{}\n", first);

    if let Err(err) = cinema
        .purchase_ticket(&settings.second_customer, SHOWTIME_ID, &["A1".to_string()])
        .await
    {
        println!("Purchase failed: {}\n", err);
    }

    let cancelled = cinema.cancel_reservation(first.reservation_id).await?;
    println!("Reservation #{} cancelled\n", cancelled.reservation_id);

    let second = cinema
        .purchase_ticket(&settings.second_customer, SHOWTIME_ID, &["A1".to_string()])
        .await?;
    println!("{}\n", second);

    if let Err(err) = cinema.cancel_reservation(999).await {
        println!("Cancellation failed: {}\n", err);
    }

    println!("{}", cinema.display_seat_map(SHOWTIME_ID).await?);

    if let Some(theater) = cinema.lock().await.theater(THEATER_ID) {
        tracing::info!("{} has {} of {} seats reserved", theater.name, theater.reserved_count(), theater.seat_count());
    }

    for event in cinema.lock().await.drain_events() {
        tracing::info!("Event {}: {}", event.event_id(), event.to_payload()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_scenario_leaves_second_customer_holding_a1() {
        let settings = DemoSettings::default();
        let mut manager = CinemaManager::new();
        seed(&mut manager, &settings).unwrap();

        let cinema = SharedCinema::new(manager);
        run(&cinema, &settings).await.unwrap();

        let manager = cinema.lock().await;
        assert_eq!(manager.reservations().len(), 1);
        assert_eq!(manager.reservations()[0].customer_name, "Bob");
        assert_eq!(manager.reservations()[0].reservation_id, 2);
        assert_eq!(
            manager.available_seats(SHOWTIME_ID).unwrap(),
            vec!["A2".to_string(), "B1".to_string(), "B2".to_string(), "B3".to_string()]
        );
        assert!(manager.events().is_empty());
    }
}
