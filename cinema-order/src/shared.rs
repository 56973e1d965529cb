use crate::manager::{CinemaManager, ReservationError};
use crate::models::{Reservation, ReservationId};
use cinema_catalog::ShowtimeId;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Lock-guarded manager handle for concurrent callers.
///
/// Each operation holds the lock for exactly one validate-then-commit call,
/// so overlapping purchases are serialized and at most one wins a seat.
#[derive(Clone)]
pub struct SharedCinema {
    inner: Arc<Mutex<CinemaManager>>,
}

impl SharedCinema {
    pub fn new(manager: CinemaManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub async fn purchase_ticket(
        &self,
        customer_name: &str,
        showtime_id: ShowtimeId,
        seat_ids: &[String],
    ) -> Result<Reservation, ReservationError> {
        self.inner.lock().await.purchase_ticket(customer_name, showtime_id, seat_ids)
    }

    pub async fn cancel_reservation(&self, reservation_id: ReservationId) -> Result<Reservation, ReservationError> {
        self.inner.lock().await.cancel_reservation(reservation_id)
    }

    pub async fn available_seats(&self, showtime_id: ShowtimeId) -> Result<Vec<String>, ReservationError> {
        self.inner.lock().await.available_seats(showtime_id)
    }

    pub async fn display_seat_map(&self, showtime_id: ShowtimeId) -> Result<String, ReservationError> {
        self.inner.lock().await.display_seat_map(showtime_id)
    }

    /// Direct access for reads spanning several calls
    pub async fn lock(&self) -> MutexGuard<'_, CinemaManager> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cinema_catalog::{Movie, Seat, Theater};

    fn shared() -> SharedCinema {
        let mut manager = CinemaManager::new();
        let mut hall = Theater::new(1, "Hall1", 4);
        for n in 1..=4 {
            hall.add_seat(Seat::new(format!("A{}", n), "A", n)).unwrap();
        }
        manager.add_theater(hall).unwrap();
        let movie = manager.add_movie(Movie::new("Dune", 155, "PG-13").unwrap());
        let start = Utc.with_ymd_and_hms(2024, 12, 25, 20, 30, 0).unwrap();
        manager.schedule_showtime(1, &movie, 1, start, 10.0).unwrap();
        SharedCinema::new(manager)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_purchases_one_winner() {
        let cinema = shared();

        let mut handles = Vec::new();
        for customer in ["Alice", "Bob", "Cem", "Dana"] {
            let cinema = cinema.clone();
            handles.push(tokio::spawn(async move {
                let seats = vec!["A2".to_string(), "A3".to_string()];
                cinema.purchase_ticket(customer, 1, &seats).await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(cinema.available_seats(1).await.unwrap(), vec!["A1".to_string(), "A4".to_string()]);
        assert_eq!(cinema.lock().await.reservations().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_through_handle() {
        let cinema = shared();
        let seats = vec!["A1".to_string()];

        let reservation = cinema.purchase_ticket("Alice", 1, &seats).await.unwrap();
        cinema.cancel_reservation(reservation.reservation_id).await.unwrap();

        assert!(cinema.purchase_ticket("Bob", 1, &seats).await.is_ok());
        assert!(cinema.display_seat_map(1).await.unwrap().contains("[X] A1"));
    }
}
