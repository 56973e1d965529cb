use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use cinema_catalog::{PriceMultipliers, Seat, Showtime, ShowtimeId};
use std::fmt;

pub type ReservationId = u64;

/// A committed purchase of specific seats for one showtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub showtime_id: ShowtimeId,
    pub movie_title: String,
    pub start_time: DateTime<Utc>,
    pub base_price: f64,
    /// Seats as they were at purchase time, in request order
    pub reserved_seats: Vec<Seat>,
    pub customer_name: String,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        reservation_id: ReservationId,
        showtime: &Showtime,
        reserved_seats: Vec<Seat>,
        customer_name: String,
    ) -> Self {
        Self {
            reservation_id,
            showtime_id: showtime.showtime_id,
            movie_title: showtime.movie.title.clone(),
            start_time: showtime.start_time,
            base_price: showtime.base_price,
            reserved_seats,
            customer_name,
            total_cost: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Sum of base price times category multiplier over every seat
    pub fn calculate_cost(&mut self, multipliers: &PriceMultipliers) -> f64 {
        self.total_cost = self
            .reserved_seats
            .iter()
            .map(|seat| multipliers.price_for(self.base_price, &seat.price_category))
            .sum();
        self.total_cost
    }

    pub fn seat_ids(&self) -> Vec<String> {
        self.reserved_seats.iter().map(|s| s.seat_id.clone()).collect()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seat_list = self
            .reserved_seats
            .iter()
            .map(|s| s.label())
            .collect::<Vec<String>>()
            .join(", ");

        writeln!(f, "--- Reservation #{} ---", self.reservation_id)?;
        writeln!(f, "  Customer: {}", self.customer_name)?;
        writeln!(f, "  Movie: {} ({})", self.movie_title, self.start_time.format("%H:%M"))?;
        writeln!(f, "  Seats: {}", seat_list)?;
        write!(f, "  Total Cost: {:.2}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use cinema_catalog::{Movie, Theater, VIP};
    use std::sync::Arc;

    fn showtime(base_price: f64) -> Showtime {
        let movie = Arc::new(Movie::new("Dune", 155, "PG-13").unwrap());
        let theater = Theater::new(1, "Hall1", 10);
        let start = Utc.with_ymd_and_hms(2024, 12, 25, 20, 30, 0).unwrap();
        Showtime::new(1, movie, &theater, start, base_price).unwrap()
    }

    #[test]
    fn test_cost_mixed_categories() {
        let seats = vec![
            Seat::new("A1", "A", 1),
            Seat::new("A2", "A", 2).with_category(VIP),
        ];
        let mut reservation = Reservation::new(1, &showtime(50.0), seats, "Alice".to_string());

        assert_eq!(reservation.calculate_cost(&PriceMultipliers::default()), 125.0);
        assert_eq!(reservation.total_cost, 125.0);
    }

    #[test]
    fn test_cost_unknown_category_and_empty() {
        let seats = vec![Seat::new("C1", "C", 1).with_category("Balcony")];
        let mut reservation = Reservation::new(1, &showtime(40.0), seats, "Bob".to_string());
        assert_eq!(reservation.calculate_cost(&PriceMultipliers::default()), 40.0);

        let mut empty = Reservation::new(2, &showtime(40.0), vec![], "Bob".to_string());
        assert_eq!(empty.calculate_cost(&PriceMultipliers::default()), 0.0);
    }

    #[test]
    fn test_cost_with_custom_table() {
        let table = PriceMultipliers::default().with(VIP, 2.0).unwrap();
        let seats = vec![Seat::new("A2", "A", 2).with_category(VIP)];
        let mut reservation = Reservation::new(1, &showtime(30.0), seats, "Cem".to_string());

        assert_eq!(reservation.calculate_cost(&table), 60.0);
    }

    #[test]
    fn test_display() {
        let seats = vec![
            Seat::new("A1", "A", 1),
            Seat::new("A2", "A", 2).with_category(VIP),
        ];
        let mut reservation = Reservation::new(3, &showtime(50.0), seats, "Alice".to_string());
        reservation.calculate_cost(&PriceMultipliers::default());

        assert_eq!(
            reservation.to_string(),
            "--- Reservation #3 ---\n  Customer: Alice\n  Movie: Dune (20:30)\n  Seats: A1, A2\n  Total Cost: 125.00"
        );
    }
}
