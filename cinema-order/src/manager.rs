use crate::models::{Reservation, ReservationId};
use crate::seat_map::SeatMap;
use chrono::{DateTime, Utc};
use cinema_catalog::{
    CatalogError, Movie, PriceMultipliers, Showtime, ShowtimeId, Theater, TheaterId,
};
use cinema_shared::ReservationEvent;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns movies, theaters, showtimes and reservations.
///
/// The only component allowed to flip seat reservation flags: a seat is
/// reserved iff exactly one active reservation holds it.
pub struct CinemaManager {
    movies: Vec<Arc<Movie>>,
    theaters: HashMap<TheaterId, Theater>,
    showtimes: Vec<Showtime>,
    reservations: Vec<Reservation>,
    next_reservation_id: ReservationId,
    pricing: PriceMultipliers,
    seat_map: SeatMap,
    events: Vec<ReservationEvent>,
}

impl CinemaManager {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            theaters: HashMap::new(),
            showtimes: Vec::new(),
            reservations: Vec::new(),
            next_reservation_id: 1,
            pricing: PriceMultipliers::default(),
            seat_map: SeatMap::default(),
            events: Vec::new(),
        }
    }

    pub fn with_pricing(mut self, pricing: PriceMultipliers) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_seat_map(mut self, seat_map: SeatMap) -> Self {
        self.seat_map = seat_map;
        self
    }

    /// Register a movie and hand back the shared handle showtimes refer to
    pub fn add_movie(&mut self, movie: Movie) -> Arc<Movie> {
        let movie = Arc::new(movie);
        info!("Registered movie {}", movie.title);
        self.movies.push(movie.clone());
        movie
    }

    /// Take ownership of a theater; every seat must still be free
    pub fn add_theater(&mut self, theater: Theater) -> Result<TheaterId, ReservationError> {
        let theater_id = theater.theater_id;

        if self.theaters.contains_key(&theater_id) {
            return Err(ReservationError::DuplicateTheater(theater_id));
        }

        if theater.reserved_count() > 0 {
            let seat_ids: Vec<String> = theater
                .sorted_seats()
                .into_iter()
                .filter(|s| s.is_reserved())
                .map(|s| s.seat_id.clone())
                .collect();
            return Err(ReservationError::SeatsAlreadyReserved { theater_id, seat_ids });
        }

        info!("Registered theater {} ({} seats)", theater.name, theater.seat_count());
        self.theaters.insert(theater_id, theater);
        Ok(theater_id)
    }

    /// Schedule a registered movie into a registered theater
    pub fn schedule_showtime(
        &mut self,
        showtime_id: ShowtimeId,
        movie: &Arc<Movie>,
        theater_id: TheaterId,
        start_time: DateTime<Utc>,
        base_price: f64,
    ) -> Result<ShowtimeId, ReservationError> {
        if self.showtimes.iter().any(|s| s.showtime_id == showtime_id) {
            return Err(ReservationError::DuplicateShowtime(showtime_id));
        }

        if !self.movies.iter().any(|m| Arc::ptr_eq(m, movie)) {
            return Err(ReservationError::MovieNotFound(movie.title.clone()));
        }

        let theater = self.theaters.get(&theater_id)
            .ok_or(ReservationError::TheaterNotFound(theater_id))?;

        let showtime = Showtime::new(showtime_id, movie.clone(), theater, start_time, base_price)?;
        info!("Scheduled showtime {}: {} in {}", showtime_id, movie.title, theater.name);
        self.showtimes.push(showtime);
        Ok(showtime_id)
    }

    /// Registered movies in insertion order
    pub fn movies(&self) -> &[Arc<Movie>] {
        &self.movies
    }

    /// Scheduled showtimes in insertion order
    pub fn showtimes(&self) -> &[Showtime] {
        &self.showtimes
    }

    /// Look up a showtime by id
    pub fn showtime(&self, showtime_id: ShowtimeId) -> Option<&Showtime> {
        self.showtimes.iter().find(|s| s.showtime_id == showtime_id)
    }

    /// Read-only view of a theater and its seat flags
    pub fn theater(&self, theater_id: TheaterId) -> Option<&Theater> {
        self.theaters.get(&theater_id)
    }

    /// Active reservations in purchase order
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Look up an active reservation by id
    pub fn reservation(&self, reservation_id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.reservation_id == reservation_id)
    }

    /// Active reservations held by one customer
    pub fn reservations_for(&self, customer_name: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.customer_name == customer_name)
            .collect()
    }

    /// Every movie when `genre` is `None`, otherwise a case-insensitive genre match
    pub fn filter_movies(&self, genre: Option<&str>) -> Vec<Arc<Movie>> {
        match genre {
            None => self.movies.clone(),
            Some(genre) => self.movies
                .iter()
                .filter(|m| m.matches_genre(genre))
                .cloned()
                .collect(),
        }
    }

    /// Free seat ids of the showtime's theater, sorted
    pub fn available_seats(&self, showtime_id: ShowtimeId) -> Result<Vec<String>, ReservationError> {
        let (_, theater) = self.showtime_and_theater(showtime_id)?;
        Ok(theater.available_seat_ids())
    }

    /// Render the seat grid of a showtime's theater without touching seat state
    pub fn display_seat_map(&self, showtime_id: ShowtimeId) -> Result<String, ReservationError> {
        let (showtime, theater) = self.showtime_and_theater(showtime_id)?;
        debug!("Rendering seat map for showtime {}", showtime_id);
        Ok(self.seat_map.render(showtime, theater))
    }

    /// Reserve every requested seat or none of them.
    ///
    /// Seats are validated in request order; the first missing or taken seat
    /// aborts the purchase before any flag changes.
    pub fn purchase_ticket<S: AsRef<str>>(
        &mut self,
        customer_name: &str,
        showtime_id: ShowtimeId,
        seat_ids: &[S],
    ) -> Result<Reservation, ReservationError> {
        match self.try_purchase(customer_name, showtime_id, seat_ids) {
            Ok(reservation) => {
                info!(
                    "Reservation {} created for {}: seats {:?}, total {:.2}",
                    reservation.reservation_id,
                    customer_name,
                    reservation.seat_ids(),
                    reservation.total_cost
                );
                self.events.push(ReservationEvent::ticket_purchased(
                    reservation.reservation_id,
                    showtime_id,
                    customer_name,
                    reservation.seat_ids(),
                    reservation.total_cost,
                ));
                Ok(reservation)
            }
            Err(err) => {
                warn!("Purchase by {} for showtime {} rejected: {}", customer_name, showtime_id, err);
                let seat_id = match &err {
                    ReservationError::SeatUnavailable { seat_id, .. } => Some(seat_id.clone()),
                    _ => None,
                };
                self.events.push(ReservationEvent::purchase_rejected(
                    showtime_id,
                    customer_name,
                    seat_id,
                    err.to_string(),
                ));
                Err(err)
            }
        }
    }

    fn try_purchase<S: AsRef<str>>(
        &mut self,
        customer_name: &str,
        showtime_id: ShowtimeId,
        seat_ids: &[S],
    ) -> Result<Reservation, ReservationError> {
        if seat_ids.is_empty() {
            return Err(ReservationError::EmptySelection);
        }

        let index = self.showtimes.iter()
            .position(|s| s.showtime_id == showtime_id)
            .ok_or(ReservationError::ShowtimeNotFound(showtime_id))?;
        let theater_id = self.showtimes[index].theater_id;
        let theater = self.theaters.get_mut(&theater_id)
            .ok_or(ReservationError::TheaterNotFound(theater_id))?;

        // Validate and snapshot in one pass; nothing is mutated until it completes
        let mut resolved: Vec<&str> = Vec::with_capacity(seat_ids.len());
        let mut reserved_seats = Vec::with_capacity(seat_ids.len());
        for seat_id in seat_ids {
            let seat_id = seat_id.as_ref();
            let seat = theater.seat(seat_id).ok_or_else(|| ReservationError::SeatUnavailable {
                seat_id: seat_id.to_string(),
                reason: UnavailableReason::NotFound,
            })?;

            if seat.is_reserved() || resolved.contains(&seat_id) {
                return Err(ReservationError::SeatUnavailable {
                    seat_id: seat_id.to_string(),
                    reason: UnavailableReason::AlreadyReserved,
                });
            }

            resolved.push(seat_id);
            reserved_seats.push(seat.clone());
        }

        for seat_id in resolved {
            theater.reserve_seat(seat_id);
        }

        let reservation_id = self.next_reservation_id;
        self.next_reservation_id += 1;

        let showtime = &mut self.showtimes[index];
        let mut reservation = Reservation::new(
            reservation_id,
            showtime,
            reserved_seats,
            customer_name.to_string(),
        );
        reservation.calculate_cost(&self.pricing);
        showtime.reservation_ids.push(reservation_id);

        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Release the reservation's seats and retire its id
    pub fn cancel_reservation(&mut self, reservation_id: ReservationId) -> Result<Reservation, ReservationError> {
        let position = match self.reservations.iter().position(|r| r.reservation_id == reservation_id) {
            Some(position) => position,
            None => {
                warn!("Cancellation failed: reservation {} not found", reservation_id);
                return Err(ReservationError::ReservationNotFound(reservation_id));
            }
        };

        let reservation = self.reservations.remove(position);

        if let Some(showtime) = self.showtimes.iter_mut().find(|s| s.showtime_id == reservation.showtime_id) {
            showtime.reservation_ids.retain(|id| *id != reservation_id);

            if let Some(theater) = self.theaters.get_mut(&showtime.theater_id) {
                for seat in &reservation.reserved_seats {
                    theater.release_seat(&seat.seat_id);
                }
            }
        }

        info!(
            "Reservation {} cancelled, released seats {:?}",
            reservation_id,
            reservation.seat_ids()
        );
        self.events.push(ReservationEvent::reservation_cancelled(
            reservation_id,
            reservation.showtime_id,
            reservation.seat_ids(),
        ));
        Ok(reservation)
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[ReservationEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<ReservationEvent> {
        std::mem::take(&mut self.events)
    }

    fn showtime_and_theater(&self, showtime_id: ShowtimeId) -> Result<(&Showtime, &Theater), ReservationError> {
        let showtime = self.showtime(showtime_id)
            .ok_or(ReservationError::ShowtimeNotFound(showtime_id))?;
        let theater = self.theaters.get(&showtime.theater_id)
            .ok_or(ReservationError::TheaterNotFound(showtime.theater_id))?;
        Ok((showtime, theater))
    }
}

impl Default for CinemaManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    NotFound,
    AlreadyReserved,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotFound => write!(f, "no such seat"),
            UnavailableReason::AlreadyReserved => write!(f, "already reserved"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReservationError {
    #[error("Seat {seat_id} unavailable: {reason}")]
    SeatUnavailable {
        seat_id: String,
        reason: UnavailableReason,
    },

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Showtime not found: {0}")]
    ShowtimeNotFound(ShowtimeId),

    #[error("Theater not found: {0}")]
    TheaterNotFound(TheaterId),

    #[error("Movie not registered: {0}")]
    MovieNotFound(String),

    #[error("Theater already registered: {0}")]
    DuplicateTheater(TheaterId),

    #[error("Showtime already scheduled: {0}")]
    DuplicateShowtime(ShowtimeId),

    #[error("Theater {theater_id} registered with seats already reserved: {seat_ids:?}")]
    SeatsAlreadyReserved {
        theater_id: TheaterId,
        seat_ids: Vec<String>,
    },

    #[error("No seats requested")]
    EmptySelection,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
