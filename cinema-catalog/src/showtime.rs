use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use crate::{CatalogError, CatalogResult, Movie, ShowtimeId, Theater, TheaterId};

/// A scheduled screening of a movie in a theater
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    pub showtime_id: ShowtimeId,
    pub movie: Arc<Movie>,
    pub theater_id: TheaterId,
    pub theater_name: String,
    pub start_time: DateTime<Utc>,
    pub base_price: f64,
    /// Denormalized index of active reservations; seat flags stay authoritative
    pub reservation_ids: Vec<u64>,
}

impl Showtime {
    pub fn new(
        showtime_id: ShowtimeId,
        movie: Arc<Movie>,
        theater: &Theater,
        start_time: DateTime<Utc>,
        base_price: f64,
    ) -> CatalogResult<Self> {
        if !base_price.is_finite() || base_price < 0.0 {
            return Err(CatalogError::InvalidPrice(base_price));
        }

        Ok(Self {
            showtime_id,
            movie,
            theater_id: theater.theater_id,
            theater_name: theater.name.clone(),
            start_time,
            base_price,
            reservation_ids: Vec::new(),
        })
    }
}

impl fmt::Display for Showtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Showtime ID: {}", self.showtime_id)?;
        writeln!(f, "  Movie: {}", self.movie.title)?;
        writeln!(f, "  Theater: {}", self.theater_name)?;
        writeln!(f, "  Time: {}", self.start_time.format("%d/%m %H:%M"))?;
        write!(f, "  Base Price: {:.2}", self.base_price)
    }
}
