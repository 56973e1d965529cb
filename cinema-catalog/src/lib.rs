pub mod movie;
pub mod theater;
pub mod showtime;
pub mod pricing;

pub use movie::Movie;
pub use theater::{Seat, Theater, STANDARD, VIP};
pub use showtime::Showtime;
pub use pricing::PriceMultipliers;

pub type TheaterId = u32;
pub type ShowtimeId = u32;

/// Errors raised while building the catalog (movies, theaters, showtimes, price tables)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid movie: {0}")]
    InvalidMovie(String),

    #[error("Seat {seat_id} already exists in theater {theater_id}")]
    DuplicateSeat {
        theater_id: TheaterId,
        seat_id: String,
    },

    #[error("Theater {theater_id} is full: capacity {capacity}")]
    CapacityExceeded {
        theater_id: TheaterId,
        capacity: u32,
    },

    #[error("Invalid base price: {0}")]
    InvalidPrice(f64),

    #[error("Invalid multiplier {multiplier} for category {category}")]
    InvalidMultiplier {
        category: String,
        multiplier: f64,
    },

    #[error("Duplicate price category: {0}")]
    DuplicateCategory(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
