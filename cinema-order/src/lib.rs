pub mod models;
pub mod manager;
pub mod seat_map;
pub mod shared;

pub use models::{Reservation, ReservationId};
pub use manager::{CinemaManager, ReservationError, UnavailableReason};
pub use seat_map::SeatMap;
pub use shared::SharedCinema;
