use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use crate::{CatalogError, CatalogResult, TheaterId};

pub const STANDARD: &str = "Standard";
pub const VIP: &str = "VIP";

/// A physical seat, owned by its theater
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seat {
    pub seat_id: String,
    pub row: String,
    pub number: u32,
    /// Category label looked up in the price multiplier table
    pub price_category: String,
    is_reserved: bool,
}

impl Seat {
    pub fn new(seat_id: impl Into<String>, row: impl Into<String>, number: u32) -> Self {
        Self {
            seat_id: seat_id.into(),
            row: row.into(),
            number,
            price_category: STANDARD.to_string(),
            is_reserved: false,
        }
    }

    pub fn with_category(mut self, price_category: impl Into<String>) -> Self {
        self.price_category = price_category.into();
        self
    }

    pub fn is_reserved(&self) -> bool {
        self.is_reserved
    }

    fn mark_reserved(&mut self) {
        self.is_reserved = true;
    }

    fn mark_free(&mut self) {
        self.is_reserved = false;
    }

    /// Row and number, e.g. "A1"
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_reserved { "RESERVED" } else { "FREE" };
        write!(f, "Seat: {} ({}), Status: {}", self.label(), self.price_category, status)
    }
}

/// A screening room and the seats it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theater {
    pub theater_id: TheaterId,
    pub name: String,
    pub capacity: u32,
    seats: HashMap<String, Seat>,
}

impl Theater {
    pub fn new(theater_id: TheaterId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            theater_id,
            name: name.into(),
            capacity,
            seats: HashMap::new(),
        }
    }

    /// Add a seat; ids are unique and the seat count never exceeds capacity
    pub fn add_seat(&mut self, seat: Seat) -> CatalogResult<()> {
        if self.seats.contains_key(&seat.seat_id) {
            return Err(CatalogError::DuplicateSeat {
                theater_id: self.theater_id,
                seat_id: seat.seat_id,
            });
        }

        if self.seats.len() as u32 >= self.capacity {
            return Err(CatalogError::CapacityExceeded {
                theater_id: self.theater_id,
                capacity: self.capacity,
            });
        }

        self.seats.insert(seat.seat_id.clone(), seat);
        Ok(())
    }

    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.get(seat_id)
    }

    /// Free → Reserved; false if the seat is missing or already taken
    pub fn reserve_seat(&mut self, seat_id: &str) -> bool {
        match self.seats.get_mut(seat_id) {
            Some(seat) if !seat.is_reserved() => {
                seat.mark_reserved();
                true
            }
            _ => false,
        }
    }

    /// Reserved → Free; false if the seat is missing or already free
    pub fn release_seat(&mut self, seat_id: &str) -> bool {
        match self.seats.get_mut(seat_id) {
            Some(seat) if seat.is_reserved() => {
                seat.mark_free();
                true
            }
            _ => false,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn reserved_count(&self) -> usize {
        self.seats.values().filter(|s| s.is_reserved()).count()
    }

    /// Seats ordered by seat id
    pub fn sorted_seats(&self) -> Vec<&Seat> {
        let mut seats: Vec<&Seat> = self.seats.values().collect();
        seats.sort_by(|a, b| a.seat_id.cmp(&b.seat_id));
        seats
    }

    /// Ids of free seats, ordered by seat id
    pub fn available_seat_ids(&self) -> Vec<String> {
        self.sorted_seats()
            .into_iter()
            .filter(|s| !s.is_reserved())
            .map(|s| s.seat_id.clone())
            .collect()
    }
}

impl fmt::Display for Theater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theater: {}, Capacity: {}, Seats: {}", self.name, self.capacity, self.seats.len())
    }
}
