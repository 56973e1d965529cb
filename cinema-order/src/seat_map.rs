use cinema_catalog::{Showtime, Theater};

pub const DEFAULT_WRAP_WIDTH: usize = 5;

/// Plain-text seat grid renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatMap {
    wrap_width: usize,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl SeatMap {
    pub fn new(wrap_width: usize) -> Self {
        Self {
            wrap_width: wrap_width.max(1),
        }
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    /// Header line, then seats sorted by id, `[X]` occupied and `[ ]` free
    pub fn render(&self, showtime: &Showtime, theater: &Theater) -> String {
        let cells: Vec<String> = theater
            .sorted_seats()
            .into_iter()
            .map(|seat| {
                let mark = if seat.is_reserved() { 'X' } else { ' ' };
                format!("[{}] {}", mark, seat.seat_id)
            })
            .collect();

        let mut lines = vec![format!(
            "Seat map: {} | {} ({})",
            theater.name,
            showtime.movie.title,
            showtime.start_time.format("%d/%m %H:%M")
        )];

        if cells.is_empty() {
            lines.push("(no seats)".to_string());
        }

        lines.extend(cells.chunks(self.wrap_width).map(|row| row.join("  ")));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cinema_catalog::{Movie, Seat};
    use std::sync::Arc;

    fn fixture(seat_count: u32) -> (Showtime, Theater) {
        let mut theater = Theater::new(1, "Hall1", 20);
        for n in 1..=seat_count {
            theater.add_seat(Seat::new(format!("A{:02}", n), "A", n)).unwrap();
        }
        let movie = Arc::new(Movie::new("Dune", 155, "PG-13").unwrap());
        let start = Utc.with_ymd_and_hms(2024, 12, 25, 20, 30, 0).unwrap();
        let showtime = Showtime::new(1, movie, &theater, start, 50.0).unwrap();
        (showtime, theater)
    }

    #[test]
    fn test_wraps_every_five_seats() {
        let (showtime, mut theater) = fixture(7);
        theater.reserve_seat("A02");

        let rendered = SeatMap::default().render(&showtime, &theater);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Seat map: Hall1 | Dune (25/12 20:30)");
        assert_eq!(lines[1], "[ ] A01  [X] A02  [ ] A03  [ ] A04  [ ] A05");
        assert_eq!(lines[2], "[ ] A06  [ ] A07");
    }

    #[test]
    fn test_empty_theater() {
        let (showtime, theater) = fixture(0);
        let rendered = SeatMap::new(0).render(&showtime, &theater);

        assert!(rendered.ends_with("(no seats)"));
        assert_eq!(SeatMap::new(0).wrap_width(), 1);
    }
}
