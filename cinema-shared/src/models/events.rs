use uuid::Uuid;
use chrono::Utc;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct TicketPurchasedEvent {
    pub event_id: Uuid,
    pub reservation_id: u64,
    pub showtime_id: u32,
    pub customer_name: String,
    pub seat_ids: Vec<String>,
    pub total_cost: f64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct ReservationCancelledEvent {
    pub event_id: Uuid,
    pub reservation_id: u64,
    pub showtime_id: u32,
    pub released_seat_ids: Vec<String>,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct PurchaseRejectedEvent {
    pub event_id: Uuid,
    pub showtime_id: u32,
    pub customer_name: String,
    pub seat_id: Option<String>,
    pub reason: String,
    pub timestamp: i64,
}

/// Everything the reservation desk reports to downstream listeners
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationEvent {
    TicketPurchased(TicketPurchasedEvent),
    ReservationCancelled(ReservationCancelledEvent),
    PurchaseRejected(PurchaseRejectedEvent),
}

impl ReservationEvent {
    pub fn ticket_purchased(
        reservation_id: u64,
        showtime_id: u32,
        customer_name: &str,
        seat_ids: Vec<String>,
        total_cost: f64,
    ) -> Self {
        Self::TicketPurchased(TicketPurchasedEvent {
            event_id: Uuid::new_v4(),
            reservation_id,
            showtime_id,
            customer_name: customer_name.to_string(),
            seat_ids,
            total_cost,
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn reservation_cancelled(reservation_id: u64, showtime_id: u32, released_seat_ids: Vec<String>) -> Self {
        Self::ReservationCancelled(ReservationCancelledEvent {
            event_id: Uuid::new_v4(),
            reservation_id,
            showtime_id,
            released_seat_ids,
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn purchase_rejected(
        showtime_id: u32,
        customer_name: &str,
        seat_id: Option<String>,
        reason: String,
    ) -> Self {
        Self::PurchaseRejected(PurchaseRejectedEvent {
            event_id: Uuid::new_v4(),
            showtime_id,
            customer_name: customer_name.to_string(),
            seat_id,
            reason,
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn event_id(&self) -> Uuid {
        match self {
            Self::TicketPurchased(e) => e.event_id,
            Self::ReservationCancelled(e) => e.event_id,
            Self::PurchaseRejected(e) => e.event_id,
        }
    }

    /// Serialized payload, as published to consumers
    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
