pub mod models;

pub use models::events::{
    PurchaseRejectedEvent, ReservationCancelledEvent, ReservationEvent, TicketPurchasedEvent,
};
