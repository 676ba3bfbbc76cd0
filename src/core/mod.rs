pub mod booking;
pub mod distance;
pub mod engine;
pub mod fare;
pub mod ticket;

pub use crate::domain::model::{BookingRequest, Quote, Ticket};
pub use crate::domain::ports::{BookingFlow, ConfigProvider, Console, Storage};
pub use crate::utils::error::Result;
