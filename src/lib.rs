pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cities::CityDirectory;
pub use config::cli::{LocalStorage, StdioConsole};
pub use core::{booking::ConsoleBooking, engine::BookingEngine};
pub use utils::error::{BookingError, Result};
