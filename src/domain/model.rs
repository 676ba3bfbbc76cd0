use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Geographic point in degrees. Latitude is kept in [-90, 90] and longitude
/// in [-180, 180] by the city directory; the calculators trust their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: u32,
    pub contact: String,
}

/// Resolved journey: normalized city names plus their coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub origin_city: String,
    pub destination_city: String,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub passenger: Passenger,
    pub route: Route,
}

/// Priced journey, both figures already rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub distance_km: f64,
    pub fare: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Upi,
    Card,
    NetBanking,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "NetBanking",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub passenger: Passenger,
    pub origin_city: String,
    pub destination_city: String,
    pub distance_km: f64,
    pub fare: f64,
    pub payment_method: PaymentMethod,
    pub issued_at: DateTime<Local>,
}
