/// Per-kilometer tier schedule: the first 10 km cost the most, the next
/// 40 km less, everything beyond 50 km the least.
const TIER1_LIMIT_KM: f64 = 10.0;
const TIER2_LIMIT_KM: f64 = 50.0;
const TIER1_RATE: f64 = 10.0;
const TIER2_RATE: f64 = 8.0;
const TIER3_RATE: f64 = 5.0;

/// Fare for a non-negative distance in kilometers, rounded to two decimal
/// places. Continuous at the tier boundaries (100 at 10 km, 420 at 50 km).
pub fn fare_for_distance(distance_km: f64) -> f64 {
    let fare = if distance_km <= TIER1_LIMIT_KM {
        distance_km * TIER1_RATE
    } else if distance_km <= TIER2_LIMIT_KM {
        TIER1_LIMIT_KM * TIER1_RATE + (distance_km - TIER1_LIMIT_KM) * TIER2_RATE
    } else {
        TIER1_LIMIT_KM * TIER1_RATE
            + (TIER2_LIMIT_KM - TIER1_LIMIT_KM) * TIER2_RATE
            + (distance_km - TIER2_LIMIT_KM) * TIER3_RATE
    };

    (fare * 100.0).round() / 100.0
}
