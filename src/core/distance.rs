use crate::domain::model::GeoPoint;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points using the haversine formula.
/// Returns kilometers rounded to two decimal places.
pub fn distance_km(origin: GeoPoint, destination: GeoPoint) -> f64 {
    let d_lat = (destination.lat - origin.lat).to_radians();
    let d_lon = (destination.lon - origin.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + origin.lat.to_radians().cos()
            * destination.lat.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c * 100.0).round() / 100.0
}
