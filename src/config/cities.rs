use crate::domain::model::GeoPoint;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The directory every fresh process starts from.
const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("mumbai", 19.0760, 72.8777),
    ("pune", 18.5204, 73.8567),
    ("nashik", 19.9975, 73.7898),
    ("nagpur", 21.1458, 79.0882),
    ("kolhapur", 16.7050, 74.2433),
    ("satara", 17.6805, 74.0183),
    ("sangli", 16.8524, 74.5815),
    ("aurangabad", 19.8762, 75.3433),
    ("solapur", 17.6599, 75.9064),
    ("thane", 19.2183, 72.9781),
    ("navi mumbai", 19.0330, 73.0297),
    ("ahmednagar", 19.0948, 74.7480),
    ("latur", 18.4088, 76.5604),
    ("karad", 17.2890, 74.1811),
    ("amravati", 20.9374, 77.7796),
    ("jalgaon", 21.0077, 75.5626),
    ("nanded", 19.1383, 77.3210),
    ("miraj", 16.8226, 74.6473),
];

/// Immutable city name -> coordinates mapping, built once at startup and
/// injected into the booking flow. Lookups normalize the query the same way
/// keys are normalized (trim + ASCII lowercase).
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities: HashMap<String, GeoPoint>,
}

#[derive(Debug, Deserialize)]
struct CitiesFile {
    cities: HashMap<String, CityEntry>,
}

#[derive(Debug, Deserialize)]
struct CityEntry {
    lat: f64,
    lon: f64,
}

impl CityDirectory {
    pub fn builtin() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|(name, lat, lon)| (name.to_string(), GeoPoint { lat: *lat, lon: *lon }))
            .collect();
        Self { cities }
    }

    /// 從 TOML 檔案載入城市目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析城市目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: CitiesFile =
            toml::from_str(content).map_err(|e| BookingError::ConfigValidationError {
                field: "cities_file".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        let mut cities = HashMap::new();
        for (name, entry) in parsed.cities {
            let key = Self::normalize(&name);
            validation::validate_range(&format!("cities.{}.lat", key), entry.lat, -90.0, 90.0)?;
            validation::validate_range(&format!("cities.{}.lon", key), entry.lon, -180.0, 180.0)?;
            cities.insert(
                key,
                GeoPoint {
                    lat: entry.lat,
                    lon: entry.lon,
                },
            );
        }

        Ok(Self { cities })
    }

    /// 合併檔案中的城市，同名條目以檔案為準
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let extra = Self::from_file(path)?;
        self.cities.extend(extra.cities);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<GeoPoint> {
        self.cities.get(&Self::normalize(name)).copied()
    }

    pub fn lookup(&self, name: &str) -> Result<GeoPoint> {
        self.resolve(name)
            .ok_or_else(|| BookingError::UnknownCityError {
                name: name.trim().to_string(),
            })
    }

    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
