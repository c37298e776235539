use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::CityResponseDto;

/// A city with its fixed pickup coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const CITIES: &[City] = &[
    City {
        name: "Delhi",
        latitude: 28.6139,
        longitude: 77.2090,
    },
    City {
        name: "Mumbai",
        latitude: 19.0760,
        longitude: 72.8777,
    },
    City {
        name: "Bangalore",
        latitude: 12.9716,
        longitude: 77.5946,
    },
    City {
        name: "Chennai",
        latitude: 13.0827,
        longitude: 80.2707,
    },
    City {
        name: "Kolkata",
        latitude: 22.5726,
        longitude: 88.3639,
    },
];

/// Service for the static city coordinate table
pub struct LocationService {
    cities: &'static [City],
}

impl Default for LocationService {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationService {
    pub fn new() -> Self {
        Self { cities: CITIES }
    }

    /// All known cities, in selector order
    pub fn list(&self) -> Vec<CityResponseDto> {
        self.cities.iter().map(CityResponseDto::from).collect()
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// Coordinates for a city the caller expects to exist
    pub fn coordinates(&self, name: &str) -> Result<(f64, f64)> {
        self.find(name)
            .map(|c| (c.latitude, c.longitude))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown city '{}'. Known cities: {}",
                    name,
                    self.city_names().join(", ")
                ))
            })
    }

    pub fn get(&self, name: &str) -> Result<CityResponseDto> {
        self.find(name)
            .map(CityResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("City '{}' not found", name)))
    }

    fn city_names(&self) -> Vec<&'static str> {
        self.cities.iter().map(|c| c.name).collect()
    }
}
