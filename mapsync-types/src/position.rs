use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedLatLon")]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    /// Creates a position, rejecting coordinates outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidPosition { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }
}

#[derive(Deserialize)]
struct UncheckedLatLon {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<UncheckedLatLon> for LatLon {
    type Error = Error;

    fn try_from(raw: UncheckedLatLon) -> Result<Self> {
        LatLon::new(raw.latitude, raw.longitude)
    }
}
