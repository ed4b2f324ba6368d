//! Coordinate reference system tags used by rasters and mask sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FrontsError, Result};
use crate::projection::laea::LambertAzimuthalEqualArea;

/// Coordinate reference systems understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Crs {
    /// WGS84 geographic (lon/lat in degrees).
    Wgs84,
    /// ETRS89 Lambert Azimuthal Equal Area (EPSG:3035, metres).
    EtrsLaea,
}

impl Crs {
    /// Parse a CRS identifier.
    ///
    /// Accepts "WGS84", "EPSG:4326", "CRS:84" and "EPSG:3035", case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "WGS84" | "WGS 84" | "EPSG:4326" | "CRS:84" => Ok(Crs::Wgs84),
            "EPSG:3035" | "ETRS89-LAEA" => Ok(Crs::EtrsLaea),
            _ => Err(FrontsError::UnsupportedCrs(s.to_string())),
        }
    }

    pub fn epsg(&self) -> u32 {
        match self {
            Crs::Wgs84 => 4326,
            Crs::EtrsLaea => 3035,
        }
    }

    /// Check if this is a geographic (lon/lat) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self, Crs::Wgs84)
    }

    /// Transform a single `(x, y)` coordinate from `self` into `target`.
    ///
    /// Geographic coordinates are ordered (lon, lat).
    pub fn transform(&self, target: Crs, x: f64, y: f64) -> (f64, f64) {
        match (self, target) {
            (Crs::Wgs84, Crs::EtrsLaea) => LambertAzimuthalEqualArea::etrs89().forward(x, y),
            (Crs::EtrsLaea, Crs::Wgs84) => LambertAzimuthalEqualArea::etrs89().inverse(x, y),
            _ => (x, y),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

impl FromStr for Crs {
    type Err = FrontsError;

    fn from_str(s: &str) -> Result<Self> {
        Crs::parse(s)
    }
}

impl TryFrom<String> for Crs {
    type Error = FrontsError;

    fn try_from(s: String) -> Result<Self> {
        Crs::parse(&s)
    }
}

impl From<Crs> for String {
    fn from(crs: Crs) -> Self {
        crs.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Crs::parse("WGS84").unwrap(), Crs::Wgs84);
        assert_eq!(Crs::parse("epsg:4326").unwrap(), Crs::Wgs84);
        assert_eq!(Crs::parse("CRS:84").unwrap(), Crs::Wgs84);
        assert_eq!(Crs::parse("EPSG:3035").unwrap(), Crs::EtrsLaea);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Crs::parse("EPSG:3857"),
            Err(FrontsError::UnsupportedCrs(_))
        ));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for crs in [Crs::Wgs84, Crs::EtrsLaea] {
            assert_eq!(Crs::parse(&crs.to_string()).unwrap(), crs);
        }
    }

    #[test]
    fn test_identity_transform() {
        assert_eq!(Crs::Wgs84.transform(Crs::Wgs84, 5.0, 45.0), (5.0, 45.0));
    }
}
