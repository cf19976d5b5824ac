//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a latitude/longitude pair is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// Produced by the place resolver and consumed immediately by the route
/// planner. Values built through [`Coordinates::new`] are always finite and
/// within range.
///
/// # Examples
///
/// ```
/// use matatu_server::domain::Coordinates;
///
/// let cbd = Coordinates::new(-1.2864, 36.8172).unwrap();
/// assert_eq!(cbd.latitude, -1.2864);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinates {
                reason: "latitude and longitude must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates {
                reason: "latitude must be between -90 and 90",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                reason: "longitude must be between -180 and 180",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// The `lat,lng` form used in geocoding query strings.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Coordinates::new(-90.5, 36.8).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinates: latitude must be between -90 and 90"
        );

        let err = Coordinates::new(-1.28, 181.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinates: longitude must be between -180 and 180"
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinates::new(f64::INFINITY, 36.8).is_err());
        assert!(Coordinates::new(-1.28, f64::NAN).is_err());
    }

    #[test]
    fn query_value_and_display() {
        let c = Coordinates::new(-1.2864, 36.8172).unwrap();
        assert_eq!(c.to_query_value(), "-1.2864,36.8172");
        assert_eq!(c.to_string(), "(-1.2864, 36.8172)");
    }
}
