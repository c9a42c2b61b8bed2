//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Relief networks are
//! small (tens to hundreds of nodes) so there is no memory pressure pushing
//! towards `f32`, and double precision keeps priority scores reproducible.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by every distance computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both components are finite and within the WGS-84 ranges
    /// (lat ∈ [-90, 90], lon ∈ [-180, 180]).
    pub fn validate(self) -> CoreResult<Self> {
        let ok = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if ok {
            Ok(self)
        } else {
            Err(CoreError::NumericDomain { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Fails with [`CoreError::NumericDomain`] if either point is invalid.
    pub fn distance_km(self, other: GeoPoint) -> CoreResult<f64> {
        self.validate()?;
        other.validate()?;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Ok(EARTH_RADIUS_KM * c)
    }

    /// Shift by a number of degrees.  No wrap-around is applied; call
    /// [`validate`](Self::validate) if the result may leave the valid range.
    #[inline]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> GeoPoint {
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Haversine distance between `(lat1, lon1)` and `(lat2, lon2)` in km.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> CoreResult<f64> {
    GeoPoint::new(lat1, lon1).distance_km(GeoPoint::new(lat2, lon2))
}
