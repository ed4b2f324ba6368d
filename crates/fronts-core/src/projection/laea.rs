//! Lambert Azimuthal Equal Area projection on an ellipsoid.
//!
//! EPSG:3035 (ETRS89-extended / LAEA Europe) uses the GRS80 ellipsoid with
//! its natural origin at 52°N 10°E and a false origin of
//! (4 321 000 m, 3 210 000 m). Formulas follow Snyder, "Map Projections: A
//! Working Manual", §24 (oblique aspect).

use std::sync::OnceLock;

/// GRS80 semi-major axis (metres).
const GRS80_A: f64 = 6_378_137.0;

/// GRS80 inverse flattening.
const GRS80_INV_F: f64 = 298.257_222_101;

/// Lambert Azimuthal Equal Area projection parameters.
#[derive(Debug, Clone)]
pub struct LambertAzimuthalEqualArea {
    /// Longitude of natural origin in radians
    pub lon0: f64,
    /// Latitude of natural origin in radians
    pub lat0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    /// Semi-major axis (metres)
    pub a: f64,
    e: f64,
    e2: f64,
    /// `q` evaluated at the pole
    qp: f64,
    /// Radius of the authalic sphere
    rq: f64,
    /// Scale factor correcting the oblique aspect
    d: f64,
    sin_beta1: f64,
    cos_beta1: f64,
}

impl LambertAzimuthalEqualArea {
    /// Create a projection from an origin (degrees), false origin (metres)
    /// and ellipsoid.
    pub fn new(
        lat0_deg: f64,
        lon0_deg: f64,
        false_easting: f64,
        false_northing: f64,
        a: f64,
        inv_f: f64,
    ) -> Self {
        let f = 1.0 / inv_f;
        let e2 = 2.0 * f - f * f;
        let e = e2.sqrt();

        let lat0 = lat0_deg.to_radians();
        let lon0 = lon0_deg.to_radians();

        let qp = authalic_q(std::f64::consts::FRAC_PI_2, e, e2);
        let q1 = authalic_q(lat0, e, e2);
        let beta1 = (q1 / qp).clamp(-1.0, 1.0).asin();
        let rq = a * (qp / 2.0).sqrt();

        let sin_lat0 = lat0.sin();
        let m1 = lat0.cos() / (1.0 - e2 * sin_lat0 * sin_lat0).sqrt();
        let d = a * m1 / (rq * beta1.cos());

        Self {
            lon0,
            lat0,
            false_easting,
            false_northing,
            a,
            e,
            e2,
            qp,
            rq,
            d,
            sin_beta1: beta1.sin(),
            cos_beta1: beta1.cos(),
        }
    }

    /// EPSG:3035 parameters. The instance is built once and shared.
    pub fn etrs89() -> &'static Self {
        static ETRS89: OnceLock<LambertAzimuthalEqualArea> = OnceLock::new();
        ETRS89.get_or_init(|| {
            Self::new(52.0, 10.0, 4_321_000.0, 3_210_000.0, GRS80_A, GRS80_INV_F)
        })
    }

    /// Project geographic (lon, lat) in degrees to (easting, northing) in metres.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let dlon = lon_deg.to_radians() - self.lon0;

        let q = authalic_q(lat, self.e, self.e2);
        let beta = (q / self.qp).clamp(-1.0, 1.0).asin();
        let (sin_beta, cos_beta) = beta.sin_cos();

        let denom = 1.0 + self.sin_beta1 * sin_beta + self.cos_beta1 * cos_beta * dlon.cos();
        // Antipode of the origin: the whole boundary circle maps here.
        let b = self.rq * (2.0 / denom.max(f64::MIN_POSITIVE)).sqrt();

        let x = b * self.d * cos_beta * dlon.sin();
        let y = (b / self.d)
            * (self.cos_beta1 * sin_beta - self.sin_beta1 * cos_beta * dlon.cos());

        (x + self.false_easting, y + self.false_northing)
    }

    /// Inverse projection from (easting, northing) in metres to (lon, lat) in degrees.
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let x = easting - self.false_easting;
        let y = northing - self.false_northing;

        let rho = ((x / self.d).powi(2) + (self.d * y).powi(2)).sqrt();
        if rho < 1e-9 {
            return (self.lon0.to_degrees(), self.lat0.to_degrees());
        }

        let ce = 2.0 * (rho / (2.0 * self.rq)).clamp(-1.0, 1.0).asin();
        let (sin_ce, cos_ce) = ce.sin_cos();

        let beta = (cos_ce * self.sin_beta1 + self.d * y * sin_ce * self.cos_beta1 / rho)
            .clamp(-1.0, 1.0)
            .asin();
        let lon = self.lon0
            + (x * sin_ce).atan2(
                self.d * rho * self.cos_beta1 * cos_ce
                    - self.d * self.d * y * self.sin_beta1 * sin_ce,
            );

        (normalize_lon(lon.to_degrees()), self.geodetic_from_authalic(beta).to_degrees())
    }

    /// Series expansion from authalic to geodetic latitude (Snyder 3-18).
    fn geodetic_from_authalic(&self, beta: f64) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        beta + (e2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0) * (2.0 * beta).sin()
            + (23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0) * (4.0 * beta).sin()
            + (761.0 * e6 / 45360.0) * (6.0 * beta).sin()
    }
}

/// Snyder's `q` function (3-12) for latitude `lat` in radians.
fn authalic_q(lat: f64, e: f64, e2: f64) -> f64 {
    let sin_lat = lat.sin();
    let es = e * sin_lat;
    (1.0 - e2)
        * (sin_lat / (1.0 - e2 * sin_lat * sin_lat)
            - (1.0 / (2.0 * e)) * ((1.0 - es) / (1.0 + es)).ln())
}

fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lon() {
        assert!((normalize_lon(190.0) - -170.0).abs() < 1e-12);
        assert!((normalize_lon(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_lon(180.0), 180.0);
        assert!((normalize_lon(12.5) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_q_at_pole_exceeds_q_at_equator() {
        let p = LambertAzimuthalEqualArea::etrs89();
        assert!(p.qp > 1.99 && p.qp < 2.0);
        assert_eq!(authalic_q(0.0, p.e, p.e2), 0.0);
    }
}
