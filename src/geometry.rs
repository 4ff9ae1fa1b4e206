//! Astronomical Geometry Module
//!
//! Closed-form solar position equations: declination, equation of time,
//! solar time, hour angle, elevation and azimuth for an arbitrary location
//! and (day-of-year, clock-hour) pair.
//!
//! Azimuth convention throughout the crate: 0° = North, +90° = East,
//! −90° = West, ±180° = South.

use std::f64::consts::PI;

use serde::Serialize;

// ===================== TYPES =====================

/// Solar position and timing parameters for one (day, hour) query.
///
/// All angles in degrees, solar time in hours. Recomputed fresh for every
/// query; carries no state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolarGeometry {
    /// Solar declination (±23.45°)
    pub declination_deg: f64,
    /// Hour angle, positive before solar noon (morning)
    pub hour_angle_deg: f64,
    /// Local solar time in hours
    pub solar_time_hours: f64,
    /// Sun elevation above the horizon (-90 to 90)
    pub elevation_deg: f64,
    /// Sun azimuth (0 = North, +90 = East, -90 = West, ±180 = South)
    pub azimuth_deg: f64,
}

// ===================== COMPONENT EQUATIONS =====================

/// Time-zone meridian for a longitude: the nearest multiple of 15°.
pub fn time_zone_meridian(longitude_deg: f64) -> f64 {
    (longitude_deg / 15.0).round() * 15.0
}

/// Solar declination in degrees for a day of year (1-365).
///
/// Sinusoidal approximation with the zero crossing anchored at day 81
/// (near the March equinox).
pub fn declination(day_of_year: u32) -> f64 {
    23.45 * (2.0 * PI / 365.0 * (day_of_year as f64 - 81.0)).sin()
}

/// Equation of time in minutes for a day of year.
///
/// Empirical fit; the 364-day period is deliberate (Masters 2013).
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = 2.0 * PI / 364.0 * (day_of_year as f64 - 81.0);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Local solar time in hours from clock time, longitude and meridian.
pub fn solar_time(longitude_deg: f64, meridian_deg: f64, day_of_year: u32, hour: f64) -> f64 {
    // 4 minutes of time per degree of longitude offset from the meridian
    let correction_min = 4.0 * (longitude_deg - meridian_deg) + equation_of_time(day_of_year);
    hour + correction_min / 60.0
}

// ===================== SOLAR POSITION =====================

/// Compute the full solar geometry for a location and time.
///
/// # Arguments
/// * `latitude_deg` - Observer latitude (-90 to 90, North positive)
/// * `longitude_deg` - Observer longitude (-180 to 180, East positive)
/// * `meridian_deg` - Local time-zone meridian (multiple of 15°)
/// * `day_of_year` - Day number (1-365)
/// * `hour` - Local clock time (0-23.99)
pub fn solar_geometry(
    latitude_deg: f64,
    longitude_deg: f64,
    meridian_deg: f64,
    day_of_year: u32,
    hour: f64,
) -> SolarGeometry {
    let delta_deg = declination(day_of_year);
    let delta = delta_deg.to_radians();

    let solar_time_hours = solar_time(longitude_deg, meridian_deg, day_of_year, hour);

    // Positive in the morning, 15° per hour from solar noon
    let hour_angle_deg = 15.0 * (12.0 - solar_time_hours);
    let h = hour_angle_deg.to_radians();

    let lat = latitude_deg.to_radians();
    let sin_beta = lat.cos() * delta.cos() * h.cos() + lat.sin() * delta.sin();
    let beta = sin_beta.clamp(-1.0, 1.0).asin();

    let azimuth_deg = solar_azimuth(latitude_deg, delta, h, beta);

    SolarGeometry {
        declination_deg: delta_deg,
        hour_angle_deg,
        solar_time_hours,
        elevation_deg: beta.to_degrees(),
        azimuth_deg,
    }
}

/// Solar azimuth with the hemisphere-dependent quadrant correction.
///
/// The raw arcsin only covers |azimuth| <= 90; whether the sun actually sits
/// in the polar-side quadrant is decided by comparing cos(H) against
/// tan(declination)/tan(latitude). The comparison outcome flips meaning
/// between hemispheres, so the reflection condition is parameterized by the
/// sign of the latitude.
fn solar_azimuth(latitude_deg: f64, delta: f64, hour_angle: f64, beta: f64) -> f64 {
    let cos_beta = beta.cos();
    if cos_beta == 0.0 {
        // Sun at the zenith: azimuth is undefined, report 0
        return 0.0;
    }

    let sin_phi = (delta.cos() * hour_angle.sin()) / cos_beta;
    let mut phi_deg = sin_phi.clamp(-1.0, 1.0).asin().to_degrees();

    let tan_lat = latitude_deg.to_radians().tan();
    let check = if tan_lat == 0.0 {
        // Equator: the ratio degenerates; pick the infinity matching tan δ
        if delta.tan() >= 0.0 { f64::INFINITY } else { f64::NEG_INFINITY }
    } else {
        delta.tan() / tan_lat
    };

    let near_side = hour_angle.cos() >= check;

    // Northern hemisphere: condition met means the sun is on the far (south)
    // side, |azimuth| > 90. Southern hemisphere: the inverse.
    let reflect = if latitude_deg >= 0.0 { near_side } else { !near_side };
    if reflect {
        phi_deg = if phi_deg > 0.0 { 180.0 - phi_deg } else { -180.0 - phi_deg };
    }
    phi_deg
}

// ===================== TESTS =====================
