//! Ambient Temperature Module
//!
//! Parametric air-temperature model: a latitude-banded annual mean with a
//! seasonal cosine, a fixed-amplitude diurnal cosine, and hard physical
//! bounds. Not a climate model; the coefficients are calibration constants.

use std::f64::consts::PI;

// ===================== CONSTANTS =====================

/// Latitude of the tropics boundary (matches the declination maximum)
const TROPICS_LAT: f64 = 23.45;

/// Temperate/polar boundary for the annual-mean formula
const POLAR_MEAN_LAT: f64 = 50.0;

/// Arctic/antarctic circle, boundary for the seasonal-amplitude formula
const POLAR_AMPLITUDE_LAT: f64 = 66.5;

/// Day-to-day peak-to-mean diurnal swing (°C)
const DIURNAL_AMPLITUDE: f64 = 10.0;

/// Hour of the daily temperature minimum (3 AM; maximum lands at 3 PM)
const DIURNAL_TROUGH_HOUR: f64 = 3.0;

/// Day of the seasonal peak in the southern hemisphere (mid-January)
const SOUTHERN_PEAK_DAY: f64 = 15.0;

/// Day of the seasonal peak in the northern hemisphere (mid-July)
const NORTHERN_PEAK_DAY: f64 = 195.0;

// ===================== MODEL =====================

/// Ambient air temperature in °C for a latitude, day of year and hour.
///
/// Annual mean and seasonal amplitude are piecewise-linear in |latitude|
/// (tropical, temperate, polar bands); the diurnal cycle is a fixed 10 °C
/// cosine bottoming out at 3 AM. Output is clamped to [-50, 55] °C.
pub fn ambient_temperature(latitude_deg: f64, day_of_year: u32, hour: f64) -> f64 {
    let abs_lat = latitude_deg.abs();

    let mean = if abs_lat < TROPICS_LAT {
        27.0 - 0.15 * abs_lat
    } else if abs_lat < POLAR_MEAN_LAT {
        30.0 - 0.4 * abs_lat
    } else {
        20.0 - 0.3 * abs_lat
    };

    let seasonal_amplitude = if abs_lat < TROPICS_LAT {
        2.0 + 0.15 * abs_lat
    } else if abs_lat < POLAR_AMPLITUDE_LAT {
        5.0 + 0.3 * abs_lat
    } else {
        20.0
    };

    let peak_day = if latitude_deg < 0.0 { SOUTHERN_PEAK_DAY } else { NORTHERN_PEAK_DAY };

    let seasonal = mean
        + seasonal_amplitude * (2.0 * PI * (day_of_year as f64 - peak_day) / 365.0).cos();

    let diurnal =
        -DIURNAL_AMPLITUDE * (2.0 * PI * (hour - DIURNAL_TROUGH_HOUR) / 24.0).cos();

    (seasonal + diurnal).clamp(-50.0, 55.0)
}

// ===================== TESTS =====================
