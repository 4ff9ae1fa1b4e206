//! Site Module
//!
//! The model handle: a location plus its derived defaults. All queries are
//! pure functions of the inputs; the site itself carries no mutable state.

use serde::Serialize;

use crate::geometry::{self, SolarGeometry};
use crate::irradiance::{self, IncidentIrradiance, Irradiance};
use crate::pv::{PvModule, PvPerformance};
use crate::temperature;

// ===================== SOLAR SITE =====================

/// A geographic location prepared for simulation.
///
/// Construction derives the local time-zone meridian (nearest 15° multiple
/// of the longitude) and the default collector orientation: tilt equal to
/// the absolute latitude, azimuth facing the equator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolarSite {
    /// Latitude in degrees, North positive (-90 to 90)
    pub latitude_deg: f64,
    /// Longitude in degrees, East positive (-180 to 180)
    pub longitude_deg: f64,
    /// Local time-zone meridian (multiple of 15°)
    pub time_zone_meridian_deg: f64,
    /// Default collector tilt (|latitude|)
    pub default_tilt_deg: f64,
    /// Default collector azimuth (equator-facing; 0 = North convention)
    pub default_azimuth_deg: f64,
}

impl SolarSite {
    /// Create a site for a latitude/longitude pair.
    ///
    /// Inputs are trusted; range validation belongs to the caller's boundary
    /// (the CLI parsers in this crate, or whatever layer sits on top).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        let default_azimuth_deg = if latitude_deg < 0.0 { 0.0 } else { 180.0 };
        Self {
            latitude_deg,
            longitude_deg,
            time_zone_meridian_deg: geometry::time_zone_meridian(longitude_deg),
            default_tilt_deg: latitude_deg.abs(),
            default_azimuth_deg,
        }
    }

    /// Solar geometry for a day of year and local clock hour.
    pub fn geometry(&self, day_of_year: u32, hour: f64) -> SolarGeometry {
        geometry::solar_geometry(
            self.latitude_deg,
            self.longitude_deg,
            self.time_zone_meridian_deg,
            day_of_year,
            hour,
        )
    }

    /// Clear-sky irradiance components for a day and sun elevation.
    pub fn irradiance(&self, day_of_year: u32, elevation_deg: f64) -> Irradiance {
        irradiance::clear_sky(day_of_year, elevation_deg)
    }

    /// Ambient air temperature for a day and hour at this latitude.
    pub fn ambient_temperature(&self, day_of_year: u32, hour: f64) -> f64 {
        temperature::ambient_temperature(self.latitude_deg, day_of_year, hour)
    }

    /// Irradiance striking a tilted collector at this site.
    ///
    /// Thin delegate kept so downstream layers can treat the site as the
    /// whole query surface.
    #[allow(clippy::too_many_arguments)]
    pub fn incident(
        &self,
        elevation_deg: f64,
        sun_azimuth_deg: f64,
        tilt_deg: f64,
        panel_azimuth_deg: f64,
        dni_w_m2: f64,
        diffuse_factor: f64,
        albedo: f64,
    ) -> IncidentIrradiance {
        irradiance::incident(
            elevation_deg,
            sun_azimuth_deg,
            tilt_deg,
            panel_azimuth_deg,
            dni_w_m2,
            diffuse_factor,
            albedo,
        )
    }

    /// Electrical performance of a module with the given efficiency under
    /// the given incident irradiance and ambient temperature.
    pub fn pv_performance(
        &self,
        incident_w_m2: f64,
        cos_incidence: f64,
        ambient_c: f64,
        efficiency: f64,
    ) -> PvPerformance {
        PvModule::default().with_efficiency(efficiency).performance(
            incident_w_m2,
            cos_incidence,
            ambient_c,
        )
    }
}

// ===================== TESTS =====================
