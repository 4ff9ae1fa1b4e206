//! Tilt Optimization Module
//!
//! Brute-force integer-degree tilt searches: the full daylight year is
//! precomputed once as a sample table, then each candidate tilt replays the
//! table. Candidates are independent, so the sweep parallelizes trivially
//! (enable the `parallel` feature).
//!
//! The search criterion is either cumulative incident irradiance (the
//! geometric optimum) or cumulative electrical output (which also prices in
//! thermal losses); the reported yield is always the electrical one at the
//! winning tilt so results stay comparable across criteria.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::Serialize;

use crate::irradiance::{self, DEFAULT_ALBEDO};
use crate::pv::PvModule;
use crate::site::SolarSite;
use crate::tracking::{self, TrackerState};

// ===================== TYPES =====================

/// Result of a tilt search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TiltOptimum {
    /// Winning tilt (integer degrees; axis tilt for the polar variant)
    pub tilt_deg: i32,
    /// Annual electrical yield at the winning tilt (kWh/m²)
    pub yield_kwh_m2: f64,
}

/// One precomputed daylight sample: everything the per-tilt replay needs.
#[derive(Debug, Clone, Copy)]
struct DaylightSample {
    hour_angle_deg: f64,
    elevation_deg: f64,
    azimuth_deg: f64,
    dni_w_m2: f64,
    diffuse_factor: f64,
    ambient_c: f64,
}

// ===================== SEARCH HARNESS =====================

fn daylight_samples(site: &SolarSite) -> Vec<DaylightSample> {
    let mut samples = Vec::new();
    for day in 1..=365u32 {
        for hour in 0..24u32 {
            let geom = site.geometry(day, hour as f64);
            if geom.elevation_deg <= 0.0 {
                continue;
            }
            let irr = site.irradiance(day, geom.elevation_deg);
            samples.push(DaylightSample {
                hour_angle_deg: geom.hour_angle_deg,
                elevation_deg: geom.elevation_deg,
                azimuth_deg: geom.azimuth_deg,
                dni_w_m2: irr.dni_w_m2,
                diffuse_factor: irr.diffuse_factor,
                ambient_c: site.ambient_temperature(day, hour as f64),
            });
        }
    }
    samples
}

/// Candidate range: |latitude| ± 5 whole degrees, floored at horizontal.
fn candidate_tilts(latitude_deg: f64) -> Vec<i32> {
    let lat = latitude_deg.abs() as i32;
    ((lat - 5).max(0)..=lat + 5).collect()
}

/// Evaluate every candidate and keep the first strictly-best one.
fn best_candidate<F>(candidates: &[i32], score: F) -> (i32, f64)
where
    F: Fn(i32) -> f64 + Sync,
{
    #[cfg(feature = "parallel")]
    let scored: Vec<(i32, f64)> =
        candidates.par_iter().map(|&tilt| (tilt, score(tilt))).collect();
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(i32, f64)> =
        candidates.iter().map(|&tilt| (tilt, score(tilt))).collect();

    let mut best_tilt = 0;
    let mut best_score = 0.0;
    for (tilt, value) in scored {
        if value > best_score {
            best_score = value;
            best_tilt = tilt;
        }
    }
    (best_tilt, best_score)
}

// ===================== VARIANTS =====================

impl SolarSite {
    /// Optimal tilt for a fixed equator-facing collector.
    ///
    /// `optimize_electrical` switches the criterion from incident irradiance
    /// to electrical yield; the returned yield is electrical either way.
    pub fn optimal_tilt(&self, efficiency: f64, optimize_electrical: bool) -> TiltOptimum {
        let samples = daylight_samples(self);
        let pv = PvModule::default().with_efficiency(efficiency);
        let panel_azimuth = self.default_azimuth_deg;

        let sample_power = |s: &DaylightSample, tilt: f64, electrical: bool| -> f64 {
            let inc = irradiance::incident(
                s.elevation_deg,
                s.azimuth_deg,
                tilt,
                panel_azimuth,
                s.dni_w_m2,
                s.diffuse_factor,
                DEFAULT_ALBEDO,
            );
            if electrical {
                pv.performance(inc.total_w_m2, inc.cos_incidence, s.ambient_c).power_w_m2
            } else {
                inc.total_w_m2
            }
        };

        let (tilt_deg, _) = best_candidate(&candidate_tilts(self.latitude_deg), |tilt| {
            samples
                .iter()
                .map(|s| sample_power(s, tilt as f64, optimize_electrical) / 1000.0)
                .sum()
        });

        let yield_kwh_m2 =
            samples.iter().map(|s| sample_power(s, tilt_deg as f64, true) / 1000.0).sum();

        TiltOptimum { tilt_deg, yield_kwh_m2 }
    }

    /// Optimal fixed tilt for the single-axis azimuth tracker (the azimuth
    /// column follows the sun, so only the tilt is searched).
    pub fn optimal_azimuth_tracker_tilt(
        &self,
        efficiency: f64,
        optimize_electrical: bool,
    ) -> TiltOptimum {
        let samples = daylight_samples(self);
        let pv = PvModule::default().with_efficiency(efficiency);

        let sample_power = |s: &DaylightSample, tilt: f64, electrical: bool| -> f64 {
            let inc = irradiance::incident(
                s.elevation_deg,
                s.azimuth_deg,
                tilt,
                s.azimuth_deg,
                s.dni_w_m2,
                s.diffuse_factor,
                DEFAULT_ALBEDO,
            );
            if electrical {
                pv.performance(inc.total_w_m2, inc.cos_incidence, s.ambient_c).power_w_m2
            } else {
                inc.total_w_m2
            }
        };

        let (tilt_deg, _) = best_candidate(&candidate_tilts(self.latitude_deg), |tilt| {
            samples
                .iter()
                .map(|s| sample_power(s, tilt as f64, optimize_electrical) / 1000.0)
                .sum()
        });

        let yield_kwh_m2 =
            samples.iter().map(|s| sample_power(s, tilt_deg as f64, true) / 1000.0).sum();

        TiltOptimum { tilt_deg, yield_kwh_m2 }
    }

    /// Optimal axis tilt for the polar tracker: each candidate replays the
    /// full rotation mechanics; stowed samples contribute nothing.
    pub fn optimal_polar_axis_tilt(
        &self,
        efficiency: f64,
        optimize_electrical: bool,
    ) -> TiltOptimum {
        let samples = daylight_samples(self);
        let pv = PvModule::default().with_efficiency(efficiency);
        let noon_azimuth = self.default_azimuth_deg;

        let sample_power = |s: &DaylightSample, axis_tilt: f64, electrical: bool| -> f64 {
            let orientation = tracking::rotated_axis_orientation(
                axis_tilt,
                noon_azimuth + 180.0,
                noon_azimuth,
                s.hour_angle_deg,
            );
            let o = match orientation {
                TrackerState::Oriented(o) => o,
                TrackerState::Stowed => return 0.0,
            };
            let inc = irradiance::incident(
                s.elevation_deg,
                s.azimuth_deg,
                o.tilt_deg,
                o.azimuth_deg,
                s.dni_w_m2,
                s.diffuse_factor,
                DEFAULT_ALBEDO,
            );
            if electrical {
                pv.performance(inc.total_w_m2, inc.cos_incidence, s.ambient_c).power_w_m2
            } else {
                inc.total_w_m2
            }
        };

        let (tilt_deg, _) = best_candidate(&candidate_tilts(self.latitude_deg), |tilt| {
            samples
                .iter()
                .map(|s| sample_power(s, tilt as f64, optimize_electrical) / 1000.0)
                .sum()
        });

        let yield_kwh_m2 =
            samples.iter().map(|s| sample_power(s, tilt_deg as f64, true) / 1000.0).sum();

        TiltOptimum { tilt_deg, yield_kwh_m2 }
    }
}

// ===================== TESTS =====================
