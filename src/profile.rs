//! Annual Profile Module
//!
//! Drives the geometry, irradiance, temperature, tracking and PV models
//! across every time step of a year for all nine collector strategies, and
//! reduces the sweep into annual energy totals, loss totals, ratios and
//! capacity factors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::irradiance::{self, DEFAULT_ALBEDO};
use crate::pv::{PvModule, PvPerformance};
use crate::site::SolarSite;
use crate::tracking::{self, TrackerState, TrackingMode, DUAL_PANEL_TILT_DEG};

// ===================== CONSTANTS =====================

/// Hours in the non-leap simulation year (the model has no leap handling)
const HOURS_PER_YEAR: f64 = 8760.0;

// ===================== PARAMETERS =====================

/// Knobs for one annual simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// PV module efficiency (0.0 - 1.0)
    pub efficiency: f64,
    /// Tilt of the custom fixed collector; site default (|latitude|) if None
    pub fixed_tilt_deg: Option<f64>,
    /// Azimuth of the custom fixed collector; equator-facing if None
    pub fixed_azimuth_deg: Option<f64>,
    /// Tilt fed to the single-axis trackers, typically from the optimizer
    pub optimal_tilt_deg: Option<f64>,
    /// Simulation resolution in minutes (60 = hourly, 5 = dashboard-grade)
    pub time_step_minutes: u32,
    /// Ground albedo for the reflected component
    pub albedo: f64,
    /// Records whether `optimal_tilt_deg` came from the electrical-yield
    /// criterion; carried for the caller, does not change the profile math
    pub optimize_electrical: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            efficiency: 0.2,
            fixed_tilt_deg: None,
            fixed_azimuth_deg: None,
            optimal_tilt_deg: None,
            time_step_minutes: 60,
            albedo: DEFAULT_ALBEDO,
            optimize_electrical: false,
        }
    }
}

impl SimulationParams {
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn with_fixed_orientation(mut self, tilt_deg: f64, azimuth_deg: f64) -> Self {
        self.fixed_tilt_deg = Some(tilt_deg);
        self.fixed_azimuth_deg = Some(azimuth_deg);
        self
    }

    pub fn with_optimal_tilt(mut self, tilt_deg: f64) -> Self {
        self.optimal_tilt_deg = Some(tilt_deg);
        self
    }

    pub fn with_time_step_minutes(mut self, minutes: u32) -> Self {
        self.time_step_minutes = minutes;
        self
    }

    pub fn with_albedo(mut self, albedo: f64) -> Self {
        self.albedo = albedo;
        self
    }

    pub fn with_optimize_electrical(mut self, flag: bool) -> Self {
        self.optimize_electrical = flag;
        self
    }
}

// ===================== ROW TYPES =====================

/// Per-mode results for one time step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModeResult {
    /// Incident irradiance on the collector (W/m²)
    pub incident_w_m2: f64,
    /// Electrical output (W/m²)
    pub power_w_m2: f64,
    /// Output if the cell were held at 25 °C (W/m²)
    pub power_25c_w_m2: f64,
    /// Operating cell temperature (°C)
    pub cell_temp_c: f64,
    /// Reflection loss (W/m²)
    pub loss_angular_w_m2: f64,
    /// Signed thermal loss (W/m²)
    pub loss_thermal_w_m2: f64,
}

impl ModeResult {
    fn from_surface(incident_w_m2: f64, perf: &PvPerformance) -> Self {
        Self {
            incident_w_m2,
            power_w_m2: perf.power_w_m2,
            power_25c_w_m2: perf.power_25c_w_m2,
            cell_temp_c: perf.cell_temp_c,
            loss_angular_w_m2: perf.loss_angular_w_m2,
            loss_thermal_w_m2: perf.loss_thermal_w_m2,
        }
    }

    /// Per-m² average of two collectors sharing the installed capacity.
    fn average(a: &Self, b: &Self) -> Self {
        Self {
            incident_w_m2: (a.incident_w_m2 + b.incident_w_m2) / 2.0,
            power_w_m2: (a.power_w_m2 + b.power_w_m2) / 2.0,
            power_25c_w_m2: (a.power_25c_w_m2 + b.power_25c_w_m2) / 2.0,
            cell_temp_c: (a.cell_temp_c + b.cell_temp_c) / 2.0,
            loss_angular_w_m2: (a.loss_angular_w_m2 + b.loss_angular_w_m2) / 2.0,
            loss_thermal_w_m2: (a.loss_thermal_w_m2 + b.loss_thermal_w_m2) / 2.0,
        }
    }
}

/// One time step of the annual sweep: shared sun/atmosphere columns plus a
/// [`ModeResult`] per tracking strategy. The schema is fixed and wide so the
/// consuming layer can treat it as a flat table.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Length of this step in hours
    pub step_hours: f64,
    pub declination_deg: f64,
    pub hour_angle_deg: f64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub dni_w_m2: f64,
    pub ghi_w_m2: f64,
    pub ambient_c: f64,
    pub horizontal: ModeResult,
    pub fixed: ModeResult,
    pub fixed_ew: ModeResult,
    pub fixed_ns: ModeResult,
    pub axis_azimuth: ModeResult,
    pub axis_elevation: ModeResult,
    pub axis_polar: ModeResult,
    pub axis_horizontal: ModeResult,
    pub dual_axis: ModeResult,
}

impl ProfileRow {
    /// Clock time at the start of this step, in hours.
    pub fn start_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Result columns for one tracking mode.
    pub fn mode(&self, mode: TrackingMode) -> &ModeResult {
        match mode {
            TrackingMode::Horizontal => &self.horizontal,
            TrackingMode::Fixed => &self.fixed,
            TrackingMode::FixedEastWest => &self.fixed_ew,
            TrackingMode::FixedNorthSouth => &self.fixed_ns,
            TrackingMode::SingleAxisAzimuth => &self.axis_azimuth,
            TrackingMode::SingleAxisElevation => &self.axis_elevation,
            TrackingMode::SingleAxisPolar => &self.axis_polar,
            TrackingMode::SingleAxisHorizontal => &self.axis_horizontal,
            TrackingMode::DualAxis => &self.dual_axis,
        }
    }
}

/// Full-year simulation result: the daylight time series and the annual
/// totals map (`Annual_*`, `Ratio_*`, `CF_*`, `Daylight_Hours` keys).
#[derive(Debug, Clone, Serialize)]
pub struct AnnualProfile {
    pub rows: Vec<ProfileRow>,
    pub totals: BTreeMap<String, f64>,
}

impl AnnualProfile {
    /// Annual electrical yield for a mode (kWh/m²).
    pub fn yield_kwh_m2(&self, mode: TrackingMode) -> f64 {
        self.totals
            .get(&format!("Annual_Yield_{}_kWh_m2", mode.key()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of daylight step-hours included in the sweep.
    pub fn daylight_hours(&self) -> f64 {
        self.totals.get("Daylight_Hours").copied().unwrap_or(0.0)
    }
}

// ===================== AGGREGATOR =====================

#[derive(Debug, Default, Clone, Copy)]
struct ModeAccumulator {
    incident_wh: f64,
    yield_wh: f64,
    cooled_wh: f64,
    loss_angular_wh: f64,
    loss_thermal_wh: f64,
}

impl SolarSite {
    /// Run the annual simulation for every tracking mode.
    ///
    /// A time step is included when the sun is above the horizon at its
    /// start or its end, so partial sunrise/sunset intervals are kept.
    pub fn annual_profile(&self, params: &SimulationParams) -> AnnualProfile {
        let step_minutes = params.time_step_minutes.clamp(1, 1440);
        let step_hours = step_minutes as f64 / 60.0;

        let fixed_tilt = params.fixed_tilt_deg.unwrap_or(self.default_tilt_deg);
        let fixed_azimuth = params.fixed_azimuth_deg.unwrap_or(self.default_azimuth_deg);
        let azimuth_tracker_tilt =
            params.optimal_tilt_deg.unwrap_or_else(|| self.latitude_deg.abs());
        let polar_axis_tilt = params.optimal_tilt_deg.unwrap_or(fixed_tilt);

        let setup = tracking::TrackerSetup {
            latitude_deg: self.latitude_deg,
            fixed_tilt_deg: fixed_tilt,
            fixed_azimuth_deg: fixed_azimuth,
            azimuth_tracker_tilt_deg: azimuth_tracker_tilt,
            polar_axis_tilt_deg: polar_axis_tilt,
            noon_azimuth_deg: fixed_azimuth,
        };

        let pv = PvModule::default().with_efficiency(params.efficiency);

        let mut rows = Vec::new();
        let mut accum = [ModeAccumulator::default(); 9];
        let mut ghi_wh = 0.0;
        let mut dni_wh = 0.0;
        let mut daylight_hours = 0.0;

        for day in 1..=365u32 {
            for minute_of_day in (0u32..24 * 60).step_by(step_minutes as usize) {
                let hour = minute_of_day as f64 / 60.0;
                let geom = self.geometry(day, hour);
                let geom_next = self.geometry(day, hour + step_hours);

                if geom.elevation_deg <= 0.0 && geom_next.elevation_deg <= 0.0 {
                    continue;
                }
                daylight_hours += step_hours;

                let irr = self.irradiance(day, geom.elevation_deg);
                let ambient = self.ambient_temperature(day, hour);

                let surface = |tilt_deg: f64, azimuth_deg: f64| -> ModeResult {
                    let inc = irradiance::incident(
                        geom.elevation_deg,
                        geom.azimuth_deg,
                        tilt_deg,
                        azimuth_deg,
                        irr.dni_w_m2,
                        irr.diffuse_factor,
                        params.albedo,
                    );
                    let perf = pv.performance(inc.total_w_m2, inc.cos_incidence, ambient);
                    ModeResult::from_surface(inc.total_w_m2, &perf)
                };

                let tracked = |mode: TrackingMode| -> ModeResult {
                    match tracking::orientation(mode, &setup, &geom) {
                        TrackerState::Oriented(o) => surface(o.tilt_deg, o.azimuth_deg),
                        TrackerState::Stowed => {
                            // Panel faces the ground: zero collection, cell
                            // sits at ambient
                            let perf = pv.performance(0.0, 0.0, ambient);
                            ModeResult::from_surface(0.0, &perf)
                        }
                    }
                };

                let dual = |mode: TrackingMode| -> ModeResult {
                    let [a, b] = tracking::dual_orientations(mode);
                    debug_assert_eq!(a.tilt_deg, DUAL_PANEL_TILT_DEG);
                    ModeResult::average(
                        &surface(a.tilt_deg, a.azimuth_deg),
                        &surface(b.tilt_deg, b.azimuth_deg),
                    )
                };

                // Two-axis goes through the exact-normal form so cos θ is 1
                let dual_axis = {
                    let inc = irradiance::incident_normal(
                        geom.elevation_deg,
                        irr.dni_w_m2,
                        irr.diffuse_factor,
                        params.albedo,
                    );
                    let perf = pv.performance(inc.total_w_m2, inc.cos_incidence, ambient);
                    ModeResult::from_surface(inc.total_w_m2, &perf)
                };

                let row = ProfileRow {
                    day,
                    hour: minute_of_day / 60,
                    minute: minute_of_day % 60,
                    step_hours,
                    declination_deg: geom.declination_deg,
                    hour_angle_deg: geom.hour_angle_deg,
                    elevation_deg: geom.elevation_deg,
                    azimuth_deg: geom.azimuth_deg,
                    dni_w_m2: irr.dni_w_m2,
                    ghi_w_m2: irr.global_horizontal_w_m2,
                    ambient_c: ambient,
                    horizontal: surface(0.0, 0.0),
                    fixed: surface(fixed_tilt, fixed_azimuth),
                    fixed_ew: dual(TrackingMode::FixedEastWest),
                    fixed_ns: dual(TrackingMode::FixedNorthSouth),
                    axis_azimuth: tracked(TrackingMode::SingleAxisAzimuth),
                    axis_elevation: tracked(TrackingMode::SingleAxisElevation),
                    axis_polar: tracked(TrackingMode::SingleAxisPolar),
                    axis_horizontal: tracked(TrackingMode::SingleAxisHorizontal),
                    dual_axis,
                };

                ghi_wh += row.ghi_w_m2 * step_hours;
                dni_wh += row.dni_w_m2 * step_hours;
                for (i, mode) in TrackingMode::ALL.iter().enumerate() {
                    let r = row.mode(*mode);
                    accum[i].incident_wh += r.incident_w_m2 * step_hours;
                    accum[i].yield_wh += r.power_w_m2 * step_hours;
                    accum[i].cooled_wh += r.power_25c_w_m2 * step_hours;
                    accum[i].loss_angular_wh += r.loss_angular_w_m2 * step_hours;
                    accum[i].loss_thermal_wh += r.loss_thermal_w_m2 * step_hours;
                }

                rows.push(row);
            }
        }

        let totals =
            build_totals(&accum, ghi_wh, dni_wh, daylight_hours, params.efficiency);

        AnnualProfile { rows, totals }
    }
}

fn build_totals(
    accum: &[ModeAccumulator; 9],
    ghi_wh: f64,
    dni_wh: f64,
    daylight_hours: f64,
    efficiency: f64,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    totals.insert("Annual_GHI_Total_kWh_m2".to_string(), ghi_wh / 1000.0);
    totals.insert("Annual_DNI_Total_kWh_m2".to_string(), dni_wh / 1000.0);

    for (i, mode) in TrackingMode::ALL.iter().enumerate() {
        let a = &accum[i];
        totals.insert(format!("Annual_I_{}_kWh_m2", mode.key()), a.incident_wh / 1000.0);
        totals.insert(format!("Annual_Yield_{}_kWh_m2", mode.key()), a.yield_wh / 1000.0);
        totals.insert(
            format!("Annual_Yield_Cooled_{}_kWh_m2", mode.key()),
            a.cooled_wh / 1000.0,
        );
        totals.insert(
            format!("Annual_Loss_Ang_{}_kWh_m2", mode.loss_key()),
            a.loss_angular_wh / 1000.0,
        );
        totals.insert(
            format!("Annual_Loss_Therm_{}_kWh_m2", mode.loss_key()),
            a.loss_thermal_wh / 1000.0,
        );
    }

    let two_axis_index = TrackingMode::ALL.len() - 1;
    let two_axis_yield = accum[two_axis_index].yield_wh / 1000.0;
    for (i, mode) in TrackingMode::ALL.iter().enumerate() {
        if *mode == TrackingMode::DualAxis {
            continue;
        }
        let ratio = if two_axis_yield > 0.0 {
            (accum[i].yield_wh / 1000.0) / two_axis_yield * 100.0
        } else {
            0.0
        };
        totals.insert(format!("Ratio_Yield_{}_vs_2Axis_Percent", mode.key()), ratio);
    }

    // Rated power in kW/m² equals the efficiency (STC is 1 kW/m²)
    let capacity_factor = |yield_kwh: f64, hours: f64| -> f64 {
        if hours > 0.0 && efficiency > 0.0 {
            yield_kwh / (efficiency * hours) * 100.0
        } else {
            0.0
        }
    };

    for (i, mode) in TrackingMode::ALL.iter().enumerate() {
        let yield_kwh = accum[i].yield_wh / 1000.0;
        totals.insert(
            format!("CF_Overall_{}", mode.key()),
            capacity_factor(yield_kwh, HOURS_PER_YEAR),
        );
        totals.insert(
            format!("CF_Daylight_{}", mode.key()),
            capacity_factor(yield_kwh, daylight_hours),
        );
    }

    totals.insert("Daylight_Hours".to_string(), daylight_hours);

    totals
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    fn perth() -> SolarSite {
        SolarSite::new(-32.05, 115.89)
    }

    #[test]
    fn test_rows_cover_daylight_only() {
        let profile = perth().annual_profile(&SimulationParams::default());

        assert!(
            profile.rows.len() > 3000 && profile.rows.len() < 6000,
            "Unexpected row count {}",
            profile.rows.len()
        );

        let site = perth();
        for row in &profile.rows {
            let next = site.geometry(row.day, row.start_hour() + row.step_hours);
            assert!(
                row.elevation_deg > 0.0 || next.elevation_deg > 0.0,
                "Dark row slipped through: day {} hour {}",
                row.day,
                row.start_hour()
            );
        }
    }

    #[test]
    fn test_night_rows_have_zero_power() {
        // Transitional rows (sun below horizon at the start but up by the
        // end) must carry zero irradiance and power at the sampled instant.
        let profile = perth().annual_profile(&SimulationParams::default());
        let mut saw_transitional = false;
        for row in &profile.rows {
            if row.elevation_deg <= 0.0 {
                saw_transitional = true;
                assert_eq!(row.dni_w_m2, 0.0);
                for mode in TrackingMode::ALL {
                    let r = row.mode(mode);
                    assert_eq!(r.power_w_m2, 0.0, "Power in the dark for {:?}", mode);
                    assert_eq!(r.incident_w_m2, 0.0);
                }
            }
        }
        assert!(saw_transitional, "Expected sunrise/sunset transitional rows");
    }

    #[test]
    fn test_two_axis_dominates() {
        let profile = perth().annual_profile(&SimulationParams::default());

        // A slightly-flatter-than-sun-normal collector can edge out the
        // two-axis diffuse view factor by ~1 W/m² at low sun; the beam term
        // still keeps the reference on top beyond that sliver.
        for row in &profile.rows {
            let reference = row.dual_axis.incident_w_m2;
            for mode in TrackingMode::ALL {
                let r = row.mode(mode);
                assert!(
                    r.incident_w_m2 <= reference + 2.0,
                    "{:?} incident {} beats 2-axis {} on day {} hour {}",
                    mode,
                    r.incident_w_m2,
                    reference,
                    row.day,
                    row.start_hour()
                );
            }
        }

        let two_axis = profile.yield_kwh_m2(TrackingMode::DualAxis);
        for mode in TrackingMode::ALL {
            assert!(
                profile.yield_kwh_m2(mode) <= two_axis + 1e-9,
                "{:?} annual yield beats 2-axis",
                mode
            );
        }
        assert!(two_axis > 0.0);
    }

    #[test]
    fn test_dual_ns_matches_average_of_fixed_runs() {
        // The dual north-south configuration must equal the average of two
        // independent fixed collectors at the same tilt.
        let site = perth();
        let dual = site.annual_profile(&SimulationParams::default());

        let north = site.annual_profile(
            &SimulationParams::default().with_fixed_orientation(DUAL_PANEL_TILT_DEG, 0.0),
        );
        let south = site.annual_profile(
            &SimulationParams::default().with_fixed_orientation(DUAL_PANEL_TILT_DEG, 180.0),
        );

        let expected = (north.yield_kwh_m2(TrackingMode::Fixed)
            + south.yield_kwh_m2(TrackingMode::Fixed))
            / 2.0;
        let actual = dual.yield_kwh_m2(TrackingMode::FixedNorthSouth);

        assert!(
            (actual - expected).abs() < 1e-6,
            "Dual N-S {} != averaged fixed runs {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_equator_azimuth_tracker_equals_horizontal() {
        // At the equator the azimuth tracker's default tilt is |lat| = 0, so
        // azimuth tracking is moot and the two modes coincide exactly.
        let profile = SolarSite::new(0.0, 0.0).annual_profile(&SimulationParams::default());

        for row in &profile.rows {
            assert_eq!(
                row.horizontal.incident_w_m2, row.axis_azimuth.incident_w_m2,
                "Incident differs on day {} hour {}",
                row.day,
                row.start_hour()
            );
        }
        let horizontal = profile.yield_kwh_m2(TrackingMode::Horizontal);
        let tracker = profile.yield_kwh_m2(TrackingMode::SingleAxisAzimuth);
        assert!((horizontal - tracker).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_factors_bounded() {
        let profile = perth().annual_profile(&SimulationParams::default());
        for mode in TrackingMode::ALL {
            let overall = profile.totals[&format!("CF_Overall_{}", mode.key())];
            let daylight = profile.totals[&format!("CF_Daylight_{}", mode.key())];
            assert!(
                (0.0..=100.0).contains(&overall),
                "CF_Overall_{} = {} out of bounds",
                mode.key(),
                overall
            );
            assert!(
                (0.0..=100.0).contains(&daylight),
                "CF_Daylight_{} = {} out of bounds",
                mode.key(),
                daylight
            );
            assert!(daylight >= overall, "Daylight CF must not be below overall CF");
        }
    }

    #[test]
    fn test_sub_hourly_step_refines_without_drifting() {
        let site = perth();
        let hourly = site.annual_profile(&SimulationParams::default());
        let half_hourly =
            site.annual_profile(&SimulationParams::default().with_time_step_minutes(30));

        assert!(
            half_hourly.rows.len() > hourly.rows.len() * 19 / 10,
            "30-minute run should roughly double the rows: {} vs {}",
            half_hourly.rows.len(),
            hourly.rows.len()
        );

        // Finer stepping shifts the integral only slightly
        let y1 = hourly.yield_kwh_m2(TrackingMode::DualAxis);
        let y2 = half_hourly.yield_kwh_m2(TrackingMode::DualAxis);
        assert!(
            (y1 - y2).abs() / y1 < 0.05,
            "Hourly {} vs half-hourly {} drifted too far",
            y1,
            y2
        );
    }

    #[test]
    fn test_totals_schema_complete() {
        let profile = perth().annual_profile(&SimulationParams::default());
        let t = &profile.totals;

        for key in [
            "Annual_GHI_Total_kWh_m2",
            "Annual_DNI_Total_kWh_m2",
            "Annual_I_2Axis_kWh_m2",
            "Annual_Yield_Horizontal_kWh_m2",
            "Annual_Yield_1Axis_Azimuth_kWh_m2",
            "Annual_Yield_1Axis_Polar_kWh_m2",
            "Annual_Yield_1Axis_Horizontal_kWh_m2",
            "Annual_Yield_1Axis_Elevation_kWh_m2",
            "Annual_Yield_Fixed_EW_kWh_m2",
            "Annual_Yield_Fixed_NS_kWh_m2",
            "Annual_Yield_Cooled_2Axis_kWh_m2",
            "Annual_Loss_Ang_Horiz_kWh_m2",
            "Annual_Loss_Ang_1Axis_Az_kWh_m2",
            "Annual_Loss_Therm_1Axis_El_kWh_m2",
            "Ratio_Yield_Horizontal_vs_2Axis_Percent",
            "Ratio_Yield_1Axis_Horizontal_vs_2Axis_Percent",
            "CF_Overall_2Axis",
            "CF_Daylight_Fixed",
            "Daylight_Hours",
        ] {
            assert!(t.contains_key(key), "Missing totals key {}", key);
        }

        assert!(t["Daylight_Hours"] > 3000.0 && t["Daylight_Hours"] < 6000.0);
        assert!(t["Annual_Yield_2Axis_kWh_m2"] > 0.0);
    }

    #[test]
    fn test_thermal_gain_appears_on_cold_mornings() {
        let profile = perth().annual_profile(&SimulationParams::default());
        let gain_rows = profile
            .rows
            .iter()
            .filter(|row| row.fixed.loss_thermal_w_m2 < 0.0)
            .count();
        assert!(gain_rows > 0, "Expected some sub-25 °C cell intervals with thermal gain");

        // And the signed convention flows into the annual total: it must be
        // smaller than it would be if gains were clamped away.
        let clamped: f64 = profile
            .rows
            .iter()
            .map(|row| row.fixed.loss_thermal_w_m2.max(0.0) * row.step_hours)
            .sum();
        let signed = profile.totals["Annual_Loss_Therm_Fixed_kWh_m2"] * 1000.0;
        assert!(signed < clamped, "Signed thermal total should sit below the clamped sum");
    }

    #[test]
    fn test_ratios_reference_two_axis() {
        let profile = perth().annual_profile(&SimulationParams::default());
        for mode in TrackingMode::ALL {
            if mode == TrackingMode::DualAxis {
                continue;
            }
            let ratio =
                profile.totals[&format!("Ratio_Yield_{}_vs_2Axis_Percent", mode.key())];
            let expected = profile.yield_kwh_m2(mode)
                / profile.yield_kwh_m2(TrackingMode::DualAxis)
                * 100.0;
            assert!(
                (ratio - expected).abs() < 1e-9,
                "Ratio for {:?}: {} != {}",
                mode,
                ratio,
                expected
            );
            assert!((0.0..=100.0 + 1e-9).contains(&ratio));
        }
    }
}
