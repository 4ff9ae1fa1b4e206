//! Tracking Geometry Module
//!
//! Collector-orientation solvers for the nine supported mounting/tracking
//! strategies. Each solver is a pure function of the current sun position
//! and the static mechanical parameters; no tracker state persists between
//! time steps.
//!
//! The polar and horizontal-axis trackers rotate the collector normal about
//! an arbitrary tilted axis (Rodrigues rotation restricted to the
//! perpendicular case). When the rotated normal dips below the horizon the
//! solver reports [`TrackerState::Stowed`] — the tracker has run past its
//! useful range and produces nothing. No ±90° mechanical stop is modeled;
//! real hardware would clamp earlier, but the unclamped behavior is kept
//! deliberately (see DESIGN.md).

use serde::Serialize;

use crate::geometry::SolarGeometry;

// ===================== CONSTANTS =====================

/// Tilt used by both dual-panel fixed configurations
pub const DUAL_PANEL_TILT_DEG: f64 = 45.0;

/// Latitude band treated as "at the equator" by the elevation tracker
const EQUATOR_BAND_DEG: f64 = 0.1;

// ===================== TYPES =====================

/// Collector mounting / tracking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackingMode {
    /// Flat panel, tilt 0
    Horizontal,
    /// Static panel at a user-chosen tilt and azimuth
    Fixed,
    /// Two static panels at 45°, facing east and west, averaged per m²
    FixedEastWest,
    /// Two static panels at 45°, facing north and south, averaged per m²
    FixedNorthSouth,
    /// Fixed tilt, azimuth follows the sun
    SingleAxisAzimuth,
    /// Tilt follows 90°−elevation, azimuth flips seasonally toward the sun
    SingleAxisElevation,
    /// Rotation about a pole-aligned tilted axis, driven by the hour angle
    SingleAxisPolar,
    /// Same rotation mechanics with the axis forced horizontal
    SingleAxisHorizontal,
    /// Perfect two-axis tracking, incidence cosine 1 by construction
    DualAxis,
}

impl TrackingMode {
    /// All modes in the canonical reporting order.
    pub const ALL: [TrackingMode; 9] = [
        TrackingMode::Horizontal,
        TrackingMode::Fixed,
        TrackingMode::FixedEastWest,
        TrackingMode::FixedNorthSouth,
        TrackingMode::SingleAxisAzimuth,
        TrackingMode::SingleAxisElevation,
        TrackingMode::SingleAxisPolar,
        TrackingMode::SingleAxisHorizontal,
        TrackingMode::DualAxis,
    ];

    /// Key fragment used in totals-map entries (`Annual_Yield_{key}_kWh_m2`).
    pub fn key(&self) -> &'static str {
        match self {
            TrackingMode::Horizontal => "Horizontal",
            TrackingMode::Fixed => "Fixed",
            TrackingMode::FixedEastWest => "Fixed_EW",
            TrackingMode::FixedNorthSouth => "Fixed_NS",
            TrackingMode::SingleAxisAzimuth => "1Axis_Azimuth",
            TrackingMode::SingleAxisElevation => "1Axis_Elevation",
            TrackingMode::SingleAxisPolar => "1Axis_Polar",
            TrackingMode::SingleAxisHorizontal => "1Axis_Horizontal",
            TrackingMode::DualAxis => "2Axis",
        }
    }

    /// Abbreviated key fragment used by the loss totals
    /// (`Annual_Loss_Ang_{key}_kWh_m2`).
    pub fn loss_key(&self) -> &'static str {
        match self {
            TrackingMode::Horizontal => "Horiz",
            TrackingMode::SingleAxisAzimuth => "1Axis_Az",
            TrackingMode::SingleAxisElevation => "1Axis_El",
            other => other.key(),
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrackingMode::Horizontal => "Horizontal",
            TrackingMode::Fixed => "Fixed (custom)",
            TrackingMode::FixedEastWest => "Fixed E-W dual",
            TrackingMode::FixedNorthSouth => "Fixed N-S dual",
            TrackingMode::SingleAxisAzimuth => "1-Axis Azimuth",
            TrackingMode::SingleAxisElevation => "1-Axis Elevation",
            TrackingMode::SingleAxisPolar => "1-Axis Polar",
            TrackingMode::SingleAxisHorizontal => "1-Axis Horizontal",
            TrackingMode::DualAxis => "2-Axis",
        }
    }

    /// True for the two-panel averaged configurations.
    pub fn is_dual(&self) -> bool {
        matches!(self, TrackingMode::FixedEastWest | TrackingMode::FixedNorthSouth)
    }
}

/// Instantaneous collector orientation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Orientation {
    /// Tilt from horizontal in degrees (0 = flat, 90 = vertical)
    pub tilt_deg: f64,
    /// Azimuth the collector normal faces (0 = North convention)
    pub azimuth_deg: f64,
}

/// Result of a tracking solve for one time step.
#[derive(Debug, Clone, Copy)]
pub enum TrackerState {
    /// Collector faces the sky at this orientation
    Oriented(Orientation),
    /// Rotated normal points below the horizon: the tracker is past its
    /// useful range and contributes zero output. A physical state, not an
    /// error.
    Stowed,
}

/// Static mechanical parameters shared by all solvers.
#[derive(Debug, Clone, Copy)]
pub struct TrackerSetup {
    /// Site latitude in degrees
    pub latitude_deg: f64,
    /// Tilt of the custom fixed panel
    pub fixed_tilt_deg: f64,
    /// Azimuth of the custom fixed panel
    pub fixed_azimuth_deg: f64,
    /// Fixed tilt used by the azimuth tracker
    pub azimuth_tracker_tilt_deg: f64,
    /// Tilt of the polar tracker's rotation axis
    pub polar_axis_tilt_deg: f64,
    /// Azimuth the polar/horizontal-axis panel faces at solar noon
    pub noon_azimuth_deg: f64,
}

// ===================== SOLVERS =====================

/// Orientation of a single-surface mode for the given sun position.
///
/// The dual-panel fixed modes are not single surfaces; use
/// [`dual_orientations`] and average the two collectors. The dual-axis mode
/// is returned as (90−elevation, sun azimuth); callers wanting the exact
/// normal-incidence irradiance should use
/// [`crate::irradiance::incident_normal`] instead of re-deriving cos θ.
pub fn orientation(mode: TrackingMode, setup: &TrackerSetup, sun: &SolarGeometry) -> TrackerState {
    match mode {
        TrackingMode::Horizontal => oriented(0.0, 0.0),
        TrackingMode::Fixed => oriented(setup.fixed_tilt_deg, setup.fixed_azimuth_deg),
        TrackingMode::FixedEastWest | TrackingMode::FixedNorthSouth => {
            // Callers must go through dual_orientations; report the first
            // panel so the API stays total.
            let [first, _] = dual_orientations(mode);
            TrackerState::Oriented(first)
        }
        TrackingMode::SingleAxisAzimuth => {
            oriented(setup.azimuth_tracker_tilt_deg, sun.azimuth_deg)
        }
        TrackingMode::SingleAxisElevation => oriented(
            90.0 - sun.elevation_deg,
            elevation_tracker_azimuth(setup.latitude_deg, sun.declination_deg),
        ),
        TrackingMode::SingleAxisPolar => rotated_axis_orientation(
            setup.polar_axis_tilt_deg,
            setup.noon_azimuth_deg + 180.0,
            setup.noon_azimuth_deg,
            sun.hour_angle_deg,
        ),
        TrackingMode::SingleAxisHorizontal => rotated_axis_orientation(
            0.0,
            setup.noon_azimuth_deg + 180.0,
            setup.noon_azimuth_deg,
            sun.hour_angle_deg,
        ),
        TrackingMode::DualAxis => oriented(90.0 - sun.elevation_deg, sun.azimuth_deg),
    }
}

/// The two constituent panels of a dual fixed configuration.
pub fn dual_orientations(mode: TrackingMode) -> [Orientation; 2] {
    let azimuths = match mode {
        TrackingMode::FixedEastWest => [90.0, 270.0],
        // North/South pair; also the fallthrough for non-dual misuse
        _ => [0.0, 180.0],
    };
    azimuths.map(|az| Orientation { tilt_deg: DUAL_PANEL_TILT_DEG, azimuth_deg: az })
}

fn oriented(tilt_deg: f64, azimuth_deg: f64) -> TrackerState {
    TrackerState::Oriented(Orientation { tilt_deg, azimuth_deg })
}

/// Seasonal facing rule for the elevation tracker.
///
/// Outside the tropics the panel always faces the equator. Inside the
/// tropics the sun can cross to the poleward sky, so the facing follows the
/// declination; at the equator itself the orientation is pinned north to
/// avoid equinox flapping (the sun is overhead there anyway).
fn elevation_tracker_azimuth(latitude_deg: f64, declination_deg: f64) -> f64 {
    let abs_lat = latitude_deg.abs();
    if abs_lat >= 23.45 {
        if latitude_deg < 0.0 { 0.0 } else { 180.0 }
    } else if abs_lat < EQUATOR_BAND_DEG {
        0.0
    } else if latitude_deg < 0.0 {
        if declination_deg > 0.0 && declination_deg.abs() > abs_lat { 0.0 } else { 180.0 }
    } else if declination_deg < 0.0 && declination_deg.abs() > abs_lat {
        180.0
    } else {
        0.0
    }
}

/// Rotate the collector's noon normal about the tracker axis by the hour
/// angle and read the resulting tilt and azimuth.
///
/// Coordinates are (East, North, Up). The axis unit vector comes from its
/// tilt and azimuth; the noon normal is perpendicular to the axis, at the
/// complementary tilt, facing `noon_azimuth_deg`. The rotation sign follows
/// the axis's northward component so the panel sweeps with the sun whichever
/// way the axis was specified to point.
pub fn rotated_axis_orientation(
    axis_tilt_deg: f64,
    axis_azimuth_deg: f64,
    noon_azimuth_deg: f64,
    hour_angle_deg: f64,
) -> TrackerState {
    let axis_tilt = axis_tilt_deg.to_radians();
    let axis_az = axis_azimuth_deg.to_radians();

    let k = [
        axis_tilt.cos() * axis_az.sin(),
        axis_tilt.cos() * axis_az.cos(),
        axis_tilt.sin(),
    ];

    // Noon normal: complementary tilt, so n0 ⊥ k for opposed azimuths
    let n0_elev = std::f64::consts::FRAC_PI_2 - axis_tilt;
    let noon_az = noon_azimuth_deg.to_radians();
    let n0 = [n0_elev.cos() * noon_az.sin(), n0_elev.cos() * noon_az.cos(), n0_elev.sin()];

    // Rotation angle tracks the hour angle; flip when the axis points south
    let omega = hour_angle_deg.to_radians();
    let rho = if k[1] >= 0.0 { omega } else { -omega };

    let cross = [
        k[1] * n0[2] - k[2] * n0[1],
        k[2] * n0[0] - k[0] * n0[2],
        k[0] * n0[1] - k[1] * n0[0],
    ];

    let (sin_rho, cos_rho) = rho.sin_cos();
    let n_rot = [
        n0[0] * cos_rho + cross[0] * sin_rho,
        n0[1] * cos_rho + cross[1] * sin_rho,
        n0[2] * cos_rho + cross[2] * sin_rho,
    ];

    if n_rot[2] < 0.0 {
        return TrackerState::Stowed;
    }

    let tilt_deg = n_rot[2].clamp(-1.0, 1.0).acos().to_degrees();
    let azimuth_deg = n_rot[0].atan2(n_rot[1]).to_degrees();
    TrackerState::Oriented(Orientation { tilt_deg, azimuth_deg })
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::solar_geometry;

    fn perth_setup() -> TrackerSetup {
        TrackerSetup {
            latitude_deg: -32.05,
            fixed_tilt_deg: 32.05,
            fixed_azimuth_deg: 0.0,
            azimuth_tracker_tilt_deg: 32.05,
            polar_axis_tilt_deg: 32.05,
            noon_azimuth_deg: 0.0,
        }
    }

    fn unwrap_oriented(state: TrackerState) -> Orientation {
        match state {
            TrackerState::Oriented(o) => o,
            TrackerState::Stowed => panic!("Expected an oriented tracker, got Stowed"),
        }
    }

    #[test]
    fn test_horizontal_is_flat() {
        let setup = perth_setup();
        let sun = solar_geometry(-32.05, 115.89, 120.0, 100, 10.0);
        let o = unwrap_oriented(orientation(TrackingMode::Horizontal, &setup, &sun));
        assert_eq!(o.tilt_deg, 0.0);
        assert_eq!(o.azimuth_deg, 0.0);
    }

    #[test]
    fn test_azimuth_tracker_follows_sun() {
        let setup = perth_setup();
        for hour in [8.0, 12.0, 16.0] {
            let sun = solar_geometry(-32.05, 115.89, 120.0, 40, hour);
            let o = unwrap_oriented(orientation(TrackingMode::SingleAxisAzimuth, &setup, &sun));
            assert_eq!(o.tilt_deg, 32.05);
            assert_eq!(o.azimuth_deg, sun.azimuth_deg);
        }
    }

    #[test]
    fn test_dual_axis_faces_sun() {
        let setup = perth_setup();
        let sun = solar_geometry(-32.05, 115.89, 120.0, 200, 14.0);
        let o = unwrap_oriented(orientation(TrackingMode::DualAxis, &setup, &sun));
        assert!((o.tilt_deg - (90.0 - sun.elevation_deg)).abs() < 1e-12);
        assert_eq!(o.azimuth_deg, sun.azimuth_deg);
    }

    #[test]
    fn test_elevation_tracker_outside_tropics_faces_equator() {
        // Southern mid-latitude: north. Northern: south. All year round.
        for day in [15u32, 172, 355] {
            let d = crate::geometry::declination(day);
            assert_eq!(elevation_tracker_azimuth(-32.0, d), 0.0);
            assert_eq!(elevation_tracker_azimuth(45.0, d), 180.0);
        }
    }

    #[test]
    fn test_elevation_tracker_tropics_follow_declination() {
        // At 10°S the December sun (δ ≈ −23°) stands poleward of the site,
        // so the panel keeps facing south; the June sun (δ ≈ +23°) is in the
        // northern sky.
        let december = crate::geometry::declination(355);
        let june = crate::geometry::declination(172);
        assert_eq!(elevation_tracker_azimuth(-10.0, december), 180.0);
        assert_eq!(elevation_tracker_azimuth(-10.0, june), 0.0);

        // Mirrored at 10°N
        assert_eq!(elevation_tracker_azimuth(10.0, december), 180.0);
        assert_eq!(elevation_tracker_azimuth(10.0, june), 0.0);

        // Pinned north at the equator regardless of season
        assert_eq!(elevation_tracker_azimuth(0.0, december), 0.0);
        assert_eq!(elevation_tracker_azimuth(0.0, june), 0.0);
    }

    #[test]
    fn test_polar_tracker_noon_matches_axis_tilt() {
        // At hour angle zero the rotation is the identity: panel tilt equals
        // the axis tilt, azimuth equals the configured noon azimuth.
        let o = unwrap_oriented(rotated_axis_orientation(32.05, 180.0, 0.0, 0.0));
        assert!((o.tilt_deg - 32.05).abs() < 1e-9, "Noon tilt {} != axis tilt", o.tilt_deg);
        assert!(o.azimuth_deg.abs() < 1e-9, "Noon azimuth {} != 0", o.azimuth_deg);
    }

    #[test]
    fn test_polar_tracker_morning_faces_east() {
        // Southern setup: axis points south (k_y < 0), rotation sign flips so
        // a morning (positive) hour angle still swings the panel east.
        let o = unwrap_oriented(rotated_axis_orientation(32.05, 180.0, 0.0, 45.0));
        assert!(
            o.azimuth_deg > 0.0 && o.azimuth_deg < 90.0,
            "Morning panel azimuth {} should be NE",
            o.azimuth_deg
        );

        // Northern setup mirrors: axis north, same hour angle, panel east.
        let o_n = unwrap_oriented(rotated_axis_orientation(40.0, 0.0, 180.0, 45.0));
        assert!(
            o_n.azimuth_deg > 90.0,
            "Morning panel azimuth {} should be east of south",
            o_n.azimuth_deg
        );
    }

    #[test]
    fn test_horizontal_axis_stows_past_quarter_turn() {
        // With a horizontal axis the normal's vertical component is
        // cos(hour angle); past ±90° it goes negative and the tracker stows.
        let at_60 = rotated_axis_orientation(0.0, 180.0, 0.0, 60.0);
        assert!(matches!(at_60, TrackerState::Oriented(_)));

        let at_120 = rotated_axis_orientation(0.0, 180.0, 0.0, 120.0);
        assert!(matches!(at_120, TrackerState::Stowed), "Expected stow past 90° hour angle");

        let at_minus_120 = rotated_axis_orientation(0.0, 180.0, 0.0, -120.0);
        assert!(matches!(at_minus_120, TrackerState::Stowed));
    }

    #[test]
    fn test_horizontal_axis_tilt_equals_hour_angle() {
        // Horizontal axis: the panel tilt is exactly the rotation swept from
        // flat, i.e. |hour angle|.
        for h in [-75.0, -30.0, 0.0, 30.0, 75.0] {
            let o = unwrap_oriented(rotated_axis_orientation(0.0, 180.0, 0.0, h));
            assert!(
                (o.tilt_deg - h.abs()).abs() < 1e-9,
                "Tilt {} != |hour angle| {}",
                o.tilt_deg,
                h
            );
        }
    }

    #[test]
    fn test_dual_orientations() {
        let ew = dual_orientations(TrackingMode::FixedEastWest);
        assert_eq!(ew[0].azimuth_deg, 90.0);
        assert_eq!(ew[1].azimuth_deg, 270.0);
        assert!(ew.iter().all(|o| o.tilt_deg == DUAL_PANEL_TILT_DEG));

        let ns = dual_orientations(TrackingMode::FixedNorthSouth);
        assert_eq!(ns[0].azimuth_deg, 0.0);
        assert_eq!(ns[1].azimuth_deg, 180.0);
    }

    #[test]
    fn test_mode_keys_are_unique() {
        let mut keys: Vec<_> = TrackingMode::ALL.iter().map(|m| m.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), TrackingMode::ALL.len());
    }
}
