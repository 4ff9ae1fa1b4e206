//! Irradiance Module
//!
//! Clear-sky atmospheric irradiance (extraterrestrial flux, optical depth,
//! air mass, DNI, diffuse factor) and the tilted-plane projection of those
//! components onto an arbitrarily oriented collector.
//!
//! The atmospheric model is the seasonal-sinusoid clear-sky formulation
//! (Masters): A·exp(-k·m) beam attenuation with a secant-law air mass, a
//! beam-fraction diffuse model and an isotropic sky.

use std::f64::consts::PI;

use serde::Serialize;

// ===================== CONSTANTS =====================

/// Default ground albedo (typical grass/soil)
pub const DEFAULT_ALBEDO: f64 = 0.2;

/// Air mass floor: below this sin(elevation) the secant law is capped
const SIN_ELEVATION_FLOOR: f64 = 0.01;

// ===================== TYPES =====================

/// Clear-sky irradiance components for one (day, elevation) query.
///
/// All components are zero when the sun is at or below the horizon.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Irradiance {
    /// Apparent extraterrestrial flux A (W/m²)
    pub extraterrestrial_w_m2: f64,
    /// Atmospheric optical depth k (dimensionless)
    pub optical_depth: f64,
    /// Air mass m (dimensionless, >= 1 in daylight)
    pub air_mass: f64,
    /// Direct Normal Irradiance (W/m²)
    pub dni_w_m2: f64,
    /// Sky diffuse factor C (fraction of the direct beam)
    pub diffuse_factor: f64,
    /// Diffuse irradiance on a horizontal surface (W/m²)
    pub diffuse_horizontal_w_m2: f64,
    /// Global horizontal irradiance, beam + diffuse (W/m²)
    pub global_horizontal_w_m2: f64,
}

impl Irradiance {
    /// Night-time result: every component zero.
    pub const fn dark() -> Self {
        Self {
            extraterrestrial_w_m2: 0.0,
            optical_depth: 0.0,
            air_mass: 0.0,
            dni_w_m2: 0.0,
            diffuse_factor: 0.0,
            diffuse_horizontal_w_m2: 0.0,
            global_horizontal_w_m2: 0.0,
        }
    }
}

/// Irradiance striking a tilted collector, by component.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IncidentIrradiance {
    /// Total plane-of-collector irradiance (W/m²), never negative
    pub total_w_m2: f64,
    /// Direct beam component (W/m²)
    pub beam_w_m2: f64,
    /// Isotropic sky diffuse component (W/m²)
    pub diffuse_w_m2: f64,
    /// Ground-reflected component (W/m²)
    pub reflected_w_m2: f64,
    /// Cosine of the angle of incidence, clamped to >= 0
    pub cos_incidence: f64,
}

// ===================== CLEAR-SKY MODEL =====================

/// Clear-sky irradiance components for a day of year and sun elevation.
///
/// # Arguments
/// * `day_of_year` - Day number (1-365)
/// * `elevation_deg` - Sun elevation in degrees
pub fn clear_sky(day_of_year: u32, elevation_deg: f64) -> Irradiance {
    if elevation_deg <= 0.0 {
        return Irradiance::dark();
    }

    let n = day_of_year as f64;

    // Apparent extraterrestrial flux, peaks in the southern summer
    let a = 1160.0 + 75.0 * (2.0 * PI / 365.0 * (n - 275.0)).sin();

    // Optical depth and diffuse factor share the same seasonal phase
    let k = 0.174 + 0.035 * (2.0 * PI / 365.0 * (n - 100.0)).sin();
    let c = 0.095 + 0.04 * (2.0 * PI / 365.0 * (n - 100.0)).sin();

    // Secant-law air mass, capped near the horizon
    let sin_beta = elevation_deg.to_radians().sin();
    let m = if sin_beta < SIN_ELEVATION_FLOOR { 1.0 / SIN_ELEVATION_FLOOR } else { 1.0 / sin_beta };

    let dni = a * (-k * m).exp();

    let diffuse_horizontal = c * dni;
    let beam_horizontal = dni * sin_beta;

    Irradiance {
        extraterrestrial_w_m2: a,
        optical_depth: k,
        air_mass: m,
        dni_w_m2: dni,
        diffuse_factor: c,
        diffuse_horizontal_w_m2: diffuse_horizontal,
        global_horizontal_w_m2: beam_horizontal + diffuse_horizontal,
    }
}

// ===================== TILTED-PLANE PROJECTION =====================

/// Project beam, sky-diffuse and ground-reflected irradiance onto a tilted
/// collector.
///
/// # Arguments
/// * `elevation_deg` - Sun elevation in degrees
/// * `sun_azimuth_deg` - Sun azimuth (0 = North convention)
/// * `tilt_deg` - Collector tilt from horizontal (0 = flat, 90 = vertical)
/// * `panel_azimuth_deg` - Direction the collector normal faces
/// * `dni_w_m2` - Direct normal irradiance
/// * `diffuse_factor` - Sky diffuse factor C
/// * `albedo` - Ground reflectance (0-1)
pub fn incident(
    elevation_deg: f64,
    sun_azimuth_deg: f64,
    tilt_deg: f64,
    panel_azimuth_deg: f64,
    dni_w_m2: f64,
    diffuse_factor: f64,
    albedo: f64,
) -> IncidentIrradiance {
    let beta = elevation_deg.to_radians();
    let phi_s = sun_azimuth_deg.to_radians();
    let sigma = tilt_deg.to_radians();
    let phi_c = panel_azimuth_deg.to_radians();

    // Angle of incidence between the sun's rays and the collector normal;
    // clamp at zero when the sun is behind the collector plane.
    let cos_incidence =
        (beta.cos() * (phi_s - phi_c).cos() * sigma.sin() + beta.sin() * sigma.cos()).max(0.0);

    let beam = dni_w_m2 * cos_incidence;
    let diffuse = diffuse_factor * dni_w_m2 * (1.0 + sigma.cos()) / 2.0;
    let reflected =
        albedo * dni_w_m2 * (beta.sin() + diffuse_factor) * (1.0 - sigma.cos()) / 2.0;

    IncidentIrradiance {
        total_w_m2: beam + diffuse + reflected,
        beam_w_m2: beam,
        diffuse_w_m2: diffuse,
        reflected_w_m2: reflected,
        cos_incidence,
    }
}

/// Incident irradiance for a collector pointed directly at the sun.
///
/// The two-axis closed form: the incidence cosine is exactly 1 and the
/// collector tilt is the complement of the sun elevation, so
/// cos(tilt) = sin(elevation) substitutes through the view factors.
pub fn incident_normal(
    elevation_deg: f64,
    dni_w_m2: f64,
    diffuse_factor: f64,
    albedo: f64,
) -> IncidentIrradiance {
    let sin_beta = elevation_deg.to_radians().sin();

    let beam = dni_w_m2;
    let diffuse = diffuse_factor * dni_w_m2 * (1.0 + sin_beta) / 2.0;
    let reflected = albedo * dni_w_m2 * (sin_beta + diffuse_factor) * (1.0 - sin_beta) / 2.0;

    IncidentIrradiance {
        total_w_m2: beam + diffuse + reflected,
        beam_w_m2: beam,
        diffuse_w_m2: diffuse,
        reflected_w_m2: reflected,
        cos_incidence: 1.0,
    }
}

// ===================== TESTS =====================
