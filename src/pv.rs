//! PV Performance Module
//!
//! Converts incident irradiance into electrical output: ASHRAE-style
//! incidence-angle modifier for reflection losses, a NOCT thermal model for
//! cell temperature, and a linear power-temperature derating. The
//! counterfactual "cell held at 25 °C" output is reported alongside the
//! actual one to support active-cooling comparisons.

use serde::Serialize;

// ===================== CONFIGURATION =====================

/// PV module parameters.
///
/// The physical coefficients live here rather than in hidden globals so
/// they can be swapped for calibration; the defaults are the standard
/// crystalline-silicon values.
#[derive(Debug, Clone, Copy)]
pub struct PvModule {
    /// Module efficiency at STC (0.0 - 1.0)
    pub efficiency: f64,
    /// Angular loss coefficient αR of the ASHRAE-style IAM model
    pub angular_loss_coeff: f64,
    /// Nominal Operating Cell Temperature (°C)
    pub noct_c: f64,
    /// Power temperature coefficient (fraction per °C, negative)
    pub power_temp_coeff: f64,
}

impl Default for PvModule {
    fn default() -> Self {
        Self {
            efficiency: 0.14,
            angular_loss_coeff: 0.17,
            noct_c: 45.0,
            power_temp_coeff: -0.0045,
        }
    }
}

impl PvModule {
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn with_noct(mut self, noct_c: f64) -> Self {
        self.noct_c = noct_c;
        self
    }

    pub fn with_power_temp_coeff(mut self, coeff: f64) -> Self {
        self.power_temp_coeff = coeff;
        self
    }
}

// ===================== RESULT =====================

/// Electrical output and loss breakdown for one time step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PvPerformance {
    /// Actual electrical output (W/m²), floored at 0
    pub power_w_m2: f64,
    /// Output if the cell were held at 25 °C (W/m²), floored at 0
    pub power_25c_w_m2: f64,
    /// Irradiance lost to reflection at non-normal incidence (W/m²), >= 0
    pub loss_angular_w_m2: f64,
    /// Power lost to cell heating (W/m²); negative when the cell runs below
    /// 25 °C, i.e. a thermal gain. Deliberately not clamped.
    pub loss_thermal_w_m2: f64,
    /// Operating cell temperature (°C)
    pub cell_temp_c: f64,
}

// ===================== MODEL =====================

impl PvModule {
    /// Electrical performance for an incident irradiance and incidence angle.
    ///
    /// # Arguments
    /// * `incident_w_m2` - Total plane-of-collector irradiance
    /// * `cos_incidence` - Cosine of the angle of incidence (clamped <= 0
    ///   means the sun is behind the collector)
    /// * `ambient_c` - Ambient air temperature in °C
    pub fn performance(&self, incident_w_m2: f64, cos_incidence: f64, ambient_c: f64) -> PvPerformance {
        // Incidence-angle modifier: fraction of irradiance surviving
        // front-surface reflection.
        let iam = if cos_incidence <= 0.0 {
            0.0
        } else {
            (1.0 - (-cos_incidence / self.angular_loss_coeff).exp())
                / (1.0 - (-1.0 / self.angular_loss_coeff).exp())
        };

        let effective_w_m2 = incident_w_m2 * iam;
        let loss_angular = (incident_w_m2 - effective_w_m2).max(0.0);

        // NOCT model: cell heats above ambient in proportion to the
        // post-reflection irradiance (NOCT is defined at 800 W/m², 20 °C).
        let cell_temp_c = ambient_c + (self.noct_c - 20.0) / 0.8 * (effective_w_m2 / 1000.0);

        let power_at_25c = self.efficiency * effective_w_m2;
        let temp_factor = 1.0 + self.power_temp_coeff * (cell_temp_c - 25.0);
        let power = power_at_25c * temp_factor;

        // Signed before the output floor: a cool cell shows a genuine gain
        let loss_thermal = power_at_25c - power;

        PvPerformance {
            power_w_m2: power.max(0.0),
            power_25c_w_m2: power_at_25c.max(0.0),
            loss_angular_w_m2: loss_angular,
            loss_thermal_w_m2: loss_thermal,
            cell_temp_c,
        }
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_incidence_has_no_angular_loss() {
        let module = PvModule::default().with_efficiency(0.2);
        let perf = module.performance(800.0, 1.0, 25.0);

        assert!(perf.loss_angular_w_m2.abs() < 1e-9, "IAM at cosθ=1 must be unity");
        // 800 W/m² heats the cell 25 °C above ambient
        assert!((perf.cell_temp_c - 50.0).abs() < 1e-9, "Cell temp {}", perf.cell_temp_c);
        assert!((perf.power_25c_w_m2 - 160.0).abs() < 1e-9);
        // 25 °C above reference costs 11.25%
        assert!((perf.power_w_m2 - 160.0 * (1.0 - 0.0045 * 25.0)).abs() < 1e-9);
        assert!(perf.loss_thermal_w_m2 > 0.0);
    }

    #[test]
    fn test_sun_behind_panel_zeroes_output() {
        let module = PvModule::default();
        for cos_theta in [0.0, -0.3] {
            let perf = module.performance(100.0, cos_theta, 25.0);
            assert_eq!(perf.power_w_m2, 0.0);
            assert_eq!(perf.power_25c_w_m2, 0.0);
            // Everything arriving is lost to the reflection accounting
            assert_eq!(perf.loss_angular_w_m2, 100.0);
            assert_eq!(perf.loss_thermal_w_m2, 0.0);
        }
    }

    #[test]
    fn test_grazing_incidence_loses_more_than_steep() {
        let module = PvModule::default();
        let steep = module.performance(500.0, 0.95, 25.0);
        let grazing = module.performance(500.0, 0.15, 25.0);
        assert!(
            grazing.loss_angular_w_m2 > steep.loss_angular_w_m2,
            "Grazing loss {} should exceed steep loss {}",
            grazing.loss_angular_w_m2,
            steep.loss_angular_w_m2
        );
    }

    #[test]
    fn test_cold_cell_shows_thermal_gain() {
        // Low sun on a cold morning: cell stays below 25 °C and the signed
        // thermal loss goes negative (a gain). This sign must survive.
        let module = PvModule::default().with_efficiency(0.2);
        let perf = module.performance(200.0, 0.9, -5.0);

        assert!(perf.cell_temp_c < 25.0, "Cell temp {} should be cold", perf.cell_temp_c);
        assert!(
            perf.loss_thermal_w_m2 < 0.0,
            "Thermal loss {} should be negative (gain)",
            perf.loss_thermal_w_m2
        );
        assert!(perf.power_w_m2 > perf.power_25c_w_m2);
    }

    #[test]
    fn test_zero_irradiance() {
        let module = PvModule::default();
        let perf = module.performance(0.0, 0.0, 15.0);
        assert_eq!(perf.power_w_m2, 0.0);
        assert_eq!(perf.loss_angular_w_m2, 0.0);
        assert_eq!(perf.loss_thermal_w_m2, 0.0);
        assert_eq!(perf.cell_temp_c, 15.0);
    }

    #[test]
    fn test_power_never_negative_in_extreme_heat() {
        // Absurdly hot cell: the derating would drive power negative; the
        // output floors at zero while the loss accounting stays consistent.
        let module = PvModule { power_temp_coeff: -0.02, ..PvModule::default() };
        let perf = module.performance(1000.0, 1.0, 55.0);
        assert!(perf.power_w_m2 >= 0.0);
        assert!(perf.loss_thermal_w_m2 > 0.0);
    }

    #[test]
    fn test_efficiency_scales_output_linearly() {
        let low = PvModule::default().with_efficiency(0.1).performance(700.0, 0.9, 20.0);
        let high = PvModule::default().with_efficiency(0.2).performance(700.0, 0.9, 20.0);
        assert!((high.power_w_m2 - 2.0 * low.power_w_m2).abs() < 1e-9);
    }
}
