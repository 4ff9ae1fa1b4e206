//! Output Formatting Module
//!
//! Terminal report for the annual simulation: per-mode yields, ratios and
//! capacity factors, plus small formatting helpers.

use crate::optimize::TiltOptimum;
use crate::profile::AnnualProfile;
use crate::site::SolarSite;
use crate::tracking::TrackingMode;

// ===================== FORMATTING HELPERS =====================

/// Format an annual energy figure for display.
pub fn format_energy(kwh_m2: f64) -> String {
    if kwh_m2 >= 1000.0 {
        format!("{:.2} MWh/m²", kwh_m2 / 1000.0)
    } else {
        format!("{:.1} kWh/m²", kwh_m2)
    }
}

/// Format an irradiance figure for display.
pub fn format_irradiance(w_per_m2: f64) -> String {
    format!("{:.0} W/m²", w_per_m2)
}

// ===================== SUMMARY REPORT =====================

/// Print the annual summary for a completed simulation.
pub fn print_summary(site: &SolarSite, profile: &AnnualProfile, optimum: Option<&TiltOptimum>) {
    println!(
        "Site: lat {:.2}°, lon {:.2}° (time-zone meridian {:.0}°)",
        site.latitude_deg, site.longitude_deg, site.time_zone_meridian_deg
    );
    println!(
        "Daylight hours simulated: {:.1} h, annual GHI {}",
        profile.daylight_hours(),
        format_energy(profile.totals.get("Annual_GHI_Total_kWh_m2").copied().unwrap_or(0.0)),
    );
    if let Some(opt) = optimum {
        println!(
            "Optimal tilt: {}° ({} electrical at optimum)",
            opt.tilt_deg,
            format_energy(opt.yield_kwh_m2)
        );
    }
    println!();
    println!("Annual PV yield by tracking mode:");
    println!(
        "{:<20} {:>14} {:>12} {:>10} {:>10}",
        "Mode", "Yield", "vs 2-Axis", "CF(8760h)", "CF(day)"
    );

    for mode in TrackingMode::ALL {
        let yield_kwh = profile.yield_kwh_m2(mode);
        let ratio = profile
            .totals
            .get(&format!("Ratio_Yield_{}_vs_2Axis_Percent", mode.key()))
            .map(|r| format!("{:.1}%", r))
            .unwrap_or_else(|| "ref".to_string());
        let cf_overall =
            profile.totals.get(&format!("CF_Overall_{}", mode.key())).copied().unwrap_or(0.0);
        let cf_daylight =
            profile.totals.get(&format!("CF_Daylight_{}", mode.key())).copied().unwrap_or(0.0);

        println!(
            "{:<20} {:>14} {:>12} {:>9.1}% {:>9.1}%",
            mode.display_name(),
            format_energy(yield_kwh),
            ratio,
            cf_overall,
            cf_daylight
        );
    }
}

// ===================== TESTS =====================
