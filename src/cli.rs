//! Command-Line Interface Module
//!
//! Argument parsing and range validation for the suntrack binary. Out-of-range
//! input is rejected here, at the boundary; the core trusts its callers.

use clap::Parser;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Site latitude in decimal degrees (-90 to 90, North positive)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude, env = "SUNTRACK_LATITUDE")]
    pub latitude: f64,

    /// Site longitude in decimal degrees (-180 to 180, East positive)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude, env = "SUNTRACK_LONGITUDE")]
    pub longitude: f64,

    /// PV module efficiency (0.0-1.0, typical ~0.14-0.22 for silicon)
    #[arg(long, default_value_t = 0.20, value_parser = parse_efficiency, env = "SUNTRACK_EFFICIENCY")]
    pub efficiency: f64,

    /// Tilt for the custom fixed collector in degrees (0 = flat, 90 = vertical).
    /// Defaults to |latitude|
    #[arg(long, value_parser = parse_tilt, env = "SUNTRACK_TILT")]
    pub tilt: Option<f64>,

    /// Azimuth for the custom fixed collector in degrees
    /// (0 = North, +90 = East, ±180 = South). Defaults to equator-facing
    #[arg(long, allow_hyphen_values = true, value_parser = parse_azimuth, env = "SUNTRACK_AZIMUTH")]
    pub azimuth: Option<f64>,

    /// Simulation time step in minutes (60 = hourly, 5 = fine-grained)
    #[arg(long, default_value_t = 60, value_parser = parse_time_step, env = "SUNTRACK_TIME_STEP")]
    pub time_step: u32,

    /// Ground albedo for reflected radiation (0.0-1.0, 0.2 = grass, 0.8 = snow)
    #[arg(long, default_value_t = 0.2, value_parser = parse_albedo, env = "SUNTRACK_ALBEDO")]
    pub albedo: f64,

    /// Search for the tilt maximizing annual energy and feed it to the
    /// single-axis trackers before simulating
    #[arg(long, env = "SUNTRACK_OPTIMIZE_TILT")]
    pub optimize_tilt: bool,

    /// Optimize tilt for electrical yield (thermal losses included) instead
    /// of incident irradiance
    #[arg(long, env = "SUNTRACK_OPTIMIZE_ELECTRICAL")]
    pub optimize_electrical: bool,

    /// Emit the annual totals as JSON instead of the summary table
    #[arg(long)]
    pub json: bool,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_efficiency(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("Efficiency must be between 0.0 and 1.0, got {}", v));
    }
    Ok(v)
}

fn parse_tilt(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=90.0).contains(&v) {
        return Err(format!("Tilt must be between 0 and 90 degrees, got {}", v));
    }
    Ok(v)
}

fn parse_azimuth(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=360.0).contains(&v) {
        return Err(format!("Azimuth must be between -180 and 360 degrees, got {}", v));
    }
    Ok(v)
}

fn parse_time_step(s: &str) -> Result<u32, String> {
    let v: u32 = s.parse().map_err(|_| format!("Invalid integer: {}", s))?;
    if !(1..=60).contains(&v) {
        return Err(format!("Time step must be between 1 and 60 minutes, got {}", v));
    }
    Ok(v)
}

fn parse_albedo(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("Albedo must be between 0.0 and 1.0, got {}", v));
    }
    Ok(v)
}

// ===================== TESTS =====================
