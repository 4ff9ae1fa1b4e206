use clap::Parser;

use suntrack::cli::Args;
use suntrack::output;
use suntrack::profile::SimulationParams;
use suntrack::site::SolarSite;

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let site = SolarSite::new(args.latitude, args.longitude);

    let mut params = SimulationParams::default()
        .with_efficiency(args.efficiency)
        .with_time_step_minutes(args.time_step)
        .with_albedo(args.albedo)
        .with_optimize_electrical(args.optimize_electrical);
    if let (Some(tilt), Some(azimuth)) = (args.tilt, args.azimuth) {
        params = params.with_fixed_orientation(tilt, azimuth);
    } else if let Some(tilt) = args.tilt {
        params = params.with_fixed_orientation(tilt, site.default_azimuth_deg);
    }

    let optimum = if args.optimize_tilt {
        let opt = site.optimal_tilt(args.efficiency, args.optimize_electrical);
        params = params.with_optimal_tilt(opt.tilt_deg as f64);
        Some(opt)
    } else {
        None
    };

    let profile = site.annual_profile(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile.totals)?);
    } else {
        output::print_summary(&site, &profile, optimum.as_ref());
    }

    Ok(())
}
