//! # suntrack
//!
//! Clear-sky solar geometry, tracking-collector irradiance and PV yield
//! simulation for an arbitrary location, over every time step of a calendar
//! year.
//!
//! The pipeline: (latitude, longitude, day-of-year, clock time) →
//! sun elevation/azimuth → direct/diffuse/reflected irradiance → per-mode
//! angle of incidence and incident irradiance for nine collector strategies
//! (fixed, dual fixed, four single-axis trackers, two-axis) → cell
//! temperature and electrical output → annual time series, totals and
//! capacity factors, plus brute-force optimal-tilt searches.
//!
//! Everything is deterministic pure computation over immutable inputs; the
//! only construction-time state is the site's derived time-zone meridian and
//! default collector orientation.
//!
//! ## Coordinate conventions
//!
//! - Azimuth: 0° = North, +90° = East, −90° = West, ±180° = South — for the
//!   sun and for collector normals alike.
//! - Tilt: degrees from horizontal, 0 = flat, 90 = vertical.
//! - Days run 1-365 with no leap handling; hours are local clock time.
//!
//! ## Quick start
//!
//! ```
//! use suntrack::{SimulationParams, SolarSite, TrackingMode};
//!
//! // Perth
//! let site = SolarSite::new(-32.05, 115.89);
//! let profile = site.annual_profile(&SimulationParams::default());
//!
//! let two_axis = profile.yield_kwh_m2(TrackingMode::DualAxis);
//! let flat = profile.yield_kwh_m2(TrackingMode::Horizontal);
//! assert!(two_axis > flat);
//! ```

pub mod cli;
pub mod geometry;
pub mod irradiance;
pub mod optimize;
pub mod output;
pub mod profile;
pub mod pv;
pub mod site;
pub mod temperature;
pub mod tracking;

pub use crate::geometry::SolarGeometry;
pub use crate::irradiance::{IncidentIrradiance, Irradiance};
pub use crate::optimize::TiltOptimum;
pub use crate::profile::{AnnualProfile, ModeResult, ProfileRow, SimulationParams};
pub use crate::pv::{PvModule, PvPerformance};
pub use crate::site::SolarSite;
pub use crate::tracking::{Orientation, TrackerState, TrackingMode};
