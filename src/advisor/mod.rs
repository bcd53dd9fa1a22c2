// Telemetry derivation engine
// Every function in this module tree is pure: it takes an immutable snapshot
// (plus an explicit reference time where one is needed) and returns plain data.
// Rendering and fetching live elsewhere.

pub mod cooldown;
pub mod utilization;
pub mod capability;
pub mod gates;
pub mod recommend;
pub mod status;
pub mod system;

pub use cooldown::{CooldownBucket, CooldownReport, classify_cooldown, time_until_ready};
pub use utilization::{UtilizationBucket, UtilizationReport, classify_utilization};
pub use capability::{Capability, ship_capabilities, is_extraction_capable};
pub use gates::{ActionGates, evaluate_gates};
pub use status::{DerivedShipStatus, FleetStatus, derive_ship_status, derive_fleet_status};
pub use system::{SystemClassification, classify_system};
