// SpaceTraders Advisor Library
// Pure derivation rules that turn raw ship/waypoint snapshots into
// classified status and actionable recommendations

pub mod models;
pub mod client;
pub mod advisor;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    ship::{Ship, ShipNav, NavStatus, ShipCooldown, ShipCargo, ShipFuel, ShipMount, CargoItem},
    waypoint::Waypoint,
    responses::*,
};

pub use advisor::status::{DerivedShipStatus, FleetStatus, derive_ship_status, derive_fleet_status};
pub use advisor::system::{SystemClassification, classify_system};

pub use client::{SpaceTradersClient, ShipDataSource, load_agent_token};
pub use config::AdvisorConfig;

// Constants
pub const API_BASE_URL: &str = "https://api.spacetraders.io/v2";
pub const AGENT_TOKEN_FILE: &str = "AGENT_TOKEN";
