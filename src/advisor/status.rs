use serde::Serialize;

use crate::advisor::capability::{Capability, is_extraction_capable, ship_capabilities};
use crate::advisor::cooldown::{CooldownReport, classify_cooldown};
use crate::advisor::gates::{ActionGates, evaluate_gates};
use crate::advisor::recommend;
use crate::advisor::utilization::{UtilizationReport, classify_utilization};
use crate::models::ship::{NavStatus, Ship, ShipRoute};

/// Everything the engine derives for a single ship snapshot. Plain data;
/// the presentation layer decides how (or whether) to render each field.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedShipStatus {
    pub ship_symbol: String,
    pub nav_status: NavStatus,
    pub waypoint_symbol: String,
    /// Present only while the ship is underway.
    pub route: Option<ShipRoute>,
    pub cooldown: CooldownReport,
    pub cargo: UtilizationReport,
    pub fuel: UtilizationReport,
    pub capabilities: Vec<Capability>,
    pub extraction_capable: bool,
    pub gates: ActionGates,
    pub recommendations: Vec<String>,
}

/// Run the full derivation pipeline over one ship snapshot.
pub fn derive_ship_status(ship: &Ship) -> DerivedShipStatus {
    let cooldown = classify_cooldown(&ship.cooldown);
    let cargo = classify_utilization(ship.cargo.units, ship.cargo.capacity);
    let fuel = classify_utilization(ship.fuel.current, ship.fuel.capacity);
    let capabilities = ship_capabilities(&ship.mounts);
    let extraction_capable = is_extraction_capable(&ship.mounts);
    let gates = evaluate_gates(ship.nav.status, cooldown.bucket, &ship.fuel, extraction_capable);
    let recommendations = recommend::recommend_for_ship(ship, &cooldown, extraction_capable);

    DerivedShipStatus {
        ship_symbol: ship.symbol.clone(),
        nav_status: ship.nav.status,
        waypoint_symbol: ship.nav.waypoint_symbol.clone(),
        route: if ship.nav.status == NavStatus::InTransit {
            ship.nav.route.clone()
        } else {
            None
        },
        cooldown,
        cargo,
        fuel,
        capabilities,
        extraction_capable,
        gates,
        recommendations,
    }
}

/// Per-ship derivations plus fleet-level aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct FleetStatus {
    pub ships: Vec<DerivedShipStatus>,
    pub docked: usize,
    pub in_orbit: usize,
    pub in_transit: usize,
    pub recommendations: Vec<String>,
}

pub fn derive_fleet_status(ships: &[Ship]) -> FleetStatus {
    let statuses: Vec<DerivedShipStatus> = ships.iter().map(derive_ship_status).collect();

    let docked = statuses.iter().filter(|s| s.nav_status == NavStatus::Docked).count();
    let in_orbit = statuses.iter().filter(|s| s.nav_status == NavStatus::InOrbit).count();
    let in_transit = statuses.iter().filter(|s| s.nav_status == NavStatus::InTransit).count();

    let recommendations = recommend::recommend_for_fleet(&statuses);

    FleetStatus {
        ships: statuses,
        docked,
        in_orbit,
        in_transit,
        recommendations,
    }
}
