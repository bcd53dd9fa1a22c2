use crate::advisor::cooldown::{CooldownBucket, CooldownReport};
use crate::advisor::status::DerivedShipStatus;
use crate::models::ship::{NavStatus, Ship};

/// Filler entry when no per-ship rule fires; the list is never empty.
pub const SHIP_ALL_CLEAR: &str = "ship is in good operational condition";
pub const FLEET_ALL_CLEAR: &str = "fleet is in good operational condition";
pub const SYSTEM_ALL_CLEAR: &str = "no strategic recommendations for this system";

/// Fuel fraction below which a refuel advisory fires.
pub const LOW_FUEL_THRESHOLD: f64 = 0.25;

/// Per-ship advisories, ordered fuel -> cargo -> cooldown -> opportunity.
pub fn recommend_for_ship(
    ship: &Ship,
    cooldown: &CooldownReport,
    extraction_capable: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if ship.fuel.capacity > 0
        && (ship.fuel.current as f64 / ship.fuel.capacity as f64) < LOW_FUEL_THRESHOLD
    {
        recommendations.push("low on fuel, find a fuel station".to_string());
    }

    if ship.cargo.capacity > 0 && ship.cargo.units == ship.cargo.capacity {
        recommendations.push("cargo full, sell goods".to_string());
    }

    if cooldown.bucket != CooldownBucket::Ready {
        recommendations.push(cooldown.message.to_string());
    }

    if ship.nav.status == NavStatus::Docked && ship.cargo.units == 0 {
        recommendations.push("empty hold, good time to buy goods".to_string());
    }

    if extraction_capable
        && ship.nav.status == NavStatus::InOrbit
        && cooldown.bucket == CooldownBucket::Ready
    {
        recommendations.push("ready for mining".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(SHIP_ALL_CLEAR.to_string());
    }

    recommendations
}

/// Fleet-wide advisories derived from per-ship results.
pub fn recommend_for_fleet(statuses: &[DerivedShipStatus]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let docked = statuses
        .iter()
        .filter(|s| s.nav_status == NavStatus::Docked)
        .count();
    if docked > 1 {
        recommendations.push(format!(
            "{} ships docked, consider moving some to orbit",
            docked
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(FLEET_ALL_CLEAR.to_string());
    }

    recommendations
}

/// System-wide advisories from facility counts.
pub fn recommend_for_system(shipyards: usize, marketplaces: usize) -> Vec<String> {
    let mut recommendations = Vec::new();

    if shipyards > 0 {
        recommendations.push("shipyard available, consider expanding the fleet".to_string());
    }

    if marketplaces > 1 {
        recommendations.push(format!(
            "{} marketplaces present, consider running a trade route",
            marketplaces
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(SYSTEM_ALL_CLEAR.to_string());
    }

    recommendations
}
