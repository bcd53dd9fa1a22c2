use serde::Serialize;

use crate::advisor::recommend;
use crate::models::waypoint::Waypoint;

/// Waypoint traits counted as mining sites.
pub const MINING_SITE_TRAITS: &[&str] = &[
    "ASTEROID_FIELD",
    "MINERAL_DEPOSITS",
    "RARE_METAL_DEPOSITS",
    "ICE_CRYSTALS",
];

/// Facility lists and the strategic label for one system's waypoints.
#[derive(Debug, Clone, Serialize)]
pub struct SystemClassification {
    pub system_symbol: String,
    pub shipyards: Vec<String>,
    pub marketplaces: Vec<String>,
    pub mining_sites: Vec<String>,
    pub jump_gates: Vec<String>,
    pub fuel_stations: Vec<String>,
    pub label: &'static str,
    pub recommendations: Vec<String>,
}

/// Aggregate waypoint traits into facility lists and pick a strategic label.
/// Waypoint order does not affect the result.
pub fn classify_system(system_symbol: &str, waypoints: &[Waypoint]) -> SystemClassification {
    let collect = |trait_symbol: &str| -> Vec<String> {
        waypoints
            .iter()
            .filter(|w| w.has_trait(trait_symbol))
            .map(|w| w.symbol.clone())
            .collect()
    };

    let shipyards = collect("SHIPYARD");
    let marketplaces = collect("MARKETPLACE");
    let jump_gates = collect("JUMP_GATE");
    let fuel_stations = collect("FUEL_STATION");

    // A waypoint with several deposit traits is still one mining site.
    let mining_sites: Vec<String> = waypoints
        .iter()
        .filter(|w| MINING_SITE_TRAITS.iter().any(|t| w.has_trait(t)))
        .map(|w| w.symbol.clone())
        .collect();

    let label = classify_label(
        shipyards.len(),
        marketplaces.len(),
        mining_sites.len(),
        jump_gates.len(),
    );

    let recommendations = recommend::recommend_for_system(shipyards.len(), marketplaces.len());

    SystemClassification {
        system_symbol: system_symbol.to_string(),
        shipyards,
        marketplaces,
        mining_sites,
        jump_gates,
        fuel_stations,
        label,
        recommendations,
    }
}

/// First matching rule wins; later rules are skipped even when also true.
fn classify_label(
    shipyards: usize,
    marketplaces: usize,
    mining_sites: usize,
    jump_gates: usize,
) -> &'static str {
    if shipyards > 0 && marketplaces > 0 {
        "Commercial Hub"
    } else if mining_sites > 3 {
        "Mining System"
    } else if marketplaces > 2 {
        "Trading System"
    } else if shipyards > 0 {
        "Industrial System"
    } else if jump_gates > 0 {
        "Transit System"
    } else {
        "Unknown"
    }
}
