use serde::{Deserialize, Serialize};

/// Point-in-time copy of a ship's state. Constructed fresh per request from a
/// gateway fetch and discarded afterwards; nothing here is retained or mutated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Ship {
    pub symbol: String,
    pub nav: ShipNav,
    pub cooldown: ShipCooldown,
    pub mounts: Vec<ShipMount>,
    pub cargo: ShipCargo,
    pub fuel: ShipFuel,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipNav {
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    #[serde(rename = "waypointSymbol")]
    pub waypoint_symbol: String,
    pub route: Option<ShipRoute>,
    pub status: NavStatus,
    #[serde(rename = "flightMode")]
    pub flight_mode: String,
}

/// Mutually exclusive ship navigation states. Upstream may introduce values
/// this crate has not been told about; those land on Unknown instead of
/// failing deserialization, and simply match no classification rule.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavStatus {
    Docked,
    InOrbit,
    InTransit,
    #[serde(other)]
    Unknown,
}

impl NavStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavStatus::Docked => "DOCKED",
            NavStatus::InOrbit => "IN_ORBIT",
            NavStatus::InTransit => "IN_TRANSIT",
            NavStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipRoute {
    pub destination: ShipRouteWaypoint,
    pub origin: ShipRouteWaypoint,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
    pub arrival: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipRouteWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipMount {
    pub symbol: String,
    pub name: Option<String>,
    pub strength: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipCooldown {
    #[serde(rename = "shipSymbol")]
    pub ship_symbol: String,
    #[serde(rename = "totalSeconds")]
    pub total_seconds: i32,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: i32,
    pub expiration: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipCargo {
    pub capacity: i32,
    pub units: i32,
    pub inventory: Vec<CargoItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CargoItem {
    pub symbol: String,
    pub name: String,
    pub units: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipFuel {
    pub current: i32,
    pub capacity: i32,
}

// Shipyard-related structures
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Shipyard {
    pub symbol: String,
    #[serde(rename = "shipTypes")]
    pub ship_types: Vec<ShipyardShipType>,
    #[serde(rename = "modificationsFee")]
    pub modifications_fee: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShipyardShipType {
    #[serde(rename = "type")]
    pub ship_type: String,
}
