use serde::Serialize;

use crate::advisor::cooldown::CooldownBucket;
use crate::models::ship::{NavStatus, ShipFuel};

/// Boolean preconditions for each game action. These are independent flags,
/// not a state machine: while IN_TRANSIT a ship satisfies none of them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionGates {
    pub can_dock: bool,
    pub can_orbit: bool,
    pub can_navigate: bool,
    pub can_extract: bool,
    pub can_trade: bool,
    pub can_refuel: bool,
}

pub fn evaluate_gates(
    status: NavStatus,
    cooldown: CooldownBucket,
    fuel: &ShipFuel,
    extraction_capable: bool,
) -> ActionGates {
    let can_act = cooldown == CooldownBucket::Ready;
    let docked = status == NavStatus::Docked;
    let in_orbit = status == NavStatus::InOrbit;

    ActionGates {
        can_dock: in_orbit,
        can_orbit: docked,
        can_navigate: in_orbit && can_act,
        can_extract: in_orbit && can_act && extraction_capable,
        can_trade: docked,
        can_refuel: docked && fuel.current < fuel.capacity,
    }
}
