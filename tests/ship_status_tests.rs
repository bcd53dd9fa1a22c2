use chrono::{Duration, TimeZone, Utc};
use spacetraders_advisor::advisor::capability::{Capability, is_extraction_capable, ship_capabilities};
use spacetraders_advisor::advisor::cooldown::{
    CooldownBucket, classify_cooldown, format_remaining, time_until_ready,
};
use spacetraders_advisor::advisor::gates::evaluate_gates;
use spacetraders_advisor::advisor::recommend;
use spacetraders_advisor::advisor::utilization::{UtilizationBucket, classify_utilization};
use spacetraders_advisor::{NavStatus, Ship, derive_fleet_status, derive_ship_status};
use spacetraders_advisor::models::ship::{
    CargoItem, ShipCargo, ShipCooldown, ShipFuel, ShipMount, ShipNav, ShipRoute, ShipRouteWaypoint,
};

/// Build a ship snapshot for rule tests.
fn test_ship(
    status: NavStatus,
    cooldown_remaining: i32,
    fuel: (i32, i32),
    cargo: (i32, i32),
    mounts: &[&str],
) -> Ship {
    Ship {
        symbol: "TESTER-1".to_string(),
        nav: ShipNav {
            system_symbol: "X1-TEST".to_string(),
            waypoint_symbol: "X1-TEST-A1".to_string(),
            route: None,
            status,
            flight_mode: "CRUISE".to_string(),
        },
        cooldown: ShipCooldown {
            ship_symbol: "TESTER-1".to_string(),
            total_seconds: 600,
            remaining_seconds: cooldown_remaining,
            expiration: None,
        },
        mounts: mounts
            .iter()
            .map(|symbol| ShipMount {
                symbol: symbol.to_string(),
                name: None,
                strength: Some(10),
            })
            .collect(),
        cargo: ShipCargo {
            capacity: cargo.1,
            units: cargo.0,
            inventory: if cargo.0 > 0 {
                vec![CargoItem {
                    symbol: "IRON_ORE".to_string(),
                    name: "Iron Ore".to_string(),
                    units: cargo.0,
                }]
            } else {
                Vec::new()
            },
        },
        fuel: ShipFuel {
            current: fuel.0,
            capacity: fuel.1,
        },
    }
}

// --- Cooldown classifier ---

#[test]
fn test_cooldown_remaining_zero_is_ready_regardless_of_total() {
    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (0, 40), &[]);
    let report = classify_cooldown(&ship.cooldown);
    assert_eq!(report.bucket, CooldownBucket::Ready);
    assert_eq!(report.message, "Ship is ready for actions");

    // Negative remaining is also ready, even with a large total
    let ship = test_ship(NavStatus::InOrbit, -5, (100, 100), (0, 40), &[]);
    assert_eq!(classify_cooldown(&ship.cooldown).bucket, CooldownBucket::Ready);
}

#[test]
fn test_cooldown_45s_is_short_with_seconds_display() {
    let ship = test_ship(NavStatus::InOrbit, 45, (100, 100), (0, 40), &[]);
    let report = classify_cooldown(&ship.cooldown);
    assert_eq!(report.bucket, CooldownBucket::Short);
    assert_eq!(report.display, "45s");
    assert_eq!(report.message, "Short cooldown active - almost ready");
}

#[test]
fn test_cooldown_125s_is_moderate_with_minute_display() {
    let ship = test_ship(NavStatus::InOrbit, 125, (100, 100), (0, 40), &[]);
    let report = classify_cooldown(&ship.cooldown);
    assert_eq!(report.bucket, CooldownBucket::Moderate);
    assert_eq!(report.display, "2m 5s");
}

#[test]
fn test_cooldown_bucket_boundaries() {
    let at = |remaining| {
        let ship = test_ship(NavStatus::InOrbit, remaining, (100, 100), (0, 40), &[]);
        classify_cooldown(&ship.cooldown).bucket
    };
    assert_eq!(at(1), CooldownBucket::Short);
    assert_eq!(at(60), CooldownBucket::Short);
    assert_eq!(at(61), CooldownBucket::Moderate);
    assert_eq!(at(300), CooldownBucket::Moderate);
    assert_eq!(at(301), CooldownBucket::Long);
}

#[test]
fn test_format_remaining() {
    assert_eq!(format_remaining(0), "0s");
    assert_eq!(format_remaining(59), "59s");
    assert_eq!(format_remaining(60), "1m 0s");
    assert_eq!(format_remaining(125), "2m 5s");
    assert_eq!(format_remaining(-10), "0s");
}

#[test]
fn test_time_until_ready_future_expiration() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let remaining = time_until_ready("2024-03-01T12:01:30Z", now).expect("timestamp should parse");
    assert_eq!(remaining, 90);
}

#[test]
fn test_time_until_ready_past_expiration_is_zero() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let remaining = time_until_ready("2024-03-01T11:00:00Z", now).expect("timestamp should parse");
    assert_eq!(remaining, 0);
}

#[test]
fn test_time_until_ready_rejects_garbage_timestamp() {
    let now = Utc::now();
    assert!(time_until_ready("not-a-timestamp", now).is_err());
    assert!(time_until_ready("", now).is_err());
}

// --- Utilization classifier ---

#[test]
fn test_utilization_zero_capacity_is_empty_not_a_division_error() {
    let report = classify_utilization(0, 0);
    assert_eq!(report.bucket, UtilizationBucket::Empty);
    assert_eq!(report.percent, 0.0);

    // Even with nonzero units, zero capacity stays at 0% by policy
    let report = classify_utilization(5, 0);
    assert_eq!(report.bucket, UtilizationBucket::Empty);
    assert_eq!(report.percent, 0.0);
}

#[test]
fn test_utilization_full_is_exactly_100() {
    let report = classify_utilization(40, 40);
    assert_eq!(report.bucket, UtilizationBucket::Full);
    assert_eq!(report.percent, 100.0);
    assert_eq!(report.message, "at maximum capacity");
}

#[test]
fn test_utilization_overfull_is_not_clamped() {
    let report = classify_utilization(50, 40);
    assert_eq!(report.bucket, UtilizationBucket::Full);
    assert!(report.percent > 100.0);
}

#[test]
fn test_utilization_buckets_and_messages() {
    assert_eq!(classify_utilization(0, 40).bucket, UtilizationBucket::Empty);
    assert_eq!(classify_utilization(0, 40).message, "hold is empty");

    let low = classify_utilization(4, 40); // 10%
    assert_eq!(low.bucket, UtilizationBucket::Low);
    assert_eq!(low.message, "plenty of space");

    let moderate = classify_utilization(10, 40); // 25%, lower bound of moderate
    assert_eq!(moderate.bucket, UtilizationBucket::Moderate);
    assert_eq!(moderate.message, "good capacity remaining");

    let high = classify_utilization(30, 40); // 75%, lower bound of high
    assert_eq!(high.bucket, UtilizationBucket::High);
    assert_eq!(high.message, "nearly full");
}

// --- Capability extractor ---

#[test]
fn test_mining_capability_from_mining_and_laser_mounts() {
    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (0, 40), &["MOUNT_MINING_LASER_I"]);
    let capabilities = ship_capabilities(&ship.mounts);
    assert!(capabilities.contains(&Capability::Mining));

    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (0, 40), &["MOUNT_LASER_CANNON_I"]);
    assert!(ship_capabilities(&ship.mounts).contains(&Capability::Mining));
}

#[test]
fn test_capability_match_is_case_insensitive() {
    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (0, 40), &["mount_mining_laser_i"]);
    assert!(ship_capabilities(&ship.mounts).contains(&Capability::Mining));
    assert!(is_extraction_capable(&ship.mounts));
}

#[test]
fn test_sensor_surveyor_weapon_capabilities() {
    let ship = test_ship(
        NavStatus::InOrbit,
        0,
        (100, 100),
        (0, 40),
        &["MOUNT_SENSOR_ARRAY_I", "MOUNT_SURVEYOR_I", "MOUNT_MISSILE_WEAPON_I"],
    );
    let capabilities = ship_capabilities(&ship.mounts);
    assert!(capabilities.contains(&Capability::Scanning));
    assert!(capabilities.contains(&Capability::Surveying));
    assert!(capabilities.contains(&Capability::Combat));
    assert!(!capabilities.contains(&Capability::Mining));
}

#[test]
fn test_trading_capability_needs_no_mounts() {
    let ship = test_ship(NavStatus::Docked, 0, (100, 100), (0, 40), &[]);
    let capabilities = ship_capabilities(&ship.mounts);
    assert_eq!(capabilities, vec![Capability::Trading]);
}

#[test]
fn test_siphon_only_loadout_extracts_without_mining_flag() {
    // A siphon ship can extract gas but is NOT flagged as mining; the two
    // rule tables are intentionally different and must stay that way.
    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (0, 40), &["MOUNT_GAS_SIPHON_I"]);

    assert!(is_extraction_capable(&ship.mounts));
    assert!(!ship_capabilities(&ship.mounts).contains(&Capability::Mining));

    let status = derive_ship_status(&ship);
    assert!(status.extraction_capable);
    assert!(status.gates.can_extract, "siphon ship in orbit with ready cooldown can extract");
}

// --- Action gates ---

#[test]
fn test_gates_docked_ship() {
    let ship = test_ship(NavStatus::Docked, 0, (50, 100), (0, 40), &["MOUNT_MINING_LASER_I"]);
    let gates = evaluate_gates(ship.nav.status, CooldownBucket::Ready, &ship.fuel, true);
    assert!(gates.can_orbit);
    assert!(gates.can_trade);
    assert!(gates.can_refuel);
    assert!(!gates.can_dock);
    assert!(!gates.can_navigate);
    assert!(!gates.can_extract);
}

#[test]
fn test_gates_in_transit_ship_can_do_nothing() {
    let ship = test_ship(NavStatus::InTransit, 0, (50, 100), (0, 40), &["MOUNT_MINING_LASER_I"]);
    let gates = evaluate_gates(ship.nav.status, CooldownBucket::Ready, &ship.fuel, true);
    assert!(!gates.can_dock);
    assert!(!gates.can_orbit);
    assert!(!gates.can_navigate);
    assert!(!gates.can_extract);
    assert!(!gates.can_trade);
    assert!(!gates.can_refuel);
}

#[test]
fn test_gates_dock_and_orbit_never_both_true() {
    for status in [NavStatus::Docked, NavStatus::InOrbit, NavStatus::InTransit, NavStatus::Unknown] {
        let ship = test_ship(status, 0, (50, 100), (0, 40), &[]);
        let gates = evaluate_gates(status, CooldownBucket::Ready, &ship.fuel, false);
        assert!(!(gates.can_dock && gates.can_orbit), "{:?} allows both dock and orbit", status);
    }
}

#[test]
fn test_gates_cooldown_blocks_navigate_and_extract_but_not_dock() {
    let ship = test_ship(NavStatus::InOrbit, 120, (50, 100), (0, 40), &["MOUNT_MINING_LASER_I"]);
    let gates = evaluate_gates(ship.nav.status, CooldownBucket::Moderate, &ship.fuel, true);
    assert!(gates.can_dock);
    assert!(!gates.can_navigate);
    assert!(!gates.can_extract);
}

#[test]
fn test_gates_refuel_requires_missing_fuel() {
    let ship = test_ship(NavStatus::Docked, 0, (100, 100), (0, 40), &[]);
    let gates = evaluate_gates(ship.nav.status, CooldownBucket::Ready, &ship.fuel, false);
    assert!(!gates.can_refuel, "full tank has nothing to refuel");
}

// --- Recommendations ---

#[test]
fn test_docked_empty_hold_recommends_buying() {
    let ship = test_ship(NavStatus::Docked, 0, (100, 100), (0, 40), &[]);
    let status = derive_ship_status(&ship);
    assert!(
        status.recommendations.iter().any(|r| r == "empty hold, good time to buy goods"),
        "recommendations were: {:?}",
        status.recommendations
    );
}

#[test]
fn test_recommendations_never_empty() {
    // A healthy in-transit ship matches no advisory rule
    let ship = test_ship(NavStatus::InTransit, 0, (100, 100), (10, 40), &[]);
    let status = derive_ship_status(&ship);
    assert_eq!(status.recommendations, vec![recommend::SHIP_ALL_CLEAR.to_string()]);
}

#[test]
fn test_recommendation_order_fuel_cargo_cooldown() {
    let ship = test_ship(NavStatus::InOrbit, 45, (10, 100), (40, 40), &[]);
    let status = derive_ship_status(&ship);
    assert_eq!(
        status.recommendations,
        vec![
            "low on fuel, find a fuel station".to_string(),
            "cargo full, sell goods".to_string(),
            "Short cooldown active - almost ready".to_string(),
        ]
    );
}

#[test]
fn test_ready_miner_in_orbit_gets_mining_recommendation() {
    let ship = test_ship(NavStatus::InOrbit, 0, (100, 100), (5, 40), &["MOUNT_MINING_LASER_I"]);
    let status = derive_ship_status(&ship);
    assert!(status.recommendations.iter().any(|r| r == "ready for mining"));
}

#[test]
fn test_low_fuel_rule_skipped_for_zero_capacity_tank() {
    // Probes have no fuel tank; they are not "low on fuel"
    let ship = test_ship(NavStatus::InOrbit, 0, (0, 0), (10, 40), &[]);
    let status = derive_ship_status(&ship);
    assert!(!status.recommendations.iter().any(|r| r.contains("low on fuel")));
}

// --- Fleet derivation ---

#[test]
fn test_fleet_counts_and_docked_suggestion() {
    let ships = vec![
        test_ship(NavStatus::Docked, 0, (100, 100), (5, 40), &[]),
        test_ship(NavStatus::Docked, 0, (100, 100), (5, 40), &[]),
        test_ship(NavStatus::InOrbit, 0, (100, 100), (5, 40), &[]),
        test_ship(NavStatus::InTransit, 0, (100, 100), (5, 40), &[]),
    ];
    let fleet = derive_fleet_status(&ships);
    assert_eq!(fleet.docked, 2);
    assert_eq!(fleet.in_orbit, 1);
    assert_eq!(fleet.in_transit, 1);
    assert!(
        fleet.recommendations.iter().any(|r| r.contains("consider moving some to orbit")),
        "fleet recommendations were: {:?}",
        fleet.recommendations
    );
}

#[test]
fn test_fleet_recommendations_never_empty() {
    let ships = vec![test_ship(NavStatus::InTransit, 0, (100, 100), (5, 40), &[])];
    let fleet = derive_fleet_status(&ships);
    assert_eq!(fleet.recommendations, vec![recommend::FLEET_ALL_CLEAR.to_string()]);
}

// --- Derivation is a pure function of the snapshot ---

#[test]
fn test_same_snapshot_same_output() {
    let ship = test_ship(NavStatus::InOrbit, 45, (10, 100), (40, 40), &["MOUNT_MINING_LASER_I"]);
    let first = derive_ship_status(&ship);
    let second = derive_ship_status(&ship);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_unknown_nav_status_does_not_crash_derivation() {
    let raw = r#"{
        "symbol": "TESTER-1",
        "nav": {
            "systemSymbol": "X1-TEST",
            "waypointSymbol": "X1-TEST-A1",
            "route": null,
            "status": "WARPING_SOMEWHERE_NEW",
            "flightMode": "CRUISE"
        },
        "cooldown": {"shipSymbol": "TESTER-1", "totalSeconds": 0, "remainingSeconds": 0, "expiration": null},
        "mounts": [],
        "cargo": {"capacity": 40, "units": 0, "inventory": []},
        "fuel": {"current": 100, "capacity": 100}
    }"#;
    let ship: Ship = serde_json::from_str(raw).expect("unknown status should still deserialize");
    assert_eq!(ship.nav.status, NavStatus::Unknown);

    let status = derive_ship_status(&ship);
    assert!(!status.gates.can_dock);
    assert!(!status.gates.can_orbit);
    assert!(!status.recommendations.is_empty());
}

#[test]
fn test_route_surfaces_only_while_in_transit() {
    let route = ShipRoute {
        destination: ShipRouteWaypoint {
            symbol: "X1-TEST-B2".to_string(),
            waypoint_type: "PLANET".to_string(),
            system_symbol: "X1-TEST".to_string(),
            x: 10,
            y: 20,
        },
        origin: ShipRouteWaypoint {
            symbol: "X1-TEST-A1".to_string(),
            waypoint_type: "MOON".to_string(),
            system_symbol: "X1-TEST".to_string(),
            x: 0,
            y: 0,
        },
        departure_time: "2024-03-01T12:00:00Z".to_string(),
        arrival: "2024-03-01T12:30:00Z".to_string(),
    };

    let mut ship = test_ship(NavStatus::InTransit, 0, (80, 100), (0, 40), &[]);
    ship.nav.route = Some(route.clone());
    let status = derive_ship_status(&ship);
    assert_eq!(
        status.route.as_ref().map(|r| r.destination.symbol.as_str()),
        Some("X1-TEST-B2")
    );

    // A docked ship's stale route is not part of its derived status
    let mut ship = test_ship(NavStatus::Docked, 0, (80, 100), (0, 40), &[]);
    ship.nav.route = Some(route);
    assert!(derive_ship_status(&ship).route.is_none());
}

#[test]
fn test_time_until_ready_is_relative_to_passed_now() {
    let expiration = "2024-03-01T12:00:00Z";
    let before = Utc.with_ymd_and_hms(2024, 3, 1, 11, 59, 0).unwrap();
    let after = before + Duration::minutes(2);
    assert_eq!(time_until_ready(expiration, before).unwrap(), 60);
    assert_eq!(time_until_ready(expiration, after).unwrap(), 0);
}
