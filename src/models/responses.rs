use serde::Deserialize;

// API response wrappers

#[derive(Debug, Deserialize)]
pub struct ShipResponse {
    pub data: crate::models::Ship,
}

#[derive(Debug, Deserialize)]
pub struct ShipsResponse {
    pub data: Vec<crate::models::Ship>,
}

#[derive(Debug, Deserialize)]
pub struct WaypointsResponse {
    pub data: Vec<crate::models::Waypoint>,
}

#[derive(Debug, Deserialize)]
pub struct ShipyardResponse {
    pub data: crate::models::ship::Shipyard,
}
