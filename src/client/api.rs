use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::models::*;
use crate::models::ship::Shipyard;
use crate::{API_BASE_URL, v_debug};

/// Read-only view of the game API consumed by the advisor's callers.
/// Fronting the fetches with a trait lets tests substitute canned snapshots;
/// the derivation engine itself never touches this.
#[async_trait]
pub trait ShipDataSource {
    async fn fetch_ship(&self, ship_symbol: &str) -> Result<Ship, Box<dyn std::error::Error>>;
    async fn fetch_fleet(&self) -> Result<Vec<Ship>, Box<dyn std::error::Error>>;
    async fn fetch_system_waypoints(
        &self,
        system_symbol: &str,
    ) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>>;
    async fn fetch_shipyard(
        &self,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Shipyard, Box<dyn std::error::Error>>;
}

#[derive(Clone)]
pub struct SpaceTradersClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceTradersClient {
    pub fn new(token: String) -> Result<Self, Box<dyn std::error::Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(SpaceTradersClient {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (for self-hosted servers or stubs).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn get_json(&self, url: &str) -> Result<String, Box<dyn std::error::Error>> {
        v_debug!("🌐 GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("API request failed with status {}: {}", status, error_body).into());
        }

        Ok(response.text().await?)
    }

    // Ship operations
    pub async fn get_ship(&self, ship_symbol: &str) -> Result<Ship, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}", self.base_url, ship_symbol);
        let body = self.get_json(&url).await?;
        let ship_response: ShipResponse = serde_json::from_str(&body)?;
        Ok(ship_response.data)
    }

    pub async fn get_ships(&self) -> Result<Vec<Ship>, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships", self.base_url);
        let body = self.get_json(&url).await?;
        let ships_response: ShipsResponse = serde_json::from_str(&body)?;
        Ok(ships_response.data)
    }

    // Waypoint operations
    pub async fn get_system_waypoints(
        &self,
        system_symbol: &str,
    ) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>> {
        let url = format!("{}/systems/{}/waypoints", self.base_url, system_symbol);
        let body = self.get_json(&url).await?;
        let waypoints_response: WaypointsResponse = serde_json::from_str(&body)?;
        Ok(waypoints_response.data)
    }

    // Shipyard operations
    pub async fn get_shipyard(
        &self,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Shipyard, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/systems/{}/waypoints/{}/shipyard",
            self.base_url, system_symbol, waypoint_symbol
        );
        let body = self.get_json(&url).await?;
        let shipyard_response: ShipyardResponse = serde_json::from_str(&body)?;
        Ok(shipyard_response.data)
    }
}

#[async_trait]
impl ShipDataSource for SpaceTradersClient {
    async fn fetch_ship(&self, ship_symbol: &str) -> Result<Ship, Box<dyn std::error::Error>> {
        self.get_ship(ship_symbol).await
    }

    async fn fetch_fleet(&self) -> Result<Vec<Ship>, Box<dyn std::error::Error>> {
        self.get_ships().await
    }

    async fn fetch_system_waypoints(
        &self,
        system_symbol: &str,
    ) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>> {
        self.get_system_waypoints(system_symbol).await
    }

    async fn fetch_shipyard(
        &self,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Shipyard, Box<dyn std::error::Error>> {
        self.get_shipyard(system_symbol, waypoint_symbol).await
    }
}
