// Client module - Game API gateway
pub mod api;

pub use api::{ShipDataSource, SpaceTradersClient};

use std::fs;

/// Read the agent token from a token file.
pub fn load_agent_token(token_file: &str) -> Result<String, Box<dyn std::error::Error>> {
    let token = fs::read_to_string(token_file)
        .map_err(|e| format!("Failed to read {}: {}", token_file, e))?
        .trim()
        .to_string();
    Ok(token)
}
