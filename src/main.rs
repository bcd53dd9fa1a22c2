// SpaceTraders Advisor - CLI entry point
// Fetches snapshots from the game API, runs the derivation engine over them,
// and renders the results. All formatting lives here; the engine returns data.

use clap::{Parser, Subcommand};
use spacetraders_advisor::{
    AdvisorConfig, DerivedShipStatus, ShipDataSource, SpaceTradersClient, SystemClassification,
    classify_system, derive_fleet_status, derive_ship_status, load_agent_token,
    verbosity::set_verbosity_level,
};
use spacetraders_advisor::{v_error, v_summary};

#[derive(Parser)]
#[command(name = "spacetraders_advisor", about = "Status and recommendations for a SpaceTraders fleet")]
struct Cli {
    /// Increase output verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print derived data as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Path to the configuration file
    #[arg(long, default_value = "advisor.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive status and recommendations for one ship
    Ship { symbol: String },
    /// Summarize the whole fleet
    Fleet,
    /// Classify a system's waypoints into facilities and a strategic label
    System { symbol: String },
    /// Show what a shipyard has on offer
    Shipyard { system: String, waypoint: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbosity_level(cli.verbose);

    let config = AdvisorConfig::load_or_create(&cli.config)?;
    let token = load_agent_token(&config.api.token_file)?;
    let client = SpaceTradersClient::new(token)?.with_base_url(&config.api.base_url);

    match run(&cli, &config, &client).await {
        Ok(()) => Ok(()),
        Err(e) => {
            v_error!("❌ {}", e);
            Err(e)
        }
    }
}

async fn run(
    cli: &Cli,
    config: &AdvisorConfig,
    client: &SpaceTradersClient,
) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Ship { symbol } => {
            let ship = client.fetch_ship(symbol).await?;
            let status = derive_ship_status(&ship);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                render_ship_status(&status, config);
            }
        }
        Command::Fleet => {
            let ships = client.fetch_fleet().await?;
            let fleet = derive_fleet_status(&ships);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&fleet)?);
            } else {
                v_summary!("🚢 Fleet: {} ships ({} docked, {} in orbit, {} in transit)",
                    fleet.ships.len(), fleet.docked, fleet.in_orbit, fleet.in_transit);
                for status in &fleet.ships {
                    render_ship_line(status, config);
                }
                v_summary!("💡 Fleet recommendations:");
                for rec in &fleet.recommendations {
                    v_summary!("   - {}", rec);
                }
            }
        }
        Command::System { symbol } => {
            let waypoints = client.fetch_system_waypoints(symbol).await?;
            let classification = classify_system(symbol, &waypoints);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                render_system(&classification);
            }
        }
        Command::Shipyard { system, waypoint } => {
            let shipyard = client.fetch_shipyard(system, waypoint).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&shipyard)?);
            } else {
                v_summary!("🏗️  Shipyard {} (modification fee: {})",
                    shipyard.symbol, shipyard.modifications_fee);
                for ship_type in &shipyard.ship_types {
                    v_summary!("   - {}", ship_type.ship_type);
                }
            }
        }
    }
    Ok(())
}

fn render_ship_status(status: &DerivedShipStatus, config: &AdvisorConfig) {
    v_summary!("🚢 {} [{}] at {}", status.ship_symbol, status.nav_status.as_str(), status.waypoint_symbol);
    if let Some(route) = &status.route {
        v_summary!("   🧭 En route {} → {}, arriving {}", route.origin.symbol, route.destination.symbol, route.arrival);
    }
    v_summary!("   ⏱️  Cooldown: {} ({})", status.cooldown.display, status.cooldown.message);
    v_summary!("   📦 Cargo: {:.1}% - {}", status.cargo.percent, status.cargo.message);

    let fuel_marker = if status.fuel.percent < config.display.fuel_warning_threshold * 100.0 {
        "⚠️ "
    } else {
        ""
    };
    v_summary!("   ⛽ Fuel: {}{:.1}%", fuel_marker, status.fuel.percent);

    let capabilities: Vec<String> = status
        .capabilities
        .iter()
        .map(|c| format!("{:?}", c).to_lowercase())
        .collect();
    v_summary!("   🔧 Capabilities: {} (extraction: {})",
        capabilities.join(", "), if status.extraction_capable { "yes" } else { "no" });

    v_summary!("   🚦 Actions: dock={} orbit={} navigate={} extract={} trade={} refuel={}",
        status.gates.can_dock, status.gates.can_orbit, status.gates.can_navigate,
        status.gates.can_extract, status.gates.can_trade, status.gates.can_refuel);

    v_summary!("   💡 Recommendations:");
    for rec in &status.recommendations {
        v_summary!("      - {}", rec);
    }
}

fn render_ship_line(status: &DerivedShipStatus, config: &AdvisorConfig) {
    let fuel_marker = if status.fuel.percent < config.display.fuel_warning_threshold * 100.0 {
        " ⚠️ low fuel"
    } else {
        ""
    };
    v_summary!("   {} [{}] cargo {:.0}%, cooldown {}{}",
        status.ship_symbol, status.nav_status.as_str(),
        status.cargo.percent, status.cooldown.display, fuel_marker);
}

fn render_system(classification: &SystemClassification) {
    v_summary!("🌌 System {} - {}", classification.system_symbol, classification.label);
    v_summary!("   🏗️  Shipyards: {}", classification.shipyards.len());
    v_summary!("   🏪 Marketplaces: {}", classification.marketplaces.len());
    v_summary!("   ⛏️  Mining sites: {}", classification.mining_sites.len());
    v_summary!("   🌀 Jump gates: {}", classification.jump_gates.len());
    v_summary!("   ⛽ Fuel stations: {}", classification.fuel_stations.len());
    v_summary!("   💡 Recommendations:");
    for rec in &classification.recommendations {
        v_summary!("      - {}", rec);
    }
}
