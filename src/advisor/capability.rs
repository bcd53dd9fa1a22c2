use serde::Serialize;

use crate::models::ship::ShipMount;

/// Equipment-derived eligibility for a category of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Mining,
    Scanning,
    Surveying,
    Combat,
    Trading,
}

/// Mount-symbol substrings mapped to general capabilities. Matching is
/// case-insensitive substring containment against the mount symbol.
pub const CAPABILITY_RULES: &[(&str, Capability)] = &[
    ("MINING", Capability::Mining),
    ("LASER", Capability::Mining),
    ("SENSOR", Capability::Scanning),
    ("SURVEYOR", Capability::Surveying),
    ("WEAPON", Capability::Combat),
];

/// Mount-symbol substrings that gate the extract action. Deliberately a
/// separate table from CAPABILITY_RULES: a siphon-equipped ship can extract
/// gas resources without being flagged Mining in the capability summary.
/// Do not merge the two tables.
pub const EXTRACTION_MOUNTS: &[&str] = &["MINING", "LASER", "SIPHON"];

/// General capability set for a mount loadout, in rule-table order.
/// Trading requires no equipment and is always present.
pub fn ship_capabilities(mounts: &[ShipMount]) -> Vec<Capability> {
    let mut capabilities = Vec::new();

    for (pattern, capability) in CAPABILITY_RULES {
        if capabilities.contains(capability) {
            continue;
        }
        if mounts.iter().any(|m| mount_matches(m, pattern)) {
            capabilities.push(*capability);
        }
    }

    capabilities.push(Capability::Trading);
    capabilities
}

/// Whether this loadout can run the extract action.
pub fn is_extraction_capable(mounts: &[ShipMount]) -> bool {
    EXTRACTION_MOUNTS
        .iter()
        .any(|pattern| mounts.iter().any(|m| mount_matches(m, pattern)))
}

fn mount_matches(mount: &ShipMount, pattern: &str) -> bool {
    mount.symbol.to_uppercase().contains(pattern)
}
