// Snapshot value types for SpaceTraders entities
// Deserialized once at the gateway boundary, then treated as immutable

pub mod ship;
pub mod waypoint;
pub mod responses;

pub use ship::*;
pub use waypoint::*;
pub use responses::*;
