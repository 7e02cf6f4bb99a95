//! `pf-core` — foundational types for the grid pathfinder workspace.
//!
//! This crate is a dependency of every other `pf-*` crate.  It has no `pf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `NodeId`                                               |
//! | [`coord`]     | `Coord`, `Direction`, Manhattan distance               |
//! | [`map`]       | `Map` trait, the only surface the search consumes      |
//! | [`rng`]       | `MapRng` (seeded, for grid generation)                 |
//! | [`error`]     | `PfError`, `PfResult`, `Endpoint`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `NodeId` and `Coord`.    |

pub mod coord;
pub mod error;
pub mod ids;
pub mod map;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Coord, Direction};
pub use error::{Endpoint, PfError, PfResult};
pub use ids::NodeId;
pub use map::Map;
pub use rng::MapRng;
