//! `pf-map` — the concrete grid map and its builders.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`grid`]       | `GridMap` and its `pf_core::Map` implementation       |
//! | [`parse`]      | `FromStr` for `GridMap` (`.`, `#`, `S`, `E` text)     |
//! | [`generate`]   | `GridConfig`, `generate`, `random_open_cell`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridConfig`.           |

pub mod generate;
pub mod grid;
pub mod parse;

#[cfg(test)]
mod tests;

pub use generate::{GridConfig, generate, random_open_cell};
pub use grid::GridMap;
