//! `pf-search` — A* over the [`pf_core::Map`] abstraction.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`finder`]     | `PathFinder`, `generate_roads`, `SearchStats`             |
//! | [`path`]       | `Path` (end → start node sequence)                        |
//! | [`open_set`]   | binary-heap open set with deterministic tie-breaking      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_map::GridMap;
//! use pf_search::generate_roads;
//!
//! let mut map = GridMap::new(8, 8)?;
//! map.set_start(0, 0)?;
//! map.set_end(7, 7)?;
//! let path = generate_roads(&map)?;
//! if path.is_empty() {
//!     println!("no path");
//! }
//! ```

pub mod finder;
pub mod open_set;
pub mod path;


pub use finder::{PathFinder, SearchStats, generate_roads};
pub use path::Path;
