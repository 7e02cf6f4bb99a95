//! `pf-render` — text output for grids and paths.
//!
//! The search has no dependency on this crate; rendering only consumes the
//! `Path` a search returns.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_render::{Glyphs, TextRenderer};
//!
//! let renderer = TextRenderer::new(Glyphs::UNICODE);
//! print!("{}", renderer.render(&map, Some(&path)));
//! ```

pub mod glyphs;
pub mod text;


pub use glyphs::Glyphs;
pub use text::TextRenderer;
