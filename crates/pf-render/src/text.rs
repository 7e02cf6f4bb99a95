//! Grid-to-text renderer.
//!
//! One line per row, top row (`y = 0`) first; cells separated by a single
//! space.  When a cell qualifies for several glyphs the most specific wins:
//! end, then start, then path, then open/blocked.

use std::io::Write;

use pf_core::{Coord, Map, PfResult};
use pf_map::GridMap;
use pf_search::Path;

use crate::Glyphs;

/// Draws a [`GridMap`] and, optionally, a [`Path`] across it.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    glyphs: Glyphs,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Render to a `String`.  `path` should come from a search over `map`;
    /// node ids outside the grid are ignored.
    pub fn render(&self, map: &GridMap, path: Option<&Path>) -> String {
        let mut on_path = vec![false; map.node_count()];
        for node in path.into_iter().flat_map(|p| p.nodes()) {
            if let Some(slot) = on_path.get_mut(node.index()) {
                *slot = true;
            }
        }

        let mut out = String::with_capacity(map.node_count() * 4 + map.height() as usize);
        for y in 0..map.height() {
            for x in 0..map.width() {
                if x > 0 {
                    out.push(' ');
                }
                out.push(self.glyph_at(map, &on_path, Coord::new(x, y)));
            }
            out.push('\n');
        }
        out
    }

    /// Render straight into `sink`.
    pub fn render_to<W: Write>(&self, map: &GridMap, path: Option<&Path>, sink: &mut W) -> PfResult<()> {
        sink.write_all(self.render(map, path).as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn glyph_at(&self, map: &GridMap, on_path: &[bool], here: Coord) -> char {
        if map.end() == Some(here) {
            return self.glyphs.end;
        }
        if map.start() == Some(here) {
            return self.glyphs.start;
        }
        match map.node_at(here.x, here.y) {
            Ok(id) if on_path[id.index()] => self.glyphs.path,
            Ok(_) if map.is_passable(here.x, here.y).unwrap_or(false) => self.glyphs.open,
            _ => self.glyphs.blocked,
        }
    }
}
