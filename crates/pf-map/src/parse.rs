//! Text form of a grid, mostly for tests and fixtures.
//!
//! One line per row, top row first.  Leading/trailing whitespace on each line
//! is ignored, as are blank lines, so fixtures can be indented raw strings.
//!
//! | Char | Cell                         |
//! |------|------------------------------|
//! | `.`  | passable                     |
//! | `#`  | blocked                      |
//! | `S`  | passable, bound as start     |
//! | `E`  | passable, bound as end       |

use std::str::FromStr;

use pf_core::{PfError, PfResult};

use crate::GridMap;

impl FromStr for GridMap {
    type Err = PfError;

    fn from_str(s: &str) -> PfResult<GridMap> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(PfError::Parse("empty grid".into()));
        };

        let width = first.chars().count();
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(rows.len())) else {
            return Err(PfError::Parse("grid too large".into()));
        };
        let mut map = GridMap::new(w, h)?;

        let mut start = None;
        let mut end = None;

        for (y, row) in (0u32..).zip(&rows) {
            if row.chars().count() != width {
                return Err(PfError::Parse(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, ch) in (0u32..).zip(row.chars()) {
                match ch {
                    '.' => {}
                    '#' => map.set_passable(x, y, false)?,
                    'S' => {
                        if start.replace((x, y)).is_some() {
                            return Err(PfError::Parse("more than one start 'S'".into()));
                        }
                    }
                    'E' => {
                        if end.replace((x, y)).is_some() {
                            return Err(PfError::Parse("more than one end 'E'".into()));
                        }
                    }
                    other => {
                        return Err(PfError::Parse(format!(
                            "unexpected character {other:?} at ({x}, {y})"
                        )));
                    }
                }
            }
        }

        if let Some((x, y)) = start {
            map.set_start(x, y)?;
        }
        if let Some((x, y)) = end {
            map.set_end(x, y)?;
        }
        Ok(map)
    }
}
