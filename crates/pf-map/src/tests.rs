//! Unit tests for pf-map.

#[cfg(test)]
mod helpers {
    use pf_core::{Coord, Map, NodeId};

    use crate::GridMap;

    /// Neighbours of `(x, y)` as coordinates, in the order the map yields them.
    pub fn neighbours(map: &GridMap, x: u32, y: u32) -> Vec<Coord> {
        let mut out: Vec<NodeId> = Vec::new();
        map.adjacent_nodes(map.node_at(x, y).unwrap(), &mut out);
        out.into_iter().map(|n| map.coord(n)).collect()
    }
}

// ── Construction & lookup ─────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use pf_core::{Coord, Map, NodeId, PfError};

    use crate::GridMap;

    #[test]
    fn new_is_all_passable() {
        let map = GridMap::new(4, 3).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert_eq!(map.node_count(), 12);
        assert_eq!(map.passable_count(), 12);
        assert!(map.start().is_none());
        assert!(map.end().is_none());
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            GridMap::new(0, 5),
            Err(PfError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(GridMap::new(5, 0).is_err());
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        assert!(matches!(
            GridMap::new(u32::MAX, 2),
            Err(PfError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn node_ids_are_row_major() {
        let map = GridMap::new(4, 3).unwrap();
        assert_eq!(map.node_at(0, 0).unwrap(), NodeId(0));
        assert_eq!(map.node_at(3, 0).unwrap(), NodeId(3));
        assert_eq!(map.node_at(1, 2).unwrap(), NodeId(9));
        assert_eq!(map.coord(NodeId(9)), Coord::new(1, 2));
    }

    #[test]
    fn lookup_out_of_bounds() {
        let map = GridMap::new(4, 3).unwrap();
        assert!(matches!(
            map.node_at(4, 0),
            Err(PfError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        ));
        assert!(map.is_passable(0, 3).is_err());
        assert!(!map.contains(4, 0));
        assert!(map.contains(3, 2));
    }

    #[test]
    fn open_cells_skip_blocked() {
        let mut map = GridMap::new(2, 2).unwrap();
        map.set_passable(1, 0, false).unwrap();
        let open: Vec<Coord> = map.open_cells().collect();
        assert_eq!(open, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
        assert_eq!(map.passable_count(), 3);
    }
}

// ── Endpoints ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod endpoints {
    use pf_core::{Coord, Endpoint, Map, PfError};

    use crate::GridMap;

    #[test]
    fn unset_endpoints_are_configuration_errors() {
        let map = GridMap::new(3, 3).unwrap();
        assert!(matches!(map.start_node(), Err(PfError::EndpointUnset(Endpoint::Start))));
        assert!(matches!(map.end_node(), Err(PfError::EndpointUnset(Endpoint::End))));
    }

    #[test]
    fn set_and_read_back() {
        let mut map = GridMap::new(3, 3).unwrap();
        map.set_start(0, 1).unwrap();
        map.set_end(2, 2).unwrap();
        assert_eq!(map.start(), Some(Coord::new(0, 1)));
        assert_eq!(map.end(), Some(Coord::new(2, 2)));
        assert_eq!(map.start_node().unwrap(), map.node_at(0, 1).unwrap());
        assert_eq!(map.end_node().unwrap(), map.node_at(2, 2).unwrap());
    }

    #[test]
    fn rebinding_moves_endpoint() {
        let mut map = GridMap::new(3, 3).unwrap();
        map.set_start(0, 0).unwrap();
        map.set_start(1, 1).unwrap();
        assert_eq!(map.start(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_endpoint() {
        let mut map = GridMap::new(3, 3).unwrap();
        assert!(matches!(map.set_start(3, 0), Err(PfError::OutOfBounds { .. })));
        assert!(matches!(map.set_end(0, 7), Err(PfError::OutOfBounds { .. })));
        assert!(map.start().is_none());
        assert!(map.end().is_none());
    }

    #[test]
    fn endpoint_on_blocked_cell() {
        let mut map = GridMap::new(3, 3).unwrap();
        map.set_passable(1, 1, false).unwrap();
        assert!(matches!(map.set_start(1, 1), Err(PfError::Blocked { x: 1, y: 1 })));
        assert!(matches!(map.set_end(1, 1), Err(PfError::Blocked { .. })));
    }

    #[test]
    fn cannot_block_a_bound_endpoint() {
        let mut map = GridMap::new(3, 3).unwrap();
        map.set_start(0, 0).unwrap();
        map.set_end(2, 2).unwrap();
        assert!(map.set_passable(0, 0, false).is_err());
        assert!(map.set_passable(2, 2, false).is_err());
        assert!(map.is_passable(0, 0).unwrap());
        // Re-opening an endpoint cell is harmless.
        map.set_passable(2, 2, true).unwrap();
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use pf_core::{Coord, Map};

    use super::helpers::neighbours;
    use crate::GridMap;

    #[test]
    fn interior_cell_order_is_up_down_left_right() {
        let map = GridMap::new(3, 3).unwrap();
        assert_eq!(
            neighbours(&map, 1, 1),
            vec![Coord::new(1, 0), Coord::new(1, 2), Coord::new(0, 1), Coord::new(2, 1)]
        );
    }

    #[test]
    fn corners_clip_to_bounds() {
        let map = GridMap::new(3, 3).unwrap();
        assert_eq!(neighbours(&map, 0, 0), vec![Coord::new(0, 1), Coord::new(1, 0)]);
        assert_eq!(neighbours(&map, 2, 2), vec![Coord::new(2, 1), Coord::new(1, 2)]);
    }

    #[test]
    fn blocked_cells_excluded() {
        let mut map = GridMap::new(3, 3).unwrap();
        map.set_passable(1, 0, false).unwrap();
        map.set_passable(2, 1, false).unwrap();
        assert_eq!(neighbours(&map, 1, 1), vec![Coord::new(1, 2), Coord::new(0, 1)]);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let map = GridMap::new(1, 1).unwrap();
        assert!(neighbours(&map, 0, 0).is_empty());
    }

    #[test]
    fn appends_without_clearing() {
        let map = GridMap::new(2, 1).unwrap();
        let mut out = vec![map.node_at(0, 0).unwrap()];
        map.adjacent_nodes(map.node_at(0, 0).unwrap(), &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn heuristic_is_manhattan() {
        let map = GridMap::new(5, 5).unwrap();
        let a = map.node_at(0, 4).unwrap();
        let b = map.node_at(3, 1).unwrap();
        assert_eq!(map.heuristic(a, b), 6);
        assert_eq!(map.heuristic(b, a), 6);
        assert_eq!(map.heuristic(a, a), 0);
    }
}

// ── Text parser ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use pf_core::{Coord, PfError};

    use crate::GridMap;

    #[test]
    fn parses_cells_and_endpoints() {
        let map: GridMap = "
            S.#
            .#.
            ..E
        "
        .parse()
        .unwrap();
        assert_eq!((map.width(), map.height()), (3, 3));
        assert_eq!(map.start(), Some(Coord::new(0, 0)));
        assert_eq!(map.end(), Some(Coord::new(2, 2)));
        assert!(!map.is_passable(2, 0).unwrap());
        assert!(!map.is_passable(1, 1).unwrap());
        assert_eq!(map.passable_count(), 7);
    }

    #[test]
    fn endpoints_optional() {
        let map: GridMap = "..\n..".parse().unwrap();
        assert!(map.start().is_none());
        assert!(map.end().is_none());
    }

    #[test]
    fn empty_input() {
        assert!(matches!("  \n \n".parse::<GridMap>(), Err(PfError::Parse(_))));
    }

    #[test]
    fn ragged_rows() {
        let err = "...\n..".parse::<GridMap>().unwrap_err();
        assert!(matches!(err, PfError::Parse(ref m) if m.contains("row 1")));
    }

    #[test]
    fn unknown_character() {
        assert!(matches!(".x.".parse::<GridMap>(), Err(PfError::Parse(_))));
    }

    #[test]
    fn duplicate_endpoints() {
        assert!(matches!("S.S".parse::<GridMap>(), Err(PfError::Parse(_))));
        assert!(matches!("E\nE".parse::<GridMap>(), Err(PfError::Parse(_))));
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate {
    use pf_core::{MapRng, PfError};

    use crate::{GridConfig, GridMap, generate, random_open_cell};

    #[test]
    fn default_config() {
        let c = GridConfig::default();
        assert_eq!((c.width, c.height), (8, 8));
        assert_eq!(c.obstacle_probability, 0.2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn same_seed_same_grid() {
        let cfg = GridConfig { width: 16, height: 12, ..GridConfig::default() };
        assert_eq!(generate(&cfg).unwrap(), generate(&cfg).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let a = GridConfig { width: 32, height: 32, seed: 1, ..GridConfig::default() };
        let b = GridConfig { seed: 2, ..a.clone() };
        assert_ne!(generate(&a).unwrap(), generate(&b).unwrap());
    }

    #[test]
    fn probability_extremes() {
        let open = GridConfig { obstacle_probability: 0.0, ..GridConfig::default() };
        assert_eq!(generate(&open).unwrap().passable_count(), 64);
        let walls = GridConfig { obstacle_probability: 1.0, ..GridConfig::default() };
        assert_eq!(generate(&walls).unwrap().passable_count(), 0);
    }

    #[test]
    fn density_is_roughly_respected() {
        let cfg = GridConfig { width: 100, height: 100, ..GridConfig::default() };
        let open = generate(&cfg).unwrap().passable_count();
        // 8000 expected; ±500 is > 12 standard deviations.
        assert!((7_500..=8_500).contains(&open), "got {open}");
    }

    #[test]
    fn invalid_configs() {
        let zero = GridConfig { width: 0, ..GridConfig::default() };
        assert!(matches!(generate(&zero), Err(PfError::InvalidDimensions { .. })));
        let bad_p = GridConfig { obstacle_probability: 1.5, ..GridConfig::default() };
        assert!(matches!(generate(&bad_p), Err(PfError::Config(_))));
    }

    #[test]
    fn random_open_cell_is_open() {
        let cfg = GridConfig { obstacle_probability: 0.5, ..GridConfig::default() };
        let map = generate(&cfg).unwrap();
        let mut rng = MapRng::new(9);
        for _ in 0..32 {
            let c = random_open_cell(&map, &mut rng).unwrap();
            assert!(map.is_passable(c.x, c.y).unwrap());
        }
    }

    #[test]
    fn random_open_cell_on_solid_grid() {
        let mut map = GridMap::new(2, 2).unwrap();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            map.set_passable(x, y, false).unwrap();
        }
        assert!(random_open_cell(&map, &mut MapRng::new(1)).is_none());
    }
}
