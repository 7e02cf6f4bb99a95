//! console — random-grid A* demo for the pf-* workspace.
//!
//! Generates an obstacle grid, drops a start and an end on random open cells,
//! draws the grid, runs the search, and draws it again with the path marked.
//! Every random choice is derived from one seed, which is printed so any run
//! can be replayed with `--seed`.

mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pf_core::MapRng;
use pf_map::{generate, random_open_cell};
use pf_render::{Glyphs, TextRenderer};
use pf_search::PathFinder;

use cli::Cli;

/// Child-stream offset for endpoint picking, so endpoints do not depend on
/// how many draws obstacle generation consumed.
const ENDPOINT_STREAM: u64 = 1;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let seed = cli.seed.unwrap_or_else(|| MapRng::from_entropy().random());
    let renderer = TextRenderer::new(if cli.ascii { Glyphs::ASCII } else { Glyphs::UNICODE });

    println!("=== console — grid A* ===");
    println!("Grid: {}x{}  |  Obstacles: {}  |  Seed: {seed}", cli.width, cli.height, cli.obstacles);
    println!();
    print!("{}", renderer.glyphs().legend());
    println!();

    // 1. Grid.
    let mut map = generate(&cli.grid_config(seed)).context("generating grid")?;
    info!("{} of {} cells open", map.passable_count(), cli.width as u64 * cli.height as u64);

    // 2. Endpoints.
    let mut rng = MapRng::new(seed).child(ENDPOINT_STREAM);
    let start = random_open_cell(&map, &mut rng).context("grid has no open cells")?;
    let end = random_open_cell(&map, &mut rng).context("grid has no open cells")?;
    map.set_start(start.x, start.y)?;
    map.set_end(end.x, end.y)?;
    info!("start {start}, end {end}");

    let mut stdout = std::io::stdout().lock();
    renderer.render_to(&map, None, &mut stdout)?;
    writeln!(stdout)?;

    // 3. Search.
    let mut finder = PathFinder::new();
    let path = finder.generate_roads(&map)?;
    let stats = finder.stats();
    info!(
        "search expanded {} nodes, discovered {}, improved {}",
        stats.expanded, stats.discovered, stats.improved
    );

    if path.is_empty() {
        writeln!(stdout, "No path from {start} to {end}.")?;
        return Ok(());
    }

    // 4. Result.
    renderer.render_to(&map, Some(&path), &mut stdout)?;
    writeln!(stdout)?;
    writeln!(stdout, "Path ({} steps):", path.steps())?;
    let route: Vec<String> = path
        .iter_from_start()
        .map(|n| map.coord(n).to_string())
        .collect();
    writeln!(stdout, "{}", route.join(" -> "))?;

    Ok(())
}
