//! arena-preview: inspect generated arenas and run headless wave sessions.
//!
//! Usage:
//!   arena-preview map --seed 7
//!   arena-preview roster --waves 10 --config arena.json
//!   arena-preview run --secs 30 --seed 7

use std::path::PathBuf;
use std::process;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use arena_core::config::ArenaConfig;
use arena_core::enums::{CellClass, EntityKind};
use arena_core::types::{GridCoord, GridDims, KindCounts, WorldBounds};
use arena_procgen::SpawnBudgeter;
use arena_sim::generator::{WaveGenerator, WavePlan};
use arena_sim::{ArenaSession, SessionConfig};
use arena_terrain::TerrainMap;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "map" => cmd_map(&args[2..]),
        "roster" => cmd_roster(&args[2..]),
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "arena-preview: wave arena inspection tool\n\
         \n\
         Commands:\n\
         \n\
         map       Render one generated wave as ASCII\n\
         \n\
           #  obstacle    .  safe spot    +  next to cover\n\
           E  roaming threat   T  turret   b  prop\n\
         \n\
         roster    Print the rosters of consecutive waves with no survivors\n\
         \n\
           --waves <N>        Number of waves (default: 10)\n\
         \n\
         run       Run a headless session and print JSON snapshots with events\n\
         \n\
           --secs <S>         Simulated seconds (default: 20)\n\
         \n\
         Common options:\n\
         \n\
           --seed <N>         RNG seed (overrides the config file)\n\
           --config <path>    JSON arena configuration\n\
         \n\
         Set RUST_LOG=info (or debug) to see director logs on stderr.\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn load_config(args: &[String]) -> ArenaConfig {
    let mut config = match parse_value::<PathBuf>(args, "--config") {
        Some(path) => {
            let text = match std::fs::read_to_string(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error reading {}: {e}", path.display());
                    process::exit(1);
                }
            };
            match ArenaConfig::from_json_str(&text) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error in {}: {e}", path.display());
                    process::exit(1);
                }
            }
        }
        None => ArenaConfig::default(),
    };
    if let Some(seed) = parse_value(args, "--seed") {
        config.seed = seed;
    }
    config
}

fn arena_dims() -> GridDims {
    match GridDims::from_bounds(&WorldBounds::default()) {
        Ok(dims) => dims,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

// --- Map command ---

fn cmd_map(args: &[String]) {
    let config = load_config(args);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let generator = WaveGenerator::new(config, arena_dims());

    let mut budget = 0;
    let plan = generator.generate(&KindCounts::default(), &mut budget, &mut rng);

    println!("{}", render(&plan));
    println!(
        "offset x={} y={}  obstacles={}  roaming={}  turrets={}  props={}  budget left={}",
        plan.offset.x,
        plan.offset.y,
        plan.count(EntityKind::Obstacle),
        plan.count(EntityKind::RoamingThreat),
        plan.count(EntityKind::StationaryThreat),
        plan.count(EntityKind::Prop),
        budget,
    );
    for event in plan.degraded() {
        println!("degraded: {event:?}");
    }
}

/// One character per cell, top row printed first.
fn render(plan: &WavePlan) -> String {
    let terrain: &TerrainMap = &plan.terrain;
    let dims = terrain.dims();
    let mut out = String::with_capacity(dims.cell_count() + dims.height as usize);

    for y in (0..dims.height as i32).rev() {
        for x in 0..dims.width as i32 {
            let cell = GridCoord::new(x, y);
            let spawned = plan
                .spawns
                .iter()
                .find(|s| s.cell == cell && s.kind != EntityKind::Obstacle);
            let ch = match (spawned.map(|s| s.kind), terrain.class_at(cell)) {
                (Some(EntityKind::RoamingThreat), _) => 'E',
                (Some(EntityKind::StationaryThreat), _) => 'T',
                (Some(EntityKind::Prop), _) => 'b',
                (_, Some(CellClass::Obstacle)) => '#',
                (_, Some(CellClass::AdjacentSpot)) => '+',
                _ => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// --- Roster command ---

fn cmd_roster(args: &[String]) {
    let config = load_config(args);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    let waves: u32 = parse_value(args, "--waves").unwrap_or(10);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let budgeter = SpawnBudgeter::new(&config.power_catalog, config.power_increment_per_wave);

    let mut budget = 0;
    println!("wave  turrets  enemies  budget_left");
    for wave in 0..waves {
        let roster = budgeter.compute_roster(&KindCounts::default(), &mut budget, &mut rng);
        println!(
            "{wave:>4}  {:>7}  {:>7}  {budget:>11}",
            roster.count(EntityKind::StationaryThreat),
            roster.count(EntityKind::RoamingThreat),
        );
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let secs: f32 = parse_value(args, "--secs").unwrap_or(20.0);
    let config = SessionConfig {
        arena: load_config(args),
        ..Default::default()
    };
    let mut session = match ArenaSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let ticks = (secs / session.tick_secs()).ceil() as u64;
    for _ in 0..ticks {
        let snap = session.tick();
        if snap.events.is_empty() {
            continue;
        }
        match serde_json::to_string(&snap) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
}
