use clap::Parser;
use tracing::{error, info, warn};

use ascii_road_map::{
    AsciiRenderer, Heading, MapConfigBuilder, MapRenderer, RoadFactory, RoadMap, UnitSystem,
};

#[derive(Parser)]
#[command(name = "road-map")]
#[command(about = "Render a demo road network as an ASCII grid")]
struct Args {
    /// Grid dimension (cells per side)
    #[arg(short, long, default_value = "40")]
    grid_size: usize,

    /// World span covered by the grid, in meters
    #[arg(short, long, default_value = "200.0")]
    world_span: f64,

    /// Unit system for road input: metric (km) or imperial (miles)
    #[arg(short, long, default_value = "metric")]
    units: String,

    /// Write the rendered grid as JSON to this path
    #[arg(short, long)]
    json: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the demo network: "Uptown" running north-south and "Crosstown"
/// running east-west, crossing at the world origin and spanning the full
/// default world.
fn demo_network(units: UnitSystem) -> Result<(RoadMap, usize), String> {
    let mut factory = RoadFactory::new(units);

    // Full-span roads in caller units: 200 m is 0.2 km / ~0.124 miles
    let full_span = match units {
        UnitSystem::Metric => 0.2,
        UnitSystem::Imperial => 200.0 * ascii_road_map::METERS_TO_MILES,
    };

    let mut map = RoadMap::new();
    map.add_road(
        factory
            .build_road("Uptown", 0.0, 0.0, full_span, Heading::North)
            .map_err(|e| e.to_string())?,
    );
    map.add_road(
        factory
            .build_road("Crosstown", 0.0, 0.0, full_span, Heading::East)
            .map_err(|e| e.to_string())?,
    );

    Ok((map, factory.roads_built()))
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("ASCII road map renderer starting...");
    info!("Grid size: {}x{}", args.grid_size, args.grid_size);
    info!("World span: {} m", args.world_span);

    let units = match args.units.as_str() {
        "metric" => UnitSystem::Metric,
        "imperial" => UnitSystem::Imperial,
        _ => {
            warn!("Unknown unit system: {}. Using 'metric' instead.", args.units);
            UnitSystem::Metric
        }
    };
    info!("Unit system: {}", units.name());

    let config = MapConfigBuilder::new()
        .grid_size(args.grid_size)
        .world_span(args.world_span)
        .build()
        .map_err(|e| {
            error!("Invalid configuration: {}", e);
            e.to_string()
        })?;

    let (map, roads_built) = demo_network(units)?;
    info!("Built {} demo roads", roads_built);

    let rendered = AsciiRenderer::new().render(&map, &config).map_err(|e| {
        error!("Render failed: {}", e);
        e.to_string()
    })?;

    info!(
        "Rendered {} roads, {} cells marked in {}ms",
        rendered.metadata.roads_drawn,
        rendered.metadata.cells_marked,
        rendered.metadata.render_time_ms
    );

    for line in rendered.lines() {
        println!("{}", line);
    }

    if let Some(path) = &args.json {
        match serde_json::to_string_pretty(&rendered) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => info!("Grid saved to: {}", path),
                Err(e) => warn!("Failed to save grid: {}", e),
            },
            Err(e) => warn!("Failed to serialize grid: {}", e),
        }
    }

    Ok(())
}
