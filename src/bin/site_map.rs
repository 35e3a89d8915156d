//! Ancient Sites World Map Tool
//!
//! This binary draws the ancient site catalog, the planet's equator, and
//! the great-circle route between two chosen sites on a terminal world
//! map, then exports the same geometry as a GeoJSON document.
//!
//! Usage:
//!   cargo run --bin site_map -- [--from SITE] [--to SITE] [output.geojson]

use std::path::PathBuf;

use clap::Parser;

use earthmark::constants::RAD2DEG;
use earthmark::render::MapCanvas;
use earthmark::sites::DEFAULT_ROUTE;
use earthmark::{export, geodesic, SiteCatalog};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Ancient Sites World Map Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Draws ancient sites, the equator, and a great-circle route, then exports GeoJSON",
    long_about = None
)]
struct Args {
    /// Route start site (catalog name, case-insensitive)
    #[arg(long, default_value = DEFAULT_ROUTE.0)]
    from: String,

    /// Route end site (catalog name, case-insensitive)
    #[arg(long, default_value = DEFAULT_ROUTE.1)]
    to: String,

    /// Number of samples along the route and the equator
    #[arg(long, default_value_t = 360)]
    samples: usize,

    /// Skip the terminal map and only write the export file
    #[arg(long)]
    no_map: bool,

    /// Output GeoJSON file
    #[arg(default_value = "ancient_sites_and_equators.geojson")]
    output: PathBuf,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Ancient Sites World Map Tool");
    println!("============================");

    let catalog = SiteCatalog::default();
    println!("Loaded {} sites", catalog.len());

    let start = catalog
        .get(&args.from)
        .ok_or_else(|| format!("Site not found in catalog: {}", args.from))?
        .clone();
    let end = catalog
        .get(&args.to)
        .ok_or_else(|| format!("Site not found in catalog: {}", args.to))?
        .clone();

    let equator = geodesic::equator(args.samples)?;
    let arc = geodesic::great_circle(start.position, end.position, args.samples)?;

    print_section_header("Route");
    println!(
        "  {} ({:.4}°, {:.4}°)",
        start.name,
        start.position.lat_degrees(),
        start.position.lon_degrees()
    );
    println!(
        "  {} ({:.4}°, {:.4}°)",
        end.name,
        end.position.lat_degrees(),
        end.position.lon_degrees()
    );
    println!(
        "  Central angle: {:.2}°  Distance: {:.0} km",
        arc.central_angle() * RAD2DEG,
        start.position.distance_km(&end.position)
    );

    let eq_lats: Vec<f64> = equator.iter().map(|p| p.lat_degrees()).collect();
    let eq_lons: Vec<f64> = equator.iter().map(|p| p.lon_degrees()).collect();
    let (route_lats, route_lons) = arc.unwrapped_degrees();

    if !args.no_map {
        print_section_header("World Map");
        println!("  Legend: o ancient site, = equator, + route");

        let mut canvas = MapCanvas::sized_to_terminal();
        canvas.plot_polyline(&eq_lats, &eq_lons, '=');
        canvas.plot_polyline(&route_lats, &route_lons, '+');
        canvas.plot_sites(&catalog, 'o');
        print!("{}", canvas);
        println!("  (longitude increases left to right, Miller projection)");
    }

    print_section_header("Export");
    let route_name = format!("{} to {}", start.name, end.name);
    let collection = export::document(
        &catalog,
        vec![
            export::line_feature("Earth's Equator", &eq_lats, &eq_lons, export::EQUATOR_STYLE),
            export::line_feature(&route_name, &route_lats, &route_lons, export::ROUTE_STYLE),
        ],
    );
    export::write_document(&collection, &args.output)?;
    println!(
        "  Wrote {} features to {}",
        collection.features.len(),
        args.output.display()
    );

    Ok(())
}
