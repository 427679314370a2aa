//! Measures the width of a bent road and prints the width listing.
//!
//! Run with `cargo run --example width_report`.

use roadwidth::geometry::Polygon;
use roadwidth::layer::{Crs, Layer};
use roadwidth::math::Point2;
use roadwidth::operations::{ChordalAxis, MeasureWidth, WidthProfile};
use roadwidth::{RoadWidthError, WidthConfig};

fn main() -> Result<(), RoadWidthError> {
    // Default: WARN for everything, INFO for roadwidth.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roadwidth=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roadwidth=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // An 8 m wide road running east, then turning north.
    let road = Polygon::from_exterior(vec![
        Point2::new(0.0, 0.0),
        Point2::new(120.0, 0.0),
        Point2::new(120.0, 90.0),
        Point2::new(112.0, 90.0),
        Point2::new(112.0, 8.0),
        Point2::new(0.0, 8.0),
    ])?;
    let layer = Layer::new(Some(Crs::UTM_51N), vec![road]);

    let config = WidthConfig {
        densify_distance: 0.5,
        simplify_tolerance: 0.01,
        ..WidthConfig::default()
    };
    let output = MeasureWidth::new(&ChordalAxis::new(), config).execute(&layer)?;

    let areas = output.polygons.map(Polygon::area);
    let epsg = output.polygons.crs.map_or(0, Crs::epsg);
    println!(
        "{} polygon(s), {:.1} m2 of road surface, EPSG {epsg}",
        areas.len(),
        areas.features.iter().sum::<f64>()
    );
    println!("{} centerline path(s)", output.centerlines.len());
    println!("{}", WidthProfile::from_samples(&output.samples.features));
    Ok(())
}
