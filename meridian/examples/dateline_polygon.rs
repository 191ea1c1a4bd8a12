//! Builds a geodesic ellipse around a point on the antimeridian and tessellates it into render-ready vertices.

use meridian::meridian_types::cartesian::{CartesianPoint2d, CartesianPoint3d, Point3d, Winding};
use meridian::meridian_types::geo::geodesic::shapes::ellipse;
use meridian::meridian_types::geo::{GeoPoint, GeodesicSelector, GeodesicStrategy};
use meridian::meridian_types::impls::{ClosedContour, Polygon};
use meridian::meridian_types::latlon;
use meridian::{GeoPolygonTessellation, MeridianError, VertexBlock};

/// Vertex in the format of a simple renderer: position relative to the block origin plus color.
#[derive(Debug, Clone, Copy)]
struct ColoredVertex {
    position: [f32; 3],
    color: [u8; 4],
}

fn main() -> Result<(), MeridianError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut selector = GeodesicSelector::default();
    selector.select(GeodesicStrategy::BEST);

    let center = latlon!(-16.5, 179.8);
    let ring = ellipse(selector.solver(), &center, 250_000.0, 120_000.0, 30.0, 90)?;
    log::info!("Built geodesic ellipse with {} vertices", ring.len());

    let shell = ClosedContour::new(
        ring.points
            .iter()
            .map(|p| Point3d::new(p.lon(), p.lat(), 0.0))
            .collect(),
    );

    let origin = Point3d::new(center.lon(), center.lat(), 0.0);
    let mut block = VertexBlock::new(origin);
    let mut tessellation = GeoPolygonTessellation::default();
    let ranges = tessellation.tessellate(
        &mut block,
        Polygon::from(shell),
        None,
        Winding::Unknown,
        &mut |p: &Point3d| ColoredVertex {
            position: [
                (p.x() - origin.x()) as f32,
                (p.y() - origin.y()) as f32,
                p.z() as f32,
            ],
            color: if p.x() > 0.0 {
                [255, 128, 0, 255]
            } else {
                [0, 128, 255, 255]
            },
        },
    )?;

    for range in &ranges {
        let vertices = &block.vertices()[range.clone()];
        log::info!(
            "Part {range:?}: {} triangles, first vertex {:?}",
            vertices.len() / 3,
            vertices.first()
        );
    }

    Ok(())
}
