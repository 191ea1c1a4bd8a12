use approx::assert_abs_diff_eq;
use meridian::meridian_types::cartesian::{CartesianPoint2d, Point3d, Winding};
use meridian::meridian_types::conversion::position_to_point;
use meridian::meridian_types::geo::geodesic::shapes::circle;
use meridian::meridian_types::geo::impls::GeoPosition;
use meridian::meridian_types::geo::{GeoBoundingBox, GeoPoint, GeodesicSelector, GeodesicStrategy};
use meridian::meridian_types::impls::{ClosedContour, Polygon};
use meridian::meridian_types::latlon;
use meridian::{GeoPolygonTessellation, VertexBlock};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn area(vertices: &[Point3d]) -> f64 {
    vertices
        .chunks(3)
        .map(|t| {
            ((t[1].x() - t[0].x()) * (t[2].y() - t[0].y())
                - (t[2].x() - t[0].x()) * (t[1].y() - t[0].y()))
            .abs()
                / 2.0
        })
        .sum()
}

fn assert_in_lon_range(vertices: &[Point3d], min: f64, max: f64) {
    for v in vertices {
        assert!(v.x() >= min && v.x() <= max, "{v:?} is outside of [{min}, {max}]");
    }
}

#[test]
fn polygon_crossing_antimeridian() {
    init_logger();

    let polygon = Polygon::from(ClosedContour::new(vec![
        Point3d::new(-10.0, -50.0, 0.0),
        Point3d::new(-160.0, -50.0, 0.0),
        Point3d::new(-160.0, 50.0, 0.0),
        Point3d::new(-10.0, 50.0, 0.0),
    ]));
    let bbox = GeoBoundingBox::new(latlon!(-50.0, -10.0), latlon!(50.0, -160.0));

    let mut block = VertexBlock::default();
    let ranges = GeoPolygonTessellation::default()
        .tessellate(
            &mut block,
            polygon,
            Some(&bbox),
            Winding::Unknown,
            &mut |p: &Point3d| *p,
        )
        .expect("tessellation succeeds");

    assert_eq!(ranges.len(), 2);
    assert_eq!(block.primitives(), ranges.as_slice());

    let west = &block.vertices()[ranges[0].clone()];
    let east = &block.vertices()[ranges[1].clone()];
    assert_in_lon_range(west, -10.0, 180.0);
    assert_in_lon_range(east, -180.0, -160.0);

    assert_abs_diff_eq!(area(west), 19_000.0, epsilon = 1e-2);
    assert_abs_diff_eq!(area(east), 2_000.0, epsilon = 1e-2);
}

#[test]
fn positions_with_hole() {
    init_logger();

    let ring = |coords: &[(f64, f64)]| -> Vec<GeoPosition> {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPosition::surface(lat, lon))
            .collect()
    };
    let shell = ring(&[(-10.0, 170.0), (-10.0, -170.0), (10.0, -170.0), (10.0, 170.0), (-10.0, 170.0)]);
    let hole = ring(&[(-5.0, -175.0), (5.0, -175.0), (5.0, -172.0), (-5.0, -172.0), (-5.0, -175.0)]);

    let mut block = VertexBlock::default();
    let ranges = GeoPolygonTessellation::default()
        .tessellate_positions(&mut block, &shell, &[hole], None, &mut |p: &Point3d| *p)
        .expect("tessellation succeeds");

    assert_eq!(ranges.len(), 2);
    let west = &block.vertices()[ranges[0].clone()];
    let east = &block.vertices()[ranges[1].clone()];
    assert_abs_diff_eq!(area(west), 200.0, epsilon = 1e-3);
    assert_abs_diff_eq!(area(east), 200.0 - 30.0, epsilon = 1e-3);
}

#[test]
fn geodesic_circle_on_antimeridian() {
    init_logger();

    let center = latlon!(-17.0, 179.5);
    let mut selector = GeodesicSelector::default();
    selector.select(GeodesicStrategy::BEST);
    let ring = circle(selector.solver(), &center, 150_000.0, 64).expect("converges");
    let polygon = Polygon::from(ClosedContour::new(
        ring.points
            .iter()
            .map(|p| position_to_point(&GeoPosition::surface(p.lat(), p.lon())))
            .collect(),
    ));

    let mut block = VertexBlock::default();
    let ranges = GeoPolygonTessellation::default()
        .tessellate(&mut block, polygon, None, Winding::Unknown, &mut |p: &Point3d| *p)
        .expect("tessellation succeeds");

    assert_eq!(ranges.len(), 2);
    assert_in_lon_range(&block.vertices()[ranges[0].clone()], 170.0, 180.0);
    assert_in_lon_range(&block.vertices()[ranges[1].clone()], -180.0, -170.0);
}

#[test]
fn custom_vertex_format() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Vertex {
        position: [f32; 3],
    }

    let origin = Point3d::new(100.0, 0.0, 0.0);
    let mut block = VertexBlock::new(origin);
    let polygon = Polygon::from(ClosedContour::new(vec![
        Point3d::new(100.0, 0.0, 0.0),
        Point3d::new(150.0, 0.0, 0.0),
        Point3d::new(150.0, 50.0, 0.0),
        Point3d::new(100.0, 50.0, 0.0),
    ]));

    let ranges = GeoPolygonTessellation::default()
        .tessellate(&mut block, polygon, None, Winding::Unknown, &mut |p: &Point3d| Vertex {
            position: [
                (p.x() - origin.x()) as f32,
                (p.y() - origin.y()) as f32,
                0.0,
            ],
        })
        .expect("tessellation succeeds");

    assert_eq!(ranges, vec![0..6]);
    for v in block.vertices() {
        assert!(v.position[0] >= 0.0 && v.position[0] <= 50.0);
    }
}
