//! Splitting of polygons crossing the antimeridian.
//!
//! A polygon given in longitude/latitude coordinates that crosses the 180th meridian cannot be drawn as is: its
//! edges would go the long way around the globe. [`AntimeridianSplitter`] cuts such polygon along the meridian into
//! two polygons, each lying entirely on one side of it.
//!
//! Points of the polygons are planar points with `x` being longitude, `y` latitude and `z` altitude. Altitude of
//! the points inserted on the cut line is interpolated linearly.

use crate::cartesian::{
    CartesianClosedContour, CartesianPoint2d, NewCartesianPoint3d, Rect, Winding,
};
use crate::geo::bounding_box::GeoBoundingBox;
use crate::geo::traits::point::GeoPoint;
use crate::impls::{ClosedContour, Polygon};

const ANTIMERIDIAN: f64 = 180.0;

/// Splits polygons along the antimeridian.
///
/// A polygon is split if either:
/// * a bounding box crossing the antimeridian is given for it (see [`GeoBoundingBox::crosses_antimeridian`]), or
/// * no bounding box is given and one of the edges of the outer contour is longer than 180 degrees of longitude.
///   Such edge is considered to go the short way across the antimeridian.
///
/// Polygons that do not need to be split are returned as is.
///
/// The input polygon must be valid: not self-intersecting, with holes lying inside the outer contour and not
/// overlapping each other. The result for invalid polygons is not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct AntimeridianSplitter;

/// How longitudes are brought into continuous range.
#[derive(Debug, Clone, Copy)]
enum Unwrap {
    /// Longitudes smaller than the given value belong to the eastern side of the antimeridian.
    BoundingBox(f64),
    /// Every edge goes the short way.
    Edges,
}

impl AntimeridianSplitter {
    /// Splits the polygon.
    ///
    /// Returns up to two polygons: the part to the west of the antimeridian first, then the part to the east of it.
    /// Parts that do not enclose any area are omitted. Outer contours of the split polygons are counterclockwise,
    /// inner contours are clockwise. The first point of every split contour is a point on the cut line.
    ///
    /// `winding` is the orientation of the outer contour of the input polygon if it's known. In this case inner
    /// contours are assumed to have the opposite orientation. With [`Winding::Unknown`] orientation of every
    /// contour is calculated from its area.
    pub fn split<P>(
        polygon: Polygon<P>,
        bbox: Option<&GeoBoundingBox>,
        winding: Winding,
    ) -> Vec<Polygon<P>>
    where
        P: NewCartesianPoint3d<f64> + Clone,
    {
        let unwrap = match bbox {
            Some(bbox) if bbox.crosses_antimeridian() => Unwrap::BoundingBox(bbox.lower_left().lon()),
            Some(_) => return vec![polygon],
            None if has_long_edge(&polygon.outer_contour.points) => Unwrap::Edges,
            None => return vec![polygon],
        };

        let Some(shell) = unwrap_ring(&polygon.outer_contour.points, unwrap) else {
            log::warn!("Polygon encircles a pole and cannot be split along the antimeridian");
            return vec![polygon];
        };

        let (min_x, max_x) = x_range(&shell.points);
        if max_x - min_x > 360.0 {
            log::warn!(
                "Polygon spans {} degrees of longitude and cannot be split along the antimeridian",
                max_x - min_x
            );
            return vec![polygon];
        }

        let shell_winding = match winding {
            Winding::Unknown => shell.winding(),
            known => known,
        };
        let shell = oriented(shell, shell_winding, Winding::CounterClockwise);

        let mut west = Half::new(clip(&shell.points, Side::West));
        let mut east = Half::new(clip(&shell.points, Side::East));

        for hole in &polygon.inner_contours {
            let Some(hole) = unwrap_ring(&hole.points, unwrap) else {
                continue;
            };
            let hole = align_to(hole, min_x, max_x, unwrap);
            let hole_winding = match winding {
                Winding::Unknown => hole.winding(),
                known => known.reversed(),
            };
            let hole = oriented(hole, hole_winding, Winding::Clockwise);

            let crosses = Rect::from_points(&hole.points).is_some_and(|rect| rect.spans_x(ANTIMERIDIAN));
            if crosses {
                west.add_hole(clip(&hole.points, Side::West));
                east.add_hole(clip(&hole.points, Side::East));
            } else if centroid_x(&hole) <= ANTIMERIDIAN {
                west.add_hole(hole);
            } else {
                east.add_hole(hole);
            }
        }

        let parts: Vec<Polygon<P>> = [west.into_polygon(0.0), east.into_polygon(-360.0)]
            .into_iter()
            .flatten()
            .collect();

        log::debug!(
            "Polygon spanning longitudes [{min_x}, {max_x}] is split along the antimeridian into {} part(s)",
            parts.len()
        );

        parts
    }
}

/// One side of the cut.
struct Half<P> {
    shell: ClosedContour<P>,
    holes: Vec<ClosedContour<P>>,
}

impl<P: NewCartesianPoint3d<f64> + Clone> Half<P> {
    fn new(shell: ClosedContour<P>) -> Self {
        Self {
            shell,
            holes: vec![],
        }
    }

    fn add_hole(&mut self, hole: ClosedContour<P>) {
        if !is_degenerate(&hole) {
            self.holes.push(hole);
        }
    }

    fn into_polygon(self, dx: f64) -> Option<Polygon<P>> {
        if is_degenerate(&self.shell) {
            return None;
        }

        let shift = |p: &P| P::new(p.x() + dx, p.y(), p.z());
        Some(Polygon::new(
            self.shell.map_points(shift),
            self.holes.iter().map(|hole| hole.map_points(shift)).collect(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    West,
    East,
}

impl Side {
    fn contains(self, x: f64) -> bool {
        match self {
            Side::West => x <= ANTIMERIDIAN,
            Side::East => x >= ANTIMERIDIAN,
        }
    }
}

fn has_long_edge<P: CartesianPoint2d<Num = f64>>(points: &[P]) -> bool {
    let Some(last) = points.last() else {
        return false;
    };

    let mut prev = last;
    for point in points {
        if (point.x() - prev.x()).abs() > 180.0 {
            return true;
        }
        prev = point;
    }

    false
}

/// Returns `None` if the ring goes around a pole, so that its longitudes cannot be made continuous.
fn unwrap_ring<P: NewCartesianPoint3d<f64>>(points: &[P], unwrap: Unwrap) -> Option<ClosedContour<P>> {
    match unwrap {
        Unwrap::BoundingBox(west_bound) => Some(
            points
                .iter()
                .map(|p| {
                    let x = if p.x() < west_bound { p.x() + 360.0 } else { p.x() };
                    P::new(x, p.y(), p.z())
                })
                .collect(),
        ),
        Unwrap::Edges => {
            let first = points.first()?;
            let mut unwrapped = Vec::with_capacity(points.len());
            let mut x = first.x();
            let mut prev = first.x();
            for point in points {
                x += short_step(point.x() - prev);
                prev = point.x();
                unwrapped.push(P::new(x, point.y(), point.z()));
            }

            let closing = x + short_step(first.x() - prev);
            if (closing - first.x()).abs() > 180.0 {
                return None;
            }

            let (min_x, _) = x_range(&unwrapped);
            let ring = ClosedContour::new(unwrapped);
            if min_x < -ANTIMERIDIAN {
                Some(ring.map_points(|p| P::new(p.x() + 360.0, p.y(), p.z())))
            } else {
                Some(ring)
            }
        }
    }
}

fn short_step(dx: f64) -> f64 {
    if dx > 180.0 {
        dx - 360.0
    } else if dx < -180.0 {
        dx + 360.0
    } else {
        dx
    }
}

/// Moves an unwrapped hole by whole turns so that it lies in the same longitude range as the outer contour.
fn align_to<P: NewCartesianPoint3d<f64>>(
    hole: ClosedContour<P>,
    min_x: f64,
    max_x: f64,
    unwrap: Unwrap,
) -> ClosedContour<P> {
    if let Unwrap::BoundingBox(_) = unwrap {
        return hole;
    }

    let (hole_min, hole_max) = x_range(&hole.points);
    let turns = (((min_x + max_x) - (hole_min + hole_max)) / 2.0 / 360.0).round();
    if turns == 0.0 {
        hole
    } else {
        hole.map_points(|p| P::new(p.x() + turns * 360.0, p.y(), p.z()))
    }
}

fn oriented<P>(ring: ClosedContour<P>, current: Winding, target: Winding) -> ClosedContour<P> {
    if current == target.reversed() {
        ring.reversed()
    } else {
        ring
    }
}

/// Sutherland-Hodgman clipping of the ring by the half-plane on one side of the antimeridian. The result starts
/// with the first point inserted on the antimeridian, if any.
fn clip<P: NewCartesianPoint3d<f64> + Clone>(points: &[P], side: Side) -> ClosedContour<P> {
    let Some(mut prev) = points.last() else {
        return ClosedContour::new(vec![]);
    };

    let mut clipped = Vec::with_capacity(points.len() + 2);
    let mut first_cut = None;
    for point in points {
        let crosses = (prev.x() - ANTIMERIDIAN) * (point.x() - ANTIMERIDIAN) < 0.0;
        if crosses {
            if first_cut.is_none() {
                first_cut = Some(clipped.len());
            }
            clipped.push(cut_point(prev, point));
        }
        if side.contains(point.x()) {
            clipped.push(point.clone());
        }
        prev = point;
    }

    ClosedContour::new(clipped).rotated(first_cut.unwrap_or(0))
}

fn cut_point<P: NewCartesianPoint3d<f64>>(from: &P, to: &P) -> P {
    let t = (ANTIMERIDIAN - from.x()) / (to.x() - from.x());
    P::new(
        ANTIMERIDIAN,
        from.y() + t * (to.y() - from.y()),
        from.z() + t * (to.z() - from.z()),
    )
}

fn is_degenerate<P: CartesianPoint2d<Num = f64>>(ring: &ClosedContour<P>) -> bool {
    ring.len() < 3 || ring.area_signed() == 0.0
}

fn x_range<P: CartesianPoint2d<Num = f64>>(points: &[P]) -> (f64, f64) {
    Rect::from_points(points).map_or((0.0, 0.0), |rect| (rect.x_min(), rect.x_max()))
}

fn centroid_x<P: CartesianPoint2d<Num = f64>>(ring: &ClosedContour<P>) -> f64 {
    ring.points.iter().map(|p| p.x()).sum::<f64>() / ring.len() as f64
}
