//! Removal of redundant vertices from closed rings.
//!
//! A vertex is redundant if it duplicates the previous vertex, or if it lies on the straight line through its
//! neighbours. Both checks use an absolute [`COLLINEAR_EPSILON`], so they are meant for coordinates of moderate
//! magnitude such as degrees.

use crate::cartesian::CartesianPoint2d;
use crate::contour::ClosedContour as ClosedContourTrait;
use crate::impls::{ClosedContour, Polygon};

/// Two points closer than this in both coordinates are considered the same point, and three points with the
/// cross product of their edge vectors not larger than this are considered collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-12;

fn is_duplicate<P: CartesianPoint2d<Num = f64>>(a: &P, b: &P) -> bool {
    (a.x() - b.x()).abs() <= COLLINEAR_EPSILON && (a.y() - b.y()).abs() <= COLLINEAR_EPSILON
}

fn is_collinear<P: CartesianPoint2d<Num = f64>>(a: &P, b: &P, c: &P) -> bool {
    b.sub(a).perp(&c.sub(b)).abs() <= COLLINEAR_EPSILON
}

/// Simplifies a ring given by its points.
///
/// The ring may or may not repeat its first point at the end. The walk starts from the first point, which is only
/// removed at the end if it is collinear with its neighbours. The result contains
/// only unique points (the closing point is not repeated) and may contain less than 3 points if the ring degenerates.
pub fn simplify_points<P: CartesianPoint2d<Num = f64> + Clone>(points: &[P]) -> Vec<P> {
    let Some(first) = points.first() else {
        return vec![];
    };

    let mut kept: Vec<P> = Vec::with_capacity(points.len() + 1);
    for point in points.iter().chain(std::iter::once(first)) {
        if let Some(last) = kept.last() {
            if is_duplicate(last, point) {
                continue;
            }
        }

        while kept.len() >= 2 && is_collinear(&kept[kept.len() - 2], &kept[kept.len() - 1], point) {
            kept.pop();
        }

        kept.push(point.clone());
    }

    if kept.len() > 1 && kept.last().is_some_and(|last| is_duplicate(last, first)) {
        kept.pop();
    }

    // The walk above never looks at the vertices around the closing point.
    let mut i = 0;
    while kept.len() >= 3 && i < kept.len() {
        let prev = &kept[(i + kept.len() - 1) % kept.len()];
        let next = &kept[(i + 1) % kept.len()];
        if is_collinear(prev, &kept[i], next) {
            kept.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }

    kept
}

/// Simplifies a closed ring. Returns `None` if less than 3 points are left after simplification, meaning that the
/// ring does not enclose any area.
pub fn simplify<P: CartesianPoint2d<Num = f64> + Clone>(
    ring: &impl ClosedContourTrait<Point = P>,
) -> Option<ClosedContour<P>> {
    let points: Vec<P> = ring.iter_points().cloned().collect();
    let simplified = simplify_points(&points);
    if simplified.len() < 3 {
        None
    } else {
        Some(ClosedContour::new(simplified))
    }
}

/// Simplifies all contours of the polygon. Returns `None` if the outer contour degenerates. Degenerate holes are
/// removed from the polygon.
pub fn simplify_polygon<P: CartesianPoint2d<Num = f64> + Clone>(
    polygon: &Polygon<P>,
) -> Option<Polygon<P>> {
    let outer_contour = simplify(&polygon.outer_contour)?;
    let inner_contours = polygon
        .inner_contours
        .iter()
        .filter_map(|hole| simplify(hole))
        .collect();

    Some(Polygon::new(outer_contour, inner_contours))
}
