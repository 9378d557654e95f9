//! Planar geometry helpers for loop polygons
//!
//! All engine geometry works in world coordinates: plain `(f32, f32)`
//! pairs in whatever unit the host scene uses. The zone origin is the
//! world origin `(0, 0)`.

/// Position in world units
/// - .0 = x (right positive)
/// - .1 = y (host convention, sign does not matter to the engine)
pub type WorldPos = (f32, f32);

/// One adjacency edge, kept for the debug overlay.
pub type Segment = (WorldPos, WorldPos);

/// Squared distance between two world positions
///
/// Use for comparisons to avoid sqrt overhead.
#[inline]
pub fn distance_squared(a: WorldPos, b: WorldPos) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    dx * dx + dy * dy
}

/// Squared length of a position vector from the world origin
///
/// Territory scoring compares this against `zone_radius^2`.
#[inline]
pub fn length_squared(p: WorldPos) -> f32 {
    p.0 * p.0 + p.1 * p.1
}

/// Polygon area via the shoelace formula.
/// Returns positive area regardless of winding order; 0 for fewer
/// than 3 vertices.
pub fn polygon_area(vertices: &[WorldPos]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].0 * vertices[j].1;
        area -= vertices[j].0 * vertices[i].1;
    }
    area.abs() / 2.0
}

/// Ray-casting point-in-polygon test.
///
/// Works on arbitrary (including self-intersecting) polygons with the
/// usual even-odd rule. Loop polygons come straight from DFS discovery
/// order, so self-intersection is an accepted input here.
pub fn point_in_polygon(point: WorldPos, vertices: &[WorldPos]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let (px, py) = point;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > py) != (yj > py) {
            let intersect_x = (xj - xi) * (py - yi) / (yj - yi) + xi;
            if px < intersect_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
