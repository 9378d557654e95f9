//! Debug visualization buffers
//!
//! The rendering layer (if any) reads these after a step. Buffers are
//! overwritten wholesale at the start of every detection pass, never
//! merged.

use super::geometry::{Segment, WorldPos};

/// Color slot for a cycle polygon, one per capturing group in config
/// order. The renderer maps slots to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColor(pub usize);

/// One closed loop polygon, in DFS discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPolygon {
    pub vertices: Vec<WorldPos>,
    pub color: OverlayColor,
}

/// Adjacency segments and cycle polygons from the latest detection
/// pass.
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    pub segments: Vec<Segment>,
    pub polygons: Vec<OverlayPolygon>,
}

impl DebugOverlay {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.polygons.clear();
    }

    pub fn push_segment(&mut self, a: WorldPos, b: WorldPos) {
        self.segments.push((a, b));
    }

    pub fn push_polygon(&mut self, vertices: Vec<WorldPos>, color: OverlayColor) {
        self.polygons.push(OverlayPolygon { vertices, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_both_buffers() {
        let mut overlay = DebugOverlay::default();
        overlay.push_segment((0.0, 0.0), (1.0, 1.0));
        overlay.push_polygon(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], OverlayColor(0));
        overlay.clear();
        assert!(overlay.segments.is_empty());
        assert!(overlay.polygons.is_empty());
    }
}
