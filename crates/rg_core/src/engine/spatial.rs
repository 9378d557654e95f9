//! Host capability traits and the per-step context
//!
//! The original design reached for ambient singletons (a global stone
//! manager, a global zone config). Here every pass receives an
//! explicit [`EngineContext`] instead, which also makes the passes
//! runnable against fake providers in tests.

use super::piece::{PieceId, PieceView, ShapeDescriptor, Transform2D};

/// Enumerates the currently active pieces.
///
/// `active_pieces` must be cheap enough to call every tick. The
/// returned order is the host's order and the engine preserves it for
/// deterministic traversal. Handles may be transiently invalid;
/// `piece()` returns `None` for those and the pass skips them.
pub trait PieceRegistry {
    fn active_pieces(&self) -> Vec<PieceId>;
    fn piece(&self, id: PieceId) -> Option<&dyn PieceView>;
}

/// Shape-overlap query against the host's spatial structure.
pub trait SpatialQuery {
    /// All pieces whose footprint overlaps `shape` placed at
    /// `transform`, excluding every id in `exclude` (the querying
    /// piece and, for composites, its sub-piece ids).
    fn query_overlaps(
        &self,
        shape: &ShapeDescriptor,
        transform: &Transform2D,
        exclude: &[PieceId],
    ) -> Vec<PieceId>;
}

/// Everything one engine step is allowed to see.
///
/// `zone_radius` is read fresh here each scoring pass; other systems
/// may resize the zone between steps.
pub struct EngineContext<'a> {
    pub registry: &'a dyn PieceRegistry,
    pub spatial: &'a dyn SpatialQuery,
    pub zone_radius: f32,
}

impl<'a> EngineContext<'a> {
    pub fn new(
        registry: &'a dyn PieceRegistry,
        spatial: &'a dyn SpatialQuery,
        zone_radius: f32,
    ) -> Self {
        Self { registry, spatial, zone_radius }
    }
}
