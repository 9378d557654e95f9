//! Piece capability interface
//!
//! The engine never touches host scene types. Whatever the host is
//! (an in-memory [`Board`](crate::board::Board), a Godot adapter, a
//! test double), it exposes each stone through `PieceView` and hands
//! out stable `PieceId` handles.

use serde::{Deserialize, Serialize};

use super::geometry::WorldPos;

/// Stable handle to a piece. Handles may outlive the piece; every
/// lookup through the registry can fail and callers skip dead handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u64);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 2D transform carried alongside a shape for overlap queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Global origin of the shape
    pub origin: WorldPos,
    /// Rotation in radians (circles ignore it)
    pub rotation: f32,
}

impl Transform2D {
    pub fn at(origin: WorldPos) -> Self {
        Self { origin, rotation: 0.0 }
    }
}

/// Collision footprint of a piece, as far as adjacency cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDescriptor {
    /// Disc centered on the transform origin
    Circle { radius: f32 },
    /// Convex outline in local coordinates, rotated then translated
    /// by the transform
    Polygon { points: Vec<WorldPos> },
}

/// Read-only view of one piece plus its capture hook.
///
/// `on_captured` takes `&self`: adapters that need to mutate on
/// capture (flagging the stone dead, queueing a host signal) do so
/// through interior mutability.
pub trait PieceView {
    fn id(&self) -> PieceId;

    /// Current global position
    fn position(&self) -> WorldPos;

    /// Tag membership. Tags are not mutually exclusive: a piece can
    /// carry a broad team tag and a narrower capturing-subgroup tag,
    /// or even both team tags at once.
    fn has_tag(&self, tag: &str) -> bool;

    /// Collision shape, if the piece has one resolvable right now.
    /// A shapeless piece still scores territory but builds no edges.
    fn shape(&self) -> Option<ShapeDescriptor>;

    /// Transform the shape is currently placed at
    fn transform(&self) -> Transform2D;

    /// Pieces flagged non-capturable never enter a capture set
    fn capturable(&self) -> bool;

    /// Direct sub-pieces (composite stones). Territory scoring counts
    /// them individually; adjacency excludes them from their owner's
    /// own overlap query.
    fn sub_pieces(&self) -> Vec<PieceId>;

    /// Fire-and-forget capture effect. Called at most once per piece
    /// per detection pass.
    fn on_captured(&self);
}
