//! In-memory board adapter
//!
//! Reference implementation of the host capability traits over
//! circular stones. The JSON API and the CLI run on it, tests fake
//! hosts with it, and engine adapters for real scenes implement the
//! same three traits.
//!
//! Overlap queries are brute force over the stone list; fine for
//! board-game piece counts, and it keeps the adapter free of any
//! spatial structure to maintain.

use std::cell::Cell;

use crate::engine::geometry::{distance_squared, length_squared, WorldPos};
use crate::engine::piece::{PieceId, PieceView, ShapeDescriptor, Transform2D};
use crate::engine::spatial::{PieceRegistry, SpatialQuery};

/// One stone (or sub-stone) on the board.
#[derive(Debug)]
pub struct Stone {
    id: PieceId,
    position: WorldPos,
    tags: Vec<String>,
    /// None models a stone whose collision shape failed to resolve
    radius: Option<f32>,
    capturable: bool,
    sub_ids: Vec<PieceId>,
    /// Sub-stones resolve through the registry but are not listed as
    /// active pieces in their own right
    listed: bool,
    /// Cell because the capture callback kills the stone through
    /// `&self`
    alive: Cell<bool>,
    captures: Cell<u32>,
}

impl PieceView for Stone {
    fn id(&self) -> PieceId {
        self.id
    }

    fn position(&self) -> WorldPos {
        self.position
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    fn shape(&self) -> Option<ShapeDescriptor> {
        self.radius.map(|radius| ShapeDescriptor::Circle { radius })
    }

    fn transform(&self) -> Transform2D {
        Transform2D::at(self.position)
    }

    fn capturable(&self) -> bool {
        self.capturable
    }

    fn sub_pieces(&self) -> Vec<PieceId> {
        self.sub_ids.clone()
    }

    fn on_captured(&self) {
        // A captured stone leaves the board, as in the host game.
        self.captures.set(self.captures.get() + 1);
        self.alive.set(false);
    }
}

/// Whole-board container; insertion order is the registry order.
#[derive(Debug, Default)]
pub struct Board {
    stones: Vec<Stone>,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self { stones: Vec::new(), next_id: 1 }
    }

    pub fn add_stone(&mut self, position: WorldPos, tags: &[&str], radius: f32) -> PieceId {
        self.push_stone(position, tags, Some(radius), true)
    }

    /// Stone whose collision shape never resolved; scores territory,
    /// builds no adjacency edges.
    pub fn add_shapeless_stone(&mut self, position: WorldPos, tags: &[&str]) -> PieceId {
        self.push_stone(position, tags, None, true)
    }

    /// Attach a sub-stone to `owner`. It resolves through the
    /// registry and counts for territory, but is not listed among the
    /// active pieces itself.
    pub fn add_sub_stone(&mut self, owner: PieceId, position: WorldPos, tags: &[&str]) -> PieceId {
        let id = self.push_stone(position, tags, None, false);
        if let Some(stone) = self.stone_mut(owner) {
            stone.sub_ids.push(id);
        }
        id
    }

    fn push_stone(
        &mut self,
        position: WorldPos,
        tags: &[&str],
        radius: Option<f32>,
        listed: bool,
    ) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.stones.push(Stone {
            id,
            position,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            radius,
            capturable: true,
            sub_ids: Vec::new(),
            listed,
            alive: Cell::new(true),
            captures: Cell::new(0),
        });
        id
    }

    fn stone(&self, id: PieceId) -> Option<&Stone> {
        self.stones.iter().find(|s| s.id == id)
    }

    fn stone_mut(&mut self, id: PieceId) -> Option<&mut Stone> {
        self.stones.iter_mut().find(|s| s.id == id)
    }

    pub fn set_capturable(&mut self, id: PieceId, capturable: bool) {
        if let Some(stone) = self.stone_mut(id) {
            stone.capturable = capturable;
        }
    }

    pub fn move_stone(&mut self, id: PieceId, position: WorldPos) {
        if let Some(stone) = self.stone_mut(id) {
            stone.position = position;
        }
    }

    /// Remove the stone from the board entirely.
    pub fn remove_stone(&mut self, id: PieceId) {
        self.stones.retain(|s| s.id != id);
    }

    /// Keep the handle listed but make it resolve to nothing,
    /// mimicking a host object freed mid-frame.
    pub fn invalidate_stone(&mut self, id: PieceId) {
        if let Some(stone) = self.stone(id) {
            stone.alive.set(false);
        }
    }

    /// How many times this stone's capture callback has fired.
    pub fn capture_count(&self, id: PieceId) -> u32 {
        self.stone(id).map(|s| s.captures.get()).unwrap_or(0)
    }

    /// Listed, resolvable stones carrying `tag`, in insertion order.
    pub fn pieces_with_tag(&self, tag: &str) -> Vec<PieceId> {
        self.stones
            .iter()
            .filter(|s| s.listed && s.alive.get() && s.has_tag(tag))
            .map(|s| s.id)
            .collect()
    }

    /// Conservative overlap radius for a query shape.
    fn shape_radius(shape: &ShapeDescriptor) -> f32 {
        match shape {
            ShapeDescriptor::Circle { radius } => *radius,
            // Bounding-circle approximation; board stones are discs,
            // so polygon queries only come from exotic callers.
            ShapeDescriptor::Polygon { points } => points
                .iter()
                .map(|&p| length_squared(p))
                .fold(0.0f32, f32::max)
                .sqrt(),
        }
    }
}

impl PieceRegistry for Board {
    fn active_pieces(&self) -> Vec<PieceId> {
        self.stones.iter().filter(|s| s.listed).map(|s| s.id).collect()
    }

    fn piece(&self, id: PieceId) -> Option<&dyn PieceView> {
        self.stone(id).filter(|s| s.alive.get()).map(|s| s as &dyn PieceView)
    }
}

impl SpatialQuery for Board {
    fn query_overlaps(
        &self,
        shape: &ShapeDescriptor,
        transform: &Transform2D,
        exclude: &[PieceId],
    ) -> Vec<PieceId> {
        let query_radius = Self::shape_radius(shape);
        self.stones
            .iter()
            .filter(|s| s.alive.get() && !exclude.contains(&s.id))
            .filter(|s| {
                let Some(radius) = s.radius else {
                    return false;
                };
                let reach = query_radius + radius;
                distance_squared(transform.origin, s.position) < reach * reach
            })
            .map(|s| s.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_insertion_order() {
        let mut board = Board::new();
        let a = board.add_stone((0.0, 0.0), &["team_a"], 1.0);
        let b = board.add_stone((5.0, 0.0), &["team_b"], 1.0);
        let c = board.add_stone((9.0, 0.0), &["team_a"], 1.0);
        assert_eq!(board.active_pieces(), vec![a, b, c]);
        assert_eq!(board.pieces_with_tag("team_a"), vec![a, c]);
    }

    #[test]
    fn test_invalidated_handle_stays_listed_but_unresolvable() {
        let mut board = Board::new();
        let a = board.add_stone((0.0, 0.0), &["team_a"], 1.0);
        board.invalidate_stone(a);
        assert_eq!(board.active_pieces(), vec![a], "handle still enumerated");
        assert!(board.piece(a).is_none(), "but no longer resolves");
    }

    #[test]
    fn test_removed_stone_is_gone() {
        let mut board = Board::new();
        let a = board.add_stone((0.0, 0.0), &["team_a"], 1.0);
        board.remove_stone(a);
        assert!(board.active_pieces().is_empty());
        assert!(board.piece(a).is_none());
    }

    #[test]
    fn test_overlap_query_touch_radius() {
        let mut board = Board::new();
        let a = board.add_stone((0.0, 0.0), &["x"], 3.0);
        let b = board.add_stone((5.0, 0.0), &["x"], 3.0);
        let far = board.add_stone((20.0, 0.0), &["x"], 3.0);

        let shape = ShapeDescriptor::Circle { radius: 3.0 };
        let hits =
            board.query_overlaps(&shape, &Transform2D::at((0.0, 0.0)), &[a]);
        assert!(hits.contains(&b), "overlapping discs are reported");
        assert!(!hits.contains(&far));
        assert!(!hits.contains(&a), "excluded id is never reported");
    }

    #[test]
    fn test_query_excludes_sub_pieces_of_composite() {
        let mut board = Board::new();
        let owner = board.add_stone((0.0, 0.0), &["x"], 3.0);
        let sub = board.add_sub_stone(owner, (1.0, 0.0), &["x"]);

        let shape = ShapeDescriptor::Circle { radius: 3.0 };
        let hits = board.query_overlaps(&shape, &Transform2D::at((0.0, 0.0)), &[owner, sub]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_capture_callback_retires_the_stone() {
        let mut board = Board::new();
        let a = board.add_stone((0.0, 0.0), &["team_a"], 1.0);
        board.piece(a).unwrap().on_captured();
        assert_eq!(board.capture_count(a), 1);
        assert!(board.piece(a).is_none(), "captured stone no longer resolves");
    }

    #[test]
    fn test_sub_stone_not_listed_but_resolvable() {
        let mut board = Board::new();
        let owner = board.add_stone((0.0, 0.0), &["team_a"], 1.0);
        let sub = board.add_sub_stone(owner, (1.0, 0.0), &["team_a"]);
        assert_eq!(board.active_pieces(), vec![owner]);
        assert!(board.piece(sub).is_some());
        assert_eq!(board.piece(owner).unwrap().sub_pieces(), vec![sub]);
    }
}
