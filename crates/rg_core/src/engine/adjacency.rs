//! Proximity graph construction
//!
//! One spatial query per member piece, restricted to pieces of the
//! same capturing classification. The graph is rebuilt from scratch
//! every detection pass; edge symmetry depends entirely on the host's
//! query and is not assumed downstream.

use fxhash::{FxHashMap, FxHashSet};

use super::debug_overlay::DebugOverlay;
use super::piece::PieceId;
use super::spatial::EngineContext;

/// Ephemeral adjacency mapping for one detection pass.
///
/// Values keep the spatial query's report order; duplicate neighbors
/// (overlapping sub-components reported twice) are permitted.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    neighbors: FxHashMap<PieceId, Vec<PieceId>>,
}

impl AdjacencyGraph {
    /// Graph from precomputed neighbor lists, for hosts that resolve
    /// adjacency themselves.
    pub fn from_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (PieceId, Vec<PieceId>)>,
    {
        Self { neighbors: lists.into_iter().collect() }
    }

    pub fn neighbors_of(&self, id: PieceId) -> &[PieceId] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum()
    }
}

/// Build the adjacency graph for one capturing classification.
///
/// `members` is the ordered list of pieces sharing the capturing tag.
/// Invalid handles are skipped for this pass; a member without a
/// resolvable shape stays in the graph as an isolated vertex (logged
/// as degraded, still counted for territory elsewhere).
pub fn build_adjacency(
    ctx: &EngineContext<'_>,
    members: &[PieceId],
    mut overlay: Option<&mut DebugOverlay>,
) -> AdjacencyGraph {
    let member_set: FxHashSet<PieceId> = members.iter().copied().collect();
    let mut graph = AdjacencyGraph::default();

    for &id in members {
        let piece = match ctx.registry.piece(id) {
            Some(p) => p,
            None => continue,
        };

        let shape = match piece.shape() {
            Some(s) => s,
            None => {
                log::warn!("piece {} has no resolvable shape, kept as isolated vertex", id);
                graph.neighbors.entry(id).or_default();
                continue;
            }
        };

        // Exclude the piece itself and, for composites, its own parts
        // from its overlap report.
        let mut exclude = vec![id];
        exclude.extend(piece.sub_pieces());

        let hits = ctx.spatial.query_overlaps(&shape, &piece.transform(), &exclude);
        let edges: Vec<PieceId> =
            hits.into_iter().filter(|hit| member_set.contains(hit)).collect();

        if let Some(overlay) = overlay.as_deref_mut() {
            let from = piece.position();
            for &to_id in &edges {
                if let Some(to) = ctx.registry.piece(to_id) {
                    overlay.push_segment(from, to.position());
                }
            }
        }

        graph.neighbors.insert(id, edges);
    }

    graph
}
