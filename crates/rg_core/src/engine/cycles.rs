//! Loop enumeration over the proximity graph
//!
//! Iterative depth-first search with an explicit stack and a global
//! parent map. Every qualifying back-edge reports one cycle, so the
//! same geometric loop can be recorded more than once on densely
//! connected boards, and vertices come out in discovery order rather
//! than geometric order. Capture evaluation depends on both behaviors.

use fxhash::{FxHashMap, FxHashSet};

use super::adjacency::AdjacencyGraph;
use super::piece::PieceId;

/// Ordered vertex sequence of one candidate loop, implicitly closed
/// (last connects back to first). Only cycles of length >= 3 survive
/// polygon construction.
pub type Cycle = Vec<PieceId>;

/// Enumerate cycles, one DFS rooted at each unvisited vertex in
/// member order.
pub fn find_cycles(members: &[PieceId], graph: &AdjacencyGraph) -> Vec<Cycle> {
    let mut visited: FxHashSet<PieceId> = FxHashSet::default();
    let mut parent: FxHashMap<PieceId, PieceId> = FxHashMap::default();
    let mut cycles: Vec<Cycle> = Vec::new();

    for &root in members {
        if visited.contains(&root) {
            continue;
        }

        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.insert(current);

            for &neighbor in graph.neighbors_of(current) {
                if !visited.contains(&neighbor) {
                    parent.insert(neighbor, current);
                    stack.push(neighbor);
                    continue;
                }

                // Back-edge. The root has no parent entry and reports
                // nothing; stepping straight back to the discovery
                // predecessor is not a loop either.
                let Some(&current_parent) = parent.get(&current) else {
                    continue;
                };
                if neighbor == current_parent {
                    continue;
                }

                let mut cycle: Cycle = vec![neighbor, current];
                let mut walker = current_parent;
                loop {
                    if walker == neighbor {
                        break;
                    }
                    cycle.push(walker);
                    match parent.get(&walker) {
                        Some(&up) => walker = up,
                        None => break,
                    }
                }
                cycles.push(cycle);
            }
        }
    }

    cycles
}
