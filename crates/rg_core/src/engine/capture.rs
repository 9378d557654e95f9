//! Polygon containment and capture application
//!
//! Cycles become polygons exactly as discovered: no convex hull, no
//! winding correction. A victim inside any cycle of the pass lands in
//! the pass-wide capture set, and `on_captured` fires once per set
//! member after every group of the pass has been evaluated.

use fxhash::FxHashSet;

use super::config::{GroupConfig, VictimSelect};
use super::cycles::Cycle;
use super::debug_overlay::{DebugOverlay, OverlayColor};
use super::geometry::{point_in_polygon, WorldPos};
use super::piece::PieceId;
use super::spatial::EngineContext;

/// Evaluate one capturing group's cycles, accumulating hits into the
/// pass-wide `capture_set`.
///
/// The victim pool is selected per the group's explicit mode:
/// an opposing tag, or everything outside the capturing
/// classification. Non-capturable and invalid pieces never enter the
/// set.
pub fn evaluate_group(
    ctx: &EngineContext<'_>,
    group: &GroupConfig,
    cycles: &[Cycle],
    capture_set: &mut FxHashSet<PieceId>,
    mut overlay: Option<&mut DebugOverlay>,
    color: OverlayColor,
) {
    let polygons: Vec<Vec<WorldPos>> = cycles
        .iter()
        .filter(|cycle| cycle.len() >= 3)
        .map(|cycle| {
            // A vertex whose handle died mid-tick contributes no
            // position; the polygon is discarded below if that drops
            // it under 3 vertices.
            cycle
                .iter()
                .filter_map(|&id| ctx.registry.piece(id).map(|p| p.position()))
                .collect::<Vec<WorldPos>>()
        })
        .filter(|polygon| polygon.len() >= 3)
        .collect();

    if polygons.is_empty() {
        return;
    }

    if let Some(overlay) = overlay.as_deref_mut() {
        for polygon in &polygons {
            overlay.push_polygon(polygon.clone(), color);
        }
    }

    for id in ctx.registry.active_pieces() {
        let Some(piece) = ctx.registry.piece(id) else {
            continue;
        };
        let is_victim = match &group.victims {
            VictimSelect::Tagged(tag) => piece.has_tag(tag),
            VictimSelect::NotInGroup => !piece.has_tag(&group.member_tag),
        };
        if !is_victim || !piece.capturable() {
            continue;
        }

        let pos = piece.position();
        if polygons.iter().any(|polygon| point_in_polygon(pos, polygon)) {
            capture_set.insert(id);
        }
    }
}

/// Fire `on_captured` exactly once per captured piece, in id order
/// for determinism. Returns the pieces actually notified.
pub fn apply_captures(ctx: &EngineContext<'_>, capture_set: &FxHashSet<PieceId>) -> Vec<PieceId> {
    let mut captured: Vec<PieceId> = capture_set.iter().copied().collect();
    captured.sort();

    captured.retain(|&id| match ctx.registry.piece(id) {
        Some(piece) => {
            piece.on_captured();
            true
        }
        None => false,
    });
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::engine::adjacency::build_adjacency;
    use crate::engine::cycles::find_cycles;
    use crate::engine::spatial::PieceRegistry;

    fn ring_with_victim() -> (Board, PieceId) {
        let mut board = Board::new();
        for pos in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            board.add_stone(pos, &["team_a"], 6.0);
        }
        let victim = board.add_stone((5.0, 5.0), &["team_b"], 1.0);
        (board, victim)
    }

    fn group_a() -> GroupConfig {
        GroupConfig {
            member_tag: "team_a".to_string(),
            victims: VictimSelect::Tagged("team_b".to_string()),
        }
    }

    fn run_group(board: &Board, group: &GroupConfig) -> FxHashSet<PieceId> {
        let ctx = EngineContext::new(board, board, 300.0);
        let members = board.pieces_with_tag(&group.member_tag);
        let graph = build_adjacency(&ctx, &members, None);
        let cycles = find_cycles(&members, &graph);
        let mut set = FxHashSet::default();
        evaluate_group(&ctx, group, &cycles, &mut set, None, OverlayColor(0));
        set
    }

    #[test]
    fn test_ring_captures_enclosed_enemy_once() {
        let (board, victim) = ring_with_victim();
        let set = run_group(&board, &group_a());
        assert_eq!(set.len(), 1);
        assert!(set.contains(&victim));

        let ctx = EngineContext::new(&board, &board, 300.0);
        let fired = apply_captures(&ctx, &set);
        assert_eq!(fired, vec![victim]);
        assert_eq!(board.capture_count(victim), 1, "callback fires exactly once");
    }

    #[test]
    fn test_enemy_outside_ring_is_safe() {
        let (mut board, _) = ring_with_victim();
        let outside = board.add_stone((30.0, 30.0), &["team_b"], 1.0);
        let set = run_group(&board, &group_a());
        assert!(!set.contains(&outside));
    }

    #[test]
    fn test_non_capturable_piece_is_immune() {
        let (mut board, victim) = ring_with_victim();
        board.set_capturable(victim, false);
        let set = run_group(&board, &group_a());
        assert!(set.is_empty(), "non-capturable piece never enters the capture set");
    }

    #[test]
    fn test_short_cycles_build_no_polygon() {
        // Two mutually adjacent stones enclose nothing.
        let mut board = Board::new();
        board.add_stone((0.0, 0.0), &["team_a"], 6.0);
        board.add_stone((10.0, 0.0), &["team_a"], 6.0);
        board.add_stone((5.0, 0.0), &["team_b"], 1.0);
        let set = run_group(&board, &group_a());
        assert!(set.is_empty());
    }

    #[test]
    fn test_not_in_group_mode_captures_untagged_bystander() {
        let mut board = Board::new();
        for pos in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            board.add_stone(pos, &["team_a"], 6.0);
        }
        let bystander = board.add_stone((5.0, 5.0), &["spectator"], 1.0);

        let tagged_only = run_group(&board, &group_a());
        assert!(
            !tagged_only.contains(&bystander),
            "tagged mode ignores pieces without the opposing tag"
        );

        let greedy = GroupConfig {
            member_tag: "team_a".to_string(),
            victims: VictimSelect::NotInGroup,
        };
        let set = run_group(&board, &greedy);
        assert!(set.contains(&bystander), "not-in-group mode captures anything outside");
    }

    #[test]
    fn test_victim_inside_redundant_cycle_records_fires_once() {
        // A chord through the ring makes the cycle finder report the
        // enclosing loop more than once. The capture set still holds
        // the victim a single time.
        let mut board = Board::new();
        for pos in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            board.add_stone(pos, &["team_a"], 8.0); // big enough to chord diagonals
        }
        let victim = board.add_stone((5.0, 5.0), &["team_b"], 1.0);

        let ctx = EngineContext::new(&board, &board, 300.0);
        let members = board.pieces_with_tag("team_a");
        let graph = build_adjacency(&ctx, &members, None);
        let cycles = find_cycles(&members, &graph);
        assert!(cycles.len() >= 2, "dense ring should report redundant cycles");

        let mut set = FxHashSet::default();
        evaluate_group(&ctx, &group_a(), &cycles, &mut set, None, OverlayColor(0));
        assert_eq!(set.len(), 1);

        apply_captures(&ctx, &set);
        assert_eq!(board.capture_count(victim), 1);
    }

    #[test]
    fn test_disjoint_triangles_merge_into_one_capture_set() {
        // Two triangles sharing no vertices, both containing their
        // own victim, evaluated into one merged set.
        let mut board = Board::new();
        for pos in [(0.0, 0.0), (8.0, 0.0), (4.0, 8.0)] {
            board.add_stone(pos, &["team_a"], 5.0);
        }
        for pos in [(100.0, 0.0), (108.0, 0.0), (104.0, 8.0)] {
            board.add_stone(pos, &["team_a"], 5.0);
        }
        let v1 = board.add_stone((4.0, 2.0), &["team_b"], 1.0);
        let v2 = board.add_stone((104.0, 2.0), &["team_b"], 1.0);

        let set = run_group(&board, &group_a());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&v1) && set.contains(&v2));

        let ctx = EngineContext::new(&board, &board, 300.0);
        let fired = apply_captures(&ctx, &set);
        assert_eq!(fired.len(), 2);
        assert_eq!(board.capture_count(v1), 1);
        assert_eq!(board.capture_count(v2), 1);
    }

    #[test]
    fn test_overlay_receives_cycle_polygons() {
        let (board, _) = ring_with_victim();
        let ctx = EngineContext::new(&board, &board, 300.0);
        let members = board.pieces_with_tag("team_a");
        let graph = build_adjacency(&ctx, &members, None);
        let cycles = find_cycles(&members, &graph);

        let mut overlay = DebugOverlay::default();
        let mut set = FxHashSet::default();
        evaluate_group(&ctx, &group_a(), &cycles, &mut set, Some(&mut overlay), OverlayColor(3));
        assert_eq!(overlay.polygons.len(), 1);
        assert_eq!(overlay.polygons[0].color, OverlayColor(3));
        assert_eq!(overlay.polygons[0].vertices.len(), 4);
    }

    #[test]
    fn test_capture_effect_belongs_to_the_host() {
        // The engine only fires the callback; the board adapter is
        // the one that retires the stone in response.
        let (board, victim) = ring_with_victim();
        let set = run_group(&board, &group_a());
        let ctx = EngineContext::new(&board, &board, 300.0);
        apply_captures(&ctx, &set);
        assert!(board.piece(victim).is_none(), "host callback removed the stone");
        assert_eq!(board.capture_count(victim), 1);
    }
}
