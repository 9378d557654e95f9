//! Territory scoring inside the circular zone
//!
//! Full recount every pass: the scores are never adjusted
//! incrementally, so repeated recounts over an unchanged board are
//! idempotent. Team B starts each recount from the komi offset.

use serde::{Deserialize, Serialize};

use super::config::CaptureConfig;
use super::geometry::length_squared;
use super::spatial::EngineContext;

/// Aggregate territory scores for one recount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub team_a: f32,
    pub team_b: f32,
}

/// Recount pieces inside the zone.
///
/// Every valid active piece and each of its direct sub-pieces within
/// `zone_radius` of the origin increments the counter of every team
/// tag it carries; a piece tagged with both teams counts for both.
/// Invalid handles are skipped, not errors.
pub fn recount(ctx: &EngineContext<'_>, config: &CaptureConfig) -> ScorePair {
    let radius_sq = ctx.zone_radius * ctx.zone_radius;
    let mut scores = ScorePair { team_a: 0.0, team_b: config.komi };

    for id in ctx.registry.active_pieces() {
        let Some(piece) = ctx.registry.piece(id) else {
            continue;
        };

        tally(ctx, config, id, radius_sq, &mut scores);
        for sub_id in piece.sub_pieces() {
            tally(ctx, config, sub_id, radius_sq, &mut scores);
        }
    }

    scores
}

fn tally(
    ctx: &EngineContext<'_>,
    config: &CaptureConfig,
    id: super::piece::PieceId,
    radius_sq: f32,
    scores: &mut ScorePair,
) {
    let Some(piece) = ctx.registry.piece(id) else {
        return;
    };
    if length_squared(piece.position()) > radius_sq {
        return;
    }
    if piece.has_tag(&config.team_a_tag) {
        scores.team_a += 1.0;
    }
    if piece.has_tag(&config.team_b_tag) {
        scores.team_b += 1.0;
    }
}
