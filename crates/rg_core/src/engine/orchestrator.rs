//! Tick-driven engine front door
//!
//! [`CaptureEngine`] owns the two interval timers, the score scalars
//! and the debug overlay. Hosts call [`CaptureEngine::step`] once per
//! physics tick with the elapsed delta; each timer fires at most once
//! per step and resets to zero when it does, with no backlog
//! compensation for oversized deltas.

use fxhash::FxHashSet;

use super::adjacency::build_adjacency;
use super::capture::{apply_captures, evaluate_group};
use super::config::CaptureConfig;
use super::cycles::find_cycles;
use super::debug_overlay::{DebugOverlay, OverlayColor};
use super::piece::PieceId;
use super::spatial::EngineContext;
use super::territory::{recount, ScorePair};

/// What one `step` call did.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    /// Whether the detection timer fired this step
    pub detection_ran: bool,
    /// Pieces whose capture callback fired this step, in id order
    pub captured: Vec<PieceId>,
    /// Cycle records across all groups of the detection pass
    pub cycles_found: usize,
    /// Fresh scores if the scoring timer fired this step
    pub scores: Option<ScorePair>,
}

pub struct CaptureEngine {
    config: CaptureConfig,
    detection_timer: f32,
    scoring_timer: f32,
    last_scores: Option<ScorePair>,
    overlay: DebugOverlay,
}

impl CaptureEngine {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            detection_timer: 0.0,
            scoring_timer: 0.0,
            last_scores: None,
            overlay: DebugOverlay::default(),
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Latest scoring-pass result, if any pass has run yet.
    pub fn last_scores(&self) -> Option<ScorePair> {
        self.last_scores
    }

    /// Debug buffers from the latest detection pass. Empty unless
    /// `debug_overlay` is enabled in config.
    pub fn overlay(&self) -> &DebugOverlay {
        &self.overlay
    }

    /// Advance both timers by `dt` and run whichever passes are due.
    /// Runs synchronously to completion; nothing may mutate the board
    /// concurrently.
    pub fn step(&mut self, ctx: &EngineContext<'_>, dt: f32) -> StepReport {
        let mut report = StepReport::default();

        self.detection_timer += dt;
        if self.detection_timer >= self.config.detection_interval {
            self.detection_timer = 0.0;
            let (captured, cycles_found) = self.run_detection_pass(ctx);
            report.detection_ran = true;
            report.captured = captured;
            report.cycles_found = cycles_found;
        }

        self.scoring_timer += dt;
        if self.scoring_timer >= self.config.scoring_interval {
            self.scoring_timer = 0.0;
            report.scores = Some(self.run_scoring_pass(ctx));
        }

        report
    }

    /// One full capture-detection pass over every configured group.
    /// Public so hosts and tests can force a pass outside the timer.
    pub fn run_detection_pass(&mut self, ctx: &EngineContext<'_>) -> (Vec<PieceId>, usize) {
        self.overlay.clear();
        let mut capture_set: FxHashSet<PieceId> = FxHashSet::default();
        let mut cycles_found = 0;

        let active = ctx.registry.active_pieces();
        for (group_idx, group) in self.config.groups.iter().enumerate() {
            let members: Vec<PieceId> = active
                .iter()
                .copied()
                .filter(|&id| {
                    ctx.registry.piece(id).map(|p| p.has_tag(&group.member_tag)).unwrap_or(false)
                })
                .collect();

            // Fewer than 3 members can never close a loop; skip the
            // graph entirely.
            if members.len() < 3 {
                continue;
            }

            let overlay = self.config.debug_overlay.then_some(&mut self.overlay);
            let graph = build_adjacency(ctx, &members, overlay);
            let cycles = find_cycles(&members, &graph);
            cycles_found += cycles.len();

            let overlay = self.config.debug_overlay.then_some(&mut self.overlay);
            evaluate_group(
                ctx,
                group,
                &cycles,
                &mut capture_set,
                overlay,
                OverlayColor(group_idx),
            );
        }

        let captured = apply_captures(ctx, &capture_set);
        (captured, cycles_found)
    }

    /// One territory recount; updates and returns the score pair.
    pub fn run_scoring_pass(&mut self, ctx: &EngineContext<'_>) -> ScorePair {
        let scores = recount(ctx, &self.config);
        self.last_scores = Some(scores);
        scores
    }
}
