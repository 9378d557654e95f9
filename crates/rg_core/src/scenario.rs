//! Declarative scenario creation and running
//!
//! Builder-style API for setting up a board and stepping the engine
//! over it, used by the JSON API, the CLI, and holistic tests.
//!
//! ```rust
//! use rg_core::scenario::ScenarioBuilder;
//!
//! let mut scenario = ScenarioBuilder::new("ring")
//!     .set_tags(&["team_a"])
//!     .add(0.0, 0.0)
//!     .add(10.0, 0.0)
//!     .add(10.0, 10.0)
//!     .add(0.0, 10.0)
//!     .set_tags(&["team_b"])
//!     .add(5.0, 5.0)
//!     .build()
//!     .unwrap();
//! let summary = scenario.run(5, 0.25);
//! assert_eq!(summary.total_captured, 1);
//! ```

use thiserror::Error;

use crate::board::Board;
use crate::engine::config::CaptureConfig;
use crate::engine::orchestrator::CaptureEngine;
use crate::engine::piece::PieceId;
use crate::engine::spatial::EngineContext;
use crate::engine::territory::ScorePair;

/// Stone radius used when the builder is not told otherwise. Edge
/// stones placed a grid step apart will touch at this size.
pub const DEFAULT_STONE_RADIUS: f32 = 6.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("No tags selected. Call set_tags() before add().")]
    NoTagsSelected,
    #[error("{axis} coordinate {value} is not finite")]
    NonFiniteCoordinate { axis: &'static str, value: f32 },
    #[error("Stone radius {value} must be positive")]
    NonPositiveRadius { value: f32 },
    #[error("Scenario interval {value} must be positive")]
    NonPositiveInterval { value: f32 },
}

/// A built scenario: a board plus the configuration to run it under.
#[derive(Debug)]
pub struct Scenario {
    pub name: String,
    pub config: CaptureConfig,
    pub board: Board,
}

/// One step in which the engine did something visible.
#[derive(Debug, Clone)]
pub struct TickRecord {
    pub tick: u32,
    pub captured: Vec<PieceId>,
    pub scores: Option<ScorePair>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks_run: u32,
    /// Records for ticks where a capture fired or scores refreshed
    pub records: Vec<TickRecord>,
    pub total_captured: usize,
    pub final_scores: Option<ScorePair>,
}

impl Scenario {
    /// Step the engine `ticks` times at a fixed `dt`.
    pub fn run(&mut self, ticks: u32, dt: f32) -> RunSummary {
        let mut engine = CaptureEngine::new(self.config.clone());
        let mut records = Vec::new();
        let mut total_captured = 0;

        for tick in 0..ticks {
            let ctx = EngineContext::new(&self.board, &self.board, self.config.zone_radius);
            let report = engine.step(&ctx, dt);
            if !report.captured.is_empty() || report.scores.is_some() {
                total_captured += report.captured.len();
                records.push(TickRecord {
                    tick,
                    captured: report.captured,
                    scores: report.scores,
                });
            }
        }

        RunSummary {
            ticks_run: ticks,
            records,
            total_captured,
            final_scores: engine.last_scores(),
        }
    }
}

pub struct ScenarioBuilder {
    name: String,
    config: CaptureConfig,
    board: Board,
    current_tags: Vec<String>,
    current_capturable: bool,
    error: Option<ScenarioError>,
}

impl ScenarioBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: CaptureConfig::default(),
            board: Board::new(),
            current_tags: Vec::new(),
            current_capturable: true,
            error: None,
        }
    }

    pub fn with_config(mut self, config: CaptureConfig) -> Self {
        self.config = config;
        self
    }

    /// Tags applied to every subsequently added stone.
    pub fn set_tags(mut self, tags: &[&str]) -> Self {
        self.current_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Capturable flag applied to every subsequently added stone.
    pub fn set_capturable(mut self, capturable: bool) -> Self {
        self.current_capturable = capturable;
        self
    }

    pub fn add(self, x: f32, y: f32) -> Self {
        self.add_with_radius(x, y, DEFAULT_STONE_RADIUS)
    }

    pub fn add_with_radius(mut self, x: f32, y: f32, radius: f32) -> Self {
        if let Err(e) = self.try_add(x, y, Some(radius)) {
            self.error.get_or_insert(e);
        }
        self
    }

    /// Stone without a collision shape: scores territory, builds no
    /// adjacency edges.
    pub fn add_shapeless(mut self, x: f32, y: f32) -> Self {
        if let Err(e) = self.try_add(x, y, None) {
            self.error.get_or_insert(e);
        }
        self
    }

    fn try_add(&mut self, x: f32, y: f32, radius: Option<f32>) -> Result<(), ScenarioError> {
        if self.current_tags.is_empty() {
            return Err(ScenarioError::NoTagsSelected);
        }
        if !x.is_finite() {
            return Err(ScenarioError::NonFiniteCoordinate { axis: "x", value: x });
        }
        if !y.is_finite() {
            return Err(ScenarioError::NonFiniteCoordinate { axis: "y", value: y });
        }
        if let Some(r) = radius {
            if !r.is_finite() || r <= 0.0 {
                return Err(ScenarioError::NonPositiveRadius { value: r });
            }
        }

        let tags: Vec<&str> = self.current_tags.iter().map(String::as_str).collect();
        let id = match radius {
            Some(r) => self.board.add_stone((x, y), &tags, r),
            None => self.board.add_shapeless_stone((x, y), &tags),
        };
        self.board.set_capturable(id, self.current_capturable);
        Ok(())
    }

    pub fn build(self) -> Result<Scenario, ScenarioError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.config.detection_interval <= 0.0 {
            return Err(ScenarioError::NonPositiveInterval {
                value: self.config.detection_interval,
            });
        }
        if self.config.scoring_interval <= 0.0 {
            return Err(ScenarioError::NonPositiveInterval {
                value: self.config.scoring_interval,
            });
        }
        Ok(Scenario { name: self.name, config: self.config, board: self.board })
    }
}
