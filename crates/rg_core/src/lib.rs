//! # rg_core - Encirclement-Capture Rules Engine
//!
//! Rules engine for a continuous-space stone game: stones of two
//! teams are placed freely on a plane, and whenever one team's stones
//! form a closed chain through spatial adjacency, opposing stones
//! inside the chain's polygon are captured. A separately timed
//! territory scorer counts stones inside a circular zone, with a komi
//! offset for the second team.
//!
//! ## Features
//! - Host-agnostic: scenes integrate through three small traits
//!   ([`engine::PieceRegistry`], [`engine::SpatialQuery`],
//!   [`engine::PieceView`])
//! - Deterministic passes (registry order in, id order out)
//! - In-memory [`board::Board`] adapter for tests, tools, and
//!   headless runs
//! - JSON API for easy integration with game engines like Godot

pub mod api;
pub mod board;
pub mod engine;
pub mod error;
pub mod scenario;

// Re-export the main engine surface
pub use api::run_scenario_json;
pub use engine::{
    CaptureConfig, CaptureEngine, EngineContext, GroupConfig, PieceId, PieceRegistry, PieceView,
    ScorePair, ShapeDescriptor, SpatialQuery, StepReport, Transform2D, VictimSelect,
};
pub use error::{CoreError, Result};
pub use scenario::{Scenario, ScenarioBuilder, ScenarioError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
