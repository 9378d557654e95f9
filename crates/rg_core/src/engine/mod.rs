//! Capture-loop detection and territory scoring engine
//!
//! Control flow per detection pass: for each configured capturing
//! group, [`adjacency`] builds the proximity graph, [`cycles`]
//! enumerates loops, [`capture`] tests containment and accumulates
//! the pass-wide capture set. [`territory`] recounts on its own
//! timer. [`orchestrator::CaptureEngine`] drives both from a single
//! `step` call.

pub mod adjacency;
pub mod capture;
pub mod config;
pub mod cycles;
pub mod debug_overlay;
pub mod geometry;
pub mod orchestrator;
pub mod piece;
pub mod spatial;
pub mod territory;

pub use adjacency::{build_adjacency, AdjacencyGraph};
pub use capture::{apply_captures, evaluate_group};
pub use config::{CaptureConfig, GroupConfig, VictimSelect};
pub use cycles::{find_cycles, Cycle};
pub use debug_overlay::{DebugOverlay, OverlayColor, OverlayPolygon};
pub use geometry::{point_in_polygon, polygon_area, WorldPos};
pub use orchestrator::{CaptureEngine, StepReport};
pub use piece::{PieceId, PieceView, ShapeDescriptor, Transform2D};
pub use spatial::{EngineContext, PieceRegistry, SpatialQuery};
pub use territory::{recount, ScorePair};
