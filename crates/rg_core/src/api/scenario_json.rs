use serde::{Deserialize, Serialize};

use crate::engine::config::CaptureConfig;
use crate::engine::piece::PieceId;
use crate::engine::territory::ScorePair;
use crate::error::{CoreError, Result};
use crate::scenario::{ScenarioBuilder, DEFAULT_STONE_RADIUS};
use crate::SCHEMA_VERSION;

/// One stone in a scenario request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoneSpec {
    pub x: f32,
    pub y: f32,
    pub tags: Vec<String>,
    /// Omitted = default radius; explicit `null` = shapeless stone
    #[serde(default = "default_radius")]
    pub radius: Option<f32>,
    #[serde(default = "default_true")]
    pub capturable: bool,
}

fn default_radius() -> Option<f32> {
    Some(DEFAULT_STONE_RADIUS)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub name: String,
    /// Engine steps to run
    pub ticks: u32,
    /// Fixed per-step delta in seconds
    pub dt: f32,
    /// Omitted = standard two-team setup
    #[serde(default)]
    pub config: Option<CaptureConfig>,
    pub stones: Vec<StoneSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub tick: u32,
    pub piece: PieceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub schema_version: u8,
    pub name: String,
    pub ticks_run: u32,
    pub captures: Vec<CaptureRecord>,
    pub final_scores: Option<ScorePair>,
}

/// Run a scenario described as JSON and return the report as JSON.
pub fn run_scenario_json(request_json: &str) -> Result<String> {
    let request: RunRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let mut builder = ScenarioBuilder::new(&request.name);
    if let Some(config) = request.config.clone() {
        builder = builder.with_config(config);
    }
    for stone in &request.stones {
        let tags: Vec<&str> = stone.tags.iter().map(String::as_str).collect();
        builder = builder.set_tags(&tags).set_capturable(stone.capturable);
        builder = match stone.radius {
            Some(radius) => builder.add_with_radius(stone.x, stone.y, radius),
            None => builder.add_shapeless(stone.x, stone.y),
        };
    }

    let mut scenario = builder.build()?;
    let summary = scenario.run(request.ticks, request.dt);

    let captures = summary
        .records
        .iter()
        .flat_map(|record| {
            record.captured.iter().map(|&piece| CaptureRecord { tick: record.tick, piece })
        })
        .collect();

    let response = RunResponse {
        schema_version: SCHEMA_VERSION,
        name: request.name,
        ticks_run: summary.ticks_run,
        captures,
        final_scores: summary.final_scores,
    };
    Ok(serde_json::to_string(&response)?)
}
