use thiserror::Error;

use crate::scenario::ScenarioError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
