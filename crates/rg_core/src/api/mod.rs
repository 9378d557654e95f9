//! JSON API for host integration
//!
//! String-in, string-out entry points so game engines can drive the
//! library without linking against its types.

mod scenario_json;

pub use scenario_json::{
    run_scenario_json, CaptureRecord, RunRequest, RunResponse, StoneSpec,
};
