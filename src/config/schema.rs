use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Top-level config file schema. Everything is optional; a missing file or
/// an empty mapping means stock behavior.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub sampler: Option<SamplerConfig>,
}

/// Sampler settings. CLI flags take precedence over these.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SamplerConfig {
    /// Cap on sampling draws before a run fails as cap-infeasible
    #[serde(default)]
    pub max_attempts: Option<u64>,

    /// Fixed RNG seed; set for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}
