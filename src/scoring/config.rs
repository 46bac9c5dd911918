use serde::{Deserialize, Serialize};

pub const DEFAULT_CEILING_LAPS_WEIGHT: f64 = 0.1;
pub const DEFAULT_PROJECTION_WEIGHT: f64 = 0.1;
pub const DEFAULT_DIFFERENTIAL_WEIGHT: f64 = 0.5;
pub const DEFAULT_LAPS_WEIGHT: f64 = 0.1;
pub const DEFAULT_TOP5_WEIGHT: f64 = 10.0;
pub const DEFAULT_MIN_TOP5_PCT: f64 = 10.0;

/// Scoring configuration.
///
/// Defines the weights of the FanDuel score formula and the eligibility
/// threshold. Every field is optional; unset fields fall back to the stock
/// weights. The finishing-position points table is not configurable: it is
/// FanDuel's scoring rule, not a preference.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   differential_weight: 0.75
///   top5_weight: 12
///   min_top5_pct: 15
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight on the Ceiling-Laps upside metric (default: 0.1)
    #[serde(default)]
    pub ceiling_laps_weight: Option<f64>,

    /// Weight on the expected-points projection (default: 0.1)
    #[serde(default)]
    pub projection_weight: Option<f64>,

    /// Weight on (position - ceiling), the positional differential.
    /// Negative differentials reward drivers whose ceiling rank beats their
    /// current position (default: 0.5)
    #[serde(default)]
    pub differential_weight: Option<f64>,

    /// Weight on race length in laps, identical for every driver in a run
    /// (default: 0.1)
    #[serde(default)]
    pub laps_weight: Option<f64>,

    /// Weight on the Top5% probability (default: 10)
    #[serde(default)]
    pub top5_weight: Option<f64>,

    /// Minimum Top5% a driver needs to be lineup-eligible, 0-100 scale,
    /// boundary inclusive (default: 10)
    #[serde(default)]
    pub min_top5_pct: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ceiling_laps_weight: Some(DEFAULT_CEILING_LAPS_WEIGHT),
            projection_weight: Some(DEFAULT_PROJECTION_WEIGHT),
            differential_weight: Some(DEFAULT_DIFFERENTIAL_WEIGHT),
            laps_weight: Some(DEFAULT_LAPS_WEIGHT),
            top5_weight: Some(DEFAULT_TOP5_WEIGHT),
            min_top5_pct: Some(DEFAULT_MIN_TOP5_PCT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.ceiling_laps_weight, Some(0.1));
        assert_eq!(config.projection_weight, Some(0.1));
        assert_eq!(config.differential_weight, Some(0.5));
        assert_eq!(config.laps_weight, Some(0.1));
        assert_eq!(config.top5_weight, Some(10.0));
        assert_eq!(config.min_top5_pct, Some(10.0));
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
differential_weight: 0.75
min_top5_pct: 15
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.differential_weight, Some(0.75));
        assert_eq!(config.min_top5_pct, Some(15.0));
        assert!(config.ceiling_laps_weight.is_none());
        assert!(config.projection_weight.is_none());
        assert!(config.laps_weight.is_none());
        assert!(config.top5_weight.is_none());
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let yaml = "{}";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.ceiling_laps_weight.is_none());
        assert!(config.min_top5_pct.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "podium_weight: 3";
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
