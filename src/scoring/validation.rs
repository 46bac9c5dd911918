use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("scoring.ceiling_laps_weight", config.ceiling_laps_weight),
        ("scoring.projection_weight", config.projection_weight),
        ("scoring.differential_weight", config.differential_weight),
        ("scoring.laps_weight", config.laps_weight),
        ("scoring.top5_weight", config.top5_weight),
    ];
    for (field, weight) in weights {
        if let Some(w) = weight {
            if !w.is_finite() {
                errors.push(format!("{}: must be a finite number, got {}", field, w));
            }
        }
    }

    if let Some(threshold) = config.min_top5_pct {
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            errors.push(format!(
                "scoring.min_top5_pct: must be between 0 and 100, got {}",
                threshold
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = ScoringConfig {
            ceiling_laps_weight: None,
            projection_weight: None,
            differential_weight: None,
            laps_weight: None,
            top5_weight: None,
            min_top5_pct: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let config = ScoringConfig {
            top5_weight: Some(f64::NAN),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.top5_weight"));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = ScoringConfig {
            min_top5_pct: Some(150.0),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("min_top5_pct"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            laps_weight: Some(f64::INFINITY),
            min_top5_pct: Some(-5.0),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
