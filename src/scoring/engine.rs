use super::config::{
    ScoringConfig, DEFAULT_CEILING_LAPS_WEIGHT, DEFAULT_DIFFERENTIAL_WEIGHT, DEFAULT_LAPS_WEIGHT,
    DEFAULT_PROJECTION_WEIGHT, DEFAULT_TOP5_WEIGHT,
};
use crate::slate::types::{Driver, ScoredDriver};

/// FanDuel points by finishing position, 1 through 40. The gaps at the top
/// (1st pays 43, 2nd pays 40) are FanDuel's published table, not a typo.
const FINISHING_POINTS: [f64; 40] = [
    43.0, 40.0, 38.0, 37.0, 36.0, 35.0, 34.0, 33.0, 32.0, 31.0, // 1-10
    30.0, 29.0, 28.0, 27.0, 26.0, 25.0, 24.0, 23.0, 22.0, 21.0, // 11-20
    20.0, 19.0, 18.0, 17.0, 16.0, 15.0, 14.0, 13.0, 12.0, 11.0, // 21-30
    10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, // 31-40
];

/// Base points for a finishing position. Positions outside 1-40 score zero.
pub fn base_points(position: u32) -> f64 {
    match position {
        1..=40 => FINISHING_POINTS[(position - 1) as usize],
        _ => 0.0,
    }
}

/// Compute a driver's FanDuel score: base points for the projected finish
/// plus the weighted projection, upside, and positional-differential terms.
/// Pure and deterministic given the same inputs.
pub fn fanduel_score(driver: &Driver, laps: u32, config: &ScoringConfig) -> f64 {
    let mut score = base_points(driver.position);
    score += driver.ceiling_laps
        * config.ceiling_laps_weight.unwrap_or(DEFAULT_CEILING_LAPS_WEIGHT);
    score += driver.projection * config.projection_weight.unwrap_or(DEFAULT_PROJECTION_WEIGHT);
    // Signed on purpose: the term goes negative when the ceiling rank is
    // worse (higher) than the current position.
    score += (driver.position as f64 - driver.ceiling)
        * config.differential_weight.unwrap_or(DEFAULT_DIFFERENTIAL_WEIGHT);
    score += laps as f64 * config.laps_weight.unwrap_or(DEFAULT_LAPS_WEIGHT);
    score += driver.top5_pct * config.top5_weight.unwrap_or(DEFAULT_TOP5_WEIGHT);
    score
}

/// Score every driver in the slate and rank the result by score, best first.
pub fn score_slate(drivers: Vec<Driver>, laps: u32, config: &ScoringConfig) -> Vec<ScoredDriver> {
    let mut scored: Vec<ScoredDriver> = drivers
        .into_iter()
        .map(|driver| {
            let fanduel_score = fanduel_score(&driver, laps, config);
            ScoredDriver {
                driver,
                fanduel_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.fanduel_score
            .partial_cmp(&a.fanduel_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Keep drivers whose Top5% meets the eligibility floor, boundary inclusive.
/// An empty result is valid; the sampler reports it as a precondition
/// failure before drawing.
pub fn filter_eligible(drivers: Vec<ScoredDriver>, min_top5_pct: f64) -> Vec<ScoredDriver> {
    drivers
        .into_iter()
        .filter(|d| d.driver.top5_pct >= min_top5_pct)
        .collect()
}
