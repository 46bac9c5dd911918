use anyhow::{bail, Result};
use rand::Rng;

use crate::slate::types::{Lineup, ScoredDriver};

/// FanDuel's NASCAR contest budget.
pub const SALARY_CAP: u32 = 50_000;

/// Drivers per lineup.
pub const LINEUP_SIZE: usize = 5;

/// Draws before a run is declared cap-infeasible. Feasible slates accept
/// within a few draws; a run that burns a million is not going to converge.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Draw random lineups from the eligible pool until `count` of them fit
/// under the salary cap.
///
/// Each draw picks 5 distinct drivers uniformly, without replacement within
/// the draw. Rejected combinations can be re-drawn, and an accepted
/// combination can be accepted again, so duplicate lineups across the output
/// are allowed. Accepted lineups are numbered 1-based in acceptance order.
///
/// The caller owns the RNG, so a seeded generator reproduces a run exactly.
///
/// # Errors
///
/// Fails before drawing if the pool has fewer than 5 drivers, and fails with
/// the attempt count if `max_attempts` draws pass without accepting `count`
/// lineups.
pub fn sample_lineups<R: Rng>(
    pool: &[ScoredDriver],
    count: u32,
    max_attempts: u64,
    rng: &mut R,
) -> Result<Vec<Lineup>> {
    if pool.len() < LINEUP_SIZE {
        bail!(
            "Lineup sampling needs at least {} eligible drivers, found {}",
            LINEUP_SIZE,
            pool.len()
        );
    }

    let mut lineups: Vec<Lineup> = Vec::with_capacity(count as usize);
    let mut attempts: u64 = 0;

    while (lineups.len() as u32) < count {
        if attempts >= max_attempts {
            bail!(
                "Accepted only {} of {} lineups after {} draws; \
                 the salary cap looks unsatisfiable for this pool",
                lineups.len(),
                count,
                attempts
            );
        }
        attempts += 1;

        let draw = rand::seq::index::sample(rng, pool.len(), LINEUP_SIZE);
        let picks: Vec<ScoredDriver> = draw.iter().map(|i| pool[i].clone()).collect();

        let total_salary: u32 = picks.iter().map(|d| d.driver.salary).sum();
        if total_salary <= SALARY_CAP {
            lineups.push(Lineup::new(lineups.len() as u32 + 1, picks));
        }
    }

    Ok(lineups)
}
