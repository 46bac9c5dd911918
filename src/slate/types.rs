/// One driver's projected performance for a single contest slate, as loaded
/// from the data file. Carries no score yet; see [`crate::scoring`].
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub position: u32, // projected finish, used as a ranking proxy
    pub salary: u32,
    pub projection: f64,
    pub ceiling: f64,
    pub ceiling_laps: f64,
    pub top5_pct: f64, // 0-100 scale
}

/// A driver with its FanDuel score attached. Only the scorer produces these,
/// so the filter, sampler, and exporter can never see an unscored record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDriver {
    pub driver: Driver,
    pub fanduel_score: f64,
}

/// A selected team of 5 drivers drawn together by one sampling draw.
/// Totals are computed once at construction and never change.
#[derive(Debug, Clone)]
pub struct Lineup {
    pub number: u32, // 1-based acceptance order within a run
    pub drivers: Vec<ScoredDriver>,
    pub total_salary: u32,
    pub total_projection: f64,
}

impl Lineup {
    pub fn new(number: u32, drivers: Vec<ScoredDriver>) -> Self {
        let total_salary = drivers.iter().map(|d| d.driver.salary).sum();
        let total_projection = drivers.iter().map(|d| d.driver.projection).sum();
        Self {
            number,
            drivers,
            total_salary,
            total_projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(name: &str, salary: u32, projection: f64) -> ScoredDriver {
        ScoredDriver {
            driver: Driver {
                name: name.to_string(),
                position: 1,
                salary,
                projection,
                ceiling: 1.0,
                ceiling_laps: 0.0,
                top5_pct: 50.0,
            },
            fanduel_score: 0.0,
        }
    }

    #[test]
    fn test_lineup_totals_computed_at_construction() {
        let lineup = Lineup::new(
            3,
            vec![
                driver("A", 9_000, 10.5),
                driver("B", 11_000, 20.25),
                driver("C", 8_500, 5.0),
            ],
        );

        assert_eq!(lineup.number, 3);
        assert_eq!(lineup.total_salary, 28_500);
        assert_eq!(lineup.total_projection, 35.75);
    }
}
