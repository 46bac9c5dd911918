use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::slate::types::Lineup;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format accepted lineups as a terminal summary, one block per lineup:
/// a header line with number, salary, and total projection, then one line
/// per driver.
pub fn format_lineup_summary(lineups: &[Lineup], use_colors: bool) -> String {
    if lineups.is_empty() {
        return "No lineups generated.".to_string();
    }

    lineups
        .iter()
        .map(|lineup| format_lineup_block(lineup, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_lineup_block(lineup: &Lineup, use_colors: bool) -> String {
    let header = format!(
        "Lineup {}  (salary {}, projection {:.1})",
        lineup.number,
        format_salary(lineup.total_salary),
        lineup.total_projection
    );

    let mut lines = Vec::with_capacity(lineup.drivers.len() + 1);
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for scored in &lineup.drivers {
        let d = &scored.driver;
        let row = format!(
            "  P{:<3} {:<24} {:>7}  proj {:>5.1}  score {:>6.1}",
            d.position,
            d.name,
            format_salary(d.salary),
            d.projection,
            scored.fanduel_score
        );
        if use_colors {
            lines.push(row.dimmed().to_string());
        } else {
            lines.push(row);
        }
    }

    lines.join("\n")
}

/// Format a salary with a thousands separator and dollar sign ($12,000).
pub fn format_salary(salary: u32) -> String {
    let digits = salary.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}
