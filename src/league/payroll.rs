use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::PlayerSalary;

/// Contract years tracked on the salary sheet.
pub const CONTRACT_YEARS: [i32; 5] = [2025, 2026, 2027, 2028, 2029];

/// Yearly salary for a franchise-tagged player, for up to four years.
pub const FRANCHISE_TAG_SALARY: f64 = 100.0;

static SALARY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?\s*(\d+(?:\.\d+)?)$").expect("salary pattern is valid"));

/// Parse a salary cell. Blank cells are `Some(0.0)`; anything that isn't a
/// dollar amount is `None`.
pub fn parse_salary(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    SALARY_PATTERN
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .and_then(|amount| amount.as_str().parse().ok())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTotal {
    pub year: i32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayroll {
    pub team_id: i64,
    pub totals: Vec<YearTotal>,
    pub franchise_tags: usize,
    /// Salary cells that could not be read as an amount.
    pub unparsed: usize,
}

/// Per-team salary totals for each contract year. Free agents are skipped.
pub fn team_payrolls(salaries: &[PlayerSalary]) -> Vec<TeamPayroll> {
    let mut by_team: BTreeMap<i64, TeamPayroll> = BTreeMap::new();

    for salary in salaries {
        let Some(team_id) = salary.team_id else {
            continue;
        };
        let payroll = by_team.entry(team_id).or_insert_with(|| TeamPayroll {
            team_id,
            totals: CONTRACT_YEARS
                .iter()
                .map(|&year| YearTotal { year, total: 0.0 })
                .collect(),
            franchise_tags: 0,
            unparsed: 0,
        });

        if salary.franchise_tag {
            payroll.franchise_tags += 1;
        }

        for year_total in payroll.totals.iter_mut() {
            let Some(raw) = salary.salary_for(year_total.year) else {
                continue;
            };
            match parse_salary(raw) {
                Some(amount) => year_total.total += amount,
                None => {
                    tracing::warn!("Unreadable {} salary {:?} on contract {}", year_total.year, raw, salary.id);
                    payroll.unparsed += 1;
                }
            }
        }
    }

    by_team.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(id: i64, team_id: Option<i64>, salaries: [Option<&str>; 5]) -> PlayerSalary {
        let [s25, s26, s27, s28, s29] = salaries.map(|s| s.map(str::to_string));
        PlayerSalary {
            id,
            player_id: id,
            team_id,
            salary_2025: s25,
            salary_2026: s26,
            salary_2027: s27,
            salary_2028: s28,
            salary_2029: s29,
            franchise_tag: false,
            acquired_via_waivers: false,
            rookie_draft_round: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_parse_salary_formats() {
        assert_eq!(parse_salary("$25"), Some(25.0));
        assert_eq!(parse_salary(" 12.5 "), Some(12.5));
        assert_eq!(parse_salary("$ 100"), Some(100.0));
        assert_eq!(parse_salary(""), Some(0.0));
        assert_eq!(parse_salary("RFA"), None);
        assert_eq!(parse_salary("$-5"), None);
    }

    #[test]
    fn test_payroll_sums_per_team_and_year() {
        let mut tagged = contract(3, Some(1), [Some("$100"), Some("$100"), None, None, None]);
        tagged.franchise_tag = true;
        let salaries = vec![
            contract(1, Some(1), [Some("$25"), Some("$30"), None, None, None]),
            contract(2, Some(2), [Some("10"), Some("RFA"), None, None, None]),
            tagged,
            contract(4, None, [Some("$999"), None, None, None, None]),
        ];

        let payrolls = team_payrolls(&salaries);
        assert_eq!(payrolls.len(), 2);

        let first = &payrolls[0];
        assert_eq!(first.team_id, 1);
        assert_eq!(first.totals[0], YearTotal { year: 2025, total: 125.0 });
        assert_eq!(first.totals[1], YearTotal { year: 2026, total: 130.0 });
        assert_eq!(first.totals[4].total, 0.0);
        assert_eq!(first.franchise_tags, 1);
        assert_eq!(first.unparsed, 0);

        let second = &payrolls[1];
        assert_eq!(second.team_id, 2);
        assert_eq!(second.totals[0].total, 10.0);
        assert_eq!(second.unparsed, 1);
    }
}
