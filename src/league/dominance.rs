use serde::Serialize;

use super::win_percentage;

pub const CHAMPIONSHIP_WEIGHT: f64 = 40.0;
pub const PLAYOFF_WIN_WEIGHT: f64 = 5.0;
pub const WIN_PERCENTAGE_WEIGHT: f64 = 30.0;
pub const FINISH_WEIGHT: f64 = 25.0;

/// One past the worst finish in a ten-team league.
const FINISH_SCALE: f64 = 11.0;

/// Historical Dominance Index.
///
/// `win_percentage` is a fraction (0.0..=1.0) and `average_finish` sits on the
/// 1..10 scale, so the finish term contributes at most `FINISH_WEIGHT`.
pub fn historical_dominance_index(
    championships: i64,
    playoff_wins: i64,
    win_percentage: f64,
    average_finish: f64,
) -> f64 {
    championships as f64 * CHAMPIONSHIP_WEIGHT
        + playoff_wins as f64 * PLAYOFF_WIN_WEIGHT
        + win_percentage * WIN_PERCENTAGE_WEIGHT
        + ((FINISH_SCALE - average_finish) / 10.0) * FINISH_WEIGHT
}

#[derive(Debug, Clone, PartialEq)]
pub struct CareerRecord {
    pub governor_id: i64,
    pub governor: String,
    pub championships: i64,
    pub playoff_wins: i64,
    pub wins: i64,
    pub losses: i64,
    pub average_finish: f64,
}

impl CareerRecord {
    pub fn win_percentage(&self) -> f64 {
        win_percentage(self.wins, self.losses)
    }

    pub fn dominance_index(&self) -> f64 {
        historical_dominance_index(
            self.championships,
            self.playoff_wins,
            self.win_percentage(),
            self.average_finish,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub governor_id: i64,
    pub governor: String,
    pub championships: i64,
    pub playoff_wins: i64,
    pub win_percentage: f64,
    pub average_finish: f64,
    pub hdi: f64,
}

/// Governors ordered by HDI, highest first. Equal scores fall back to name.
pub fn dominance_leaderboard(careers: &[CareerRecord]) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&CareerRecord, f64)> = careers
        .iter()
        .map(|career| (career, career.dominance_index()))
        .collect();
    scored.sort_by(|(a, a_hdi), (b, b_hdi)| {
        b_hdi
            .total_cmp(a_hdi)
            .then_with(|| a.governor.cmp(&b.governor))
            .then_with(|| a.governor_id.cmp(&b.governor_id))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (career, hdi))| LeaderboardEntry {
            rank: idx + 1,
            governor_id: career.governor_id,
            governor: career.governor.clone(),
            championships: career.championships,
            playoff_wins: career.playoff_wins,
            win_percentage: career.win_percentage(),
            average_finish: career.average_finish,
            hdi,
        })
        .collect()
}
