use serde::Serialize;

use crate::models::MatchupSide;

/// A single season's meeting between the two sides of a rivalry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupResult {
    pub team1_score: f64,
    pub team2_score: f64,
    pub winner: MatchupSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    Team1,
    Team2,
    Even,
}

/// Lifetime head-to-head record. Always recounted from the matchups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RivalryRecord {
    pub games: usize,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub team1_points: f64,
    pub team2_points: f64,
    pub leader: Leader,
}

pub fn head_to_head(matchups: &[MatchupResult]) -> RivalryRecord {
    let team1_wins = matchups
        .iter()
        .filter(|m| m.winner == MatchupSide::Team1)
        .count();
    let team2_wins = matchups.len() - team1_wins;

    let leader = match team1_wins.cmp(&team2_wins) {
        std::cmp::Ordering::Greater => Leader::Team1,
        std::cmp::Ordering::Less => Leader::Team2,
        std::cmp::Ordering::Equal => Leader::Even,
    };

    RivalryRecord {
        games: matchups.len(),
        team1_wins,
        team2_wins,
        team1_points: matchups.iter().map(|m| m.team1_score).sum(),
        team2_points: matchups.iter().map(|m| m.team2_score).sum(),
        leader,
    }
}
