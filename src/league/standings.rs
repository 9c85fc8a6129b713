use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// Last rank that would make the playoffs if they started tomorrow.
pub const PLAYOFF_CUTOFF: usize = 4;

/// Last rank of the purgatory tier. Everything below plays the toilet bowl.
pub const PURGATORY_CUTOFF: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Playoff,
    Purgatory,
    Toilet,
}

/// Classify a 1-indexed standings rank.
pub fn tier(rank: usize) -> Tier {
    if rank <= PLAYOFF_CUTOFF {
        Tier::Playoff
    } else if rank <= PURGATORY_CUTOFF {
        Tier::Purgatory
    } else {
        Tier::Toilet
    }
}

/// Win percentage as a fraction in `0.0..=1.0`; zero before any game is played.
///
/// Negative counts are rejected by the schema and read as no games here.
pub fn win_percentage(wins: i64, losses: i64) -> f64 {
    let (Ok(wins), Ok(losses)) = (u64::try_from(wins), u64::try_from(losses)) else {
        return 0.0;
    };
    // Two non-negative i64 values always fit in a u64 sum.
    let games = wins + losses;
    if games == 0 {
        return 0.0;
    }
    wins as f64 / games as f64
}

/// One team's season totals, as entered by the admins.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingInput {
    pub team_id: i64,
    pub total_points: i64,
    pub points_for: f64,
    pub wins: i64,
    pub losses: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStanding {
    pub rank: usize,
    pub tier: Tier,
    pub team_id: i64,
    pub total_points: i64,
    pub points_for: f64,
    pub wins: i64,
    pub losses: i64,
    pub win_percentage: f64,
    /// Another team has the same standings points; the rank came from the tie-break.
    pub tied_on_points: bool,
}

// Standings points descending, then points-for descending, then team id ascending.
fn compare_standings(a: &StandingInput, b: &StandingInput) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.points_for.total_cmp(&a.points_for))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Rank a season's teams 1..N and tag each with its tier.
///
/// The ordering is total, so the same input always yields the same ranks no
/// matter what order the rows were fetched in.
pub fn rank_standings(inputs: &[StandingInput]) -> Vec<RankedStanding> {
    let mut sorted: Vec<&StandingInput> = inputs.iter().collect();
    sorted.sort_by(|a, b| compare_standings(a, b));

    let mut teams_on_points: HashMap<i64, usize> = HashMap::new();
    for team in inputs {
        *teams_on_points.entry(team.total_points).or_default() += 1;
    }

    let ranked: Vec<RankedStanding> = sorted
        .iter()
        .enumerate()
        .map(|(idx, team)| {
            let rank = idx + 1;
            RankedStanding {
                rank,
                tier: tier(rank),
                team_id: team.team_id,
                total_points: team.total_points,
                points_for: team.points_for,
                wins: team.wins,
                losses: team.losses,
                win_percentage: win_percentage(team.wins, team.losses),
                tied_on_points: teams_on_points.get(&team.total_points).is_some_and(|&n| n > 1),
            }
        })
        .collect();

    // Sorted, so each tied group is a contiguous run.
    for group in ranked.chunk_by(|a, b| a.total_points == b.total_points) {
        if group.len() > 1 {
            let team_ids: Vec<i64> = group.iter().map(|s| s.team_id).collect();
            tracing::warn!(
                "Teams {:?} tied on {} standings points, ranks {}-{} decided by tie-break",
                team_ids,
                group[0].total_points,
                group[0].rank,
                group[group.len() - 1].rank
            );
        }
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(team_id: i64, total_points: i64, points_for: f64) -> StandingInput {
        StandingInput {
            team_id,
            total_points,
            points_for,
            wins: 0,
            losses: 0,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier(1), Tier::Playoff);
        assert_eq!(tier(4), Tier::Playoff);
        assert_eq!(tier(5), Tier::Purgatory);
        assert_eq!(tier(6), Tier::Toilet);
        assert_eq!(tier(10), Tier::Toilet);
    }

    #[test]
    fn test_tier_is_monotonic_in_rank() {
        for rank in 1..=30 {
            let t = tier(rank);
            if rank > PLAYOFF_CUTOFF {
                assert_ne!(t, Tier::Playoff, "rank {rank}");
            }
            if rank <= PURGATORY_CUTOFF {
                assert_ne!(t, Tier::Toilet, "rank {rank}");
            }
        }
    }

    #[test]
    fn test_ten_team_season() {
        let totals = [172, 160, 155, 150, 140, 130, 120, 110, 100, 90];
        // Fed in reverse so the result can't just echo the input order.
        let inputs: Vec<StandingInput> = totals
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, &points)| team(idx as i64 + 1, points, 1000.0))
            .collect();

        let ranked = rank_standings(&inputs);

        assert_eq!(ranked.len(), 10);
        for (idx, standing) in ranked.iter().enumerate() {
            assert_eq!(standing.rank, idx + 1);
            assert_eq!(standing.total_points, totals[idx]);
            assert!(!standing.tied_on_points);
        }
        assert!(ranked[..4].iter().all(|s| s.tier == Tier::Playoff));
        assert_eq!(ranked[4].tier, Tier::Purgatory);
        assert!(ranked[5..].iter().all(|s| s.tier == Tier::Toilet));
    }

    #[test]
    fn test_ties_break_on_points_for_then_team_id() {
        let inputs = vec![
            team(7, 150, 1201.5),
            team(3, 150, 1250.0),
            team(2, 150, 1201.5),
            team(9, 160, 900.0),
        ];

        let ranked = rank_standings(&inputs);
        let order: Vec<i64> = ranked.iter().map(|s| s.team_id).collect();

        assert_eq!(order, vec![9, 3, 2, 7]);
        assert!(!ranked[0].tied_on_points);
        assert!(ranked[1..].iter().all(|s| s.tied_on_points));
    }

    #[test]
    fn test_tie_flags_cover_separate_groups() {
        let inputs = vec![
            team(1, 150, 1000.0),
            team(2, 120, 990.0),
            team(3, 150, 980.0),
            team(4, 130, 970.0),
            team(5, 120, 960.0),
        ];

        let ranked = rank_standings(&inputs);
        let flags: Vec<(i64, bool)> = ranked.iter().map(|s| (s.team_id, s.tied_on_points)).collect();

        assert_eq!(flags, vec![(1, true), (3, true), (4, false), (2, true), (5, true)]);
    }

    #[test]
    fn test_ranking_is_deterministic_and_contiguous() {
        let inputs = vec![
            team(4, 100, 800.0),
            team(1, 100, 800.0),
            team(3, 120, 700.0),
            team(2, 100, 810.0),
            team(5, 90, 950.0),
        ];
        let mut shuffled = inputs.clone();
        shuffled.reverse();

        let first = rank_standings(&inputs);
        let second = rank_standings(&shuffled);
        assert_eq!(first, second);

        let ranks: Vec<usize> = first.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_league_size_is_not_fixed() {
        let inputs: Vec<StandingInput> = (1..=12).map(|id| team(id, 200 - id, 0.0)).collect();
        let ranked = rank_standings(&inputs);

        assert_eq!(ranked.len(), 12);
        assert_eq!(ranked[11].rank, 12);
        assert_eq!(ranked[11].tier, Tier::Toilet);
        assert!(rank_standings(&[]).is_empty());
    }

    #[test]
    fn test_win_percentage() {
        assert_eq!(win_percentage(0, 0), 0.0);
        assert_eq!(win_percentage(9, 3), 0.75);
        assert_eq!(win_percentage(0, 14), 0.0);
    }

    #[test]
    fn test_win_percentage_stays_a_fraction() {
        assert_eq!(win_percentage(5, -3), 0.0);
        assert_eq!(win_percentage(-1, 4), 0.0);
        assert_eq!(win_percentage(i64::MAX, i64::MAX), 0.5);
        assert_eq!(win_percentage(i64::MAX, 0), 1.0);
    }
}
