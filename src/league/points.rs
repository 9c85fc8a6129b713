use serde::Serialize;

use super::DerivationError;

/// Points awarded for a weekly finish, indexed by `finish - 1`.
pub const WEEKLY_RANKING_POINTS: [i64; 10] = [20, 18, 16, 14, 12, 5, 4, 3, 2, 1];

/// Row of the published points table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTableEntry {
    pub finish: i64,
    pub points: i64,
}

/// Look up the ranking points for a weekly finish position.
pub fn points_for_finish(finish: i64) -> Result<i64, DerivationError> {
    usize::try_from(finish)
        .ok()
        .and_then(|f| f.checked_sub(1))
        .and_then(|idx| WEEKLY_RANKING_POINTS.get(idx))
        .copied()
        .ok_or(DerivationError::InvalidWeeklyFinish {
            finish,
            max: WEEKLY_RANKING_POINTS.len(),
        })
}

/// Sum the ranking points for a team's weekly finishes.
///
/// Stops at the first invalid finish so a partial total is never returned.
pub fn season_points(finishes: &[i64]) -> Result<i64, DerivationError> {
    finishes.iter().map(|&finish| points_for_finish(finish)).sum()
}

pub fn points_table() -> Vec<PointsTableEntry> {
    WEEKLY_RANKING_POINTS
        .iter()
        .zip(1..)
        .map(|(&points, finish)| PointsTableEntry { finish, points })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_finish_maps_to_table_value() {
        let expected = [(1, 20), (2, 18), (3, 16), (4, 14), (5, 12), (6, 5), (7, 4), (8, 3), (9, 2), (10, 1)];
        for (finish, points) in expected {
            assert_eq!(points_for_finish(finish), Ok(points), "finish {finish}");
        }
    }

    #[test]
    fn test_out_of_range_finish_is_rejected() {
        for finish in [0, 11, -1, 100, i64::MIN, i64::MAX] {
            assert_eq!(
                points_for_finish(finish),
                Err(DerivationError::InvalidWeeklyFinish { finish, max: 10 })
            );
        }
    }

    #[test]
    fn test_season_points_sums_weekly_finishes() {
        assert_eq!(season_points(&[1, 1, 5, 10]), Ok(53));
        assert_eq!(season_points(&[]), Ok(0));
    }

    #[test]
    fn test_season_points_fails_on_bad_week() {
        let result = season_points(&[1, 2, 11, 3]);
        assert_eq!(result, Err(DerivationError::InvalidWeeklyFinish { finish: 11, max: 10 }));
    }

    #[test]
    fn test_points_table_is_ordered_by_finish() {
        let table = points_table();
        assert_eq!(table.len(), 10);
        assert_eq!(table[0], PointsTableEntry { finish: 1, points: 20 });
        assert_eq!(table[9], PointsTableEntry { finish: 10, points: 1 });
    }
}
