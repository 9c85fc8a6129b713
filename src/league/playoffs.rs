use serde::Serialize;

use super::DerivationError;

/// A team's terminal position in the postseason bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffEntry {
    pub team_id: i64,
    pub seed: i64,
    pub is_finalist: bool,
    pub semifinal_score: Option<f64>,
    pub finals_score: Option<f64>,
}

/// Outcome of the two-week championship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Championship {
    /// No finalists recorded for the season yet.
    NoData,
    /// Finalists known but at least one finals score is missing.
    Pending { finalists: [i64; 2] },
    Decided {
        champion: i64,
        runner_up: i64,
        champion_score: f64,
        runner_up_score: f64,
    },
    /// Equal aggregate scores. Left undecided for the league to settle.
    Tied { finalists: [i64; 2], score: f64 },
}

/// Outcome of the third-place consolation game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Consolation {
    NoData,
    Decided {
        third: i64,
        fourth: i64,
        third_score: f64,
        fourth_score: f64,
    },
    Tied { teams: [i64; 2], score: f64 },
}

pub fn championship(entries: &[PlayoffEntry]) -> Result<Championship, DerivationError> {
    let finalists: Vec<&PlayoffEntry> = entries.iter().filter(|e| e.is_finalist).collect();

    let (a, b) = match finalists.as_slice() {
        [] => return Ok(Championship::NoData),
        [a, b] => (*a, *b),
        _ => {
            return Err(DerivationError::UnexpectedFinalistCount {
                found: finalists.len(),
            });
        }
    };

    let (Some(a_score), Some(b_score)) = (a.finals_score, b.finals_score) else {
        return Ok(Championship::Pending {
            finalists: [a.team_id, b.team_id],
        });
    };

    Ok(decide_pair(a.team_id, a_score, b.team_id, b_score).map_or_else(
        |score| {
            tracing::warn!("Championship tied at {} between teams {} and {}", score, a.team_id, b.team_id);
            Championship::Tied {
                finalists: [a.team_id, b.team_id],
                score,
            }
        },
        |((champion, champion_score), (runner_up, runner_up_score))| Championship::Decided {
            champion,
            runner_up,
            champion_score,
            runner_up_score,
        },
    ))
}

/// Third and fourth place from the non-finalists who played the consolation game.
pub fn consolation(entries: &[PlayoffEntry]) -> Result<Consolation, DerivationError> {
    let played: Vec<(i64, f64)> = entries
        .iter()
        .filter(|e| !e.is_finalist)
        .filter_map(|e| e.finals_score.map(|score| (e.team_id, score)))
        .collect();

    let ((a, a_score), (b, b_score)) = match played.as_slice() {
        [] | [_] => return Ok(Consolation::NoData),
        [a, b] => (*a, *b),
        _ => {
            return Err(DerivationError::UnexpectedConsolationCount {
                found: played.len(),
            });
        }
    };

    Ok(decide_pair(a, a_score, b, b_score).map_or_else(
        |score| Consolation::Tied { teams: [a, b], score },
        |((third, third_score), (fourth, fourth_score))| Consolation::Decided {
            third,
            fourth,
            third_score,
            fourth_score,
        },
    ))
}

type Placed = ((i64, f64), (i64, f64));

// Winner first. Err carries the tied score.
fn decide_pair(a: i64, a_score: f64, b: i64, b_score: f64) -> Result<Placed, f64> {
    if a_score > b_score {
        Ok(((a, a_score), (b, b_score)))
    } else if b_score > a_score {
        Ok(((b, b_score), (a, a_score)))
    } else {
        Err(a_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(team_id: i64, seed: i64, is_finalist: bool, finals_score: Option<f64>) -> PlayoffEntry {
        PlayoffEntry {
            team_id,
            seed,
            is_finalist,
            semifinal_score: Some(120.0),
            finals_score,
        }
    }

    #[test]
    fn test_higher_finals_score_wins() {
        let entries = vec![
            entry(2, 2, true, Some(234.0)),
            entry(1, 1, true, Some(267.1)),
            entry(3, 3, false, None),
        ];

        assert_eq!(
            championship(&entries),
            Ok(Championship::Decided {
                champion: 1,
                runner_up: 2,
                champion_score: 267.1,
                runner_up_score: 234.0,
            })
        );
    }

    #[test]
    fn test_tied_finals_is_undecided() {
        let entries = vec![entry(1, 1, true, Some(267.1)), entry(2, 4, true, Some(267.1))];

        assert_eq!(
            championship(&entries),
            Ok(Championship::Tied {
                finalists: [1, 2],
                score: 267.1,
            })
        );
    }

    #[test]
    fn test_no_playoff_rows_is_no_data() {
        assert_eq!(championship(&[]), Ok(Championship::NoData));
        assert_eq!(consolation(&[]), Ok(Consolation::NoData));
    }

    #[test]
    fn test_missing_finals_score_is_pending() {
        let entries = vec![entry(1, 1, true, Some(130.4)), entry(2, 2, true, None)];
        assert_eq!(championship(&entries), Ok(Championship::Pending { finalists: [1, 2] }));
    }

    #[test]
    fn test_wrong_finalist_count_is_an_error() {
        let one = vec![entry(1, 1, true, Some(200.0)), entry(2, 2, false, None)];
        assert_eq!(championship(&one), Err(DerivationError::UnexpectedFinalistCount { found: 1 }));

        let three = vec![
            entry(1, 1, true, Some(200.0)),
            entry(2, 2, true, Some(190.0)),
            entry(3, 3, true, Some(180.0)),
        ];
        assert_eq!(championship(&three), Err(DerivationError::UnexpectedFinalistCount { found: 3 }));
    }

    #[test]
    fn test_consolation_ranks_third_and_fourth() {
        let entries = vec![
            entry(1, 1, true, Some(267.1)),
            entry(2, 2, true, Some(234.0)),
            entry(3, 3, false, Some(278.7)),
            entry(4, 4, false, Some(281.2)),
            entry(5, 5, false, None),
        ];

        assert_eq!(
            consolation(&entries),
            Ok(Consolation::Decided {
                third: 4,
                fourth: 3,
                third_score: 281.2,
                fourth_score: 278.7,
            })
        );
    }

    #[test]
    fn test_consolation_not_played() {
        let none_played = vec![entry(3, 3, false, None), entry(4, 4, false, None)];
        assert_eq!(consolation(&none_played), Ok(Consolation::NoData));

        let one_played = vec![entry(3, 3, false, Some(150.0)), entry(4, 4, false, None)];
        assert_eq!(consolation(&one_played), Ok(Consolation::NoData));
    }

    #[test]
    fn test_consolation_tie_and_overflow() {
        let tied = vec![entry(3, 3, false, Some(99.5)), entry(4, 4, false, Some(99.5))];
        assert_eq!(consolation(&tied), Ok(Consolation::Tied { teams: [3, 4], score: 99.5 }));

        let too_many = vec![
            entry(3, 3, false, Some(99.5)),
            entry(4, 4, false, Some(98.0)),
            entry(5, 5, false, Some(97.0)),
        ];
        assert_eq!(
            consolation(&too_many),
            Err(DerivationError::UnexpectedConsolationCount { found: 3 })
        );
    }
}
