/// Validation failures raised by the league derivations.
///
/// These never default silently: a bad finish or an odd number of finalists
/// would otherwise corrupt the standings shown to the league without any
/// visible symptom.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DerivationError {
    /// A weekly finish position outside the ranking-points table.
    #[error("weekly finish {finish} is outside 1..={max}")]
    InvalidWeeklyFinish { finish: i64, max: usize },

    /// The playoff rows for a season flag something other than two finalists.
    #[error("expected 2 finalists, found {found}")]
    UnexpectedFinalistCount { found: usize },

    /// More than two non-finalists recorded a consolation score.
    #[error("expected at most 2 consolation scores, found {found}")]
    UnexpectedConsolationCount { found: usize },

    /// The rookie is already held by a different draft pick.
    #[error("player {player_id} is already selected by pick {pick_id}")]
    PlayerAlreadyDrafted { player_id: i64, pick_id: i64 },

    /// The rookie belongs to a different draft class than the pick.
    #[error("player {player_id} is in the {rookie_year} class, pick {pick_id} is for {pick_year}")]
    DraftYearMismatch {
        player_id: i64,
        rookie_year: i64,
        pick_id: i64,
        pick_year: i64,
    },
}
