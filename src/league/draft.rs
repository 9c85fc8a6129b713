use std::collections::HashSet;

use crate::models::{DraftPick, RookiePlayer};

use super::DerivationError;

/// Rookies not yet taken by any pick on the board.
pub fn available_rookies(rookies: Vec<RookiePlayer>, picks: &[DraftPick]) -> Vec<RookiePlayer> {
    let drafted: HashSet<i64> = picks.iter().filter_map(|p| p.selected_player_id).collect();
    rookies
        .into_iter()
        .filter(|rookie| !drafted.contains(&rookie.id))
        .collect()
}

/// A rookie can only go to a pick of the same draft year, and can be held by
/// at most one pick. Re-selecting for the same pick is fine.
pub fn check_selection(picks: &[DraftPick], pick: &DraftPick, rookie: &RookiePlayer) -> Result<(), DerivationError> {
    if rookie.draft_year != pick.draft_year {
        return Err(DerivationError::DraftYearMismatch {
            player_id: rookie.id,
            rookie_year: rookie.draft_year,
            pick_id: pick.id,
            pick_year: pick.draft_year,
        });
    }

    match picks
        .iter()
        .find(|p| p.selected_player_id == Some(rookie.id) && p.id != pick.id)
    {
        Some(holder) => Err(DerivationError::PlayerAlreadyDrafted {
            player_id: rookie.id,
            pick_id: holder.id,
        }),
        None => Ok(()),
    }
}
