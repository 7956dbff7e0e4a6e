use crate::{
    api::OsuApi,
    error::{Result, UserError},
    model::{play::Play, user::UserIdentity},
};

const MAX_TOP_INDEX: usize = 100;
const MAX_RECENT_INDEX: usize = 50;

/// Ordering of a player's top plays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TopOrder {
    /// As returned by the api i.e. by pp.
    #[default]
    Best,
    /// Newest first.
    RecentBest,
    /// Oldest first.
    OldBest,
}

/// Pick the play at the 1-based `index` from a player's top plays.
///
/// `index` is clamped to `1..=100` and then to the amount of plays.
pub fn select_top(mut plays: Vec<Play>, index: usize, order: TopOrder) -> Option<Play> {
    match order {
        TopOrder::Best => {}
        TopOrder::RecentBest => plays.sort_by(|a, b| b.date.cmp(&a.date)),
        TopOrder::OldBest => plays.sort_by(|a, b| a.date.cmp(&b.date)),
    }

    take_clamped(plays, index, MAX_TOP_INDEX)
}

/// Pick the play at the 1-based `index` from a player's recent plays.
///
/// `index` is clamped to `1..=50` and then to the amount of plays.
pub fn select_recent(plays: Vec<Play>, index: usize) -> Option<Play> {
    take_clamped(plays, index, MAX_RECENT_INDEX)
}

/// Fetch and pick one of the player's top plays.
///
/// Reordered requests need the whole list, otherwise only as many plays as
/// needed are fetched.
pub fn fetch_top_play(
    api: &dyn OsuApi,
    user: &UserIdentity,
    index: usize,
    order: TopOrder,
) -> Result<Play> {
    let index = index.clamp(1, MAX_TOP_INDEX);

    let limit = match order {
        TopOrder::Best => index,
        TopOrder::RecentBest | TopOrder::OldBest => MAX_TOP_INDEX,
    };

    let plays = api.fetch_user_best(user, limit)?;

    select_top(plays, index, order).ok_or_else(|| UserError::NoPlays(user.to_string()).into())
}

/// Fetch and pick one of the player's recent plays.
pub fn fetch_recent_play(api: &dyn OsuApi, user: &UserIdentity, index: usize) -> Result<Play> {
    let index = index.clamp(1, MAX_RECENT_INDEX);
    let plays = api.fetch_user_recent(user, index)?;

    select_recent(plays, index).ok_or_else(|| UserError::NoPlays(user.to_string()).into())
}

fn take_clamped(mut plays: Vec<Play>, index: usize, max: usize) -> Option<Play> {
    let index = index.clamp(1, max).min(plays.len());

    if index == 0 {
        return None;
    }

    Some(plays.swap_remove(index - 1))
}
