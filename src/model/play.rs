use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{grade::Grade, mods::ModifierSet},
    util::de,
};

/// A single scored attempt on a beatmap.
///
/// Structural equality compares every field. To check whether two values
/// describe the same attempt, e.g. when looking a play up in a leaderboard,
/// use [`is_same_attempt`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawPlay")]
pub struct Play {
    pub user_id: u32,
    /// `None` if the response did not say which beatmap was played.
    pub beatmap_id: Option<u32>,
    pub score: u64,
    pub max_combo: u32,
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
    /// Whether the play is a full combo.
    pub perfect: bool,
    pub mods: ModifierSet,
    pub date: DateTime<Utc>,
    pub grade: Grade,
    /// Performance points as reported by the api.
    pub pp: Option<f64>,
    pub replay_available: bool,
    pub score_id: Option<u64>,
}

impl Play {
    /// Accuracy of the play between `0.0` and `1.0`.
    pub fn accuracy(&self) -> f64 {
        accuracy(self.n300, self.n100, self.n50, self.misses)
    }

    /// Sum of all judgements, saturating at `u32::MAX`.
    pub const fn n_judged(&self) -> u32 {
        self.n300
            .saturating_add(self.n100)
            .saturating_add(self.n50)
            .saturating_add(self.misses)
    }
}

/// Whether two plays are the same attempt i.e. were set by the same player
/// at the same time.
pub fn is_same_attempt(a: &Play, b: &Play) -> bool {
    a.user_id == b.user_id && a.date == b.date
}

/// Calculate the accuracy between `0.0` and `1.0` from the hit counts.
///
/// Returns `0.0` if there are no hits at all.
pub fn accuracy(n300: u32, n100: u32, n50: u32, misses: u32) -> f64 {
    let total = u64::from(n300) + u64::from(n100) + u64::from(n50) + u64::from(misses);

    if total == 0 {
        return 0.0;
    }

    let numerator = 50 * u64::from(n50) + 100 * u64::from(n100) + 300 * u64::from(n300);

    numerator as f64 / (300 * total) as f64
}

#[derive(Deserialize)]
struct RawPlay {
    #[serde(deserialize_with = "de::str_or_num")]
    user_id: u32,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    beatmap_id: Option<u32>,
    #[serde(deserialize_with = "de::str_or_num")]
    score: u64,
    #[serde(deserialize_with = "de::str_or_num")]
    maxcombo: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    count300: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    count100: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    count50: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    countmiss: u32,
    #[serde(deserialize_with = "de::flag")]
    perfect: bool,
    #[serde(deserialize_with = "de::str_or_num")]
    enabled_mods: u32,
    #[serde(deserialize_with = "de::date")]
    date: DateTime<Utc>,
    rank: Grade,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pp: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    replay_available: Option<u8>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    score_id: Option<u64>,
}

impl From<RawPlay> for Play {
    fn from(raw: RawPlay) -> Self {
        Self {
            user_id: raw.user_id,
            beatmap_id: raw.beatmap_id,
            score: raw.score,
            max_combo: raw.maxcombo,
            n300: raw.count300,
            n100: raw.count100,
            n50: raw.count50,
            misses: raw.countmiss,
            perfect: raw.perfect,
            mods: ModifierSet::from_bits(raw.enabled_mods),
            date: raw.date,
            grade: raw.rank,
            pp: raw.pp,
            replay_available: raw.replay_available.is_some_and(|n| n != 0),
            score_id: raw.score_id,
        }
    }
}
