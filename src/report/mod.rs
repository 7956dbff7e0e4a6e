use crate::{
    api::{Collaborators, OsuApi, PerformanceInput, PerformanceOutput},
    config::EngineConfig,
    error::{MapError, Result, UserError},
    model::{
        play::{self, Play},
        user::{UserIdentity, UserProfile},
    },
    stats::BeatmapStatistics,
};

pub use self::select::{fetch_recent_play, fetch_top_play, select_recent, select_top, TopOrder};

mod select;

/// Who set a play.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub user_id: u32,
    pub username: String,
    /// Global rank, `None` for inactive players.
    pub pp_rank: Option<u32>,
    pub pp_raw: Option<f64>,
}

impl From<UserProfile> for PlayerSummary {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            username: profile.username,
            pp_rank: profile.pp_rank,
            pp_raw: profile.pp_raw,
        }
    }
}

/// A play put into context of its beatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayReport {
    pub play: Play,
    pub stats: BeatmapStatistics,
    /// Share of the map that was played, `1.0` unless the play failed.
    pub completion: f64,
    /// 1-based position in the player's top plays, `0` if absent.
    pub personal_best_rank: usize,
    /// 1-based position on the beatmap leaderboard, `0` if absent.
    pub leaderboard_rank: usize,
    pub accuracy: f64,
    pub fc_accuracy: f64,
    pub pp: f64,
    pub fc_pp: f64,
    pub stars: f64,
    /// The player has a different stored score on this map with these mods.
    pub unsubmitted: bool,
    pub score_id: Option<u64>,
    pub replay_available: bool,
    pub player: PlayerSummary,
}

impl PlayReport {
    /// Build the report of `play`.
    ///
    /// Either every lookup succeeds or the whole report fails; failures are
    /// logged before being returned.
    pub fn build(play: Play, collab: Collaborators<'_>, config: &EngineConfig) -> Result<Self> {
        let user_id = play.user_id;
        let beatmap_id = play.beatmap_id;

        Self::build_inner(play, collab, config).inspect_err(|err| {
            tracing::error!(user_id, ?beatmap_id, %err, "Failed to build play report");
        })
    }

    fn build_inner(play: Play, collab: Collaborators<'_>, config: &EngineConfig) -> Result<Self> {
        let beatmap_id = play.beatmap_id.ok_or(MapError::NoBeatmap)?;
        let map = collab.beatmaps.fetch_beatmap(beatmap_id)?;
        let stats = BeatmapStatistics::build(&map, play.mods, collab.api, config)?;

        let completion = completion(&play, stats.n_objects);

        let user = UserIdentity::Id(play.user_id);
        let mods_bitmask = play.mods.to_bitmask();

        let top_plays = collab.api.fetch_user_best(&user, config.best_plays_limit)?;
        let best_on_map = collab
            .api
            .fetch_user_best_on_map(beatmap_id, &user, mods_bitmask)?;
        let profile = collab.api.fetch_user_profile(&user)?;

        let personal_best_rank = position(&top_plays, &play);
        let leaderboard_rank = position(&stats.leaderboard, &play);

        let mut score_id = play.score_id;
        let mut replay_available = play.replay_available;
        let mut unsubmitted = false;

        if let Some(best) = best_on_map.first() {
            if play::is_same_attempt(best, &play) {
                score_id = best.score_id;
                replay_available = best.replay_available;
            } else {
                unsubmitted = true;
            }
        }

        let actual = collab.performance.compute_performance(
            &map,
            mods_bitmask,
            PerformanceInput {
                combo: play.max_combo,
                misses: play.misses,
                n300: play.n300,
                n100: play.n100,
                n50: play.n50,
            },
        );

        let fc = collab.performance.compute_performance(
            &map,
            mods_bitmask,
            full_combo_input(&play, stats.max_combo),
        );

        let PerformanceOutput { pp, accuracy } = actual;

        tracing::debug!(
            beatmap_id,
            user_id = play.user_id,
            personal_best_rank,
            leaderboard_rank,
            unsubmitted,
            "Built play report"
        );

        Ok(Self {
            completion,
            personal_best_rank,
            leaderboard_rank,
            accuracy,
            fc_accuracy: fc.accuracy,
            pp: play.pp.unwrap_or(pp),
            fc_pp: fc.pp,
            stars: stats.stars().total,
            unsubmitted,
            score_id,
            replay_available,
            player: PlayerSummary::from(profile),
            play,
            stats,
        })
    }

    /// Fetch the replay of the play, if it has one.
    pub fn replay(&self, api: &dyn OsuApi) -> Result<String> {
        let beatmap_id = self.play.beatmap_id.ok_or(MapError::NoBeatmap)?;

        if !self.replay_available {
            return Err(UserError::NoReplay.into());
        }

        let replay = api.fetch_replay(
            beatmap_id,
            &UserIdentity::Id(self.play.user_id),
            self.play.mods.to_bitmask(),
        )?;

        Ok(replay)
    }
}

/// Share of `n_objects` that were judged if the play failed, otherwise `1.0`.
pub fn completion(play: &Play, n_objects: usize) -> f64 {
    if !play.grade.is_fail() || n_objects == 0 {
        return 1.0;
    }

    f64::from(play.n_judged()) / n_objects as f64
}

/// 1-based position of the first entry that is the same attempt as `play`,
/// `0` if there is none.
pub fn position(plays: &[Play], play: &Play) -> usize {
    plays
        .iter()
        .position(|entry| play::is_same_attempt(entry, play))
        .map_or(0, |idx| idx + 1)
}

/// Misses and 50s turned into 300s at the map's max combo.
fn full_combo_input(play: &Play, max_combo: u32) -> PerformanceInput {
    PerformanceInput {
        combo: max_combo,
        misses: 0,
        n300: play.n300.saturating_add(play.misses).saturating_add(play.n50),
        n100: play.n100,
        n50: 0,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::model::{grade::Grade, mods::ModifierSet};

    use super::*;

    fn play(grade: Grade, n300: u32, n100: u32, n50: u32, misses: u32) -> Play {
        Play {
            user_id: 1,
            beatmap_id: Some(1),
            score: 0,
            max_combo: 0,
            n300,
            n100,
            n50,
            misses,
            perfect: false,
            mods: ModifierSet::empty(),
            date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            grade,
            pp: None,
            replay_available: false,
            score_id: None,
        }
    }

    #[test]
    fn failed_play_completion() {
        let failed = play(Grade::F, 40, 5, 2, 3);

        assert!((completion(&failed, 60) - 50.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn passed_play_is_complete() {
        assert!((completion(&play(Grade::A, 40, 5, 2, 3), 60) - 1.0).abs() < f64::EPSILON);
        assert!((completion(&play(Grade::F, 0, 0, 0, 0), 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn positions_are_one_based() {
        let target = play(Grade::S, 10, 0, 0, 0);

        let other = Play {
            user_id: 2,
            ..target.clone()
        };

        let same_attempt = Play {
            score: 999,
            ..target.clone()
        };

        assert_eq!(position(&[other.clone(), same_attempt], &target), 2);
        assert_eq!(position(&[other], &target), 0);
        assert_eq!(position(&[], &target), 0);
    }

    #[test]
    fn full_combo_folds_misses_and_fifties() {
        let input = full_combo_input(&play(Grade::B, 40, 5, 2, 3), 321);

        assert_eq!(
            input,
            PerformanceInput {
                combo: 321,
                misses: 0,
                n300: 45,
                n100: 5,
                n50: 0,
            }
        );
    }

    #[test]
    fn full_combo_saturates_hit_counts() {
        let input = full_combo_input(&play(Grade::F, u32::MAX, 0, 7, 7), 100);
        assert_eq!(input.n300, u32::MAX);

        let failed = play(Grade::F, u32::MAX, 1, 1, 1);
        assert!((completion(&failed, 10) - f64::from(u32::MAX) / 10.0).abs() < 1e-3);
    }
}
