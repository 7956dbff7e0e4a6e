use chrono::{DateTime, Utc};

use crate::{
    api::OsuApi,
    config::EngineConfig,
    difficulty::{self, DifficultyParameters},
    error::{MapError, Result},
    model::{
        beatmap::RawBeatmap,
        hit_object::HitObjectCounts,
        metadata::{BeatmapMetadata, RankStatus},
        mods::ModifierSet,
        play::Play,
        user::{UserIdentity, UserProfile},
    },
    strains::{StarRatings, StrainTimeline},
};

pub use self::bpm::{BpmChange, BpmRange};

mod bpm;

/// Everything known about a beatmap for a given set of mods.
///
/// Built once per request through [`BeatmapStatistics::build`] and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapStatistics {
    /// `None` for local maps.
    pub beatmap_id: Option<u32>,
    pub beatmapset_id: Option<u32>,
    pub title: String,
    pub title_unicode: String,
    pub artist: String,
    pub artist_unicode: String,
    pub version: String,
    pub creator: String,
    pub creator_profile: UserProfile,
    pub mods: ModifierSet,
    /// Values of the map itself, i.e. without mods.
    pub base: DifficultyParameters,
    pub adjusted: DifficultyParameters,
    pub bpm: BpmRange,
    pub bpm_changes: Vec<BpmChange>,
    /// Seconds between the first and the last hit object with the clock
    /// rate applied.
    pub total_length: f64,
    pub counts: HitObjectCounts,
    pub n_objects: usize,
    pub max_combo: u32,
    pub strains: StrainTimeline,
    /// Best plays first. Empty if the map has no leaderboard.
    pub leaderboard: Vec<Play>,
    /// Web metadata, only available for maps with an online id.
    pub metadata: Option<BeatmapMetadata>,
}

impl BeatmapStatistics {
    /// Build the statistics of `map` played with `mods`.
    ///
    /// Fetches the creator's profile and, for online maps, the web metadata
    /// and the leaderboard. A missing leaderboard is not an error.
    pub fn build(
        map: &RawBeatmap,
        mods: ModifierSet,
        api: &dyn OsuApi,
        config: &EngineConfig,
    ) -> Result<Self> {
        let strains = StrainTimeline::calculate(&map.hit_objects, &mods)?;
        let clock_rate = strains.clock_rate();

        let base = difficulty::adjust(map.difficulty, &ModifierSet::empty());
        let adjusted = difficulty::adjust(map.difficulty, &mods);

        let (first, last) = map.time_span().ok_or(MapError::EmptyHitObjects)?;
        let (bpm, bpm_changes) = bpm::calculate(&map.timing_points, last, clock_rate)?;
        let total_length = (last - first) / 1000.0 / clock_rate;

        let creator_profile =
            api.fetch_user_profile(&UserIdentity::from(map.creator.as_str()))?;

        let (metadata, leaderboard) = match map.beatmap_id {
            Some(beatmap_id) => {
                let metadata = api.fetch_beatmap_metadata(beatmap_id, mods.to_bitmask())?;
                let leaderboard = fetch_leaderboard(api, beatmap_id, config.leaderboard_limit)?;

                (Some(metadata), leaderboard)
            }
            None => (None, Vec::new()),
        };

        let max_combo = metadata
            .as_ref()
            .and_then(|metadata| metadata.max_combo)
            .unwrap_or(map.max_combo);

        tracing::debug!(
            beatmap_id = ?map.beatmap_id,
            %mods,
            stars = strains.stars().total,
            leaderboard = leaderboard.len(),
            "Built beatmap statistics"
        );

        Ok(Self {
            beatmap_id: map.beatmap_id,
            beatmapset_id: map.beatmapset_id,
            title: map.title.clone(),
            title_unicode: map.title_unicode.clone(),
            artist: map.artist.clone(),
            artist_unicode: map.artist_unicode.clone(),
            version: map.version.clone(),
            creator: map.creator.clone(),
            creator_profile,
            mods,
            base,
            adjusted,
            bpm,
            bpm_changes,
            total_length,
            counts: map.counts(),
            n_objects: map.n_objects(),
            max_combo,
            strains,
            leaderboard,
            metadata,
        })
    }

    pub const fn stars(&self) -> StarRatings {
        self.strains.stars()
    }

    pub const fn clock_rate(&self) -> f64 {
        self.adjusted.clock_rate
    }

    /// `None` for local maps.
    pub fn ranked_status(&self) -> Option<RankStatus> {
        self.metadata.as_ref().map(|metadata| metadata.approved)
    }

    /// Ranked status label, local maps count as submitted.
    pub fn status_label(&self) -> &'static str {
        self.ranked_status()
            .map_or(RankStatus::Pending.label(), RankStatus::label)
    }

    pub fn submit_date(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref().map(|metadata| metadata.submit_date)
    }

    pub fn approved_date(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref()?.approved_date
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref().map(|metadata| metadata.last_update)
    }

    /// `(time, bpm)` of every bpm change.
    pub fn bpm_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bpm_changes.iter().map(|change| (change.time, change.bpm))
    }
}

fn fetch_leaderboard(api: &dyn OsuApi, beatmap_id: u32, limit: usize) -> Result<Vec<Play>> {
    match api.fetch_leaderboard(beatmap_id, limit) {
        Ok(plays) => Ok(plays),
        Err(MapError::NoLeaderboard(_)) => {
            tracing::debug!(beatmap_id, "No leaderboard");

            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}
