use crate::{
    error::{Error, MapError, UserError},
    model::{
        beatmap::RawBeatmap,
        metadata::BeatmapMetadata,
        play::Play,
        user::{UserIdentity, UserProfile},
    },
};

pub use self::response::{
    parse_leaderboard, parse_metadata, parse_plays, parse_replay, parse_user, parse_user_plays,
};

mod response;

/// Access to the osu!api.
///
/// Implementors take care of transport, rate limiting, and retries. The
/// engine calls every method at most once per request and never caches
/// results.
pub trait OsuApi {
    fn fetch_user_profile(&self, user: &UserIdentity) -> Result<UserProfile, UserError>;

    /// Best plays on a beatmap, best first.
    ///
    /// [`MapError::NoLeaderboard`] is treated as an empty leaderboard by the
    /// engine.
    fn fetch_leaderboard(&self, beatmap_id: u32, limit: usize) -> Result<Vec<Play>, MapError>;

    /// Top plays of a player, best first.
    fn fetch_user_best(&self, user: &UserIdentity, limit: usize) -> Result<Vec<Play>, UserError>;

    /// The player's stored best on a beatmap with the given mods. An empty
    /// list is not an error.
    fn fetch_user_best_on_map(
        &self,
        beatmap_id: u32,
        user: &UserIdentity,
        mods_bitmask: u32,
    ) -> Result<Vec<Play>, Error>;

    /// Most recent plays of a player, newest first.
    fn fetch_user_recent(&self, user: &UserIdentity, limit: usize)
        -> Result<Vec<Play>, UserError>;

    fn fetch_beatmap_metadata(
        &self,
        beatmap_id: u32,
        mods_bitmask: u32,
    ) -> Result<BeatmapMetadata, MapError>;

    /// Base64 encoded replay data.
    fn fetch_replay(
        &self,
        beatmap_id: u32,
        user: &UserIdentity,
        mods_bitmask: u32,
    ) -> Result<String, UserError>;
}

/// Provides parsed beatmaps by their online id.
pub trait BeatmapSource {
    fn fetch_beatmap(&self, beatmap_id: u32) -> Result<RawBeatmap, MapError>;
}

/// Hit statistics handed to a [`PerformanceCalculator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformanceInput {
    pub combo: u32,
    pub misses: u32,
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PerformanceOutput {
    pub pp: f64,
    /// Accuracy between `0.0` and `1.0`.
    pub accuracy: f64,
}

/// The performance points model.
pub trait PerformanceCalculator {
    fn compute_performance(
        &self,
        map: &RawBeatmap,
        mods_bitmask: u32,
        input: PerformanceInput,
    ) -> PerformanceOutput;
}

/// Everything a [`PlayReport`](crate::PlayReport) needs from the outside.
#[derive(Copy, Clone)]
pub struct Collaborators<'a> {
    pub api: &'a dyn OsuApi,
    pub beatmaps: &'a dyn BeatmapSource,
    pub performance: &'a dyn PerformanceCalculator,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        api: &'a dyn OsuApi,
        beatmaps: &'a dyn BeatmapSource,
        performance: &'a dyn PerformanceCalculator,
    ) -> Self {
        Self {
            api,
            beatmaps,
            performance,
        }
    }
}
