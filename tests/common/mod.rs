#![allow(dead_code)]

use std::cell::Cell;

use chrono::{TimeZone, Utc};
use osu_stats::{
    api::{PerformanceInput, PerformanceOutput},
    error::{MapError, UserError},
    model::{
        beatmap::TimingPoint,
        grade::Grade,
        hit_object::{HitObject, ObjectStrains},
        metadata::BeatmapMetadata,
        user::{UserIdentity, UserProfile},
    },
    BeatmapSource, Error, ModifierSet, OsuApi, PerformanceCalculator, Play, RawBeatmap,
    RawDifficulty,
};

pub const BEATMAP_ID: u32 = 1234;
pub const PLAYER_ID: u32 = 42;
pub const N_OBJECTS: usize = 60;
pub const WEB_MAX_COMBO: u32 = 75;

/// 60 circles, one every 250ms, at 120 bpm.
pub fn beatmap(beatmap_id: Option<u32>) -> RawBeatmap {
    let hit_objects = (0..N_OBJECTS)
        .map(|i| {
            let strains = ObjectStrains::new(0.5 + (i % 3) as f64 * 0.1, 1.0 + (i % 5) as f64 * 0.2);

            HitObject::circle(1000.0 + i as f64 * 250.0, strains)
        })
        .collect();

    RawBeatmap {
        beatmap_id,
        beatmapset_id: beatmap_id.map(|id| id / 10),
        title: "Title".to_owned(),
        title_unicode: "Title".to_owned(),
        artist: "Artist".to_owned(),
        artist_unicode: "Artist".to_owned(),
        creator: "mapper".to_owned(),
        version: "Insane".to_owned(),
        difficulty: RawDifficulty {
            ar: 9.0,
            od: 8.0,
            cs: 4.0,
            hp: 6.0,
        },
        timing_points: vec![TimingPoint::new(1000.0, 500.0)],
        hit_objects,
        max_combo: N_OBJECTS as u32,
    }
}

pub fn profile(user_id: u32, username: &str) -> UserProfile {
    let body = format!(
        r#"{{
            "user_id": "{user_id}",
            "username": "{username}",
            "join_date": "2015-02-03 04:05:06",
            "pp_rank": "1000",
            "pp_raw": "7000.5",
            "country": "DE"
        }}"#
    );

    serde_json::from_str(&body).unwrap()
}

pub fn metadata(beatmap_id: u32) -> BeatmapMetadata {
    let body = format!(
        r#"[{{
            "beatmap_id": "{beatmap_id}",
            "beatmapset_id": "{}",
            "approved": "1",
            "submit_date": "2019-01-01 00:00:00",
            "approved_date": "2019-02-01 00:00:00",
            "last_update": "2019-01-15 00:00:00",
            "max_combo": "{WEB_MAX_COMBO}"
        }}]"#,
        beatmap_id / 10
    );

    BeatmapMetadata::from_response(&body, beatmap_id).unwrap()
}

pub fn play(user_id: u32, day: u32, grade: Grade) -> Play {
    Play {
        user_id,
        beatmap_id: Some(BEATMAP_ID),
        score: 1_000_000,
        max_combo: 30,
        n300: 40,
        n100: 5,
        n50: 2,
        misses: 3,
        perfect: false,
        mods: ModifierSet::empty(),
        date: Utc.with_ymd_and_hms(2021, 3, day, 12, 0, 0).unwrap(),
        grade,
        pp: None,
        replay_available: false,
        score_id: Some(u64::from(day)),
    }
}

/// Canned api responses.
pub struct MockApi {
    pub leaderboard: Result<Vec<Play>, MapError>,
    pub user_best: Result<Vec<Play>, UserError>,
    pub best_on_map: Vec<Play>,
    pub recent: Vec<Play>,
    pub missing_user: Option<String>,
    pub replay: Option<String>,
    pub replay_requests: Cell<usize>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            leaderboard: Ok(Vec::new()),
            user_best: Ok(Vec::new()),
            best_on_map: Vec::new(),
            recent: Vec::new(),
            missing_user: None,
            replay: None,
            replay_requests: Cell::new(0),
        }
    }
}

impl OsuApi for MockApi {
    fn fetch_user_profile(&self, user: &UserIdentity) -> Result<UserProfile, UserError> {
        let name = user.to_string();

        if self.missing_user.as_deref() == Some(name.as_str()) {
            return Err(UserError::UserNotFound(name));
        }

        match user {
            UserIdentity::Id(user_id) => Ok(profile(*user_id, "player")),
            UserIdentity::Name(name) => Ok(profile(1, name)),
        }
    }

    fn fetch_leaderboard(&self, beatmap_id: u32, limit: usize) -> Result<Vec<Play>, MapError> {
        assert_eq!(beatmap_id, BEATMAP_ID);

        self.leaderboard
            .clone()
            .map(|plays| plays.into_iter().take(limit).collect())
    }

    fn fetch_user_best(&self, _: &UserIdentity, limit: usize) -> Result<Vec<Play>, UserError> {
        self.user_best
            .clone()
            .map(|plays| plays.into_iter().take(limit).collect())
    }

    fn fetch_user_best_on_map(
        &self,
        _: u32,
        _: &UserIdentity,
        _: u32,
    ) -> Result<Vec<Play>, Error> {
        Ok(self.best_on_map.clone())
    }

    fn fetch_user_recent(&self, user: &UserIdentity, limit: usize) -> Result<Vec<Play>, UserError> {
        if self.recent.is_empty() {
            return Err(UserError::NoPlays(user.to_string()));
        }

        Ok(self.recent.iter().take(limit).cloned().collect())
    }

    fn fetch_beatmap_metadata(
        &self,
        beatmap_id: u32,
        _: u32,
    ) -> Result<BeatmapMetadata, MapError> {
        if beatmap_id == BEATMAP_ID {
            Ok(metadata(beatmap_id))
        } else {
            Err(MapError::BadId(beatmap_id))
        }
    }

    fn fetch_replay(&self, _: u32, _: &UserIdentity, _: u32) -> Result<String, UserError> {
        self.replay_requests.set(self.replay_requests.get() + 1);

        self.replay.clone().ok_or(UserError::NoReplay)
    }
}

pub struct MockBeatmaps;

impl BeatmapSource for MockBeatmaps {
    fn fetch_beatmap(&self, beatmap_id: u32) -> Result<RawBeatmap, MapError> {
        if beatmap_id == BEATMAP_ID {
            Ok(beatmap(Some(beatmap_id)))
        } else {
            Err(MapError::BadId(beatmap_id))
        }
    }
}

/// One pp per 300 plus a hundredth per combo, accuracy from the hits.
pub struct MockPerformance;

impl PerformanceCalculator for MockPerformance {
    fn compute_performance(
        &self,
        _: &RawBeatmap,
        _: u32,
        input: PerformanceInput,
    ) -> PerformanceOutput {
        PerformanceOutput {
            pp: f64::from(input.n300) + f64::from(input.combo) / 100.0,
            accuracy: osu_stats::model::play::accuracy(
                input.n300,
                input.n100,
                input.n50,
                input.misses,
            ),
        }
    }
}
