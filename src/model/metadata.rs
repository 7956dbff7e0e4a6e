use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::{error::MapError, util::de};

/// Ranked status of a beatmap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RankStatus {
    Graveyard = -2,
    Wip = -1,
    Pending = 0,
    Ranked = 1,
    Approved = 2,
    Qualified = 3,
    Loved = 4,
}

impl RankStatus {
    /// Label describing how the beatmap got its status e.g. "Ranked"
    /// or "Submitted" for anything that is not on a leaderboard-bearing
    /// status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ranked => "Ranked",
            Self::Approved => "Approved",
            Self::Qualified => "Qualified",
            Self::Loved => "Loved",
            Self::Graveyard | Self::Wip | Self::Pending => "Submitted",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown ranked status `{0}`")]
pub struct ParseRankStatusError(String);

impl TryFrom<i8> for RankStatus {
    type Error = ParseRankStatusError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        let status = match value {
            -2 => Self::Graveyard,
            -1 => Self::Wip,
            0 => Self::Pending,
            1 => Self::Ranked,
            2 => Self::Approved,
            3 => Self::Qualified,
            4 => Self::Loved,
            _ => return Err(ParseRankStatusError(value.to_string())),
        };

        Ok(status)
    }
}

impl FromStr for RankStatus {
    type Err = ParseRankStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i8>()
            .map_err(|_| ParseRankStatusError(s.to_owned()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for RankStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Online metadata of a beatmap.
///
/// Only the listed fields are read from a response; anything else is
/// ignored. Missing required fields fail deserialization.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BeatmapMetadata {
    #[serde(deserialize_with = "de::str_or_num")]
    pub beatmap_id: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    pub beatmapset_id: u32,
    #[serde(deserialize_with = "de::str_or_num")]
    pub approved: RankStatus,
    #[serde(deserialize_with = "de::date")]
    pub submit_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::date")]
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub file_md5: String,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub genre_id: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub language_id: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub favourite_count: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub playcount: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub passcount: Option<u64>,
    #[serde(default, deserialize_with = "de::flag")]
    pub download_unavailable: bool,
    #[serde(default, deserialize_with = "de::flag")]
    pub audio_unavailable: bool,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub max_combo: Option<u32>,
}

impl BeatmapMetadata {
    /// Decode a `get_beatmaps` response body.
    ///
    /// The api responds with a list; an empty list means the id could not
    /// be resolved.
    pub fn from_response(body: &str, beatmap_id: u32) -> Result<Self, MapError> {
        let mut maps: Vec<Self> =
            serde_json::from_str(body).map_err(|err| MapError::BadMetadata(err.to_string()))?;

        if maps.is_empty() {
            return Err(MapError::BadId(beatmap_id));
        }

        Ok(maps.swap_remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"[{
        "beatmapset_id": "41823",
        "beatmap_id": "129891",
        "approved": "1",
        "total_length": "331",
        "hit_length": "331",
        "version": "FOUR DIMENSIONS",
        "file_md5": "da8aae79c8f3306b5d65ec951874a7fb",
        "diff_size": "4",
        "diff_overall": "8",
        "diff_approach": "9",
        "diff_drain": "6",
        "mode": "0",
        "approved_date": "2012-07-07 03:19:44",
        "last_update": "2012-06-29 00:47:43",
        "submit_date": "2012-01-29 00:21:23",
        "artist": "xi",
        "title": "FREEDOM DiVE",
        "creator": "Nakagawa-Kanon",
        "creator_id": "87065",
        "bpm": "222.22",
        "source": "BMS",
        "tags": "parousia",
        "genre_id": "2",
        "language_id": "5",
        "favourite_count": "9000",
        "rating": "9.3",
        "download_unavailable": "0",
        "audio_unavailable": "0",
        "playcount": "16000000",
        "passcount": "1400000",
        "max_combo": "2385",
        "difficultyrating": "7.0"
    }]"#;

    #[test]
    fn deserialize_response() {
        let meta = BeatmapMetadata::from_response(RESPONSE, 129891).unwrap();

        assert_eq!(meta.beatmap_id, 129891);
        assert_eq!(meta.beatmapset_id, 41823);
        assert_eq!(meta.approved, RankStatus::Ranked);
        assert!(meta.approved_date.is_some());
        assert_eq!(meta.max_combo, Some(2385));
        assert_eq!(meta.genre_id, Some(2));
        assert!(!meta.download_unavailable);
    }

    #[test]
    fn empty_response_is_bad_id() {
        assert_eq!(
            BeatmapMetadata::from_response("[]", 5),
            Err(MapError::BadId(5))
        );
    }

    #[test]
    fn missing_required_field() {
        let body = RESPONSE.replace(r#""submit_date": "2012-01-29 00:21:23","#, "");

        assert!(matches!(
            BeatmapMetadata::from_response(&body, 129891),
            Err(MapError::BadMetadata(_))
        ));
    }

    #[test]
    fn unranked_maps() {
        let body = RESPONSE
            .replace(r#""approved": "1""#, r#""approved": "-2""#)
            .replace(r#""approved_date": "2012-07-07 03:19:44""#, r#""approved_date": null"#);

        let meta = BeatmapMetadata::from_response(&body, 129891).unwrap();

        assert_eq!(meta.approved, RankStatus::Graveyard);
        assert_eq!(meta.approved.label(), "Submitted");
        assert_eq!(meta.approved_date, None);
    }
}
