//! Decoding osu!api v1 response bodies.
//!
//! Implementations of [`OsuApi`](super::OsuApi) can use these to turn raw
//! bodies into the engine's types with consistent error kinds.

use serde::Deserialize;

use crate::{
    error::{Error, MapError, UserError},
    model::{
        metadata::BeatmapMetadata,
        play::Play,
        user::{UserIdentity, UserProfile},
    },
};

/// Decode a list of plays. An empty list is fine.
pub fn parse_plays(body: &str) -> Result<Vec<Play>, Error> {
    serde_json::from_str(body).map_err(Error::from)
}

/// Decode a `get_scores` response for `beatmap_id`.
///
/// Scores on a leaderboard don't carry the beatmap id so it is filled in.
/// An empty list means the beatmap has no leaderboard.
pub fn parse_leaderboard(body: &str, beatmap_id: u32) -> Result<Vec<Play>, Error> {
    let mut plays = parse_plays(body)?;

    if plays.is_empty() {
        return Err(MapError::NoLeaderboard(beatmap_id).into());
    }

    for play in plays.iter_mut() {
        play.beatmap_id.get_or_insert(beatmap_id);
    }

    Ok(plays)
}

/// Decode a `get_user_best` or `get_user_recent` response.
pub fn parse_user_plays(body: &str, user: &UserIdentity) -> Result<Vec<Play>, Error> {
    let plays = parse_plays(body)?;

    if plays.is_empty() {
        return Err(UserError::NoPlays(user.to_string()).into());
    }

    Ok(plays)
}

/// Decode a `get_user` response.
pub fn parse_user(body: &str, user: &UserIdentity) -> Result<UserProfile, Error> {
    let mut users: Vec<UserProfile> = serde_json::from_str(body)?;

    if users.is_empty() {
        return Err(UserError::UserNotFound(user.to_string()).into());
    }

    Ok(users.swap_remove(0))
}

/// Decode a `get_beatmaps` response.
pub fn parse_metadata(body: &str, beatmap_id: u32) -> Result<BeatmapMetadata, Error> {
    BeatmapMetadata::from_response(body, beatmap_id).map_err(Error::from)
}

#[derive(Deserialize)]
struct ReplayResponse {
    content: Option<String>,
    error: Option<String>,
}

/// Decode a `get_replay` response into its base64 content.
pub fn parse_replay(body: &str) -> Result<String, Error> {
    let response: ReplayResponse = serde_json::from_str(body)?;

    match response {
        ReplayResponse {
            content: Some(content),
            error: None,
        } => Ok(content),
        ReplayResponse { error, .. } => {
            if let Some(error) = error {
                tracing::debug!(%error, "Replay unavailable");
            }

            Err(UserError::NoReplay.into())
        }
    }
}
