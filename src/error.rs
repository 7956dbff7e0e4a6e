use thiserror::Error;

/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors related to beatmap data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    #[error("invalid beatmap link")]
    BadLink,
    #[error("invalid beatmap file")]
    BadMapFile,
    #[error("unknown beatmap id {0}")]
    BadId(u32),
    #[error("couldn't find leaderboard for beatmap {0}")]
    NoLeaderboard(u32),
    #[error("no beatmap provided")]
    NoBeatmap,
    #[error("beatmap contains no hit objects")]
    EmptyHitObjects,
    #[error("clock rate must be finite and positive")]
    InvalidClockRate,
    #[error("got {strains} strain entries for {objects} hit objects")]
    StrainMismatch { objects: usize, strains: usize },
    #[error("invalid beatmap metadata: {0}")]
    BadMetadata(String),
}

/// Errors related to players and their scores.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("couldn't find user: {0}")]
    UserNotFound(String),
    #[error("no plays found for {0}")]
    NoPlays(String),
    #[error("user has no score on this beatmap")]
    NoScore,
    #[error("could not find replay for this user")]
    NoReplay,
}

/// Any error that can occur while building statistics or reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error("failed to deserialize response")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse config")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read config")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    /// The [`MapError`] if this error is one.
    pub const fn as_map_error(&self) -> Option<&MapError> {
        match self {
            Self::Map(err) => Some(err),
            _ => None,
        }
    }

    /// The [`UserError`] if this error is one.
    pub const fn as_user_error(&self) -> Option<&UserError> {
        match self {
            Self::User(err) => Some(err),
            _ => None,
        }
    }
}
