use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::util::de;

/// How a player is looked up: by id or by username.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UserIdentity {
    Id(u32),
    Name(String),
}

impl From<u32> for UserIdentity {
    fn from(user_id: u32) -> Self {
        Self::Id(user_id)
    }
}

impl From<&str> for UserIdentity {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for UserIdentity {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(user_id) => write!(f, "{user_id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Profile of a player as returned by the api.
///
/// Fields not listed here are ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "de::str_or_num")]
    pub user_id: u32,
    pub username: String,
    /// Global rank, `None` for inactive players.
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub pp_rank: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_str_or_num")]
    pub pp_raw: Option<f64>,
    #[serde(
        default,
        rename = "pp_country_rank",
        deserialize_with = "de::opt_str_or_num"
    )]
    pub country_rank: Option<u32>,
    #[serde(default)]
    pub country: String,
    #[serde(deserialize_with = "de::date")]
    pub join_date: DateTime<Utc>,
}
