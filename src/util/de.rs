//! Deserialization helpers for the osu!api v1 which sends most numbers
//! as strings.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{
    de::{Deserializer, Error as DeError},
    Deserialize,
};

/// Date format used in api responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl StrOrNum {
    fn into_string(self) -> String {
        match self {
            Self::Unsigned(n) => n.to_string(),
            Self::Signed(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => u8::from(b).to_string(),
            Self::Str(s) => s,
        }
    }
}

fn parse<T, E>(s: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: DeError,
{
    s.trim()
        .parse()
        .map_err(|err| E::custom(format!("invalid value `{s}`: {err}")))
}

/// Deserialize a `T` from either a string or a number.
pub fn str_or_num<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    parse(&StrOrNum::deserialize(d)?.into_string())
}

/// Same as [`str_or_num`] but `null` and empty strings become `None`.
pub fn opt_str_or_num<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<StrOrNum>::deserialize(d)? {
        Some(value) => {
            let s = value.into_string();

            if s.is_empty() {
                Ok(None)
            } else {
                parse(&s).map(Some)
            }
        }
        None => Ok(None),
    }
}

/// Deserialize `"0"`/`"1"` flags.
pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    str_or_num::<_, u8>(d).map(|n| n != 0)
}

pub fn parse_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), DATE_FORMAT).map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(d)?;

    parse_date(&s).map_err(|err| D::Error::custom(format!("invalid date `{s}`: {err}")))
}

pub fn opt_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(s) if !s.is_empty() => parse_date(&s)
            .map(Some)
            .map_err(|err| D::Error::custom(format!("invalid date `{s}`: {err}"))),
        _ => Ok(None),
    }
}
