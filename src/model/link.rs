use std::str::FromStr;

use crate::error::MapError;

/// Where a beatmap can be found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeatmapLink {
    /// An online beatmap id.
    Id(u32),
    /// Direct link to an `.osu` file.
    Url(String),
    /// Link to an `.osz` archive of a mapset.
    Archive(String),
}

impl BeatmapLink {
    /// Resolve user input into a [`BeatmapLink`].
    ///
    /// Accepts plain ids, osu! website links in their various shapes, and
    /// direct `.osu`/`.osz` links.
    pub fn parse(link: &str) -> Result<Self, MapError> {
        let link = link.trim();

        if !link.is_empty() && link.bytes().all(|b| b.is_ascii_digit()) {
            return parse_id(link).map(Self::Id);
        }

        if link.ends_with(".osu") {
            return Ok(Self::Url(link.to_owned()));
        }

        if link.contains("osu.ppy.sh") {
            const MARKERS: [&str; 4] = ["#osu/", "/b/", "/osu/", "/beatmaps/"];

            for marker in MARKERS {
                if let Some((_, id)) = link.rsplit_once(marker) {
                    return parse_id(id).map(Self::Id);
                }
            }

            if let Some((_, rest)) = link.rsplit_once("/discussion/") {
                let id = rest.split('/').next().unwrap_or_default();

                return parse_id(id).map(Self::Id);
            }
        }

        if link.ends_with(".osz") {
            return Ok(Self::Archive(link.to_owned()));
        }

        Err(MapError::BadLink)
    }

    pub const fn id(&self) -> Option<u32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Url(_) | Self::Archive(_) => None,
        }
    }
}

impl FromStr for BeatmapLink {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Trailing query strings or fragments are cut off.
fn parse_id(s: &str) -> Result<u32, MapError> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

    s[..end].parse().map_err(|_| MapError::BadLink)
}
