use rosu_map::section::hit_objects::HitObjectKind as RosuKind;

use crate::{
    difficulty::RawDifficulty,
    error::MapError,
    model::hit_object::{
        HitObject, HitObjectCounts, HitObjectKind, HoldNote, ObjectStrains, Pos, Slider, Spinner,
    },
};

/// An uninherited timing point i.e. a bpm change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    pub time: f64,
    pub beat_len: f64,
}

impl TimingPoint {
    pub const fn new(time: f64, beat_len: f64) -> Self {
        Self { time, beat_len }
    }

    /// Beats per minute of the timing point.
    pub fn bpm(&self) -> f64 {
        60_000.0 / self.beat_len
    }
}

/// A parsed beatmap whose hit objects already carry their strain
/// contributions.
#[derive(Clone, Debug, PartialEq)]
pub struct RawBeatmap {
    /// Online id, `None` for local files.
    pub beatmap_id: Option<u32>,
    pub beatmapset_id: Option<u32>,
    pub title: String,
    pub title_unicode: String,
    pub artist: String,
    pub artist_unicode: String,
    /// Username of the mapper.
    pub creator: String,
    /// Difficulty name.
    pub version: String,
    pub difficulty: RawDifficulty,
    pub timing_points: Vec<TimingPoint>,
    /// Hit objects, sorted by start time.
    pub hit_objects: Vec<HitObject>,
    pub max_combo: u32,
}

impl RawBeatmap {
    /// Convert a beatmap parsed by `rosu-map`.
    ///
    /// `strains` must contain one entry per hit object and `max_combo` is
    /// the map's maximum combo as computed by the parser.
    pub fn from_rosu_map(
        map: &rosu_map::Beatmap,
        strains: &[ObjectStrains],
        max_combo: u32,
    ) -> Result<Self, MapError> {
        if map.hit_objects.is_empty() {
            return Err(MapError::BadMapFile);
        }

        if map.hit_objects.len() != strains.len() {
            return Err(MapError::StrainMismatch {
                objects: map.hit_objects.len(),
                strains: strains.len(),
            });
        }

        let hit_objects = map
            .hit_objects
            .iter()
            .zip(strains)
            .map(|(h, strains)| {
                let (pos, kind) = match &h.kind {
                    RosuKind::Circle(circle) => (circle.pos, HitObjectKind::Circle),
                    RosuKind::Slider(slider) => (
                        slider.pos,
                        HitObjectKind::Slider(Slider {
                            repeats: usize::try_from(slider.repeat_count).unwrap_or(0),
                        }),
                    ),
                    RosuKind::Spinner(spinner) => (
                        spinner.pos,
                        HitObjectKind::Spinner(Spinner {
                            duration: spinner.duration,
                        }),
                    ),
                    RosuKind::Hold(hold) => (
                        Pos::new(hold.pos_x, 192.0),
                        HitObjectKind::Hold(HoldNote {
                            duration: hold.duration,
                        }),
                    ),
                };

                HitObject {
                    pos,
                    start_time: h.start_time,
                    kind,
                    strains: *strains,
                }
            })
            .collect();

        let timing_points = map
            .control_points
            .timing_points
            .iter()
            .map(|point| TimingPoint::new(point.time, point.beat_len))
            .collect();

        let positive_id = |id: i32| u32::try_from(id).ok().filter(|id| *id > 0);

        Ok(Self {
            beatmap_id: positive_id(map.beatmap_id),
            beatmapset_id: positive_id(map.beatmap_set_id),
            title: map.title.clone(),
            title_unicode: map.title_unicode.clone(),
            artist: map.artist.clone(),
            artist_unicode: map.artist_unicode.clone(),
            creator: map.creator.clone(),
            version: map.version.clone(),
            difficulty: RawDifficulty {
                ar: f64::from(map.approach_rate),
                od: f64::from(map.overall_difficulty),
                cs: f64::from(map.circle_size),
                hp: f64::from(map.hp_drain_rate),
            },
            timing_points,
            hit_objects,
            max_combo,
        })
    }

    /// Total amount of hit objects.
    pub fn n_objects(&self) -> usize {
        self.hit_objects.len()
    }

    pub fn counts(&self) -> HitObjectCounts {
        HitObjectCounts::new(&self.hit_objects)
    }

    /// Start times of the first and the last hit object.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let first = self.hit_objects.first()?;
        let last = self.hit_objects.last()?;

        Some((first.start_time, last.start_time))
    }
}
