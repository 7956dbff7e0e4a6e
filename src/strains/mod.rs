use crate::{
    error::MapError,
    model::{
        hit_object::{HitObject, Skill},
        mods::ModifierSet,
    },
    util::float_ext::FloatExt,
};

pub use self::skill::STRAIN_STEP;

mod skill;

const EXTREME_SCALING_FACTOR: f64 = 0.5;

/// Which strains to look at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrainKind {
    /// Aim and speed combined.
    #[default]
    Total,
    Aim,
    Speed,
}

/// Star ratings derived from the strain peaks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StarRatings {
    pub total: f64,
    pub aim: f64,
    pub speed: f64,
}

/// Strains of a beatmap in fixed-width sections.
///
/// Section `i` covers the time `(offset + i * section_len, offset + (i + 1) * section_len]`
/// in map time, i.e. without clock rate applied.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainTimeline {
    aim: Vec<f64>,
    speed: Vec<f64>,
    combined: Vec<f64>,
    section_len: f64,
    offset: f64,
    clock_rate: f64,
    stars: StarRatings,
    peak_index: usize,
}

impl StrainTimeline {
    /// Calculate the strains of the given hit objects with the clock rate
    /// of `mods`.
    pub fn calculate(hit_objects: &[HitObject], mods: &ModifierSet) -> Result<Self, MapError> {
        Self::with_clock_rate(hit_objects, mods.speed_multiplier())
    }

    /// Calculate the strains of the given hit objects with a custom clock
    /// rate.
    ///
    /// The hit objects must be sorted by start time and `clock_rate` must be
    /// finite and positive.
    pub fn with_clock_rate(hit_objects: &[HitObject], clock_rate: f64) -> Result<Self, MapError> {
        if !(clock_rate.is_finite() && clock_rate > 0.0) {
            return Err(MapError::InvalidClockRate);
        }

        let first = hit_objects.first().ok_or(MapError::EmptyHitObjects)?;

        let section_len = STRAIN_STEP * clock_rate;
        let offset = skill::section_start(first.start_time, section_len);

        let aim = skill::calculate_strains(Skill::Aim, hit_objects, section_len);
        let speed = skill::calculate_strains(Skill::Speed, hit_objects, section_len);

        let combined: Vec<_> = aim
            .iter()
            .zip(speed.iter())
            .map(|(aim, speed)| aim + speed + f64::abs(speed - aim) * EXTREME_SCALING_FACTOR)
            .collect();

        let stars = StarRatings {
            total: f64::max_of(combined.iter().copied()),
            aim: f64::max_of(aim.iter().copied()),
            speed: f64::max_of(speed.iter().copied()),
        };

        let peak_index = argmax(&combined);

        Ok(Self {
            aim,
            speed,
            combined,
            section_len,
            offset,
            clock_rate,
            stars,
            peak_index,
        })
    }

    pub fn aim(&self) -> &[f64] {
        &self.aim
    }

    pub fn speed(&self) -> &[f64] {
        &self.speed
    }

    /// `aim + speed + |speed - aim| * 0.5` per section.
    pub fn combined(&self) -> &[f64] {
        &self.combined
    }

    pub fn strains(&self, kind: StrainKind) -> &[f64] {
        match kind {
            StrainKind::Total => &self.combined,
            StrainKind::Aim => &self.aim,
            StrainKind::Speed => &self.speed,
        }
    }

    /// Amount of sections.
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Section length in milliseconds.
    pub const fn section_len(&self) -> f64 {
        self.section_len
    }

    /// Start time of the first section.
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    pub const fn clock_rate(&self) -> f64 {
        self.clock_rate
    }

    pub const fn stars(&self) -> StarRatings {
        self.stars
    }

    /// Index of the section with the highest combined strain.
    pub const fn peak_index(&self) -> usize {
        self.peak_index
    }

    /// Start time of the section with the highest combined strain.
    pub fn peak_time(&self) -> f64 {
        self.section_time(self.peak_index)
    }

    /// Start time of the section at `index`.
    pub fn section_time(&self, index: usize) -> f64 {
        index as f64 * self.section_len + self.offset
    }

    /// Strains of one kind alongside their peak.
    pub fn select(&self, kind: StrainKind) -> StrainSelection {
        let strains = self.strains(kind).to_vec();
        let peak = argmax(&strains);
        let max_strain = strains.get(peak).copied().unwrap_or(0.0);
        let max_strain_time = self.section_time(peak);

        let stars = match kind {
            StrainKind::Total => self.stars.total,
            StrainKind::Aim => self.stars.aim,
            StrainKind::Speed => self.stars.speed,
        };

        StrainSelection {
            strains,
            max_strain,
            max_strain_time,
            max_strain_time_real: max_strain_time * self.clock_rate,
            stars,
        }
    }

    /// Downsample the strains of one kind to at most `max_chunks` values,
    /// each being the highest strain of its chunk.
    pub fn chunked(&self, kind: StrainKind, max_chunks: usize) -> Vec<f64> {
        let strains = self.strains(kind);
        let chunk_size = strains.len().div_ceil(max_chunks.max(1)).max(1);

        strains
            .chunks(chunk_size)
            .map(|chunk| f64::max_of(chunk.iter().copied()))
            .collect()
    }
}

/// Strains of a single [`StrainKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct StrainSelection {
    pub strains: Vec<f64>,
    pub max_strain: f64,
    /// Start of the peak section in map time.
    pub max_strain_time: f64,
    /// Start of the peak section with the clock rate applied.
    pub max_strain_time_real: f64,
    pub stars: f64,
}

// First index of the largest value.
fn argmax(values: &[f64]) -> usize {
    let mut peak = 0;

    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[peak] && value.not_eq(values[peak]) {
            peak = i;
        }
    }

    peak
}
