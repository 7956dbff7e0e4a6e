//! Applying mods onto a beatmap's AR, OD, CS, and HP.
//!
//! AR and OD are converted into their time windows, scaled by the clock
//! rate, and converted back. The resulting values describe what the map
//! *feels* like, e.g. AR 9 with DT has an approach window of 400ms which
//! corresponds to AR 10.33, while the window itself is what the player
//! actually has to react.

use crate::model::mods::ModifierSet;

const AR0_MS: f64 = 1800.0;
const AR5_MS: f64 = 1200.0;
const AR10_MS: f64 = 450.0;
const AR_MS_STEP1: f64 = 120.0;
const AR_MS_STEP2: f64 = 150.0;

const OD0_MS: f64 = 79.5;
const OD10_MS: f64 = 19.5;
const OD_MS_STEP: f64 = 6.0;

const VALUE_CAP: f64 = 10.0;

/// Difficulty values as written in the `.osu` file.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RawDifficulty {
    pub ar: f64,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
}

/// Difficulty values after applying mods.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DifficultyParameters {
    pub ar: f64,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
    /// Time in milliseconds between an object appearing and having to be
    /// hit.
    pub approach_window: f64,
    /// Hit window in milliseconds for a 300.
    pub hit_window: f64,
    /// The clock rate that was applied.
    pub clock_rate: f64,
}

/// Multipliers of difficulty changing mods. HR takes precedence over EZ.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Multipliers {
    ar: f64,
    od: f64,
    cs: f64,
    hp: f64,
}

impl Multipliers {
    const HARD_ROCK: Self = Self {
        ar: 1.4,
        od: 1.4,
        cs: 1.3,
        hp: 1.4,
    };

    const EASY: Self = Self {
        ar: 0.5,
        od: 0.5,
        cs: 0.5,
        hp: 0.5,
    };

    const NONE: Self = Self {
        ar: 1.0,
        od: 1.0,
        cs: 1.0,
        hp: 1.0,
    };

    const fn new(mods: &ModifierSet) -> Self {
        if mods.hr() {
            Self::HARD_ROCK
        } else if mods.ez() {
            Self::EASY
        } else {
            Self::NONE
        }
    }
}

/// Apply `mods` onto `raw`.
pub fn adjust(raw: RawDifficulty, mods: &ModifierSet) -> DifficultyParameters {
    let multipliers = Multipliers::new(mods);
    let clock_rate = mods.speed_multiplier();

    let ar = raw.ar * multipliers.ar;
    let approach_window = approach_window(ar) / clock_rate;
    let hit_window = hit_window(raw.od * multipliers.od) / clock_rate;

    DifficultyParameters {
        ar: ar_from_window(approach_window, ar),
        od: od_from_window(hit_window),
        cs: f64::min(raw.cs * multipliers.cs, VALUE_CAP),
        hp: f64::min(raw.hp * multipliers.hp, VALUE_CAP),
        approach_window,
        hit_window,
        clock_rate,
    }
}

/// Approach window in milliseconds of the given AR, clamped to
/// `[450, 1800]`.
pub fn approach_window(ar: f64) -> f64 {
    let ms = if ar <= 5.0 {
        AR0_MS - AR_MS_STEP1 * ar
    } else {
        AR5_MS - AR_MS_STEP2 * (ar - 5.0)
    };

    ms.clamp(AR10_MS, AR0_MS)
}

/// Inverse of [`approach_window`] for a window derived from `ar`.
///
/// The branch is chosen by `ar`, not by `ms`: a window that a clock rate
/// pushed across the AR 5 boundary keeps using the slope of the AR it came
/// from. Windows outside of `[450, 1800]` are extrapolated so that clock
/// rates can push AR below 0 or above 10.
pub fn ar_from_window(ms: f64, ar: f64) -> f64 {
    if ar <= 5.0 {
        (AR0_MS - ms) / AR_MS_STEP1
    } else {
        5.0 + (AR5_MS - ms) / AR_MS_STEP2
    }
}

/// Hit window in milliseconds for a 300 at the given OD, clamped to
/// `[19.5, 79.5]`.
pub fn hit_window(od: f64) -> f64 {
    (OD0_MS - f64::ceil(OD_MS_STEP * od)).clamp(OD10_MS, OD0_MS)
}

/// Inverse of [`hit_window`].
pub fn od_from_window(ms: f64) -> f64 {
    (OD0_MS - ms) / OD_MS_STEP
}
