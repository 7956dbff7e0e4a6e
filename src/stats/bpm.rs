use crate::{error::MapError, model::beatmap::TimingPoint};

/// Bpm of a beatmap with the clock rate applied.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BpmRange {
    pub min: f64,
    pub max: f64,
    /// Mean bpm weighted by how long each timing point lasts.
    pub average: f64,
}

/// A bpm change, both values with the clock rate applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BpmChange {
    pub time: f64,
    pub bpm: f64,
}

/// Bpm range and change points of the given uninherited timing points.
///
/// The last timing point lasts until `end_time`, usually the start of the
/// last hit object. Timing points with a non-positive beat length are
/// skipped; if none remain the map is considered broken.
pub(crate) fn calculate(
    timing_points: &[TimingPoint],
    end_time: f64,
    clock_rate: f64,
) -> Result<(BpmRange, Vec<BpmChange>), MapError> {
    let points: Vec<_> = timing_points
        .iter()
        .filter(|point| point.beat_len > 0.0 && point.beat_len.is_finite())
        .collect();

    let Some(first) = points.first() else {
        return Err(MapError::BadMapFile);
    };

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut weighted_sum = 0.0;
    let mut total_duration = 0.0;

    for (i, point) in points.iter().enumerate() {
        let bpm = point.bpm();
        min = min.min(bpm);
        max = max.max(bpm);

        let segment_end = points.get(i + 1).map_or(end_time, |next| next.time);
        let duration = f64::max(segment_end - point.time, 0.0);

        weighted_sum += bpm * duration;
        total_duration += duration;
    }

    let average = if total_duration > 0.0 {
        weighted_sum / total_duration
    } else {
        first.bpm()
    };

    let range = BpmRange {
        min: min * clock_rate,
        max: max * clock_rate,
        average: average * clock_rate,
    };

    let changes = points
        .iter()
        .map(|point| BpmChange {
            time: point.time / clock_rate,
            bpm: point.bpm() * clock_rate,
        })
        .collect();

    Ok((range, changes))
}
