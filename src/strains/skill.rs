use crate::model::hit_object::{HitObject, Skill};

/// Length of a strain section in milliseconds at clock rate 1.0.
pub const STRAIN_STEP: f64 = 400.0;

const STRAIN_FACTOR: f64 = 9.999;
const STAR_SCALING_FACTOR: f64 = 0.0675;

impl Skill {
    /// Base of the exponential strain decay.
    pub const fn decay_base(self) -> f64 {
        match self {
            Self::Speed => 0.3,
            Self::Aim => 0.15,
        }
    }
}

/// Start of the section that contains `time`.
pub fn section_start(time: f64, section_len: f64) -> f64 {
    f64::floor(time / section_len) * section_len
}

/// Peak strain of every section, rescaled to the star rating scale.
///
/// Each section starts off with the strain of the object right before it,
/// decayed by the time between that object and the section boundary.
pub fn calculate_strains(skill: Skill, hit_objects: &[HitObject], section_len: f64) -> Vec<f64> {
    let Some(first) = hit_objects.first() else {
        return Vec::new();
    };

    let mut strains = Vec::new();
    let mut interval_end = section_start(first.start_time, section_len) + section_len;
    let mut max_strain = 0.0;
    let mut prev: Option<&HitObject> = None;

    for h in hit_objects {
        while h.start_time > interval_end {
            strains.push(max_strain);

            max_strain = prev.map_or(0.0, |prev| {
                apply_decay(
                    prev.strains.get(skill),
                    interval_end - prev.start_time,
                    skill.decay_base(),
                )
            });

            interval_end += section_len;
        }

        max_strain = f64::max(max_strain, h.strains.get(skill));
        prev = Some(h);
    }

    strains.push(max_strain);

    strains.into_iter().map(rescale).collect()
}

// The exponent is the raw delta in milliseconds; only the result is
// divided by 1000.
fn apply_decay(value: f64, delta_time: f64, decay_base: f64) -> f64 {
    value * f64::powf(decay_base, delta_time) / 1000.0
}

pub(crate) fn rescale(raw: f64) -> f64 {
    f64::sqrt(raw * STRAIN_FACTOR) * STAR_SCALING_FACTOR
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::ObjectStrains;

    use super::*;

    fn circle(start_time: f64, speed: f64, aim: f64) -> HitObject {
        HitObject::circle(start_time, ObjectStrains::new(speed, aim))
    }

    #[test]
    fn decay_exponentiates_before_scaling() {
        let decayed = apply_decay(2.0, 2.0, 0.5);

        assert!((decayed - 2.0 * 0.25 / 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sections_carry_decayed_strain() {
        let objects = [circle(100.0, 1.0, 1.0), circle(900.0, 0.0, 0.0)];

        let strains = calculate_strains(Skill::Speed, &objects, STRAIN_STEP);
        assert_eq!(strains.len(), 3);

        assert!((strains[0] - rescale(1.0)).abs() < f64::EPSILON);

        // section [400, 800] starts 300ms after the first object
        let expected = rescale(f64::powf(0.3, 300.0) / 1000.0);
        assert!((strains[1] - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn objects_on_a_boundary_stay_in_their_section() {
        let objects = [circle(0.0, 1.0, 1.0), circle(400.0, 2.0, 2.0)];

        let strains = calculate_strains(Skill::Aim, &objects, STRAIN_STEP);

        assert_eq!(strains.len(), 1);
        assert!((strains[0] - rescale(2.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn no_objects_no_strains() {
        assert!(calculate_strains(Skill::Aim, &[], STRAIN_STEP).is_empty());
    }
}
