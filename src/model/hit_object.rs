pub use rosu_map::util::Pos;

/// All hitobject related data required for strain and statistics
/// calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
    /// Instantaneous strain contributions, computed by the beatmap parser.
    pub strains: ObjectStrains,
}

impl HitObject {
    /// A circle at the center of the playfield.
    pub fn circle(start_time: f64, strains: ObjectStrains) -> Self {
        Self {
            pos: Pos::new(256.0, 192.0),
            start_time,
            kind: HitObjectKind::Circle,
            strains,
        }
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
    Hold(HoldNote),
}

/// A slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    pub repeats: usize,
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub duration: f64,
}

/// A hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoldNote {
    pub duration: f64,
}

/// The skills a strain can be measured in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Skill {
    Speed,
    Aim,
}

/// Strain contributions of a single hit object.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ObjectStrains {
    pub speed: f64,
    pub aim: f64,
}

impl ObjectStrains {
    pub const fn new(speed: f64, aim: f64) -> Self {
        Self { speed, aim }
    }

    pub const fn get(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Speed => self.speed,
            Skill::Aim => self.aim,
        }
    }
}

/// `[speed, aim]`
impl From<[f64; 2]> for ObjectStrains {
    fn from([speed, aim]: [f64; 2]) -> Self {
        Self { speed, aim }
    }
}

/// Amount of hit objects per kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitObjectCounts {
    pub circles: u32,
    pub sliders: u32,
    pub spinners: u32,
    pub holds: u32,
}

impl HitObjectCounts {
    pub fn new(hit_objects: &[HitObject]) -> Self {
        hit_objects
            .iter()
            .fold(Self::default(), |mut counts, h| {
                match h.kind {
                    HitObjectKind::Circle => counts.circles += 1,
                    HitObjectKind::Slider(_) => counts.sliders += 1,
                    HitObjectKind::Spinner(_) => counts.spinners += 1,
                    HitObjectKind::Hold(_) => counts.holds += 1,
                }

                counts
            })
    }
}
