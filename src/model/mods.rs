use std::{convert::Infallible, fmt, str::FromStr};

/// A single gameplay mod.
///
/// The discriminant is the position of the mod's bit in the legacy
/// bitflags, see <https://github.com/ppy/osu-api/wiki#mods>.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Mod {
    NoFail = 0,
    Easy = 1,
    TouchDevice = 2,
    Hidden = 3,
    HardRock = 4,
    SuddenDeath = 5,
    DoubleTime = 6,
    Relax = 7,
    HalfTime = 8,
    Nightcore = 9,
    Flashlight = 10,
    Autoplay = 11,
    SpunOut = 12,
    Autopilot = 13,
    Perfect = 14,
    Key4 = 15,
    Key5 = 16,
    Key6 = 17,
    Key7 = 18,
    Key8 = 19,
    FadeIn = 20,
    Random = 21,
    LastMod = 22,
    TargetPractice = 23,
    Key9 = 24,
    Key10 = 25,
    Key1 = 26,
    Key3 = 27,
    Key2 = 28,
    ScoreV2 = 29,
}

impl Mod {
    /// All mods in bit order.
    pub const ALL: [Self; 30] = [
        Self::NoFail,
        Self::Easy,
        Self::TouchDevice,
        Self::Hidden,
        Self::HardRock,
        Self::SuddenDeath,
        Self::DoubleTime,
        Self::Relax,
        Self::HalfTime,
        Self::Nightcore,
        Self::Flashlight,
        Self::Autoplay,
        Self::SpunOut,
        Self::Autopilot,
        Self::Perfect,
        Self::Key4,
        Self::Key5,
        Self::Key6,
        Self::Key7,
        Self::Key8,
        Self::FadeIn,
        Self::Random,
        Self::LastMod,
        Self::TargetPractice,
        Self::Key9,
        Self::Key10,
        Self::Key1,
        Self::Key3,
        Self::Key2,
        Self::ScoreV2,
    ];

    /// Mods that change difficulty values and are therefore sent along
    /// with difficulty-related requests.
    pub const DIFFICULTY: [Self; 8] = [
        Self::HardRock,
        Self::Easy,
        Self::DoubleTime,
        Self::HalfTime,
        Self::Nightcore,
        Self::Flashlight,
        Self::Hidden,
        Self::NoFail,
    ];

    /// The mod's legacy bitflag.
    pub const fn bits(self) -> u32 {
        1 << self as u32
    }

    pub const fn acronym(self) -> &'static str {
        match self {
            Self::NoFail => "NF",
            Self::Easy => "EZ",
            Self::TouchDevice => "TD",
            Self::Hidden => "HD",
            Self::HardRock => "HR",
            Self::SuddenDeath => "SD",
            Self::DoubleTime => "DT",
            Self::Relax => "RX",
            Self::HalfTime => "HT",
            Self::Nightcore => "NC",
            Self::Flashlight => "FL",
            Self::Autoplay => "AT",
            Self::SpunOut => "SO",
            Self::Autopilot => "AP",
            Self::Perfect => "PF",
            Self::Key4 => "4K",
            Self::Key5 => "5K",
            Self::Key6 => "6K",
            Self::Key7 => "7K",
            Self::Key8 => "8K",
            Self::FadeIn => "FI",
            Self::Random => "RD",
            Self::LastMod => "LM",
            Self::TargetPractice => "TR",
            Self::Key9 => "9K",
            Self::Key10 => "10K",
            Self::Key1 => "1K",
            Self::Key3 => "3K",
            Self::Key2 => "2K",
            Self::ScoreV2 => "V2",
        }
    }

    /// Case-sensitive lookup of an acronym.
    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.acronym() == acronym)
    }
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

/// A set of [`Mod`]s.
///
/// Every operation returns a new set; a `ModifierSet` is never changed in
/// place. Redundant pairs are only collapsed for display purposes through
/// [`ModifierSet::sanitize`], numeric calculations always see every mod.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    bits: u32,
}

const KNOWN_BITS: u32 = (1 << Mod::ALL.len()) - 1;

impl ModifierSet {
    /// The empty set i.e. nomod.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Decode legacy bitflags. Bits without an associated mod are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & KNOWN_BITS,
        }
    }

    /// Parse a display string such as `"HDDT"`, `"+HD,HR"`, or `"nomod"`.
    ///
    /// Invalid input does not fail but yields the empty set and logs a
    /// warning.
    pub fn parse(s: &str) -> Self {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '+' | ',') && !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        if cleaned.is_empty() || cleaned == "NOMOD" {
            return Self::empty();
        }

        match tokenize(&cleaned) {
            Some(mods) => mods,
            None => {
                tracing::warn!(mods = s, "Mods not valid");

                Self::empty()
            }
        }
    }

    /// All bits of the set, including mods that do not affect difficulty.
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Encode the set into legacy bitflags, restricted to
    /// [`Mod::DIFFICULTY`].
    ///
    /// [`Mod::Nightcore`] additionally sets the bit of
    /// [`Mod::DoubleTime`].
    pub fn to_bitmask(self) -> u32 {
        let mods = if self.contains(Mod::Nightcore) {
            self.with(Mod::DoubleTime)
        } else {
            self
        };

        Mod::DIFFICULTY
            .into_iter()
            .filter(|m| mods.contains(*m))
            .fold(0, |bits, m| bits | m.bits())
    }

    pub const fn contains(self, m: Mod) -> bool {
        self.bits & m.bits() != 0
    }

    /// A copy of the set that includes the given mod.
    #[must_use]
    pub const fn with(self, m: Mod) -> Self {
        Self {
            bits: self.bits | m.bits(),
        }
    }

    /// A copy of the set without the given mod.
    #[must_use]
    pub const fn without(self, m: Mod) -> Self {
        Self {
            bits: self.bits & !m.bits(),
        }
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the mods in bit order.
    pub fn iter(self) -> impl Iterator<Item = Mod> {
        Mod::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    pub const fn hr(self) -> bool {
        self.contains(Mod::HardRock)
    }

    pub const fn ez(self) -> bool {
        self.contains(Mod::Easy)
    }

    /// Whether DT or NC is enabled.
    pub const fn speed_up(self) -> bool {
        self.contains(Mod::DoubleTime) || self.contains(Mod::Nightcore)
    }

    pub const fn ht(self) -> bool {
        self.contains(Mod::HalfTime)
    }

    /// The clock rate of the mods i.e. 1.5 for DT or NC, 0.75 for HT, and
    /// 1.0 otherwise.
    pub const fn speed_multiplier(self) -> f64 {
        if self.speed_up() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// Collapse redundant mods for display: NC absorbs DT and PF
    /// absorbs SD.
    #[must_use]
    pub const fn sanitize(self) -> Self {
        let mut mods = self;

        if mods.contains(Mod::Nightcore) && mods.contains(Mod::DoubleTime) {
            mods = mods.without(Mod::DoubleTime);
        }

        if mods.contains(Mod::Perfect) && mods.contains(Mod::SuddenDeath) {
            mods = mods.without(Mod::SuddenDeath);
        }

        mods
    }
}

// Longer acronyms are tried first so that `10K` is not read as `1K`
// followed by garbage.
fn tokenize(s: &str) -> Option<ModifierSet> {
    let mut mods = ModifierSet::empty();
    let mut rest = s;

    'outer: while !rest.is_empty() {
        for len in [3, 2] {
            let Some(acronym) = rest.get(..len) else {
                continue;
            };

            if let Some(m) = Mod::from_acronym(acronym) {
                mods = mods.with(m);
                rest = &rest[len..];

                continue 'outer;
            }
        }

        return None;
    }

    Some(mods)
}

impl From<Mod> for ModifierSet {
    fn from(m: Mod) -> Self {
        Self::empty().with(m)
    }
}

impl From<u32> for ModifierSet {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl FromIterator<Mod> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Mod>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl FromStr for ModifierSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Comma separated acronyms of the sanitized set, e.g. `HD,NC`.
impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.sanitize().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }

            f.write_str(m.acronym())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_display_strings() {
        let mods = ModifierSet::parse("+hdDt");
        assert!(mods.contains(Mod::Hidden));
        assert!(mods.contains(Mod::DoubleTime));
        assert_eq!(mods.len(), 2);

        assert_eq!(ModifierSet::parse("HD,HR"), ModifierSet::parse("HRHD"));
        assert_eq!(ModifierSet::parse("HDHD").len(), 1);
        assert!(ModifierSet::parse("").is_empty());
        assert!(ModifierSet::parse("nomod").is_empty());
    }

    #[test]
    fn parse_longest_acronym_first() {
        let mods = ModifierSet::parse("10K1K");
        assert!(mods.contains(Mod::Key10));
        assert!(mods.contains(Mod::Key1));
        assert_eq!(mods.len(), 2);
    }

    #[test]
    fn invalid_display_string_is_empty() {
        assert!(ModifierSet::parse("HDXX").is_empty());
        assert!(ModifierSet::parse("H").is_empty());
        assert!(ModifierSet::parse("DTß").is_empty());
    }

    #[test]
    fn from_bits_ignores_unknown() {
        let mods = ModifierSet::from_bits(Mod::Hidden.bits() | (1 << 30) | (1 << 31));
        assert_eq!(mods, ModifierSet::from(Mod::Hidden));
    }

    #[test]
    fn bitmask_only_difficulty_mods() {
        let mods = ModifierSet::parse("HDSDPFV2");
        assert_eq!(mods.to_bitmask(), Mod::Hidden.bits());
    }

    #[test]
    fn nightcore_sanitizes_but_keeps_both_bits() {
        let mods = ModifierSet::parse("NCDT");

        let sanitized = mods.sanitize();
        assert!(sanitized.contains(Mod::Nightcore));
        assert!(!sanitized.contains(Mod::DoubleTime));
        assert_eq!(sanitized.to_string(), "NC");

        let bits = mods.to_bitmask();
        assert_eq!(bits, Mod::Nightcore.bits() | Mod::DoubleTime.bits());

        // NC alone still implies DT in the bitmask
        assert_eq!(ModifierSet::from(Mod::Nightcore).to_bitmask(), bits);
    }

    #[test]
    fn perfect_absorbs_sudden_death() {
        let mods = ModifierSet::parse("HDSDPF");

        assert_eq!(mods.sanitize().to_string(), "HD,PF");
        assert!(mods.contains(Mod::SuddenDeath));
    }

    #[test]
    fn speed_multipliers() {
        assert!((ModifierSet::parse("DT").speed_multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((ModifierSet::parse("NC").speed_multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((ModifierSet::parse("HTHD").speed_multiplier() - 0.75).abs() < f64::EPSILON);
        assert!((ModifierSet::parse("HRFL").speed_multiplier() - 1.0).abs() < f64::EPSILON);
    }

    fn difficulty_mods() -> impl Strategy<Value = ModifierSet> {
        proptest::sample::subsequence(Mod::DIFFICULTY.to_vec(), 0..=Mod::DIFFICULTY.len())
            .prop_map(|mods| mods.into_iter().collect())
    }

    fn any_mods() -> impl Strategy<Value = ModifierSet> {
        (0..=KNOWN_BITS).prop_map(ModifierSet::from_bits)
    }

    proptest! {
        #[test]
        fn bitmask_roundtrip_is_idempotent(mods in difficulty_mods()) {
            let display: String = mods.iter().map(Mod::acronym).collect();

            let once = ModifierSet::parse(&display).to_bitmask();
            let twice = ModifierSet::from_bits(once).to_bitmask();

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn display_roundtrip(mods in any_mods()) {
            prop_assert_eq!(ModifierSet::parse(&mods.to_string()), mods.sanitize());
        }

        #[test]
        fn speed_multiplier_by_family(mods in any_mods()) {
            let expected = if mods.contains(Mod::DoubleTime) || mods.contains(Mod::Nightcore) {
                1.5
            } else if mods.contains(Mod::HalfTime) {
                0.75
            } else {
                1.0
            };

            prop_assert!((mods.speed_multiplier() - expected).abs() < f64::EPSILON);
        }
    }
}
