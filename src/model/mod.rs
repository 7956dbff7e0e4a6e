/// Raw beatmap data as handed over by the parser.
pub mod beatmap;

/// Letter grades of plays.
pub mod grade;

/// Hit objects with their precomputed strain contributions.
pub mod hit_object;

/// Resolving beatmap links and ids.
pub mod link;

/// Web metadata of beatmaps and their ranked status.
pub mod metadata;

/// Mods and their legacy bitflags.
pub mod mods;

/// Scored attempts on a beatmap.
pub mod play;

/// Player identities and profiles.
pub mod user;
