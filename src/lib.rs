//! Difficulty, strain and play statistics for osu! beatmaps.
//!
//! The crate turns a parsed beatmap and a set of mods into a
//! [`BeatmapStatistics`] snapshot (adjusted AR/OD/CS/HP, bpm, strain timeline,
//! star ratings, leaderboard) and combines a [`Play`] with such a snapshot
//! into a [`PlayReport`] (completion, placements, full-combo comparison).
//!
//! Everything that talks to the outside world is injected through the
//! traits in [`api`]: [`OsuApi`] for profiles, scores and metadata,
//! [`BeatmapSource`] for raw beatmaps and [`PerformanceCalculator`] for the
//! actual pp model.
//!
//! ## Usage
//!
//! ```
//! use osu_stats::{model::hit_object::HitObject, ModifierSet, StrainTimeline};
//!
//! let objects = vec![
//!     HitObject::circle(0.0, [0.5, 1.0].into()),
//!     HitObject::circle(500.0, [0.5, 2.0].into()),
//!     HitObject::circle(1000.0, [0.5, 1.5].into()),
//! ];
//!
//! let mods: ModifierSet = "HDDT".parse().unwrap();
//! let timeline = StrainTimeline::calculate(&objects, &mods).unwrap();
//!
//! println!("Stars: {:.2}", timeline.stars().total);
//! ```
//!
//! The pure building blocks ([`ModifierSet`], [`difficulty::adjust`],
//! [`StrainTimeline`]) can be used on their own without any collaborator.
//!
//! ## Features
//!
//! | Flag | Description |
//! | - | - |
//! | `default` | No features enabled |
//! | `tracing` | Forwards `rosu-map`'s tracing output when converting parsed `.osu` files |

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::uninlined_format_args)]

#[doc(inline)]
pub use self::{
    api::{BeatmapSource, Collaborators, OsuApi, PerformanceCalculator},
    config::{ApiConfig, Config, EngineConfig},
    difficulty::{DifficultyParameters, RawDifficulty},
    error::{Error, MapError, Result, UserError},
    model::{beatmap::RawBeatmap, mods::ModifierSet, play::Play},
    report::PlayReport,
    stats::BeatmapStatistics,
    strains::StrainTimeline,
};

/// Collaborator contracts and response decoding.
pub mod api;

/// Configuration of the API client and engine limits.
pub mod config;

/// Modifier-adjusted difficulty values.
pub mod difficulty;

/// Error types.
pub mod error;

/// Beatmap, play, user, and mod types.
pub mod model;

/// Play reports.
pub mod report;

/// Beatmap statistics snapshots.
pub mod stats;

/// Strain timelines and star ratings.
pub mod strains;

mod util;
