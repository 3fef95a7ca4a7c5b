//! # pogo-rating - Deterministic Pokémon GO Rating Engine
//!
//! Computes scalar ratings used to rank caught creatures:
//! - **IV Rating**: how good the individual stat rolls are
//! - **Tankiness**: effective stamina times effective defense
//! - **Weave DPS**: damage over a 100 second fast/charge move cycle
//! - **Gym Offense**, **Gym Defense** and **Duel Ability**: compositions of the above
//!
//! ## Core Concepts
//!
//! ```text
//! [SpeciesId, MoveSet, IVs] → [Registry lookups] → [formula] → rating
//! ```
//!
//! 1. **Registries** resolve ids to species and move metadata
//! 2. **Formulas** are pure arithmetic over the resolved metadata
//! 3. **RatingEngine** glues the two and offers every rating for both
//!    primitive fields and a whole [`Pokemon`]
//!
//! Nothing is cached and nothing is mutated. Degenerate metadata yields
//! non-finite ratings instead of errors; check with
//! [`RatingSummary::is_rateable`] or `f64::is_finite`.
//!
//! ## Weave cycle
//!
//! The weave model alternates fast moves (which generate energy) with a
//! charge move fired as soon as it is affordable, over a fixed window of
//! [`formula::WEAVE_WINDOW_MS`]. The result is total damage over that
//! window even though the rating is called "DPS".
//!
//! ## Example
//!
//! ```rust
//! use pogo_rating::registry::MetaRegistry;
//! use pogo_rating::*;
//!
//! let mut registry = MetaRegistry::new();
//! registry.insert_species("SPECIMEN", SpeciesMeta::new(180.0, 120.0, 160.0), ["NORMAL"]);
//! registry.insert_move("FAST", MoveMeta::new(12.0, 500, 15), None);
//! registry.insert_move("CHARGE", MoveMeta::new(100.0, 2100, -100), None);
//!
//! let engine = RatingEngine::new(&registry, RatingConfig::default());
//! let pokemon = Pokemon::new(
//!     "SPECIMEN",
//!     MoveSet::new("FAST", "CHARGE"),
//!     IndividualStats::new(0, 0, 0),
//! );
//!
//! let summary = engine.summarize(&pokemon).unwrap();
//! assert_eq!(summary.weave_offense, 2992.0);
//! assert_eq!(summary.tankiness, 19_200);
//! assert_eq!(summary.duel_ability, 2992 * 180 * 19_200);
//! ```
//!
//! ## Modules
//!
//! - [`id`] - Species and move identifiers
//! - [`meta`] - Metadata and individual value types
//! - [`registry`] - Metadata lookup traits and an in-memory registry
//! - [`formula`] - Pure rating formulas and game constants
//! - [`engine`] - The rating engine
//! - [`summary`] - Weave breakdown and rating summary
//! - [`config`] - Engine configuration
//! - [`error`] - Error types

pub mod config;
pub mod engine;
pub mod error;
pub mod formula;
pub mod id;
pub mod meta;
pub mod registry;
pub mod summary;

// Re-export main types for convenience
pub use config::RatingConfig;
pub use engine::RatingEngine;
pub use error::RatingError;
pub use id::{MoveId, SpeciesId};
pub use meta::{IndividualStats, MoveMeta, MoveSet, Pokemon, SpeciesMeta};
pub use summary::{RatingSummary, WeaveBreakdown};

// Re-export lookup traits and game constants
pub use formula::{
    RatedMove, CHARGE_DELAY_MS, CRIT_DAMAGE_BONUS, DEFENSE_ADDITIONAL_DELAY_MS, MAX_IV,
    MAX_MOVE_ENERGY, MILLISECONDS_FACTOR, NORMAL_MULTIPLIER, STAB_MULTIPLIER, WEAVE_LENGTH_SECONDS,
    WEAVE_WINDOW_MS,
};
pub use registry::{MetaRegistry, MoveMetaLookup, SpeciesMetaLookup, TypeBonus};
