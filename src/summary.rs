//! Rating results with breakdown information.
//!
//! `WeaveBreakdown` exposes every intermediate value of one weave
//! evaluation, so a surprising rating can be traced back to the cycle
//! arithmetic. `RatingSummary` bundles every rating of one creature.

use crate::id::SpeciesId;
use serde::{Deserialize, Serialize};

/// Intermediate values of one weave evaluation.
///
/// All counts are kept as `f64` because they come out of floor/ceiling
/// steps and degenerate metadata may make them non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaveBreakdown {
    /// Fast move uses per charge move.
    pub energy_ratio: f64,

    /// Length of one fast-then-charge cycle.
    pub cycle_length_ms: f64,

    /// Whole cycles fitting in the window.
    pub cycles: f64,

    /// Fast moves used inside the whole cycles.
    pub fast_hits: f64,

    /// Window time left after the whole cycles.
    pub remainder_ms: f64,

    /// Fast moves squeezed into the remainder.
    pub extra_fast_hits: f64,

    /// Damage of one charge move, bonuses included.
    pub charge_damage: f64,

    /// Damage of one fast move, bonuses included.
    pub fast_damage: f64,

    /// Damage dealt over the whole window.
    pub total_damage: f64,
}

impl WeaveBreakdown {
    /// Charge moves fired during the window.
    pub fn charge_hits(&self) -> f64 {
        self.cycles
    }

    /// Fast moves used during the window, remainder included.
    pub fn total_fast_hits(&self) -> f64 {
        self.fast_hits + self.extra_fast_hits
    }
}

/// Every rating of one creature.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::{RatingSummary, SpeciesId};
///
/// let mut summary = RatingSummary::new(SpeciesId::from_str("SNORLAX"));
/// summary.iv_rating = 0.8;
/// assert!(summary.is_rateable());
///
/// summary.gym_offense = f64::NAN;
/// assert!(!summary.is_rateable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub species: SpeciesId,
    pub iv_rating: f64,
    pub tankiness: i64,
    /// Weave damage over the window as an attacker.
    pub weave_offense: f64,
    /// Weave damage over the window as an AI defender.
    pub weave_defense: f64,
    pub gym_offense: f64,
    pub gym_defense: i64,
    pub duel_ability: i64,
}

impl RatingSummary {
    /// Create a summary with all ratings zeroed.
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            iv_rating: 0.0,
            tankiness: 0,
            weave_offense: 0.0,
            weave_defense: 0.0,
            gym_offense: 0.0,
            gym_defense: 0,
            duel_ability: 0,
        }
    }

    /// Whether every floating-point rating is finite.
    ///
    /// Degenerate metadata makes the formulas divide by zero. Callers
    /// should show such creatures as unrateable instead of sorting them.
    ///
    /// The integer ratings cannot carry `NaN`: `gym_defense` and
    /// `duel_ability` are rounded from `weave_defense` and `gym_offense`,
    /// so a `NaN` there shows up as 0. They are only meaningful when this
    /// returns `true`. `tankiness` depends on base stats alone.
    pub fn is_rateable(&self) -> bool {
        [
            self.iv_rating,
            self.weave_offense,
            self.weave_defense,
            self.gym_offense,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
