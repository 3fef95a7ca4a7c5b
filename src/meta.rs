//! Metadata and individual value types.
//!
//! `SpeciesMeta` and `MoveMeta` are fixed game constants supplied by a
//! registry. `IndividualStats`, `MoveSet` and `Pokemon` describe one
//! caught creature. All of them are plain values; nothing here is cached
//! or owned by the engine.

use crate::formula::MAX_IV;
use crate::id::{MoveId, SpeciesId};
use serde::{Deserialize, Serialize};

/// Base statistics of a species.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::SpeciesMeta;
///
/// let meta = SpeciesMeta::new(180.0, 120.0, 160.0);
/// assert_eq!(meta.base_stamina, 160.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeciesMeta {
    pub base_attack: f64,
    pub base_defense: f64,
    pub base_stamina: f64,
}

impl SpeciesMeta {
    pub fn new(base_attack: f64, base_defense: f64, base_stamina: f64) -> Self {
        Self {
            base_attack,
            base_defense,
            base_stamina,
        }
    }
}

/// Metadata of a single move.
///
/// `energy` is positive for fast moves (they generate energy) and
/// negative for charge moves (they consume it). Its magnitude never
/// exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveMeta {
    pub power: f64,
    /// Duration of the move in milliseconds.
    pub time_ms: u32,
    pub energy: i32,
    #[serde(default)]
    pub crit_chance: f64,
}

impl MoveMeta {
    /// Create move metadata with no critical hit chance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pogo_rating::MoveMeta;
    ///
    /// let fast = MoveMeta::new(12.0, 500, 15);
    /// assert!(fast.is_fast());
    /// assert!(!MoveMeta::new(100.0, 2100, -100).is_fast());
    /// ```
    pub fn new(power: f64, time_ms: u32, energy: i32) -> Self {
        Self {
            power,
            time_ms,
            energy,
            crit_chance: 0.0,
        }
    }

    pub fn with_crit_chance(mut self, crit_chance: f64) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    /// Whether this move generates energy.
    pub fn is_fast(&self) -> bool {
        self.energy > 0
    }
}

/// Individual values (IVs) of one creature, each in `0..=MAX_IV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IndividualStats {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

impl IndividualStats {
    pub fn new(attack: u8, defense: u8, stamina: u8) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }

    /// The best possible roll.
    pub fn perfect() -> Self {
        Self::new(MAX_IV, MAX_IV, MAX_IV)
    }

    pub fn sum(&self) -> u32 {
        u32::from(self.attack) + u32::from(self.defense) + u32::from(self.stamina)
    }
}

/// A fast move paired with a charge move.
///
/// The order matters: `fast` is move 1, `charge` is move 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSet {
    pub fast: MoveId,
    pub charge: MoveId,
}

impl MoveSet {
    pub fn new(fast: impl Into<MoveId>, charge: impl Into<MoveId>) -> Self {
        Self {
            fast: fast.into(),
            charge: charge.into(),
        }
    }

    /// Move 1 when `primary`, move 2 otherwise.
    pub fn get(&self, primary: bool) -> &MoveId {
        if primary {
            &self.fast
        } else {
            &self.charge
        }
    }
}

/// A caught creature: species, move set and individual values.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::{IndividualStats, MoveSet, Pokemon};
///
/// let p = Pokemon::new(
///     "DRAGONITE",
///     MoveSet::new("DRAGON_BREATH_FAST", "OUTRAGE"),
///     IndividualStats::new(15, 14, 13),
/// );
/// assert_eq!(p.species.as_str(), "DRAGONITE");
/// assert_eq!(p.ivs.sum(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    pub species: SpeciesId,
    pub moves: MoveSet,
    pub ivs: IndividualStats,
}

impl Pokemon {
    pub fn new(species: impl Into<SpeciesId>, moves: MoveSet, ivs: IndividualStats) -> Self {
        Self {
            species: species.into(),
            moves,
            ivs,
        }
    }
}
