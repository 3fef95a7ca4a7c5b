//! Metadata lookups.
//!
//! The engine never owns game data. It reads species and move metadata
//! through the [`SpeciesMetaLookup`] and [`MoveMetaLookup`] traits and
//! asks [`TypeBonus`] whether a move gets the same-type attack bonus.
//! [`MetaRegistry`] is an in-memory implementation of all three, loadable
//! from a JSON document.

use crate::error::RatingError;
use crate::id::{MoveId, SpeciesId};
use crate::meta::{MoveMeta, SpeciesMeta};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolves a species id to its base stats.
pub trait SpeciesMetaLookup: Send + Sync {
    /// Fails with [`RatingError::SpeciesNotFound`] for unknown ids.
    fn species_meta(&self, species: &SpeciesId) -> Result<SpeciesMeta, RatingError>;
}

/// Resolves a move id to its metadata.
pub trait MoveMetaLookup: Send + Sync {
    /// Fails with [`RatingError::MoveNotFound`] for unknown ids.
    fn move_meta(&self, mv: &MoveId) -> Result<MoveMeta, RatingError>;
}

/// Same-type attack bonus predicate.
pub trait TypeBonus: Send + Sync {
    fn has_type_bonus(&self, species: &SpeciesId, mv: &MoveId) -> bool;
}

impl<T: SpeciesMetaLookup + ?Sized> SpeciesMetaLookup for &T {
    fn species_meta(&self, species: &SpeciesId) -> Result<SpeciesMeta, RatingError> {
        (**self).species_meta(species)
    }
}

impl<T: MoveMetaLookup + ?Sized> MoveMetaLookup for &T {
    fn move_meta(&self, mv: &MoveId) -> Result<MoveMeta, RatingError> {
        (**self).move_meta(mv)
    }
}

impl<T: TypeBonus + ?Sized> TypeBonus for &T {
    fn has_type_bonus(&self, species: &SpeciesId, mv: &MoveId) -> bool {
        (**self).has_type_bonus(species, mv)
    }
}

/// Registry entry for a species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    #[serde(flatten)]
    pub meta: SpeciesMeta,
    /// Elemental types, e.g. `["DRAGON", "FLYING"]`.
    #[serde(default)]
    pub types: Vec<String>,
}

/// Registry entry for a move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(flatten)]
    pub meta: MoveMeta,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub move_type: Option<String>,
}

/// In-memory metadata registry.
///
/// A move gets the same-type attack bonus when its type is one of the
/// species' types. Unknown ids never get the bonus.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::registry::{MetaRegistry, MoveMetaLookup, SpeciesMetaLookup, TypeBonus};
/// use pogo_rating::{MoveMeta, MoveId, SpeciesId, SpeciesMeta};
///
/// let mut registry = MetaRegistry::new();
/// registry.insert_species("CHARMANDER", SpeciesMeta::new(116.0, 93.0, 78.0), ["FIRE"]);
/// registry.insert_move("EMBER_FAST", MoveMeta::new(10.0, 1000, 10), Some("FIRE"));
///
/// let species = SpeciesId::from_str("CHARMANDER");
/// let ember = MoveId::from_str("EMBER_FAST");
/// assert_eq!(registry.species_meta(&species).unwrap().base_attack, 116.0);
/// assert_eq!(registry.move_meta(&ember).unwrap().energy, 10);
/// assert!(registry.has_type_bonus(&species, &ember));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaRegistry {
    #[serde(default)]
    species: HashMap<SpeciesId, SpeciesEntry>,
    #[serde(default)]
    moves: HashMap<MoveId, MoveEntry>,
}

impl MetaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pogo_rating::registry::{MetaRegistry, SpeciesMetaLookup};
    /// use pogo_rating::SpeciesId;
    ///
    /// let registry = MetaRegistry::from_json(r#"{
    ///     "species": {
    ///         "PIKACHU": {"base_attack": 112, "base_defense": 96, "base_stamina": 70, "types": ["ELECTRIC"]}
    ///     },
    ///     "moves": {
    ///         "THUNDER_SHOCK_FAST": {"power": 5, "time_ms": 600, "energy": 8, "type": "ELECTRIC"}
    ///     }
    /// }"#).unwrap();
    ///
    /// let meta = registry.species_meta(&SpeciesId::from_str("PIKACHU")).unwrap();
    /// assert_eq!(meta.base_defense, 96.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RatingError> {
        serde_json::from_str(json).map_err(|e| RatingError::InvalidRegistry(e.to_string()))
    }

    /// Add or replace a species.
    pub fn insert_species<I, S>(
        &mut self,
        species: impl Into<SpeciesId>,
        meta: SpeciesMeta,
        types: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.species.insert(
            species.into(),
            SpeciesEntry {
                meta,
                types: types.into_iter().map(Into::into).collect(),
            },
        );
    }

    /// Add or replace a move.
    pub fn insert_move(&mut self, mv: impl Into<MoveId>, meta: MoveMeta, move_type: Option<&str>) {
        self.moves.insert(
            mv.into(),
            MoveEntry {
                meta,
                move_type: move_type.map(String::from),
            },
        );
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl SpeciesMetaLookup for MetaRegistry {
    fn species_meta(&self, species: &SpeciesId) -> Result<SpeciesMeta, RatingError> {
        self.species
            .get(species)
            .map(|entry| entry.meta)
            .ok_or_else(|| RatingError::SpeciesNotFound(species.clone()))
    }
}

impl MoveMetaLookup for MetaRegistry {
    fn move_meta(&self, mv: &MoveId) -> Result<MoveMeta, RatingError> {
        self.moves
            .get(mv)
            .map(|entry| entry.meta)
            .ok_or_else(|| RatingError::MoveNotFound(mv.clone()))
    }
}

impl TypeBonus for MetaRegistry {
    fn has_type_bonus(&self, species: &SpeciesId, mv: &MoveId) -> bool {
        let (Some(species), Some(mv)) = (self.species.get(species), self.moves.get(mv)) else {
            return false;
        };
        match &mv.move_type {
            Some(move_type) => species.types.iter().any(|t| t == move_type),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MetaRegistry {
        let mut registry = MetaRegistry::new();
        registry.insert_species(
            "DRAGONITE",
            SpeciesMeta::new(263.0, 198.0, 182.0),
            ["DRAGON", "FLYING"],
        );
        registry.insert_move(
            "DRAGON_BREATH_FAST",
            MoveMeta::new(6.0, 500, 4),
            Some("DRAGON"),
        );
        registry.insert_move("HYPER_BEAM", MoveMeta::new(150.0, 3800, -100), Some("NORMAL"));
        registry.insert_move("STRUGGLE", MoveMeta::new(35.0, 2200, -33), None);
        registry
    }

    #[test]
    fn test_lookup_species() {
        let registry = registry();
        let meta = registry
            .species_meta(&SpeciesId::from_str("DRAGONITE"))
            .unwrap();
        assert_eq!(meta, SpeciesMeta::new(263.0, 198.0, 182.0));
    }

    #[test]
    fn test_lookup_missing() {
        let registry = registry();
        assert_eq!(
            registry.species_meta(&SpeciesId::from_str("MEW")),
            Err(RatingError::SpeciesNotFound(SpeciesId::from_str("MEW")))
        );
        assert_eq!(
            registry.move_meta(&MoveId::from_str("SPLASH_FAST")),
            Err(RatingError::MoveNotFound(MoveId::from_str("SPLASH_FAST")))
        );
    }

    #[test]
    fn test_type_bonus() {
        let registry = registry();
        let dragonite = SpeciesId::from_str("DRAGONITE");
        assert!(registry.has_type_bonus(&dragonite, &MoveId::from_str("DRAGON_BREATH_FAST")));
        assert!(!registry.has_type_bonus(&dragonite, &MoveId::from_str("HYPER_BEAM")));
        assert!(!registry.has_type_bonus(&dragonite, &MoveId::from_str("STRUGGLE")));
        assert!(!registry.has_type_bonus(
            &SpeciesId::from_str("MEW"),
            &MoveId::from_str("DRAGON_BREATH_FAST")
        ));
    }

    #[test]
    fn test_lookup_through_reference() {
        fn meta_of(lookup: impl MoveMetaLookup, mv: &str) -> MoveMeta {
            lookup.move_meta(&MoveId::from_str(mv)).unwrap()
        }
        let registry = registry();
        assert_eq!(meta_of(&registry, "HYPER_BEAM").energy, -100);
    }

    #[test]
    fn test_from_json() {
        let registry = MetaRegistry::from_json(
            r#"{
                "species": {"ONIX": {"base_attack": 85, "base_defense": 232, "base_stamina": 111, "types": ["ROCK", "GROUND"]}},
                "moves": {
                    "ROCK_THROW_FAST": {"power": 12, "time_ms": 900, "energy": 7, "type": "ROCK"},
                    "STONE_EDGE": {"power": 100, "time_ms": 2300, "energy": -100, "crit_chance": 0.5, "type": "ROCK"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(registry.species_count(), 1);
        assert_eq!(registry.move_count(), 2);

        let edge = registry.move_meta(&MoveId::from_str("STONE_EDGE")).unwrap();
        assert_eq!(edge.crit_chance, 0.5);
        assert!(registry.has_type_bonus(
            &SpeciesId::from_str("ONIX"),
            &MoveId::from_str("STONE_EDGE")
        ));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = MetaRegistry::from_json(r#"{"species": {"ONIX": {"base_attack": "high"}}}"#)
            .unwrap_err();
        assert!(matches!(err, RatingError::InvalidRegistry(_)));
    }
}
