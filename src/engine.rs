//! Rating engine module.
//!
//! Provides [`RatingEngine`], the main entry point. It resolves species
//! and move ids through its registry, then hands the metadata to the
//! formulas in [`crate::formula`].
//!
//! Every rating comes in two call shapes: one taking primitive fields
//! (species id, move ids, IV integers) and an `_of` adapter taking a
//! [`Pokemon`]. Adapters only extract fields.

use crate::config::RatingConfig;
use crate::error::RatingError;
use crate::formula::{self, RatedMove, DEFENSE_ADDITIONAL_DELAY_MS};
use crate::id::{MoveId, SpeciesId};
use crate::meta::{IndividualStats, Pokemon, SpeciesMeta};
use crate::registry::{MoveMetaLookup, SpeciesMetaLookup, TypeBonus};
use crate::summary::{RatingSummary, WeaveBreakdown};
use tracing::{debug, trace};

/// Rates creatures against a metadata registry.
///
/// The engine holds no mutable state. Sharing one between threads only
/// requires the registry to be `Sync`, which the lookup traits demand.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::registry::MetaRegistry;
/// use pogo_rating::*;
///
/// let mut registry = MetaRegistry::new();
/// registry.insert_species("SPECIMEN", SpeciesMeta::new(180.0, 120.0, 160.0), ["NORMAL"]);
/// registry.insert_move("FAST", MoveMeta::new(12.0, 500, 15), Some("WATER"));
/// registry.insert_move("CHARGE", MoveMeta::new(100.0, 2100, -100), Some("FIRE"));
///
/// let engine = RatingEngine::new(&registry, RatingConfig::default());
/// let species = SpeciesId::from_str("SPECIMEN");
/// let fast = MoveId::from_str("FAST");
/// let charge = MoveId::from_str("CHARGE");
///
/// let damage = engine.weave_dps(&species, &fast, &charge, 0).unwrap();
/// assert_eq!(damage, 2992.0);
/// assert_eq!(engine.tankiness(&species, 0, 0).unwrap(), 19_200);
/// ```
#[derive(Debug, Clone)]
pub struct RatingEngine<R> {
    registry: R,
    config: RatingConfig,
}

impl<R> RatingEngine<R>
where
    R: SpeciesMetaLookup + MoveMetaLookup + TypeBonus,
{
    /// Create a new engine over a registry.
    pub fn new(registry: R, config: RatingConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Rate the individual values of a creature, in `0.0..=1.0`.
    ///
    /// The formula is chosen by
    /// [`RatingConfig::alternative_iv_calculation_enabled`].
    pub fn iv_rating(
        &self,
        species: &SpeciesId,
        ivs: &IndividualStats,
    ) -> Result<f64, RatingError> {
        let meta = self.registry.species_meta(species)?;
        let rating = formula::iv_rating(
            &meta,
            ivs,
            self.config.alternative_iv_calculation_enabled(),
        );
        debug!(species = %species, rating, "iv rating");
        Ok(check_finite("iv_rating", species, rating))
    }

    pub fn iv_rating_of(&self, pokemon: &Pokemon) -> Result<f64, RatingError> {
        self.iv_rating(&pokemon.species, &pokemon.ivs)
    }

    /// Damage per second of one move used back to back.
    ///
    /// `primary` marks the fast move; the charge move pays the charge
    /// delay on top of its duration.
    pub fn dps_for_move(
        &self,
        species: &SpeciesId,
        mv: &MoveId,
        primary: bool,
    ) -> Result<f64, RatingError> {
        let rated = self.rated_move(species, mv)?;
        Ok(formula::move_dps(&rated, primary))
    }

    /// Damage per second of the creature's fast (`primary`) or charge move.
    pub fn dps_for_move_of(&self, pokemon: &Pokemon, primary: bool) -> Result<f64, RatingError> {
        self.dps_for_move(&pokemon.species, pokemon.moves.get(primary), primary)
    }

    /// Effective stamina times effective defense.
    pub fn tankiness(
        &self,
        species: &SpeciesId,
        defense_iv: u8,
        stamina_iv: u8,
    ) -> Result<i64, RatingError> {
        let meta = self.registry.species_meta(species)?;
        Ok(formula::tankiness(&meta, defense_iv, stamina_iv))
    }

    pub fn tankiness_of(&self, pokemon: &Pokemon) -> Result<i64, RatingError> {
        self.tankiness(&pokemon.species, pokemon.ivs.defense, pokemon.ivs.stamina)
    }

    /// Every intermediate value of a weave evaluation.
    pub fn weave_breakdown(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
        additional_delay_ms: u32,
    ) -> Result<WeaveBreakdown, RatingError> {
        let (fast, charge) = self.rated_moves(species, move1, move2)?;
        let breakdown = formula::weave(&fast, &charge, additional_delay_ms);
        trace!(species = %species, additional_delay_ms, ?breakdown, "weave cycle");
        Ok(breakdown)
    }

    /// Damage over the 100 second weave window.
    ///
    /// Despite the name this is a window total, not a rate. Ratings only
    /// ever compare windows of the same length.
    pub fn weave_dps(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
        additional_delay_ms: u32,
    ) -> Result<f64, RatingError> {
        let damage = self
            .weave_breakdown(species, move1, move2, additional_delay_ms)?
            .total_damage;
        Ok(check_finite("weave_dps", species, damage))
    }

    pub fn weave_dps_of(
        &self,
        pokemon: &Pokemon,
        additional_delay_ms: u32,
    ) -> Result<f64, RatingError> {
        self.weave_dps(
            &pokemon.species,
            &pokemon.moves.fast,
            &pokemon.moves.charge,
            additional_delay_ms,
        )
    }

    /// Pure damage output over the window, scaled by effective attack.
    pub fn gym_offense(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
        attack_iv: u8,
    ) -> Result<f64, RatingError> {
        let meta = self.registry.species_meta(species)?;
        let (fast, charge) = self.rated_moves(species, move1, move2)?;
        let offense = formula::gym_offense(&meta, &fast, &charge, attack_iv);
        debug!(species = %species, offense, "gym offense");
        Ok(check_finite("gym_offense", species, offense))
    }

    pub fn gym_offense_of(&self, pokemon: &Pokemon) -> Result<f64, RatingError> {
        self.gym_offense(
            &pokemon.species,
            &pokemon.moves.fast,
            &pokemon.moves.charge,
            pokemon.ivs.attack,
        )
    }

    /// AI-controlled defense output over the window, scaled by tankiness.
    pub fn gym_defense(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
        attack_iv: u8,
        defense_iv: u8,
        stamina_iv: u8,
    ) -> Result<i64, RatingError> {
        let meta = self.registry.species_meta(species)?;
        let (fast, charge) = self.rated_moves(species, move1, move2)?;
        let ivs = IndividualStats::new(attack_iv, defense_iv, stamina_iv);
        let defense = formula::gym_defense(&meta, &fast, &charge, &ivs);
        debug!(species = %species, defense, "gym defense");
        Ok(defense)
    }

    pub fn gym_defense_of(&self, pokemon: &Pokemon) -> Result<i64, RatingError> {
        self.gym_defense(
            &pokemon.species,
            &pokemon.moves.fast,
            &pokemon.moves.charge,
            pokemon.ivs.attack,
            pokemon.ivs.defense,
            pokemon.ivs.stamina,
        )
    }

    /// Gym offense times tankiness: how much damage the creature deals
    /// before fainting when it never dodges.
    pub fn duel_ability(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
        attack_iv: u8,
        defense_iv: u8,
        stamina_iv: u8,
    ) -> Result<i64, RatingError> {
        let meta = self.registry.species_meta(species)?;
        let (fast, charge) = self.rated_moves(species, move1, move2)?;
        let ivs = IndividualStats::new(attack_iv, defense_iv, stamina_iv);
        let ability = formula::duel_ability(&meta, &fast, &charge, &ivs);
        debug!(species = %species, ability, "duel ability");
        Ok(ability)
    }

    pub fn duel_ability_of(&self, pokemon: &Pokemon) -> Result<i64, RatingError> {
        self.duel_ability(
            &pokemon.species,
            &pokemon.moves.fast,
            &pokemon.moves.charge,
            pokemon.ivs.attack,
            pokemon.ivs.defense,
            pokemon.ivs.stamina,
        )
    }

    /// Compute every rating of a creature with a single set of lookups.
    pub fn summarize(&self, pokemon: &Pokemon) -> Result<RatingSummary, RatingError> {
        let species = &pokemon.species;
        let meta: SpeciesMeta = self.registry.species_meta(species)?;
        let (fast, charge) = self.rated_moves(species, &pokemon.moves.fast, &pokemon.moves.charge)?;
        let ivs = &pokemon.ivs;

        let summary = RatingSummary {
            species: species.clone(),
            iv_rating: formula::iv_rating(
                &meta,
                ivs,
                self.config.alternative_iv_calculation_enabled(),
            ),
            tankiness: formula::tankiness(&meta, ivs.defense, ivs.stamina),
            weave_offense: formula::weave(&fast, &charge, 0).total_damage,
            weave_defense: formula::weave(&fast, &charge, DEFENSE_ADDITIONAL_DELAY_MS)
                .total_damage,
            gym_offense: formula::gym_offense(&meta, &fast, &charge, ivs.attack),
            gym_defense: formula::gym_defense(&meta, &fast, &charge, ivs),
            duel_ability: formula::duel_ability(&meta, &fast, &charge, ivs),
        };
        if !summary.is_rateable() {
            debug!(species = %species, "summary contains non-finite ratings");
        }
        Ok(summary)
    }

    fn rated_move(&self, species: &SpeciesId, mv: &MoveId) -> Result<RatedMove, RatingError> {
        let meta = self.registry.move_meta(mv)?;
        Ok(RatedMove::new(meta, self.registry.has_type_bonus(species, mv)))
    }

    fn rated_moves(
        &self,
        species: &SpeciesId,
        move1: &MoveId,
        move2: &MoveId,
    ) -> Result<(RatedMove, RatedMove), RatingError> {
        Ok((self.rated_move(species, move1)?, self.rated_move(species, move2)?))
    }
}

fn check_finite(rating: &str, species: &SpeciesId, value: f64) -> f64 {
    if !value.is_finite() {
        debug!(rating, species = %species, value, "rating is not finite");
    }
    value
}
