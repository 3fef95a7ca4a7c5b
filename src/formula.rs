//! Rating formulas over already-resolved metadata.
//!
//! Everything in this module is pure arithmetic on primitive fields: no
//! lookups, no logging, no errors. [`RatingEngine`](crate::RatingEngine)
//! resolves ids to metadata and delegates here, so each formula exists
//! exactly once.
//!
//! Degenerate metadata (zero base stats, a fast move with zero energy)
//! makes these functions divide by zero. The result is `NaN` or an
//! infinity and is returned as is.

use crate::meta::{IndividualStats, MoveMeta, SpeciesMeta};
use crate::summary::WeaveBreakdown;

/// Highest individual value a single stat can roll.
pub const MAX_IV: u8 = 15;

/// Damage multiplier without a same-type attack bonus.
pub const NORMAL_MULTIPLIER: f64 = 1.0;

/// Damage multiplier with a same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.25;

/// Damage bonus from a critical hit. The game currently grants none.
pub const CRIT_DAMAGE_BONUS: f64 = 0.0;

/// Extra delay before a charge move fires.
pub const CHARGE_DELAY_MS: u32 = 500;

/// Delay an AI defender waits between fast moves.
pub const DEFENSE_ADDITIONAL_DELAY_MS: u32 = 2000;

pub const MILLISECONDS_FACTOR: f64 = 1000.0;

/// Length of the simulated weave window.
pub const WEAVE_WINDOW_MS: f64 = 100_000.0;

/// `WEAVE_WINDOW_MS` in seconds.
pub const WEAVE_LENGTH_SECONDS: f64 = 100.0;

/// Energy cost of a full-bar charge move.
pub const MAX_MOVE_ENERGY: u32 = 100;

/// A move together with whether the user gets a same-type bonus for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedMove {
    pub meta: MoveMeta,
    pub stab: bool,
}

impl RatedMove {
    pub fn new(meta: MoveMeta, stab: bool) -> Self {
        Self { meta, stab }
    }

    pub fn multiplier(&self) -> f64 {
        if self.stab {
            STAB_MULTIPLIER
        } else {
            NORMAL_MULTIPLIER
        }
    }
}

/// CP-like product `atk * sqrt(def) * sqrt(sta)`.
fn cp_product(attack: f64, defense: f64, stamina: f64) -> f64 {
    attack * defense.sqrt() * stamina.sqrt()
}

/// Rate how good the individual values of a creature are, in `0.0..=1.0`.
///
/// The simple formula is the IV sum over the best possible sum. The
/// alternative formula places the creature's CP-like product between the
/// worst and the best roll of its species, which weights attack higher.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::formula::iv_rating;
/// use pogo_rating::{IndividualStats, SpeciesMeta};
///
/// let meta = SpeciesMeta::new(180.0, 120.0, 160.0);
/// assert_eq!(iv_rating(&meta, &IndividualStats::perfect(), false), 1.0);
/// assert_eq!(iv_rating(&meta, &IndividualStats::perfect(), true), 1.0);
/// assert_eq!(iv_rating(&meta, &IndividualStats::default(), true), 0.0);
/// ```
pub fn iv_rating(meta: &SpeciesMeta, ivs: &IndividualStats, use_alternative: bool) -> f64 {
    if use_alternative {
        let max_iv = f64::from(MAX_IV);
        let cp_max = cp_product(
            meta.base_attack + max_iv,
            meta.base_defense + max_iv,
            meta.base_stamina + max_iv,
        );
        let cp_min = cp_product(meta.base_attack, meta.base_defense, meta.base_stamina);
        let cp_iv = cp_product(
            meta.base_attack + f64::from(ivs.attack),
            meta.base_defense + f64::from(ivs.defense),
            meta.base_stamina + f64::from(ivs.stamina),
        );
        (cp_iv - cp_min) / (cp_max - cp_min)
    } else {
        f64::from(ivs.sum()) / (3.0 * f64::from(MAX_IV))
    }
}

/// Plain damage per second of one move, used back to back with no weaving.
///
/// The charge move (`primary == false`) pays [`CHARGE_DELAY_MS`] on top of
/// its duration.
pub fn move_dps(mv: &RatedMove, primary: bool) -> f64 {
    let delay = if primary { 0 } else { CHARGE_DELAY_MS };
    let duration = f64::from(mv.meta.time_ms) + f64::from(delay);
    let dps = mv.meta.power / duration * MILLISECONDS_FACTOR;
    dps * mv.multiplier()
}

/// Effective stamina times effective defense.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::formula::tankiness;
/// use pogo_rating::SpeciesMeta;
///
/// let meta = SpeciesMeta::new(0.0, 100.0, 100.0);
/// assert_eq!(tankiness(&meta, 0, 0), 10_000);
/// assert_eq!(tankiness(&meta, 15, 15), 13_225);
/// ```
pub fn tankiness(meta: &SpeciesMeta, defense_iv: u8, stamina_iv: u8) -> i64 {
    round_rating(
        (meta.base_stamina + f64::from(stamina_iv)) * (meta.base_defense + f64::from(defense_iv)),
    )
}

/// Fast move uses needed to afford one charge move.
///
/// Full-bar charge moves (energy cost exactly [`MAX_MOVE_ENERGY`]) round
/// the quotient up. Every other cost keeps the fractional ratio.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::formula::energy_ratio;
/// use pogo_rating::MoveMeta;
///
/// let fast = MoveMeta::new(10.0, 1000, 33);
/// assert_eq!(energy_ratio(&fast, &MoveMeta::new(100.0, 3000, -100)), 4.0);
/// assert_eq!(energy_ratio(&fast, &MoveMeta::new(50.0, 2000, -66)), 2.0);
/// ```
pub fn energy_ratio(fast: &MoveMeta, charge: &MoveMeta) -> f64 {
    let cost = charge.energy.unsigned_abs();
    let ratio = f64::from(cost) / f64::from(fast.energy);
    if cost == MAX_MOVE_ENERGY {
        ratio.ceil()
    } else {
        ratio
    }
}

/// Damage over [`WEAVE_WINDOW_MS`] when alternating fast and charge moves.
///
/// The creature uses its fast move until it can afford the charge move,
/// fires the charge move immediately and repeats. Whole cycles are
/// counted first; the time left over is filled with extra fast moves.
/// `additional_delay_ms` is added to every fast move: 0 for an attacker,
/// [`DEFENSE_ADDITIONAL_DELAY_MS`] for an AI defender.
///
/// The floor and ceiling placement follows the community weave
/// spreadsheet and does not simplify algebraically.
pub fn weave(fast: &RatedMove, charge: &RatedMove, additional_delay_ms: u32) -> WeaveBreakdown {
    let energy_ratio = energy_ratio(&fast.meta, &charge.meta);
    // Summed in f64: registry times may sit near u32::MAX
    let fast_time = f64::from(fast.meta.time_ms) + f64::from(additional_delay_ms);
    let charge_time = f64::from(charge.meta.time_ms) + f64::from(CHARGE_DELAY_MS);

    let cycle_length_ms = energy_ratio * fast_time
        + f64::from(charge.meta.time_ms)
        + f64::from(CHARGE_DELAY_MS);
    let cycles = (WEAVE_WINDOW_MS / cycle_length_ms).floor();
    let fast_hits = (cycles * energy_ratio).ceil();
    let remainder_ms = WEAVE_WINDOW_MS - (cycles * charge_time + fast_hits * fast_time);
    let extra_fast_hits = (remainder_ms / fast_time).floor();

    let charge_damage = charge.meta.power
        * charge.multiplier()
        * (1.0 + CRIT_DAMAGE_BONUS * charge.meta.crit_chance);
    let fast_damage = fast.meta.power * fast.multiplier();

    let total_damage =
        cycles * charge_damage + fast_hits * fast_damage + extra_fast_hits * fast_damage;

    WeaveBreakdown {
        energy_ratio,
        cycle_length_ms,
        cycles,
        fast_hits,
        remainder_ms,
        extra_fast_hits,
        charge_damage,
        fast_damage,
        total_damage,
    }
}

/// Better of fast-move spam and weaving over the window, scaled by attack.
pub fn gym_offense(
    meta: &SpeciesMeta,
    fast: &RatedMove,
    charge: &RatedMove,
    attack_iv: u8,
) -> f64 {
    let no_weave = move_dps(fast, true) * WEAVE_LENGTH_SECONDS;
    let weave_damage = weave(fast, charge, 0).total_damage;
    // f64::max drops NaN; a broken weave must poison the rating instead
    let best = if no_weave.is_nan() || weave_damage.is_nan() {
        f64::NAN
    } else {
        no_weave.max(weave_damage)
    };
    best * (meta.base_attack + f64::from(attack_iv))
}

/// Weave damage of an AI defender, scaled by attack and tankiness.
pub fn gym_defense(
    meta: &SpeciesMeta,
    fast: &RatedMove,
    charge: &RatedMove,
    ivs: &IndividualStats,
) -> i64 {
    let weave_damage = weave(fast, charge, DEFENSE_ADDITIONAL_DELAY_MS).total_damage;
    round_rating(
        weave_damage
            * (meta.base_attack + f64::from(ivs.attack))
            * tankiness(meta, ivs.defense, ivs.stamina) as f64,
    )
}

/// Gym offense times tankiness.
pub fn duel_ability(
    meta: &SpeciesMeta,
    fast: &RatedMove,
    charge: &RatedMove,
    ivs: &IndividualStats,
) -> i64 {
    round_rating(
        gym_offense(meta, fast, charge, ivs.attack)
            * tankiness(meta, ivs.defense, ivs.stamina) as f64,
    )
}

/// Round half up, `floor(value + 0.5)`, so `-2.5` becomes `-2`.
///
/// `NaN` becomes 0 and infinities saturate.
pub fn round_rating(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
