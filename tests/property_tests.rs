//! Property tests for the rating formulas.

use pogo_rating::formula::{iv_rating, tankiness, weave};
use pogo_rating::*;
use proptest::prelude::*;

// Relative slack for float rounding in otherwise exact comparisons
const TOLERANCE: f64 = 1e-12;

fn fast_move() -> impl Strategy<Value = MoveMeta> {
    (0.0..50.0f64, 300u32..2500, 1i32..20).prop_map(|(power, time, energy)| {
        MoveMeta::new(power, time, energy)
    })
}

fn charge_move() -> impl Strategy<Value = MoveMeta> {
    (
        0.0..200.0f64,
        1000u32..5000,
        prop_oneof![Just(-100i32), Just(-50i32), Just(-33i32), -100i32..-20],
        0.0..=1.0f64,
    )
        .prop_map(|(power, time, energy, crit)| {
            MoveMeta::new(power, time, energy).with_crit_chance(crit)
        })
}

fn species() -> impl Strategy<Value = SpeciesMeta> {
    (40.0..300.0f64, 40.0..300.0f64, 40.0..300.0f64)
        .prop_map(|(atk, def, sta)| SpeciesMeta::new(atk, def, sta))
}

fn ivs() -> impl Strategy<Value = IndividualStats> {
    (0..=MAX_IV, 0..=MAX_IV, 0..=MAX_IV)
        .prop_map(|(atk, def, sta)| IndividualStats::new(atk, def, sta))
}

proptest! {
    #[test]
    fn weave_non_decreasing_in_fast_power(
        fast in fast_move(),
        charge in charge_move(),
        extra in 0.0..50.0f64,
        fast_stab: bool,
        charge_stab: bool,
    ) {
        let weaker = RatedMove::new(fast, fast_stab);
        let stronger = RatedMove::new(MoveMeta { power: fast.power + extra, ..fast }, fast_stab);
        let charge = RatedMove::new(charge, charge_stab);

        let low = weave(&weaker, &charge, 0).total_damage;
        let high = weave(&stronger, &charge, 0).total_damage;
        prop_assert!(high >= low - TOLERANCE * low.abs().max(1.0), "{} < {}", high, low);
    }

    #[test]
    fn weave_non_decreasing_in_charge_power(
        fast in fast_move(),
        charge in charge_move(),
        extra in 0.0..100.0f64,
    ) {
        let fast = RatedMove::new(fast, false);
        let weaker = RatedMove::new(charge, false);
        let stronger = RatedMove::new(MoveMeta { power: charge.power + extra, ..charge }, false);

        let low = weave(&fast, &weaker, 0).total_damage;
        let high = weave(&fast, &stronger, 0).total_damage;
        prop_assert!(high >= low - TOLERANCE * low.abs().max(1.0), "{} < {}", high, low);
    }

    #[test]
    fn weave_is_never_negative_for_valid_movesets(
        fast in fast_move(),
        charge in charge_move(),
        defending: bool,
    ) {
        let delay = if defending { DEFENSE_ADDITIONAL_DELAY_MS } else { 0 };
        let breakdown = weave(&RatedMove::new(fast, false), &RatedMove::new(charge, false), delay);
        prop_assert!(breakdown.total_damage >= 0.0);
    }

    #[test]
    fn simple_iv_rating_depends_only_on_sum(meta in species(), a in ivs(), b in ivs()) {
        let ra = iv_rating(&meta, &a, false);
        let rb = iv_rating(&meta, &b, false);
        let expected = (f64::from(a.sum()) - f64::from(b.sum())) / (3.0 * f64::from(MAX_IV));
        prop_assert!((ra - rb - expected).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ra));
    }

    #[test]
    fn alternative_iv_rating_stays_in_range(meta in species(), stats in ivs()) {
        let rating = iv_rating(&meta, &stats, true);
        prop_assert!((0.0..=1.0).contains(&rating), "rating {}", rating);
    }

    #[test]
    fn tankiness_grows_with_ivs(meta in species(), stats in ivs()) {
        prop_assert!(
            tankiness(&meta, stats.defense, stats.stamina) >= tankiness(&meta, 0, 0)
        );
    }
}
