//! Rank a small collection by duel ability.
//!
//! This example demonstrates:
//! - Loading metadata from a JSON registry document
//! - Rating whole creatures with `RatingEngine::summarize`
//! - Filtering out unrateable creatures before sorting

use pogo_rating::*;

const REGISTRY: &str = r#"{
    "species": {
        "DRAGONITE": {"base_attack": 263, "base_defense": 198, "base_stamina": 182, "types": ["DRAGON", "FLYING"]},
        "SNORLAX": {"base_attack": 190, "base_defense": 169, "base_stamina": 320, "types": ["NORMAL"]},
        "VAPOREON": {"base_attack": 205, "base_defense": 177, "base_stamina": 260, "types": ["WATER"]}
    },
    "moves": {
        "DRAGON_BREATH_FAST": {"power": 6, "time_ms": 500, "energy": 4, "type": "DRAGON"},
        "LICK_FAST": {"power": 5, "time_ms": 500, "energy": 6, "type": "GHOST"},
        "WATER_GUN_FAST": {"power": 5, "time_ms": 500, "energy": 5, "type": "WATER"},
        "OUTRAGE": {"power": 110, "time_ms": 3900, "energy": -50, "type": "DRAGON"},
        "HYPER_BEAM": {"power": 150, "time_ms": 3800, "energy": -100, "type": "NORMAL"},
        "HYDRO_PUMP": {"power": 130, "time_ms": 3300, "energy": -100, "crit_chance": 0.05, "type": "WATER"}
    }
}"#;

fn main() -> Result<(), RatingError> {
    let registry = MetaRegistry::from_json(REGISTRY)?;
    let config = RatingConfig::new().with_alternative_iv_calculation(true);
    let engine = RatingEngine::new(registry, config);

    let collection = vec![
        Pokemon::new(
            "DRAGONITE",
            MoveSet::new("DRAGON_BREATH_FAST", "OUTRAGE"),
            IndividualStats::new(15, 12, 14),
        ),
        Pokemon::new(
            "SNORLAX",
            MoveSet::new("LICK_FAST", "HYPER_BEAM"),
            IndividualStats::new(10, 15, 15),
        ),
        Pokemon::new(
            "VAPOREON",
            MoveSet::new("WATER_GUN_FAST", "HYDRO_PUMP"),
            IndividualStats::new(8, 3, 11),
        ),
    ];

    let mut summaries = collection
        .iter()
        .map(|pokemon| engine.summarize(pokemon))
        .collect::<Result<Vec<_>, _>>()?;
    summaries.retain(RatingSummary::is_rateable);
    summaries.sort_by(|a, b| b.duel_ability.cmp(&a.duel_ability));

    println!("=== Ranked by Duel Ability ===");
    for summary in &summaries {
        println!(
            "{:<10} IV {:>5.1}%  duel {:>14}  gym off {:>12.0}  gym def {:>14}",
            summary.species.as_str(),
            summary.iv_rating * 100.0,
            summary.duel_ability,
            summary.gym_offense,
            summary.gym_defense,
        );
    }

    Ok(())
}
