use super::random::RandomSource;
use crate::catalog::{EventCatalog, Location};
use crate::id::IdGenerator;
use crate::model::{Opportunity, SimDate};

/// Half-open ranges rolled for each generated opportunity.
const COST_RANGE: (i64, i64) = (500, 2_500);
const POTENTIAL_REVENUE_RANGE: (i64, i64) = (1_000, 6_000);
const REPUTATION_GAIN_RANGE: (i64, i64) = (5, 15);
const DURATION_DAYS_RANGE: (i64, i64) = (1, 8);

/// Roll an offer for each of the location's events, each independently with
/// probability `chance`.
pub fn generate_opportunities(
    location: &Location,
    events: &EventCatalog,
    chance: f64,
    rng: &mut dyn RandomSource,
    id_gen: &mut IdGenerator,
    today: SimDate,
) -> Vec<Opportunity> {
    let mut offers = Vec::new();
    for key in &location.events {
        if !rng.chance(chance) {
            continue;
        }
        let (title, description) = events.describe(key);
        let cost = rng.range(COST_RANGE.0, COST_RANGE.1);
        let potential_revenue = rng.range(POTENTIAL_REVENUE_RANGE.0, POTENTIAL_REVENUE_RANGE.1);
        let reputation_gain = rng.range(REPUTATION_GAIN_RANGE.0, REPUTATION_GAIN_RANGE.1);
        let duration_days = rng.range(DURATION_DAYS_RANGE.0, DURATION_DAYS_RANGE.1);
        offers.push(Opportunity {
            id: id_gen.next_id(),
            event_key: key.clone(),
            title,
            description,
            cost,
            potential_revenue,
            reputation_gain: reputation_gain as i32,
            duration_days: duration_days as u32,
            offered_on: today,
        });
    }
    offers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocationCatalog;
    use crate::sim::random::seeded;

    fn generate(location_key: &str, chance: f64, seed: u64) -> Vec<Opportunity> {
        let locations = LocationCatalog::norfolk();
        let events = EventCatalog::norfolk();
        let mut rng = seeded(seed);
        let mut id_gen = IdGenerator::new();
        generate_opportunities(
            locations.get(location_key).unwrap(),
            &events,
            chance,
            &mut rng,
            &mut id_gen,
            SimDate::default(),
        )
    }

    #[test]
    fn certain_chance_offers_every_event() {
        let offers = generate("DOWNTOWN", 1.0, 3);
        let keys: Vec<&str> = offers.iter().map(|o| o.event_key.as_str()).collect();
        assert_eq!(keys, vec!["harborfest", "granby_street_nights", "nauticus_expo"]);
        assert_eq!(offers[0].title, "Norfolk Harborfest");
    }

    #[test]
    fn zero_chance_offers_nothing() {
        assert!(generate("DOWNTOWN", 0.0, 3).is_empty());
    }

    #[test]
    fn rolled_values_stay_in_range() {
        for seed in 0..50 {
            for offer in generate("GHENT", 1.0, seed) {
                assert!((500..2_500).contains(&offer.cost));
                assert!((1_000..6_000).contains(&offer.potential_revenue));
                assert!((5..15).contains(&offer.reputation_gain));
                assert!((1..8).contains(&offer.duration_days));
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let offers = generate("DOWNTOWN", 1.0, 11);
        let mut ids: Vec<u64> = offers.iter().map(|o| o.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), offers.len());
    }
}
