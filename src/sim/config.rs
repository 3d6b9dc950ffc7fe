use crate::model::SimDate;

/// Configuration for a business engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for deterministic event rolls and opportunity generation.
    pub seed: u64,
    /// Calendar date the engine clock starts on.
    pub start_date: SimDate,
    /// Probability that a daily operations call rolls an event (0.0–1.0).
    pub daily_event_chance: f64,
    /// Probability that each location event becomes an opportunity (0.0–1.0).
    pub opportunity_chance: f64,
    /// Reputation a newly started business opens with.
    pub starting_reputation: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: SimDate::default(),
            daily_event_chance: 0.10,
            opportunity_chance: 0.30,
            starting_reputation: 50,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
