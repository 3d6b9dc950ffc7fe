#![allow(dead_code)]

use bettadayz_sim::{
    Business, BusinessEngine, BusinessType, EngineConfig, PlayerContext, RandomSource,
    StartBusiness,
};

/// Random source that always fires and always picks the same entry.
pub struct AlwaysPick(pub usize);

impl RandomSource for AlwaysPick {
    fn chance(&mut self, _probability: f64) -> bool {
        true
    }

    fn range(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0 % len }
    }
}

/// Random source that never fires.
pub struct Never;

impl RandomSource for Never {
    fn chance(&mut self, _probability: f64) -> bool {
        false
    }

    fn range(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn index(&mut self, _len: usize) -> usize {
        0
    }
}

pub fn player() -> PlayerContext {
    PlayerContext::new("p-100", 1, 0, 25_000)
}

pub fn seeded_engine(seed: u64) -> BusinessEngine {
    BusinessEngine::new(player(), EngineConfig::with_seed(seed))
}

pub fn quiet_engine() -> BusinessEngine {
    seeded_engine(42).with_random_source(Box::new(Never))
}

pub fn start_downtown_retail(engine: &mut BusinessEngine) -> Business {
    engine
        .start_business(StartBusiness::new(
            "Test Shop",
            BusinessType::Retail,
            "DOWNTOWN",
        ))
        .unwrap()
        .clone()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
