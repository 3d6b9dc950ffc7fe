use crate::model::PlayerContext;
use crate::sim::{BusinessEngine, EngineConfig, RandomSource, StartBusiness};
use crate::{Business, BusinessType};

/// Random source with fixed answers: every `chance` returns `hit`, every
/// `range` returns its lower bound, every `index` returns `pick` (wrapped).
pub struct ScriptedRandom {
    pub hit: bool,
    pub pick: usize,
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, _probability: f64) -> bool {
        self.hit
    }

    fn range(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.pick % len }
    }
}

pub fn test_player() -> PlayerContext {
    PlayerContext::new("player-1", 1, 0, 10_000)
}

pub fn engine() -> BusinessEngine {
    BusinessEngine::new(test_player(), EngineConfig::default())
}

/// Engine whose every roll fires and picks `DAILY_EVENTS[pick]`.
pub fn scripted_engine(pick: usize) -> BusinessEngine {
    engine().with_random_source(Box::new(ScriptedRandom { hit: true, pick }))
}

/// Engine whose rolls never fire.
pub fn quiet_engine() -> BusinessEngine {
    engine().with_random_source(Box::new(ScriptedRandom {
        hit: false,
        pick: 0,
    }))
}

pub fn open_shop(engine: &mut BusinessEngine) -> Business {
    engine
        .start_business(StartBusiness::new(
            "Test Shop",
            BusinessType::Retail,
            "DOWNTOWN",
        ))
        .unwrap()
        .clone()
}
