use serde::{Deserialize, Serialize};

/// Engine-wide market multipliers. Each must be a positive finite number.
///
/// Daily revenue is scaled by `economy * seasonality * tourism / competition`,
/// so the defaults leave it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    pub economy: f64,
    pub competition: f64,
    pub seasonality: f64,
    pub tourism: f64,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            economy: 1.0,
            competition: 1.0,
            seasonality: 1.0,
            tourism: 1.0,
        }
    }
}

impl MarketConditions {
    /// Name of the first field that is not a positive finite number.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("economy", self.economy),
            ("competition", self.competition),
            ("seasonality", self.seasonality),
            ("tourism", self.tourism),
        ]
        .into_iter()
        .find(|(_, v)| !(v.is_finite() && *v > 0.0))
        .map(|(name, _)| name)
    }

    pub fn revenue_factor(&self) -> f64 {
        self.economy * self.seasonality * self.tourism / self.competition
    }
}
