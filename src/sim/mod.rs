mod config;
mod engine;
pub mod formulas;
mod opportunities;
pub mod random;
mod report;

pub use config::EngineConfig;
pub use engine::{BusinessEngine, StartBusiness};
pub use formulas::{ExpenseBreakdown, RevenueInputs};
pub use opportunities::generate_opportunities;
pub use random::{RandomSource, RngSource, seeded};
pub use report::{BusinessMetrics, DailyReport};
