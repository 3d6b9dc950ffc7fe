pub mod business;
pub mod date;
pub mod market;
pub mod player;

pub use business::{
    Business, BusinessType, DEFAULT_SALARY, Employee, EmployeeRole, Opportunity, Upgrade,
    UpgradeEffect, UpgradeKind,
};
pub use date::{MAX_YEAR, Season, SimDate};
pub use market::MarketConditions;
pub use player::PlayerContext;
