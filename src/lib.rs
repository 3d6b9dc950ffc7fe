//! Business-ownership simulation core for the BettaDayz life-sim.
//!
//! A [`BusinessEngine`] owns one player's businesses, prices them with the
//! Norfolk [`LocationCatalog`], and rolls daily events through an injectable
//! [`RandomSource`]. Wallets, persistence, and eligibility gating stay with
//! the host application.

#[macro_use]
mod macros;

pub mod catalog;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod sim;

#[cfg(test)]
mod testutil;

pub use catalog::{EventCatalog, LocationCatalog};
pub use error::{SimError, SimResult};
pub use id::IdGenerator;
pub use model::{
    Business, BusinessType, Employee, EmployeeRole, MarketConditions, Opportunity, PlayerContext,
    Season, SimDate, Upgrade, UpgradeKind,
};
pub use sim::{
    BusinessEngine, BusinessMetrics, DailyReport, EngineConfig, RandomSource, StartBusiness,
};
