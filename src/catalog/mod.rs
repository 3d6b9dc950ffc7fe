pub mod events;
pub mod locations;
pub mod upgrades;

pub use events::{
    CommunityEvent, DAILY_EVENTS, DailyEvent, DailyEventKind, EventCatalog, EventCategory,
    Requirements, Rewards,
};
pub use locations::{Location, LocationCatalog, NATIVE_TYPE_BONUS, TrafficTier};
pub use upgrades::{UpgradeDef, upgrade_def};
