//! Deterministic expense and revenue formulas.
//!
//! Nothing here touches randomness: for fixed inputs every function returns the
//! same value on every call.

use serde::Serialize;

use crate::catalog::Location;
use crate::model::{BusinessType, MarketConditions, Season};

/// Flat per-head payroll estimate used by the expense formula. Role salaries
/// are recorded on employees but not summed here.
pub const PAYROLL_PER_HEAD: i64 = 2500;

const RENT_RATE: f64 = 0.01;
const REVENUE_RATE: f64 = 0.05;
const REPUTATION_REVENUE: i64 = 10;
const CUSTOMER_REVENUE: i64 = 5;
const CUSTOMER_BASE_DIVISOR: i64 = 100;

/// Revenue scaling per season and business type. Types absent from a
/// season's row use 1.0.
pub const SEASONAL_EFFECTS: &[(Season, &[(BusinessType, f64)])] = &[
    (
        Season::Spring,
        &[
            (BusinessType::Retail, 1.1),
            (BusinessType::Restaurant, 1.1),
            (BusinessType::RealEstate, 1.2),
            (BusinessType::Arts, 1.1),
            (BusinessType::Maritime, 1.1),
        ],
    ),
    (
        Season::Summer,
        &[
            (BusinessType::Retail, 1.1),
            (BusinessType::Restaurant, 1.3),
            (BusinessType::RealEstate, 1.1),
            (BusinessType::Entertainment, 1.4),
            (BusinessType::Maritime, 1.4),
            (BusinessType::Technology, 0.9),
        ],
    ),
    (
        Season::Fall,
        &[
            (BusinessType::Technology, 1.1),
            (BusinessType::Entertainment, 0.9),
            (BusinessType::Manufacturing, 1.1),
            (BusinessType::Arts, 1.2),
            (BusinessType::Maritime, 0.9),
        ],
    ),
    (
        Season::Winter,
        &[
            (BusinessType::Retail, 1.4),
            (BusinessType::Restaurant, 0.9),
            (BusinessType::RealEstate, 0.8),
            (BusinessType::Entertainment, 0.8),
            (BusinessType::Maritime, 0.6),
            (BusinessType::Service, 1.1),
        ],
    ),
];

pub fn seasonal_multiplier(business_type: BusinessType, season: Season) -> f64 {
    SEASONAL_EFFECTS
        .iter()
        .find(|(s, _)| *s == season)
        .and_then(|(_, row)| row.iter().find(|(t, _)| *t == business_type))
        .map_or(1.0, |(_, m)| *m)
}

/// Itemised per-period operating costs. Payroll is whole currency units so
/// each hire moves the total by exactly one flat increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub rent: f64,
    pub utilities: f64,
    pub payroll: i64,
    pub maintenance: f64,
    pub insurance: f64,
    pub marketing: f64,
    pub supplies: f64,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> i64 {
        let operating = self.rent
            + self.utilities
            + self.maintenance
            + self.insurance
            + self.marketing
            + self.supplies;
        (operating.floor().max(0.0) as i64).saturating_add(self.payroll)
    }
}

pub fn expense_breakdown(
    location: &Location,
    business_type: BusinessType,
    level: u32,
    headcount: usize,
) -> ExpenseBreakdown {
    let level = f64::from(level);
    let property_value = location.property_value(business_type) as f64;
    ExpenseBreakdown {
        rent: property_value * RENT_RATE * location.rent_factor,
        utilities: 500.0 + level * 100.0,
        payroll: headcount as i64 * PAYROLL_PER_HEAD,
        maintenance: 300.0 + level * 50.0,
        insurance: 200.0 + level * 25.0,
        marketing: (400.0 + level * 75.0) * location.marketing_factor,
        supplies: 600.0 + level * 100.0,
    }
}

pub fn calculate_expenses(
    location: &Location,
    business_type: BusinessType,
    level: u32,
    headcount: usize,
) -> i64 {
    expense_breakdown(location, business_type, level, headcount).total()
}

/// Inputs to the revenue formula that live on the business record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueInputs {
    pub business_type: BusinessType,
    pub reputation: i32,
    pub customer_base: i64,
    pub efficiency: f64,
}

/// `floor(base * multiplier + reputation*10 + customer_base*5)`, never negative.
/// Bonus terms saturate instead of overflowing.
pub fn calculate_potential_revenue(
    location: &Location,
    inputs: RevenueInputs,
    season: Season,
) -> i64 {
    let base = location.property_value(inputs.business_type) as f64 * REVENUE_RATE;
    let multiplier = location.location_multiplier
        * seasonal_multiplier(inputs.business_type, season)
        * inputs.efficiency;
    let bonus = (i64::from(inputs.reputation) * REPUTATION_REVENUE)
        .saturating_add(inputs.customer_base.saturating_mul(CUSTOMER_REVENUE));
    let revenue = (base * multiplier + bonus as f64).floor();
    revenue.max(0.0) as i64
}

/// Scale a period revenue figure by engine-wide market conditions.
pub fn scale_by_market(revenue: i64, market: &MarketConditions) -> i64 {
    (revenue as f64 * market.revenue_factor()).floor().max(0.0) as i64
}

/// Starting customer base: property value / 100, boosted when the type is
/// native to the location.
pub fn initial_customer_base(location: &Location, business_type: BusinessType) -> i64 {
    let base = location.property_value(business_type) / CUSTOMER_BASE_DIVISOR;
    (base as f64 * location.synergy(business_type)).floor() as i64
}
