use serde::{Deserialize, Serialize};

use super::date::SimDate;

/// Kind of venture a business runs. Fixed for the lifetime of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BusinessType {
    Technology,
    Retail,
    Restaurant,
    RealEstate,
    Entertainment,
    Service,
    Manufacturing,
    Maritime,
    Arts,
}

string_enum!(BusinessType {
    Technology => "Technology",
    Retail => "Retail",
    Restaurant => "Restaurant",
    RealEstate => "Real Estate",
    Entertainment => "Entertainment",
    Service => "Service",
    Manufacturing => "Manufacturing",
    Maritime => "Maritime",
    Arts => "Arts",
});

/// Staff role. Unknown roles are accepted and paid the default salary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EmployeeRole {
    Manager,
    Staff,
    Specialist,
    Custom(String),
}

string_enum_open!(EmployeeRole, "employee role", {
    Manager => "manager",
    Staff => "staff",
    Specialist => "specialist",
});

pub const DEFAULT_SALARY: i64 = 2500;

impl EmployeeRole {
    pub fn base_salary(&self) -> i64 {
        match self {
            EmployeeRole::Manager => 4000,
            EmployeeRole::Staff => 2500,
            EmployeeRole::Specialist => 3500,
            EmployeeRole::Custom(_) => DEFAULT_SALARY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub role: EmployeeRole,
    pub hire_date: SimDate,
    /// Derived from `role` at hire time.
    pub salary: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UpgradeKind {
    Renovation,
    Expansion,
    Technology,
}

string_enum!(UpgradeKind {
    Renovation => "renovation",
    Expansion => "expansion",
    Technology => "technology",
});

/// Effect of an upgrade, snapshotted onto the record when it is installed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UpgradeEffect {
    pub reputation_bonus: i32,
    pub capacity_bonus: i64,
    /// Added to the business's `efficiency` (0.2 = +20%).
    pub efficiency_bonus: f64,
    /// Informational; not folded into the revenue formula.
    pub revenue_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: u64,
    pub kind: UpgradeKind,
    pub install_date: SimDate,
    pub cost: i64,
    pub effect: UpgradeEffect,
}

/// A time-limited offer attached to a business, derived from its location's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u64,
    pub event_key: String,
    pub title: String,
    pub description: String,
    pub cost: i64,
    pub potential_revenue: i64,
    pub reputation_gain: i32,
    pub duration_days: u32,
    pub offered_on: SimDate,
}

/// A single simulated venture owned by a player.
///
/// `revenue` and `expenses` are cumulative counters: the engine only ever adds
/// to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: u64,
    pub name: String,
    pub business_type: BusinessType,
    /// Key into the location catalog.
    pub location: String,
    pub level: u32,
    pub employees: Vec<Employee>,
    pub revenue: i64,
    pub expenses: i64,
    pub reputation: i32,
    pub customer_base: i64,
    pub efficiency: f64,
    pub upgrades: Vec<Upgrade>,
    pub opportunities: Vec<Opportunity>,
    pub initial_investment: i64,
    pub founded: SimDate,
    pub last_update: SimDate,
}

impl Business {
    pub fn headcount(&self) -> usize {
        self.employees.len()
    }

    /// Sum of role salaries, for display. The expense formula uses a flat
    /// per-head estimate instead.
    pub fn payroll_by_role(&self) -> i64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    pub fn profit(&self) -> i64 {
        self.revenue.saturating_sub(self.expenses)
    }

    /// Name of the first field that breaks the record invariants: level at
    /// least 1, non-negative counters, reputation and customer base, and a
    /// positive finite efficiency.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.level < 1 {
            Some("level")
        } else if self.revenue < 0 {
            Some("revenue")
        } else if self.expenses < 0 {
            Some("expenses")
        } else if self.reputation < 0 {
            Some("reputation")
        } else if self.customer_base < 0 {
            Some("customer_base")
        } else if !(self.efficiency.is_finite() && self.efficiency > 0.0) {
            Some("efficiency")
        } else {
            None
        }
    }

    /// Shift reputation by `delta`, never below zero.
    pub(crate) fn adjust_reputation(&mut self, delta: i32) {
        self.reputation = self.reputation.saturating_add(delta).max(0);
    }
}
