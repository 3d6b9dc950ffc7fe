use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use super::config::EngineConfig;
use super::formulas::{
    self, ExpenseBreakdown, RevenueInputs, calculate_expenses, calculate_potential_revenue,
    initial_customer_base, scale_by_market,
};
use super::opportunities::generate_opportunities;
use super::random::{RandomSource, seeded};
use super::report::{BusinessMetrics, DailyReport};
use crate::catalog::{
    CommunityEvent, DAILY_EVENTS, EventCatalog, Location, LocationCatalog, upgrade_def,
};
use crate::error::{SimError, SimResult};
use crate::id::IdGenerator;
use crate::model::{
    Business, BusinessType, Employee, EmployeeRole, MarketConditions, Opportunity, PlayerContext,
    Season, SimDate, Upgrade, UpgradeKind,
};

/// Request to open a new business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartBusiness {
    pub name: String,
    pub business_type: BusinessType,
    /// Key into the location catalog.
    pub location: String,
    /// Recorded on the business; the host deducts it from the player's wallet.
    pub initial_investment: i64,
}

impl StartBusiness {
    pub fn new(
        name: impl Into<String>,
        business_type: BusinessType,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            business_type,
            location: location.into(),
            initial_investment: 0,
        }
    }

    pub fn with_investment(mut self, amount: i64) -> Self {
        self.initial_investment = amount;
        self
    }
}

/// Owns every business of one player session.
///
/// All operations are synchronous and either fully apply or return an error
/// before touching state. The engine holds no persistence handle; callers
/// store the returned records themselves.
pub struct BusinessEngine {
    businesses: BTreeMap<u64, Business>,
    market: MarketConditions,
    player: PlayerContext,
    date: SimDate,
    id_gen: IdGenerator,
    locations: LocationCatalog,
    events: EventCatalog,
    rng: Box<dyn RandomSource>,
    config: EngineConfig,
}

impl fmt::Debug for BusinessEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessEngine")
            .field("player", &self.player.player_id)
            .field("date", &self.date)
            .field("businesses", &self.businesses.len())
            .field("market", &self.market)
            .finish_non_exhaustive()
    }
}

/// Resolve a business's catalog entry. Takes the catalog rather than `&self`
/// so callers can hold a mutable borrow of the business map at the same time.
fn location_of<'a>(locations: &'a LocationCatalog, business: &Business) -> SimResult<&'a Location> {
    locations
        .get(&business.location)
        .ok_or_else(|| SimError::InvalidLocation(business.location.clone()))
}

fn revenue_inputs(business: &Business) -> RevenueInputs {
    RevenueInputs {
        business_type: business.business_type,
        reputation: business.reputation,
        customer_base: business.customer_base,
        efficiency: business.efficiency,
    }
}

impl BusinessEngine {
    /// Engine over the built-in Norfolk catalogs with a `SmallRng` seeded
    /// from `config.seed`.
    pub fn new(player: PlayerContext, config: EngineConfig) -> Self {
        Self {
            businesses: BTreeMap::new(),
            market: MarketConditions::default(),
            player,
            date: config.start_date,
            id_gen: IdGenerator::new(),
            locations: LocationCatalog::norfolk(),
            events: EventCatalog::norfolk(),
            rng: Box::new(seeded(config.seed)),
            config,
        }
    }

    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Replace the location catalog. Existing businesses keep their location
    /// keys; [`BusinessEngine::run_day`] refuses to run while any of them is
    /// missing from the new catalog.
    pub fn with_locations(mut self, locations: LocationCatalog) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_events(mut self, events: EventCatalog) -> Self {
        self.events = events;
        self
    }

    // -- Accessors --

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn locations(&self) -> &LocationCatalog {
        &self.locations
    }

    pub fn events(&self) -> &EventCatalog {
        &self.events
    }

    pub fn player(&self) -> &PlayerContext {
        &self.player
    }

    /// Replace the player snapshot after the host changes level, reputation, or money.
    pub fn set_player(&mut self, player: PlayerContext) {
        self.player = player;
    }

    pub fn business(&self, id: u64) -> Option<&Business> {
        self.businesses.get(&id)
    }

    /// All businesses in id order.
    pub fn businesses(&self) -> impl Iterator<Item = &Business> {
        self.businesses.values()
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    // -- Clock --

    pub fn date(&self) -> SimDate {
        self.date
    }

    pub fn set_date(&mut self, date: SimDate) {
        self.date = date;
    }

    pub fn current_season(&self) -> Season {
        self.date.season()
    }

    pub fn advance_day(&mut self) -> SimDate {
        self.date = self.date.next_day();
        debug!(date = %self.date, "advanced engine clock");
        self.date
    }

    // -- Market --

    pub fn market_conditions(&self) -> MarketConditions {
        self.market
    }

    pub fn set_market_conditions(&mut self, market: MarketConditions) -> SimResult<()> {
        if let Some(field) = market.invalid_field() {
            return Err(SimError::InvalidConfig(format!(
                "market {field} must be a positive finite number"
            )));
        }
        self.market = market;
        Ok(())
    }

    // -- Business lifecycle --

    /// Open a business and return the stored record.
    ///
    /// Revenue and expenses start at one period's formula values so the caller
    /// sees a representative snapshot before any operations run.
    pub fn start_business(&mut self, request: StartBusiness) -> SimResult<&Business> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(SimError::InvalidConfig(
                "business name cannot be empty".to_string(),
            ));
        }
        if request.initial_investment < 0 {
            return Err(SimError::InvalidConfig(format!(
                "initial investment cannot be negative: {}",
                request.initial_investment
            )));
        }
        let location = self
            .locations
            .get(&request.location)
            .ok_or_else(|| SimError::InvalidLocation(request.location.clone()))?;

        let business_type = request.business_type;
        let customer_base = initial_customer_base(location, business_type);
        let reputation = self.config.starting_reputation.max(0);
        let inputs = RevenueInputs {
            business_type,
            reputation,
            customer_base,
            efficiency: 1.0,
        };
        let revenue = calculate_potential_revenue(location, inputs, self.date.season());
        let expenses = calculate_expenses(location, business_type, 1, 0);

        let id = self.id_gen.next_id();
        let opportunities = generate_opportunities(
            location,
            &self.events,
            self.config.opportunity_chance,
            self.rng.as_mut(),
            &mut self.id_gen,
            self.date,
        );

        let business = Business {
            id,
            name: name.to_string(),
            business_type,
            location: location.key.clone(),
            level: 1,
            employees: Vec::new(),
            revenue,
            expenses,
            reputation,
            customer_base,
            efficiency: 1.0,
            upgrades: Vec::new(),
            opportunities,
            initial_investment: request.initial_investment,
            founded: self.date,
            last_update: self.date,
        };

        debug!(
            business_id = id,
            name = %business.name,
            business_type = %business_type,
            location = %business.location,
            opportunities = business.opportunities.len(),
            "business started"
        );

        Ok(self.businesses.entry(id).or_insert(business))
    }

    /// Add an employee. Unknown roles are accepted at the default salary.
    ///
    /// The cumulative expense counter grows by the difference between the
    /// expense formula before and after the hire.
    pub fn hire_employee(&mut self, business_id: u64, role: EmployeeRole) -> SimResult<&Business> {
        let business = self
            .businesses
            .get_mut(&business_id)
            .ok_or(SimError::BusinessNotFound(business_id))?;
        let location = location_of(&self.locations, business)?;

        let before = calculate_expenses(
            location,
            business.business_type,
            business.level,
            business.headcount(),
        );
        let after = calculate_expenses(
            location,
            business.business_type,
            business.level,
            business.headcount() + 1,
        );

        let employee = Employee {
            id: self.id_gen.next_id(),
            salary: role.base_salary(),
            role,
            hire_date: self.date,
        };
        debug!(
            business_id,
            employee_id = employee.id,
            role = %employee.role,
            salary = employee.salary,
            "employee hired"
        );
        business.employees.push(employee);
        business.expenses = business.expenses.saturating_add(after - before);
        business.last_update = self.date;

        Ok(business)
    }

    /// Install an upgrade named by its string type (`renovation`, `expansion`,
    /// `technology`).
    pub fn upgrade_property(
        &mut self,
        business_id: u64,
        upgrade_type: &str,
    ) -> SimResult<&Business> {
        if !self.businesses.contains_key(&business_id) {
            return Err(SimError::BusinessNotFound(business_id));
        }
        let kind: UpgradeKind = upgrade_type
            .parse()
            .map_err(|_| SimError::InvalidUpgrade(upgrade_type.to_string()))?;
        self.apply_upgrade(business_id, kind)
    }

    /// Install an upgrade. The cost is recorded, never deducted.
    ///
    /// The effect snapshot's reputation, capacity, and efficiency bonuses apply
    /// to the business immediately and the level rises by one. The snapshot's
    /// revenue multiplier is kept for display only.
    pub fn apply_upgrade(&mut self, business_id: u64, kind: UpgradeKind) -> SimResult<&Business> {
        let business = self
            .businesses
            .get_mut(&business_id)
            .ok_or(SimError::BusinessNotFound(business_id))?;
        let def = upgrade_def(kind);

        let upgrade = Upgrade {
            id: self.id_gen.next_id(),
            kind,
            install_date: self.date,
            cost: def.cost,
            effect: def.effect,
        };
        business.adjust_reputation(upgrade.effect.reputation_bonus);
        business.customer_base = business
            .customer_base
            .saturating_add(upgrade.effect.capacity_bonus);
        business.efficiency += upgrade.effect.efficiency_bonus;
        business.level = business.level.saturating_add(1);
        business.last_update = self.date;

        debug!(
            business_id,
            upgrade = %kind,
            cost = upgrade.cost,
            level = business.level,
            "upgrade applied"
        );
        business.upgrades.push(upgrade);

        Ok(business)
    }

    /// Re-roll the business's opportunities from its location's events,
    /// replacing the current list.
    pub fn refresh_opportunities(&mut self, business_id: u64) -> SimResult<&[Opportunity]> {
        let business = self
            .businesses
            .get_mut(&business_id)
            .ok_or(SimError::BusinessNotFound(business_id))?;
        let location = location_of(&self.locations, business)?;
        business.opportunities = generate_opportunities(
            location,
            &self.events,
            self.config.opportunity_chance,
            self.rng.as_mut(),
            &mut self.id_gen,
            self.date,
        );
        debug!(
            business_id,
            count = business.opportunities.len(),
            "opportunities refreshed"
        );
        Ok(&business.opportunities)
    }

    // -- Operations --

    /// Run one day: add the day's revenue and expenses to the cumulative
    /// counters and possibly roll a daily event.
    pub fn run_daily_operations(&mut self, business_id: u64) -> SimResult<DailyReport> {
        let date = self.date;
        let business = self
            .businesses
            .get_mut(&business_id)
            .ok_or(SimError::BusinessNotFound(business_id))?;
        let location = location_of(&self.locations, business)?;

        let mut revenue = scale_by_market(
            calculate_potential_revenue(location, revenue_inputs(business), date.season()),
            &self.market,
        );
        let mut expenses = calculate_expenses(
            location,
            business.business_type,
            business.level,
            business.headcount(),
        );

        let event = if self.rng.chance(self.config.daily_event_chance) {
            DAILY_EVENTS.get(self.rng.index(DAILY_EVENTS.len())).copied()
        } else {
            None
        };
        if let Some(ev) = &event {
            business.adjust_reputation(ev.reputation_delta);
            revenue = revenue.saturating_add(ev.revenue_delta);
            expenses = expenses.saturating_add(ev.expense_delta);
            debug!(
                business_id,
                event = %ev.kind,
                reputation = business.reputation,
                "daily event"
            );
        }

        business.revenue = business.revenue.saturating_add(revenue);
        business.expenses = business.expenses.saturating_add(expenses);
        business.last_update = date;

        Ok(DailyReport {
            business_id,
            date,
            revenue,
            expenses,
            profit: revenue.saturating_sub(expenses),
            event,
        })
    }

    /// Run daily operations for every business in id order, then advance the
    /// clock by one day.
    ///
    /// Fails with `InvalidLocation` before running anything if a business
    /// refers to a location missing from the current catalog (for example
    /// after [`BusinessEngine::with_locations`] swapped it out). The clock does
    /// not advance in that case.
    pub fn run_day(&mut self) -> SimResult<Vec<DailyReport>> {
        for business in self.businesses.values() {
            if let Err(err) = location_of(&self.locations, business) {
                warn!(business_id = business.id, %err, "day not run");
                return Err(err);
            }
        }
        let ids: Vec<u64> = self.businesses.keys().copied().collect();
        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            reports.push(self.run_daily_operations(id)?);
        }
        self.advance_day();
        Ok(reports)
    }

    // -- Pure reads --

    pub fn calculate_expenses(&self, business_id: u64) -> SimResult<i64> {
        self.expense_breakdown(business_id).map(|b| b.total())
    }

    pub fn expense_breakdown(&self, business_id: u64) -> SimResult<ExpenseBreakdown> {
        let business = self.get(business_id)?;
        let location = location_of(&self.locations, business)?;
        Ok(formulas::expense_breakdown(
            location,
            business.business_type,
            business.level,
            business.headcount(),
        ))
    }

    pub fn calculate_potential_revenue(&self, business_id: u64) -> SimResult<i64> {
        let business = self.get(business_id)?;
        let location = location_of(&self.locations, business)?;
        Ok(calculate_potential_revenue(
            location,
            revenue_inputs(business),
            self.date.season(),
        ))
    }

    /// Potential revenue scaled by market conditions.
    pub fn calculate_daily_revenue(&self, business_id: u64) -> SimResult<i64> {
        self.calculate_potential_revenue(business_id)
            .map(|r| scale_by_market(r, &self.market))
    }

    pub fn calculate_daily_expenses(&self, business_id: u64) -> SimResult<i64> {
        self.calculate_expenses(business_id)
    }

    pub fn business_metrics(&self, business_id: u64) -> SimResult<BusinessMetrics> {
        let business = self.get(business_id)?;
        Ok(BusinessMetrics {
            business_id,
            daily_revenue: self.calculate_daily_revenue(business_id)?,
            daily_expenses: self.calculate_daily_expenses(business_id)?,
            total_revenue: business.revenue,
            total_expenses: business.expenses,
            profit: business.profit(),
            reputation: business.reputation,
            customer_base: business.customer_base,
            level: business.level,
            employee_count: business.headcount(),
            upgrade_count: business.upgrades.len(),
        })
    }

    /// Catalog events the current player may join this season. Advisory only.
    pub fn eligible_events(&self) -> Vec<&CommunityEvent> {
        self.events
            .eligible(&self.player, self.date.season())
            .collect()
    }

    // -- Persistence round-trip --

    /// Re-seat previously persisted businesses.
    ///
    /// Every record is validated first: its location must be in the catalog,
    /// its numeric fields must satisfy [`Business::invalid_field`], and its id
    /// must not collide with another restored or existing business. Nothing is
    /// inserted if any record fails. Returns the number restored.
    pub fn restore(&mut self, businesses: impl IntoIterator<Item = Business>) -> SimResult<usize> {
        let incoming: Vec<Business> = businesses.into_iter().collect();
        let mut seen = std::collections::BTreeSet::new();
        for business in &incoming {
            if !self.locations.contains(&business.location) {
                warn!(
                    business_id = business.id,
                    location = %business.location,
                    "rejected restore with unknown location"
                );
                return Err(SimError::InvalidLocation(business.location.clone()));
            }
            if let Some(field) = business.invalid_field() {
                warn!(business_id = business.id, field, "rejected restore with invalid record");
                return Err(SimError::InvalidConfig(format!(
                    "business {} has invalid {field}",
                    business.id
                )));
            }
            if self.businesses.contains_key(&business.id) || !seen.insert(business.id) {
                warn!(business_id = business.id, "rejected restore with duplicate id");
                return Err(SimError::InvalidConfig(format!(
                    "duplicate business id {}",
                    business.id
                )));
            }
        }

        let count = incoming.len();
        for business in incoming {
            let max_id = std::iter::once(business.id)
                .chain(business.employees.iter().map(|e| e.id))
                .chain(business.upgrades.iter().map(|u| u.id))
                .chain(business.opportunities.iter().map(|o| o.id))
                .max()
                .unwrap_or(business.id);
            self.id_gen.skip_past(max_id);
            self.businesses.insert(business.id, business);
        }
        debug!(count, "businesses restored");
        Ok(count)
    }

    fn get(&self, business_id: u64) -> SimResult<&Business> {
        self.businesses
            .get(&business_id)
            .ok_or(SimError::BusinessNotFound(business_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DailyEventKind;
    use crate::testutil::{engine, open_shop, quiet_engine, scripted_engine};

    #[test]
    fn start_business_snapshot() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        assert_eq!(shop.level, 1);
        assert!(shop.employees.is_empty());
        assert!(shop.revenue > 0);
        assert!(shop.expenses > 0);
        assert_eq!(shop.reputation, 50);
        assert_eq!(shop.customer_base, 7_800);
        assert_eq!(shop.founded, engine.date());
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn start_business_trims_name_and_rejects_blank() {
        let mut engine = quiet_engine();
        let shop = engine
            .start_business(StartBusiness::new("  Granby Goods ", BusinessType::Retail, "GHENT"))
            .unwrap();
        assert_eq!(shop.name, "Granby Goods");

        let err = engine
            .start_business(StartBusiness::new("   ", BusinessType::Retail, "GHENT"))
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn negative_investment_is_rejected() {
        let mut engine = quiet_engine();
        let err = engine
            .start_business(
                StartBusiness::new("Pier Bait", BusinessType::Maritime, "OCEAN_VIEW")
                    .with_investment(-1),
            )
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        assert!(engine.is_empty());
    }

    #[test]
    fn opportunities_follow_location_events() {
        let mut engine = scripted_engine(0);
        let shop = open_shop(&mut engine);
        let keys: Vec<&str> = shop.opportunities.iter().map(|o| o.event_key.as_str()).collect();
        assert_eq!(keys, vec!["harborfest", "granby_street_nights", "nauticus_expo"]);
        // Scripted ranges return the lower bound.
        assert!(shop.opportunities.iter().all(|o| o.cost == 500 && o.duration_days == 1));

        let mut quiet = quiet_engine();
        assert!(open_shop(&mut quiet).opportunities.is_empty());
    }

    #[test]
    fn refresh_replaces_opportunities_with_new_ids() {
        let mut engine = scripted_engine(0);
        let shop = open_shop(&mut engine);
        let old: Vec<u64> = shop.opportunities.iter().map(|o| o.id).collect();
        let fresh: Vec<u64> = engine
            .refresh_opportunities(shop.id)
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(fresh.len(), old.len());
        assert!(fresh.iter().all(|id| !old.contains(id)));
        assert_eq!(
            engine.refresh_opportunities(999).unwrap_err(),
            SimError::BusinessNotFound(999)
        );
    }

    #[test]
    fn hire_adds_flat_payroll_and_role_salary() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        let hired = engine.hire_employee(shop.id, EmployeeRole::Manager).unwrap();
        assert_eq!(hired.expenses - shop.expenses, 2_500);
        assert_eq!(hired.employees.len(), 1);
        assert_eq!(hired.employees[0].salary, 4_000);
        assert_eq!(hired.payroll_by_role(), 4_000);
    }

    #[test]
    fn upgrade_effects_apply_once_per_install() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);

        let renovated = engine.upgrade_property(shop.id, "renovation").unwrap().clone();
        assert_eq!(renovated.reputation, shop.reputation + 10);
        assert_eq!(renovated.level, 2);

        let expanded = engine.apply_upgrade(shop.id, UpgradeKind::Expansion).unwrap().clone();
        assert_eq!(expanded.customer_base, shop.customer_base + 50);

        let teched = engine.apply_upgrade(shop.id, UpgradeKind::Technology).unwrap();
        assert!((teched.efficiency - 1.2).abs() < 1e-9);
        assert_eq!(teched.level, 4);
        assert_eq!(teched.upgrades.len(), 3);
        // Cost is recorded, never deducted.
        assert_eq!(teched.revenue, shop.revenue);
    }

    #[test]
    fn upgrade_rejections_leave_state_untouched() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        assert_eq!(
            engine.upgrade_property(shop.id, "helipad").unwrap_err(),
            SimError::InvalidUpgrade("helipad".to_string())
        );
        assert_eq!(
            engine.upgrade_property(77, "helipad").unwrap_err(),
            SimError::BusinessNotFound(77)
        );
        assert_eq!(engine.business(shop.id).unwrap(), &shop);
    }

    #[test]
    fn technology_upgrade_raises_future_revenue() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        let before = engine.calculate_potential_revenue(shop.id).unwrap();
        engine.apply_upgrade(shop.id, UpgradeKind::Technology).unwrap();
        let after = engine.calculate_potential_revenue(shop.id).unwrap();
        assert!(after > before);
    }

    #[test]
    fn scripted_challenge_costs_reputation_and_money() {
        let mut engine = scripted_engine(1);
        let shop = open_shop(&mut engine);
        let report = engine.run_daily_operations(shop.id).unwrap();
        let event = report.event.unwrap();
        assert_eq!(event.kind, DailyEventKind::Challenge);
        let base_expenses = engine.calculate_daily_expenses(shop.id).unwrap();
        assert_eq!(report.expenses, base_expenses + 2_000);
        assert_eq!(engine.business(shop.id).unwrap().reputation, 48);
        assert_eq!(report.profit, report.revenue - report.expenses);
    }

    #[test]
    fn scripted_opportunity_adds_revenue() {
        let mut engine = scripted_engine(0);
        let shop = open_shop(&mut engine);
        let expected = engine.calculate_daily_revenue(shop.id).unwrap();
        let report = engine.run_daily_operations(shop.id).unwrap();
        assert_eq!(report.event.unwrap().kind, DailyEventKind::Opportunity);
        // Revenue was computed before the +5 reputation landed.
        assert_eq!(report.revenue, expected + 1_000);
        assert_eq!(engine.business(shop.id).unwrap().reputation, 55);
    }

    #[test]
    fn quiet_day_matches_period_formulas() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        let revenue = engine.calculate_potential_revenue(shop.id).unwrap();
        let expenses = engine.calculate_expenses(shop.id).unwrap();
        let report = engine.run_daily_operations(shop.id).unwrap();
        assert!(report.event.is_none());
        assert_eq!(report.revenue, revenue);
        assert_eq!(report.expenses, expenses);

        let after = engine.business(shop.id).unwrap();
        assert_eq!(after.revenue, shop.revenue + revenue);
        assert_eq!(after.expenses, shop.expenses + expenses);
    }

    #[test]
    fn market_conditions_scale_daily_revenue() {
        let mut engine = quiet_engine();
        let shop = open_shop(&mut engine);
        let neutral = engine.calculate_daily_revenue(shop.id).unwrap();
        engine
            .set_market_conditions(MarketConditions {
                economy: 2.0,
                ..MarketConditions::default()
            })
            .unwrap();
        assert_eq!(engine.calculate_daily_revenue(shop.id).unwrap(), neutral * 2);
        // Period formula ignores the market.
        assert_eq!(engine.calculate_potential_revenue(shop.id).unwrap(), neutral);
    }

    #[test]
    fn invalid_market_conditions_are_rejected() {
        let mut engine = engine();
        let err = engine
            .set_market_conditions(MarketConditions {
                competition: -1.0,
                ..MarketConditions::default()
            })
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(msg) if msg.contains("competition")));
        assert_eq!(engine.market_conditions(), MarketConditions::default());
    }

    #[test]
    fn run_day_covers_every_business_and_advances_clock() {
        let mut engine = quiet_engine();
        open_shop(&mut engine);
        engine
            .start_business(StartBusiness::new("Dry Dock", BusinessType::Maritime, "BERKLEY"))
            .unwrap();
        let start = engine.date();
        let reports = engine.run_day().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.date == start));
        assert_eq!(engine.date(), start.next_day());
    }

    #[test]
    fn season_follows_clock() {
        let mut engine = engine();
        engine.set_date(SimDate::from_year_month(1, 7));
        assert_eq!(engine.current_season(), Season::Summer);
    }

    #[test]
    fn restore_rejects_unknown_location_without_inserting() {
        let mut source = quiet_engine();
        let mut shop = open_shop(&mut source);
        shop.location = "ATLANTIS".to_string();

        let mut engine = quiet_engine();
        let err = engine.restore(vec![shop]).unwrap_err();
        assert_eq!(err, SimError::InvalidLocation("ATLANTIS".to_string()));
        assert!(engine.is_empty());
    }

    #[test]
    fn restore_moves_id_generator_past_restored_records() {
        let mut source = scripted_engine(0);
        let shop = open_shop(&mut source);
        source.hire_employee(shop.id, EmployeeRole::Staff).unwrap();
        let saved: Vec<Business> = source.businesses().cloned().collect();
        let max_id = saved[0].employees[0].id;

        let mut engine = quiet_engine();
        assert_eq!(engine.restore(saved.clone()).unwrap(), 1);
        let next = engine
            .start_business(StartBusiness::new("Second", BusinessType::Service, "GHENT"))
            .unwrap();
        assert!(next.id > max_id);

        let err = engine.restore(saved).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn eligible_events_use_player_and_season() {
        let mut engine = engine();
        engine.set_date(SimDate::from_year_month(1, 7));
        let ids: Vec<&str> = engine.eligible_events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["community_cleanup"]);

        engine.set_player(PlayerContext::new("player-1", 5, 60, 50_000));
        let ids: Vec<&str> = engine.eligible_events().iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"harborfest"));
        assert!(!ids.contains(&"defense_tech_summit"));
    }
}
