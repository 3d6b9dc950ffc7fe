//! Community, business, and seasonal events around Norfolk, plus the fixed
//! table of daily operating events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{PlayerContext, Season};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventCategory {
    Community,
    Business,
    Seasonal,
}

string_enum!(EventCategory {
    Community => "community",
    Business => "business",
    Seasonal => "seasonal",
});

/// Thresholds a player should meet before taking part. Advisory: the host
/// gates on these, the engine never enforces them on its own paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Requirements {
    pub min_level: u32,
    pub min_reputation: i32,
    pub min_money: i64,
}

impl Requirements {
    pub fn is_met_by(&self, player: &PlayerContext) -> bool {
        player.level >= self.min_level
            && player.reputation >= self.min_reputation
            && player.money >= self.min_money
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub money: i64,
    pub reputation: i32,
    /// Skill name to delta.
    #[serde(default)]
    pub skills: BTreeMap<String, i32>,
    #[serde(default)]
    pub connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    /// Seasonal events only run in this season.
    #[serde(default)]
    pub season: Option<Season>,
    pub requirements: Requirements,
    pub rewards: Rewards,
}

impl CommunityEvent {
    pub fn runs_in(&self, season: Season) -> bool {
        self.season.is_none_or(|s| s == season)
    }
}

pub struct EventDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
    pub season: Option<Season>,
    pub requirements: Requirements,
    pub money: i64,
    pub reputation: i32,
    pub skills: &'static [(&'static str, i32)],
    pub connections: u32,
}

const fn req(min_level: u32, min_reputation: i32, min_money: i64) -> Requirements {
    Requirements {
        min_level,
        min_reputation,
        min_money,
    }
}

pub const EVENTS: &[EventDef] = &[
    EventDef {
        id: "harborfest",
        title: "Norfolk Harborfest",
        description: "Tall ships, fireworks, and crowds along Town Point Park",
        category: EventCategory::Seasonal,
        season: Some(Season::Summer),
        requirements: req(3, 40, 5_000),
        money: 5_000,
        reputation: 15,
        skills: &[("networking", 3), ("marketing", 2)],
        connections: 5,
    },
    EventDef {
        id: "granby_street_nights",
        title: "Granby Street Nights",
        description: "Late-night dining and live music draw crowds downtown",
        category: EventCategory::Business,
        season: None,
        requirements: req(2, 30, 2_000),
        money: 2_500,
        reputation: 8,
        skills: &[("hospitality", 2)],
        connections: 3,
    },
    EventDef {
        id: "nauticus_expo",
        title: "Nauticus Maritime Expo",
        description: "Exhibitors and investors gather at the maritime science center",
        category: EventCategory::Business,
        season: None,
        requirements: req(5, 50, 10_000),
        money: 8_000,
        reputation: 12,
        skills: &[("business", 3), ("networking", 2)],
        connections: 6,
    },
    EventDef {
        id: "ghent_art_walk",
        title: "Ghent First Fridays Art Walk",
        description: "Galleries open their doors for an evening of local art",
        category: EventCategory::Community,
        season: None,
        requirements: req(1, 20, 500),
        money: 1_200,
        reputation: 6,
        skills: &[("creativity", 3)],
        connections: 2,
    },
    EventDef {
        id: "stockley_gardens_festival",
        title: "Stockley Gardens Arts Festival",
        description: "Artists and vendors fill the park for a weekend festival",
        category: EventCategory::Seasonal,
        season: Some(Season::Spring),
        requirements: req(2, 25, 1_500),
        money: 2_000,
        reputation: 8,
        skills: &[("creativity", 2), ("marketing", 1)],
        connections: 3,
    },
    EventDef {
        id: "ocean_view_beach_fest",
        title: "Ocean View Beach Festival",
        description: "Music and food vendors line the bayfront for a summer weekend",
        category: EventCategory::Seasonal,
        season: Some(Season::Summer),
        requirements: req(1, 15, 1_000),
        money: 1_800,
        reputation: 5,
        skills: &[("hospitality", 1)],
        connections: 2,
    },
    EventDef {
        id: "community_cleanup",
        title: "Neighborhood Cleanup Day",
        description: "Volunteers clear litter from parks, streets, and shorelines",
        category: EventCategory::Community,
        season: None,
        requirements: req(1, 0, 0),
        money: 0,
        reputation: 10,
        skills: &[("leadership", 1)],
        connections: 4,
    },
    EventDef {
        id: "colonial_place_porch_fest",
        title: "Colonial Place Porch Fest",
        description: "Bands play from front porches across the neighborhood",
        category: EventCategory::Community,
        season: Some(Season::Fall),
        requirements: req(1, 10, 500),
        money: 800,
        reputation: 7,
        skills: &[("networking", 1)],
        connections: 3,
    },
    EventDef {
        id: "international_food_fair",
        title: "Wards Corner International Food Fair",
        description: "Restaurants from a dozen cuisines share one parking lot",
        category: EventCategory::Business,
        season: None,
        requirements: req(2, 20, 1_500),
        money: 2_200,
        reputation: 6,
        skills: &[("cooking", 2), ("hospitality", 1)],
        connections: 3,
    },
    EventDef {
        id: "fleet_week",
        title: "Fleet Week",
        description: "Ships in port bring sailors and their families ashore",
        category: EventCategory::Seasonal,
        season: Some(Season::Spring),
        requirements: req(3, 30, 3_000),
        money: 4_000,
        reputation: 10,
        skills: &[("business", 2)],
        connections: 4,
    },
    EventDef {
        id: "defense_tech_summit",
        title: "Defense Technology Summit",
        description: "Contractors scout local firms for subcontracting work",
        category: EventCategory::Business,
        season: None,
        requirements: req(6, 60, 20_000),
        money: 15_000,
        reputation: 15,
        skills: &[("technology", 3), ("business", 2)],
        connections: 8,
    },
    EventDef {
        id: "small_business_grant",
        title: "Small Business Revitalization Grant",
        description: "The city funds storefront improvements in developing areas",
        category: EventCategory::Business,
        season: None,
        requirements: req(1, 10, 0),
        money: 5_000,
        reputation: 5,
        skills: &[("business", 1)],
        connections: 2,
    },
    EventDef {
        id: "riverfront_revival",
        title: "Elizabeth Riverfront Revival",
        description: "Residents and businesses restore the riverfront trail",
        category: EventCategory::Community,
        season: None,
        requirements: req(1, 5, 0),
        money: 500,
        reputation: 9,
        skills: &[("leadership", 2)],
        connections: 3,
    },
    EventDef {
        id: "holiday_market",
        title: "Grand Illumination Holiday Market",
        description: "The downtown lighting parade kicks off holiday shopping",
        category: EventCategory::Seasonal,
        season: Some(Season::Winter),
        requirements: req(2, 20, 2_000),
        money: 3_500,
        reputation: 8,
        skills: &[("marketing", 2)],
        connections: 3,
    },
];

impl From<&EventDef> for CommunityEvent {
    fn from(def: &EventDef) -> Self {
        CommunityEvent {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            category: def.category,
            season: def.season,
            requirements: def.requirements,
            rewards: Rewards {
                money: def.money,
                reputation: def.reputation,
                skills: def
                    .skills
                    .iter()
                    .map(|(name, delta)| (name.to_string(), *delta))
                    .collect(),
                connections: def.connections,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventCatalog {
    events: BTreeMap<String, CommunityEvent>,
}

impl EventCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn norfolk() -> Self {
        let mut catalog = Self::empty();
        for def in EVENTS {
            catalog.insert(CommunityEvent::from(def));
        }
        catalog
    }

    pub fn insert(&mut self, event: CommunityEvent) -> Option<CommunityEvent> {
        self.events.insert(event.id.clone(), event)
    }

    pub fn get(&self, id: &str) -> Option<&CommunityEvent> {
        self.events.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommunityEvent> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose requirements the player meets and which run in `season`.
    pub fn eligible<'a>(
        &'a self,
        player: &'a PlayerContext,
        season: Season,
    ) -> impl Iterator<Item = &'a CommunityEvent> + 'a {
        self.events
            .values()
            .filter(move |e| e.runs_in(season) && e.requirements.is_met_by(player))
    }

    /// Display title and description for an event key, or the key itself when
    /// the catalog has no entry.
    pub fn describe(&self, key: &str) -> (String, String) {
        match self.events.get(key) {
            Some(e) => (e.title.clone(), e.description.clone()),
            None => (key.to_string(), format!("Opportunity: {key}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Daily operating events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DailyEventKind {
    Opportunity,
    Challenge,
    Community,
}

string_enum!(DailyEventKind {
    Opportunity => "opportunity",
    Challenge => "challenge",
    Community => "community",
});

/// One entry of the daily event roll and the deltas it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyEvent {
    pub kind: DailyEventKind,
    pub description: &'static str,
    pub reputation_delta: i32,
    pub revenue_delta: i64,
    pub expense_delta: i64,
}

pub const DAILY_EVENTS: &[DailyEvent] = &[
    DailyEvent {
        kind: DailyEventKind::Opportunity,
        description: "A local influencer featured your business",
        reputation_delta: 5,
        revenue_delta: 1_000,
        expense_delta: 0,
    },
    DailyEvent {
        kind: DailyEventKind::Challenge,
        description: "Equipment breakdown required emergency repairs",
        reputation_delta: -2,
        revenue_delta: 0,
        expense_delta: 2_000,
    },
    DailyEvent {
        kind: DailyEventKind::Community,
        description: "You sponsored a neighborhood event",
        reputation_delta: 3,
        revenue_delta: 0,
        expense_delta: 500,
    },
];
