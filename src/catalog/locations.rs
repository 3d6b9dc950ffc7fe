//! Norfolk neighborhoods available for business ownership.
//!
//! The static `LOCATIONS` table seeds a [`LocationCatalog`]; hosts can replace
//! or extend entries at runtime (or load the whole catalog from JSON), so every
//! pricing factor lives on the entry rather than in the formulas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::BusinessType;
use crate::model::BusinessType::{
    Arts, Entertainment, Manufacturing, Maritime, RealEstate, Restaurant, Retail, Service,
    Technology,
};

/// Foot-traffic tier of a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TrafficTier {
    Downtown,
    High,
    Medium,
    Developing,
}

string_enum!(TrafficTier {
    Downtown => "downtown",
    High => "high",
    Medium => "medium",
    Developing => "developing",
});

impl TrafficTier {
    /// Default rent scaling: busy areas cost more to lease.
    pub fn default_rent_factor(self) -> f64 {
        match self {
            TrafficTier::Downtown => 1.5,
            TrafficTier::Developing => 0.7,
            TrafficTier::High | TrafficTier::Medium => 1.0,
        }
    }

    /// Default marketing scaling: busy areas need less paid marketing.
    pub fn default_marketing_factor(self) -> f64 {
        match self {
            TrafficTier::Downtown => 0.8,
            TrafficTier::Developing => 1.2,
            TrafficTier::High | TrafficTier::Medium => 1.0,
        }
    }
}

/// Multiplier applied to customer base when a type is native to the location.
pub const NATIVE_TYPE_BONUS: f64 = 1.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub key: String,
    pub name: String,
    pub cost: i64,
    pub traffic: TrafficTier,
    pub location_multiplier: f64,
    pub rent_factor: f64,
    pub marketing_factor: f64,
    /// Business types that fit the neighborhood.
    pub business_types: Vec<BusinessType>,
    pub property_values: BTreeMap<BusinessType, i64>,
    /// Keys into the event catalog.
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub demographics: Option<String>,
    #[serde(default)]
    pub culture: Vec<String>,
}

impl Location {
    /// Property valuation for a business type, falling back to the base cost.
    pub fn property_value(&self, business_type: BusinessType) -> i64 {
        self.property_values
            .get(&business_type)
            .copied()
            .unwrap_or(self.cost)
    }

    pub fn is_native(&self, business_type: BusinessType) -> bool {
        self.business_types.contains(&business_type)
    }

    pub fn synergy(&self, business_type: BusinessType) -> f64 {
        if self.is_native(business_type) {
            NATIVE_TYPE_BONUS
        } else {
            1.0
        }
    }
}

/// Static definition used to seed the default catalog.
pub struct LocationDef {
    pub key: &'static str,
    pub name: &'static str,
    pub cost: i64,
    pub traffic: TrafficTier,
    pub location_multiplier: f64,
    pub business_types: &'static [BusinessType],
    pub property_values: &'static [(BusinessType, i64)],
    pub events: &'static [&'static str],
    pub demographics: &'static str,
    pub culture: &'static [&'static str],
}

pub const LOCATIONS: &[LocationDef] = &[
    LocationDef {
        key: "DOWNTOWN",
        name: "Downtown Norfolk",
        cost: 500_000,
        traffic: TrafficTier::Downtown,
        location_multiplier: 1.5,
        business_types: &[Technology, Retail, Restaurant, Entertainment, RealEstate],
        property_values: &[
            (Technology, 850_000),
            (Retail, 600_000),
            (Restaurant, 550_000),
            (RealEstate, 1_200_000),
            (Entertainment, 700_000),
            (Service, 450_000),
            (Manufacturing, 900_000),
            (Maritime, 800_000),
            (Arts, 400_000),
        ],
        events: &["harborfest", "granby_street_nights", "nauticus_expo"],
        demographics: "Young professionals, tourists, and downtown office workers",
        culture: &["waterfront", "nightlife", "performing arts"],
    },
    LocationDef {
        key: "GHENT",
        name: "Ghent",
        cost: 380_000,
        traffic: TrafficTier::High,
        location_multiplier: 1.3,
        business_types: &[Restaurant, Retail, Arts, Entertainment],
        property_values: &[
            (Technology, 500_000),
            (Retail, 450_000),
            (Restaurant, 420_000),
            (RealEstate, 800_000),
            (Entertainment, 380_000),
            (Service, 300_000),
            (Manufacturing, 350_000),
            (Maritime, 300_000),
            (Arts, 350_000),
        ],
        events: &["ghent_art_walk", "stockley_gardens_festival"],
        demographics: "Artists, students, and long-time residents in historic homes",
        culture: &["galleries", "boutiques", "Colley Avenue dining"],
    },
    LocationDef {
        key: "OCEAN_VIEW",
        name: "Ocean View",
        cost: 260_000,
        traffic: TrafficTier::Medium,
        location_multiplier: 1.1,
        business_types: &[Restaurant, Entertainment, Maritime, Service],
        property_values: &[
            (Technology, 300_000),
            (Retail, 280_000),
            (Restaurant, 320_000),
            (RealEstate, 550_000),
            (Entertainment, 300_000),
            (Service, 220_000),
            (Manufacturing, 250_000),
            (Maritime, 380_000),
            (Arts, 200_000),
        ],
        events: &["ocean_view_beach_fest", "community_cleanup"],
        demographics: "Beach-town families, retirees, and summer visitors",
        culture: &["bayfront beaches", "fishing pier"],
    },
    LocationDef {
        key: "COLONIAL_PLACE",
        name: "Colonial Place",
        cost: 300_000,
        traffic: TrafficTier::High,
        location_multiplier: 1.2,
        business_types: &[Service, Retail, RealEstate],
        property_values: &[
            (Technology, 350_000),
            (Retail, 320_000),
            (Restaurant, 300_000),
            (RealEstate, 650_000),
            (Entertainment, 260_000),
            (Service, 280_000),
            (Manufacturing, 240_000),
            (Maritime, 220_000),
            (Arts, 240_000),
        ],
        events: &["colonial_place_porch_fest", "community_cleanup"],
        demographics: "Established families in a walkable riverside neighborhood",
        culture: &["historic district", "Lafayette River"],
    },
    LocationDef {
        key: "WARDS_CORNER",
        name: "Wards Corner",
        cost: 180_000,
        traffic: TrafficTier::Medium,
        location_multiplier: 1.0,
        business_types: &[Retail, Restaurant, Service],
        property_values: &[
            (Technology, 220_000),
            (Retail, 240_000),
            (Restaurant, 230_000),
            (RealEstate, 400_000),
            (Entertainment, 200_000),
            (Service, 190_000),
            (Manufacturing, 210_000),
            (Maritime, 160_000),
            (Arts, 150_000),
        ],
        events: &["international_food_fair", "community_cleanup"],
        demographics: "Diverse working families and international communities",
        culture: &["international markets", "commercial corridor"],
    },
    LocationDef {
        key: "SEWELLS_POINT",
        name: "Sewells Point",
        cost: 220_000,
        traffic: TrafficTier::Medium,
        location_multiplier: 1.1,
        business_types: &[Maritime, Manufacturing, Service, Technology],
        property_values: &[
            (Technology, 420_000),
            (Retail, 250_000),
            (Restaurant, 260_000),
            (RealEstate, 450_000),
            (Entertainment, 220_000),
            (Service, 260_000),
            (Manufacturing, 480_000),
            (Maritime, 520_000),
            (Arts, 150_000),
        ],
        events: &["fleet_week", "defense_tech_summit"],
        demographics: "Active-duty sailors, veterans, and defense contractors",
        culture: &["naval station", "shipyards"],
    },
    LocationDef {
        key: "PARK_PLACE",
        name: "Park Place",
        cost: 120_000,
        traffic: TrafficTier::Developing,
        location_multiplier: 0.8,
        business_types: &[Service, Retail, Arts],
        property_values: &[
            (Technology, 160_000),
            (Retail, 150_000),
            (Restaurant, 140_000),
            (RealEstate, 260_000),
            (Entertainment, 130_000),
            (Service, 120_000),
            (Manufacturing, 150_000),
            (Maritime, 100_000),
            (Arts, 110_000),
        ],
        events: &["small_business_grant", "community_cleanup"],
        demographics: "A revitalizing neighborhood with strong community ties",
        culture: &["community gardens", "local murals"],
    },
    LocationDef {
        key: "BERKLEY",
        name: "Berkley",
        cost: 100_000,
        traffic: TrafficTier::Developing,
        location_multiplier: 0.75,
        business_types: &[Manufacturing, Service, Maritime],
        property_values: &[
            (Technology, 140_000),
            (Retail, 120_000),
            (Restaurant, 120_000),
            (RealEstate, 220_000),
            (Entertainment, 100_000),
            (Service, 110_000),
            (Manufacturing, 200_000),
            (Maritime, 180_000),
            (Arts, 90_000),
        ],
        events: &["small_business_grant", "riverfront_revival"],
        demographics: "Historic working-class community across the Elizabeth River",
        culture: &["riverfront", "industrial heritage"],
    },
];

impl From<&LocationDef> for Location {
    fn from(def: &LocationDef) -> Self {
        Location {
            key: def.key.to_string(),
            name: def.name.to_string(),
            cost: def.cost,
            traffic: def.traffic,
            location_multiplier: def.location_multiplier,
            rent_factor: def.traffic.default_rent_factor(),
            marketing_factor: def.traffic.default_marketing_factor(),
            business_types: def.business_types.to_vec(),
            property_values: def.property_values.iter().copied().collect(),
            events: def.events.iter().map(|e| e.to_string()).collect(),
            demographics: Some(def.demographics.to_string()),
            culture: def.culture.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Read-only lookup table of neighborhoods keyed by location key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCatalog {
    locations: BTreeMap<String, Location>,
}

impl LocationCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Norfolk neighborhoods.
    pub fn norfolk() -> Self {
        let mut catalog = Self::empty();
        for def in LOCATIONS {
            catalog.insert(Location::from(def));
        }
        catalog
    }

    /// Add or replace an entry. Returns the previous entry under the same key.
    pub fn insert(&mut self, location: Location) -> Option<Location> {
        self.locations.insert(location.key.clone(), location)
    }

    pub fn get(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locations.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
