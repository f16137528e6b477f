//! Data models for the Budget Engine.
//!
//! The `models` module defines a set of serialisable structs and
//! enums representing trip requests, budget breakdowns and the tag
//! types the engine classifies inputs into.  These data types derive
//! `Serialize` and `Deserialize` so that they can be easily persisted
//! or transmitted over a network.  They form the basis of the
//! engine's input and output structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the five spending buckets a trip budget is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
}

impl Category {
    /// All spending categories, in the order they appear in results.
    pub const ALL: [Category; 5] = [
        Category::Accommodation,
        Category::Food,
        Category::Transport,
        Category::Activities,
        Category::Shopping,
    ];
}

/// Coarse classification of a travel destination, driving the
/// per-category cost multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    MetroCities,
    HillStations,
    Coastal,
    Heritage,
    Tier2Cities,
}

impl DestinationType {
    /// Scan order for destination classification.  When a destination
    /// string mentions cities from more than one group, the group
    /// listed earlier here wins.
    pub const ALL: [DestinationType; 5] = [
        DestinationType::MetroCities,
        DestinationType::HillStations,
        DestinationType::Coastal,
        DestinationType::Heritage,
        DestinationType::Tier2Cities,
    ];
}

/// Coarse classification of the travel month into cost periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Peak,
    High,
    Medium,
    Low,
}

/// Coarse classification of trip length.  Longer trips unlock bulk
/// discounts on accommodation and transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

/// A traveller interest tag.  The first entry of a request's interest
/// list selects the base allocation weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Adventure,
    Luxury,
    Cultural,
    Food,
    Nature,
    Spiritual,
    Beach,
}

impl Interest {
    /// Parses a caller-supplied interest tag.  Returns `None` for
    /// unrecognised tags; callers decide the fallback.
    pub fn parse(tag: &str) -> Option<Interest> {
        match tag {
            "Adventure" => Some(Interest::Adventure),
            "Luxury" => Some(Interest::Luxury),
            "Cultural" => Some(Interest::Cultural),
            "Food" => Some(Interest::Food),
            "Nature" => Some(Interest::Nature),
            "Spiritual" => Some(Interest::Spiritual),
            "Beach" => Some(Interest::Beach),
            _ => None,
        }
    }
}

/// Input to the budget engine.
///
/// A `BudgetRequest` carries the high-level trip parameters supplied
/// by the caller.  Interests remain plain strings at this boundary;
/// unrecognised tags silently fall back to the `Cultural` allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Free-text destination, e.g. `"Manali, Himachal Pradesh"`.  May
    /// include state or region names alongside the city.
    pub destination: String,
    /// Trip length in days.  Must be at least 1.
    pub duration: u32,
    /// Total trip budget in rupees.  Must be positive.
    pub total_budget: f64,
    /// Ordered interest tags, e.g. `["Adventure", "Nature"]`.  May be
    /// empty.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Optional travel date used for season classification.  When
    /// omitted the engine classifies against the current date.
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
}

/// Rupee amounts per spending category.  Used both for the overall
/// breakdown and for per-day costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmounts {
    pub accommodation: u64,
    pub food: u64,
    pub transport: u64,
    pub activities: u64,
    pub shopping: u64,
}

impl CategoryAmounts {
    /// Returns the amount allocated to `category`.
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Shopping => self.shopping,
        }
    }

    /// Sets the amount allocated to `category`.
    pub fn set(&mut self, category: Category, amount: u64) {
        match category {
            Category::Accommodation => self.accommodation = amount,
            Category::Food => self.food = amount,
            Category::Transport => self.transport = amount,
            Category::Activities => self.activities = amount,
            Category::Shopping => self.shopping = amount,
        }
    }

    /// Sum across all five categories.
    pub fn total(&self) -> u64 {
        self.accommodation + self.food + self.transport + self.activities + self.shopping
    }
}

/// How a breakdown was derived: the resolved classifications and the
/// seasonal multiplier that was in effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreakdownMetadata {
    pub destination_type: DestinationType,
    pub season: Season,
    pub duration_bucket: DurationBucket,
    pub seasonal_multiplier: f64,
    pub primary_interest: Interest,
}

/// The result of a budget optimisation: rupee amounts per category
/// plus the metadata describing how they were derived.
///
/// Each category is rounded independently, so the amounts sum to the
/// requested total within a few rupees rather than exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    #[serde(flatten)]
    pub amounts: CategoryAmounts,
    pub metadata: BreakdownMetadata,
}

/// A breakdown enriched with per-day costs and advisory text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    /// Rupee amounts per category for the whole trip.
    pub budget_breakdown: CategoryAmounts,
    /// Rupee amounts per category per day.
    pub per_day_costs: CategoryAmounts,
    /// Seasonal and interest-specific tips.
    pub recommendations: Vec<String>,
    /// Budget adequacy warnings.
    pub warnings: Vec<String>,
    pub metadata: BreakdownMetadata,
}
