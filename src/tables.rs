//! Reference tables for the Budget Engine.
//!
//! The `tables` module holds the fixed cost model the engine computes
//! against: destination profiles, interest-based allocation weights,
//! seasonal multipliers, duration factors and minimum daily budgets.
//! All tables are process-wide immutable constants resolved through
//! exhaustive matches on the tag enums, so a missing entry is a
//! compile error rather than a runtime fallback.

use crate::models::{Category, DestinationType, DurationBucket, Interest, Season};

/// Cost profile for one destination type: the representative city
/// names used for substring classification, and relative cost
/// multipliers versus baseline for the four categories that vary by
/// destination.  Shopping carries no destination multiplier.
#[derive(Debug, Clone, Copy)]
pub struct DestinationProfile {
    /// Representative city or region names, matched case-insensitively
    /// as substrings of the caller's destination string.
    pub cities: &'static [&'static str],
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
}

impl DestinationProfile {
    /// Destination multiplier for `category`, 1.0 where the profile
    /// defines none.
    pub fn multiplier(&self, category: Category) -> f64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Shopping => 1.0,
        }
    }
}

/// Base budget split for one interest.  Weights are fractions of the
/// total budget and sum to 1.0 per interest.
#[derive(Debug, Clone, Copy)]
pub struct InterestAllocation {
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
    pub shopping: f64,
}

impl InterestAllocation {
    /// Base weight for `category`.
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Shopping => self.shopping,
        }
    }
}

const METRO_CITIES: DestinationProfile = DestinationProfile {
    cities: &["Mumbai", "Delhi", "Bangalore", "Chennai", "Hyderabad", "Pune"],
    accommodation: 1.5,
    food: 1.3,
    transport: 1.2,
    activities: 1.4,
};

const HILL_STATIONS: DestinationProfile = DestinationProfile {
    cities: &["Shimla", "Manali", "Mussoorie", "Darjeeling", "Ooty"],
    accommodation: 1.3,
    food: 1.1,
    transport: 1.5, // higher due to terrain
    activities: 1.2,
};

const COASTAL: DestinationProfile = DestinationProfile {
    cities: &["Goa", "Kerala", "Pondicherry", "Andaman"],
    accommodation: 1.4,
    food: 1.0,
    transport: 0.9,
    activities: 1.3,
};

const HERITAGE: DestinationProfile = DestinationProfile {
    cities: &["Rajasthan", "Agra", "Varanasi", "Hampi", "Khajuraho"],
    accommodation: 1.2,
    food: 0.9,
    transport: 1.1,
    activities: 1.1,
};

const TIER2_CITIES: DestinationProfile = DestinationProfile {
    cities: &["Jaipur", "Ahmedabad", "Kochi", "Mysore", "Udaipur"],
    accommodation: 1.0,
    food: 0.8,
    transport: 0.9,
    activities: 0.9,
};

/// Profile for `destination_type`.
pub fn profile(destination_type: DestinationType) -> &'static DestinationProfile {
    match destination_type {
        DestinationType::MetroCities => &METRO_CITIES,
        DestinationType::HillStations => &HILL_STATIONS,
        DestinationType::Coastal => &COASTAL,
        DestinationType::Heritage => &HERITAGE,
        DestinationType::Tier2Cities => &TIER2_CITIES,
    }
}

// Lower accommodation (camping, budget stays), higher activities
// (equipment, guides).
const ADVENTURE: InterestAllocation = InterestAllocation {
    accommodation: 0.25,
    food: 0.25,
    transport: 0.20,
    activities: 0.25,
    shopping: 0.05,
};

// Premium hotels dominate; transport often package-included.
const LUXURY: InterestAllocation = InterestAllocation {
    accommodation: 0.50,
    food: 0.25,
    transport: 0.10,
    activities: 0.10,
    shopping: 0.05,
};

// Museums, guides, handicrafts.
const CULTURAL: InterestAllocation = InterestAllocation {
    accommodation: 0.35,
    food: 0.20,
    transport: 0.15,
    activities: 0.20,
    shopping: 0.10,
};

// Food tours and restaurants take the larger share.
const FOOD: InterestAllocation = InterestAllocation {
    accommodation: 0.30,
    food: 0.35,
    transport: 0.15,
    activities: 0.15,
    shopping: 0.05,
};

// Park entries, safari vehicles, trekking guides.
const NATURE: InterestAllocation = InterestAllocation {
    accommodation: 0.30,
    food: 0.20,
    transport: 0.20,
    activities: 0.25,
    shopping: 0.05,
};

// Ashram stays, simple meals, ceremonies and donations.
const SPIRITUAL: InterestAllocation = InterestAllocation {
    accommodation: 0.25,
    food: 0.15,
    transport: 0.20,
    activities: 0.30,
    shopping: 0.10,
};

// Beach resorts, water sports.
const BEACH: InterestAllocation = InterestAllocation {
    accommodation: 0.40,
    food: 0.25,
    transport: 0.10,
    activities: 0.20,
    shopping: 0.05,
};

/// Base allocation weights for `interest`.
pub fn allocation(interest: Interest) -> &'static InterestAllocation {
    match interest {
        Interest::Adventure => &ADVENTURE,
        Interest::Luxury => &LUXURY,
        Interest::Cultural => &CULTURAL,
        Interest::Food => &FOOD,
        Interest::Nature => &NATURE,
        Interest::Spiritual => &SPIRITUAL,
        Interest::Beach => &BEACH,
    }
}

/// Seasonal cost multiplier, applied to accommodation and activities
/// only.
pub fn seasonal_multiplier(season: Season) -> f64 {
    match season {
        Season::Peak => 1.4,   // Dec-Jan, Apr-May
        Season::High => 1.2,   // Oct-Nov, Feb-Mar
        Season::Medium => 1.0, // Sep, Jun
        Season::Low => 0.8,    // Jul-Aug (monsoon)
    }
}

/// Duration efficiency factor for `(category, bucket)`.  Only
/// accommodation and transport vary with trip length; every other
/// category is 1.0.
pub fn duration_factor(category: Category, bucket: DurationBucket) -> f64 {
    match (category, bucket) {
        // Short stays have less negotiation power, long stays earn
        // bulk discounts.
        (Category::Accommodation, DurationBucket::Short) => 1.2,
        (Category::Accommodation, DurationBucket::Medium) => 1.0,
        (Category::Accommodation, DurationBucket::Long) => 0.9,
        (Category::Transport, DurationBucket::Short) => 1.3,
        (Category::Transport, DurationBucket::Medium) => 1.0,
        (Category::Transport, DurationBucket::Long) => 0.8,
        _ => 1.0,
    }
}

/// Minimum viable daily budget in rupees for `destination_type`.
pub fn min_daily_budget(destination_type: DestinationType) -> u64 {
    match destination_type {
        DestinationType::MetroCities => 3000,
        DestinationType::HillStations => 2500,
        DestinationType::Coastal => 2800,
        DestinationType::Heritage => 2000,
        DestinationType::Tier2Cities => 1800,
    }
}
