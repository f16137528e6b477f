//! Budget computation engine.
//!
//! The `engine` module is responsible for turning a [`BudgetRequest`]
//! into a [`BudgetBreakdown`] or a [`BudgetRecommendation`].  The
//! computation is a pure function of the request and the reference
//! tables in [`crate::tables`]: classify the destination, season and
//! duration, adjust the interest-based base weights by the resulting
//! multipliers, normalise, and scale to the requested total.

use crate::error::BudgetError;
use crate::models::{
    BreakdownMetadata, BudgetBreakdown, BudgetRecommendation, BudgetRequest, Category,
    CategoryAmounts, DestinationType, DurationBucket, Interest, Season,
};
use crate::tables;
use chrono::{Datelike, Local, NaiveDate};

/// Classifies a free-text destination by scanning each profile's
/// representative city names for a case-insensitive substring match.
/// Profile groups are scanned in the order of [`DestinationType::ALL`]
/// and the first hit wins; unmatched destinations fall back to
/// [`DestinationType::Tier2Cities`].
pub fn destination_type_for(destination: &str) -> DestinationType {
    let destination_lower = destination.to_lowercase();
    for destination_type in DestinationType::ALL {
        let hit = tables::profile(destination_type)
            .cities
            .iter()
            .any(|city| destination_lower.contains(&city.to_lowercase()));
        if hit {
            return destination_type;
        }
    }
    DestinationType::Tier2Cities
}

/// Season for a calendar month (1-12).  Year and day never matter.
pub fn season_for_month(month: u32) -> Season {
    match month {
        12 | 1 | 4 | 5 => Season::Peak,   // winter + pre-summer
        10 | 11 | 2 | 3 => Season::High,  // post-monsoon + spring
        9 | 6 => Season::Medium,
        _ => Season::Low, // monsoon months
    }
}

/// Season for an optional travel date, defaulting to today.
pub fn season_for(travel_date: Option<NaiveDate>) -> Season {
    let date = travel_date.unwrap_or_else(|| Local::now().date_naive());
    season_for_month(date.month())
}

/// Duration bucket for a trip length in days.
pub fn duration_bucket_for(duration: u32) -> DurationBucket {
    if duration <= 3 {
        DurationBucket::Short
    } else if duration <= 7 {
        DurationBucket::Medium
    } else {
        DurationBucket::Long
    }
}

fn validate(request: &BudgetRequest) -> Result<(), BudgetError> {
    if request.duration == 0 {
        return Err(BudgetError::InvalidDuration(request.duration));
    }
    if !request.total_budget.is_finite() || request.total_budget <= 0.0 {
        return Err(BudgetError::InvalidBudget(request.total_budget));
    }
    Ok(())
}

/// Picks the base allocation interest: the first entry of the list
/// when it parses as a known tag, `Cultural` otherwise.  Entries past
/// the first are never consulted for the base split.
fn primary_interest(interests: &[String]) -> Interest {
    interests
        .first()
        .and_then(|tag| Interest::parse(tag))
        .unwrap_or(Interest::Cultural)
}

/// Computes the optimised budget breakdown for a trip.
///
/// The base weights of the primary interest are adjusted per
/// category: by the destination profile's multiplier, by the seasonal
/// multiplier for accommodation and activities, and by the duration
/// factor for accommodation and transport.  Adjusted weights are
/// normalised to sum to 1.0 and scaled to `total_budget`.  Each
/// category rounds half away from zero independently (all values here
/// are non-negative, so this is plain half-up); no remainder is
/// redistributed, so the amounts may drift a few rupees from the
/// requested total.
pub fn calculate_optimized_budget(
    request: &BudgetRequest,
) -> Result<BudgetBreakdown, BudgetError> {
    validate(request)?;

    let interest = primary_interest(&request.interests);
    let base = tables::allocation(interest);

    let destination_type = destination_type_for(&request.destination);
    let dest_profile = tables::profile(destination_type);
    let season = season_for(request.travel_date);
    let seasonal_multiplier = tables::seasonal_multiplier(season);
    let duration_bucket = duration_bucket_for(request.duration);

    let mut adjusted = [0.0f64; Category::ALL.len()];
    for (slot, category) in adjusted.iter_mut().zip(Category::ALL) {
        let mut multiplier = dest_profile.multiplier(category);
        if matches!(category, Category::Accommodation | Category::Activities) {
            multiplier *= seasonal_multiplier;
        }
        multiplier *= tables::duration_factor(category, duration_bucket);
        *slot = base.weight(category) * multiplier;
    }

    // The shipped tables cannot produce a non-positive sum (weights
    // sum to 1.0, multipliers are > 0), but an edited table must fail
    // loudly instead of dividing by zero.
    let weight_sum: f64 = adjusted.iter().sum();
    if !weight_sum.is_finite() || weight_sum <= 0.0 {
        return Err(BudgetError::InvalidTables { weight_sum });
    }

    let mut amounts = CategoryAmounts::default();
    for (slot, category) in adjusted.iter().zip(Category::ALL) {
        let amount = (*slot / weight_sum * request.total_budget).round();
        amounts.set(category, amount as u64);
    }

    Ok(BudgetBreakdown {
        amounts,
        metadata: BreakdownMetadata {
            destination_type,
            season,
            duration_bucket,
            seasonal_multiplier,
            primary_interest: interest,
        },
    })
}

/// Computes the breakdown plus per-day costs, advisory tips and
/// budget adequacy warnings.
///
/// A warning is emitted when the daily budget falls below the minimum
/// viable daily budget for the resolved destination type.  Seasonal
/// advisories fire for peak and monsoon travel; interest tips fire
/// when `Adventure` or `Food` appears anywhere in the interest list
/// and are additive.
pub fn get_budget_recommendations(
    request: &BudgetRequest,
) -> Result<BudgetRecommendation, BudgetError> {
    let breakdown = calculate_optimized_budget(request)?;
    let duration = f64::from(request.duration);

    let mut per_day_costs = CategoryAmounts::default();
    for category in Category::ALL {
        let per_day = (breakdown.amounts.get(category) as f64 / duration).round();
        per_day_costs.set(category, per_day as u64);
    }

    let mut recommendations = Vec::new();
    let mut warnings = Vec::new();

    let min_daily = tables::min_daily_budget(breakdown.metadata.destination_type);
    if request.total_budget / duration < min_daily as f64 {
        let recommended_total = min_daily * u64::from(request.duration);
        warnings.push(format!(
            "Budget might be tight for {}. Recommended minimum: \u{20b9}{}",
            request.destination,
            group_thousands(recommended_total)
        ));
    }

    match breakdown.metadata.season {
        Season::Peak => recommendations
            .push("Peak season - book accommodations early for better rates".to_string()),
        Season::Low => recommendations.push(
            "Monsoon season - budget extra for indoor activities and transport delays".to_string(),
        ),
        _ => {}
    }

    let tagged: Vec<Interest> = request
        .interests
        .iter()
        .filter_map(|tag| Interest::parse(tag))
        .collect();
    if tagged.contains(&Interest::Adventure) {
        recommendations
            .push("Consider equipment rental vs purchase for cost efficiency".to_string());
    }
    if tagged.contains(&Interest::Food) {
        recommendations
            .push("Allocate extra budget for food tours and fine dining experiences".to_string());
    }

    Ok(BudgetRecommendation {
        budget_breakdown: breakdown.amounts,
        per_day_costs,
        recommendations,
        warnings,
        metadata: breakdown.metadata,
    })
}

/// Formats a rupee amount with thousands separators, e.g. 9000 ->
/// "9,000".
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(destination: &str, duration: u32, total_budget: f64) -> BudgetRequest {
        BudgetRequest {
            destination: destination.to_string(),
            duration,
            total_budget,
            interests: Vec::new(),
            travel_date: None,
        }
    }

    #[test]
    fn test_destination_classification() {
        assert_eq!(
            destination_type_for("Manali, Himachal Pradesh"),
            DestinationType::HillStations
        );
        assert_eq!(destination_type_for("goa"), DestinationType::Coastal);
        assert_eq!(destination_type_for("Agra"), DestinationType::Heritage);
        // Unknown destinations default to tier-2.
        assert_eq!(
            destination_type_for("Somewhere Unmapped"),
            DestinationType::Tier2Cities
        );
    }

    #[test]
    fn test_destination_classification_is_order_sensitive() {
        // Delhi (metro) and Shimla (hill station) both match; the
        // metro group is scanned first.
        assert_eq!(
            destination_type_for("Delhi to Shimla road trip"),
            DestinationType::MetroCities
        );
    }

    #[test]
    fn test_season_for_month() {
        for month in [12, 1, 4, 5] {
            assert_eq!(season_for_month(month), Season::Peak);
        }
        for month in [10, 11, 2, 3] {
            assert_eq!(season_for_month(month), Season::High);
        }
        for month in [9, 6] {
            assert_eq!(season_for_month(month), Season::Medium);
        }
        for month in [7, 8] {
            assert_eq!(season_for_month(month), Season::Low);
        }
    }

    #[test]
    fn test_season_for_date_uses_month_only() {
        let april = NaiveDate::from_ymd_opt(2023, 4, 15).unwrap();
        let july = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(season_for(Some(april)), Season::Peak);
        assert_eq!(season_for(Some(july)), Season::Low);
    }

    #[test]
    fn test_duration_buckets() {
        assert_eq!(duration_bucket_for(1), DurationBucket::Short);
        assert_eq!(duration_bucket_for(3), DurationBucket::Short);
        assert_eq!(duration_bucket_for(4), DurationBucket::Medium);
        assert_eq!(duration_bucket_for(7), DurationBucket::Medium);
        assert_eq!(duration_bucket_for(8), DurationBucket::Long);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let result = calculate_optimized_budget(&request("Goa", 0, 20000.0));
        assert!(matches!(result, Err(BudgetError::InvalidDuration(0))));
    }

    #[test]
    fn test_invalid_budget_rejected() {
        assert!(matches!(
            calculate_optimized_budget(&request("Goa", 4, 0.0)),
            Err(BudgetError::InvalidBudget(_))
        ));
        assert!(matches!(
            calculate_optimized_budget(&request("Goa", 4, -500.0)),
            Err(BudgetError::InvalidBudget(_))
        ));
        assert!(matches!(
            calculate_optimized_budget(&request("Goa", 4, f64::NAN)),
            Err(BudgetError::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_empty_interests_fall_back_to_cultural() {
        let breakdown = calculate_optimized_budget(&request("Kochi", 5, 30000.0)).unwrap();
        assert_eq!(breakdown.metadata.primary_interest, Interest::Cultural);
    }

    #[test]
    fn test_unrecognized_primary_interest_falls_back_to_cultural() {
        let mut req = request("Kochi", 5, 30000.0);
        req.interests = vec!["Spelunking".to_string(), "Luxury".to_string()];
        let breakdown = calculate_optimized_budget(&req).unwrap();
        assert_eq!(breakdown.metadata.primary_interest, Interest::Cultural);
    }

    #[test]
    fn test_amounts_sum_close_to_total() {
        let mut req = request("Mumbai", 6, 75000.0);
        req.interests = vec!["Luxury".to_string()];
        req.travel_date = NaiveDate::from_ymd_opt(2025, 11, 20);
        let breakdown = calculate_optimized_budget(&req).unwrap();
        let total = breakdown.amounts.total() as i64;
        assert!((total - 75000).abs() <= 5, "total drifted to {}", total);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(900), "900");
        assert_eq!(group_thousands(9000), "9,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
