use crate::models::{Journey, Platform, Priority};
use crate::triage::contains_any;

/// Journeys that require immediate attention
pub const CRITICAL_JOURNEYS: [Journey; 5] = [
    Journey::Login,
    Journey::Transfer,
    Journey::Payment,
    Journey::BalanceView,
    Journey::AccountAccess,
];

/// Description keywords indicating high severity
pub const HIGH_SEVERITY_KEYWORDS: [&str; 6] =
    ["error", "timeout", "crash", "down", "failure", "unavailable"];

/// Predict incident priority from business rules.
///
/// Pure function of its inputs; identical inputs always yield identical
/// outputs. The platform does not currently influence priority but stays
/// part of the contract alongside [`assign_team`].
///
/// Rules, first match wins:
/// 1. More than 10 clients affected: High
/// 2. Critical journey and more than 3 clients: High
/// 3. High-severity keyword in the description and more than 5 clients: High
/// 4. Critical journey, even a single client: Medium
/// 5. 2 or more clients affected: Medium
/// 6. Otherwise: Low
pub fn predict_priority(
    _platform: Platform,
    journey: Journey,
    clients_affected: u32,
    description: &str,
) -> Priority {
    let description = description.to_lowercase();

    if clients_affected > 10 {
        return Priority::High;
    }

    if CRITICAL_JOURNEYS.contains(&journey) && clients_affected > 3 {
        return Priority::High;
    }

    if contains_any(&description, &HIGH_SEVERITY_KEYWORDS) && clients_affected > 5 {
        return Priority::High;
    }

    if CRITICAL_JOURNEYS.contains(&journey) {
        return Priority::Medium;
    }

    if clients_affected >= 2 {
        return Priority::Medium;
    }

    Priority::Low
}
