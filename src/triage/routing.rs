use crate::models::{Journey, Platform, Team};
use crate::triage::contains_any;

/// Description keywords signalling authentication problems
pub const AUTH_KEYWORDS: [&str; 7] = [
    "login",
    "password",
    "auth",
    "authenticate",
    "access",
    "locked",
    "sign in",
];

/// Description keywords signalling data quality or sync problems
pub const DATA_KEYWORDS: [&str; 6] = [
    "sync",
    "mismatch",
    "data",
    "balance",
    "discrepancy",
    "incorrect",
];

/// Description keywords signalling performance problems
pub const PERFORMANCE_KEYWORDS: [&str; 6] =
    ["slow", "timeout", "crash", "frozen", "hang", "performance"];

/// Description keywords signalling transaction problems
pub const TRANSACTION_KEYWORDS: [&str; 5] =
    ["transfer", "payment", "transaction", "send", "withdraw"];

/// Assign an incident to a resolver team.
///
/// Pure function of its inputs. Rules, first match wins:
/// 1. Login journey or an authentication keyword: LCM
/// 2. Data Sync journey or a data keyword: DevOps
/// 3. A performance keyword: DevOps
/// 4. Additiv: Additiv LCM (transaction and general issues share one owner)
/// 5. Avaloq: transaction journeys/keywords go to Avaloq Support,
///    balance/reporting journeys to LCM, everything else to Avaloq Support
///
/// [`Team::PlatformSupport`] is the documented fallback for platforms
/// without a dedicated owner; the closed [`Platform`] enum keeps that
/// branch unreachable until a new platform is added.
pub fn assign_team(platform: Platform, journey: Journey, description: &str) -> Team {
    let description = description.to_lowercase();

    if journey == Journey::Login || contains_any(&description, &AUTH_KEYWORDS) {
        return Team::Lcm;
    }

    if journey == Journey::DataSync || contains_any(&description, &DATA_KEYWORDS) {
        return Team::DevOps;
    }

    if contains_any(&description, &PERFORMANCE_KEYWORDS) {
        return Team::DevOps;
    }

    match platform {
        Platform::Additiv => Team::AdditivLcm,
        Platform::Avaloq => {
            if matches!(journey, Journey::Transfer | Journey::Payment)
                || contains_any(&description, &TRANSACTION_KEYWORDS)
            {
                Team::AvaloqSupport
            } else if matches!(journey, Journey::BalanceView | Journey::Reporting) {
                Team::Lcm
            } else {
                Team::AvaloqSupport
            }
        }
    }
}
