//! Priority classification and resolver-team routing.
//!
//! Both functions are ordered decision lists: guards are evaluated top to
//! bottom and the first match wins. Several branches deliberately overlap,
//! so the order encodes precedence and must not be rearranged.

pub mod classifier;
pub mod routing;

pub use classifier::predict_priority;
pub use routing::assign_team;

/// Case-insensitive callers lowercase the haystack once; needles are
/// already lowercase constants.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
