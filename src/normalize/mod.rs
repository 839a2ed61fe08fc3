//! Location string normalization.
//!
//! Feed locations arrive in many shapes ("Vancouver, Washington",
//! "Washington DC, DC United States", "City, PR Puerto Rico", ...). The
//! normalizer runs an ordered battery of [`LocationRule`]s over a raw string;
//! the first rule that matches produces the result and no later rule is
//! tried. When nothing matches the input comes back verbatim.
//!
//! Matching is case-sensitive.

mod rules;
pub mod states;

pub use rules::LocationRule;

/// Rewrite a raw feed location into canonical `City, ST` form when a rule
/// recognizes it.
pub fn normalize_location(raw: &str) -> String {
    LocationRule::ALL
        .iter()
        .find_map(|rule| rule.apply(raw))
        .unwrap_or_else(|| raw.to_string())
}
