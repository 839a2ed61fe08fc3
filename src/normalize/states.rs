//! U.S. state and District of Columbia names with their postal codes.

/// Full name to two-letter code. "West Virginia" precedes "Virginia" so
/// alternations built from this table try the longer name first.
pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("West Virginia", "WV"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Territory codes accepted as the state of a location.
pub const TERRITORY_CODES: &[&str] = &["PR", "GQ"];

/// Whether `code` is a state, DC or territory code a location may carry.
pub fn is_location_code(code: &str) -> bool {
    STATES.iter().any(|(_, state)| *state == code) || TERRITORY_CODES.contains(&code)
}

/// Postal code for a full state name.
pub fn abbreviation(name: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_every_state_and_dc() {
        assert_eq!(STATES.len(), 51);
        assert_eq!(abbreviation("District of Columbia"), Some("DC"));
        assert_eq!(abbreviation("West Virginia"), Some("WV"));
        assert_eq!(abbreviation("Puerto Rico"), None);
    }

    #[test]
    fn test_location_codes() {
        assert!(is_location_code("TX"));
        assert!(is_location_code("DC"));
        assert!(is_location_code("PR"));
        assert!(is_location_code("GQ"));
        assert!(!is_location_code("US"));
        assert!(!is_location_code("ZZ"));
        assert!(!is_location_code("GU"));
    }
}
