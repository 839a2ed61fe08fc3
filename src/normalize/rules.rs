//! The individual location rewrite rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::states::{self, STATES};

/// "City, State" or "City State" ending in a full state name.
static STATE_NAME: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<String> = STATES.iter().map(|(name, _)| regex::escape(name)).collect();
    Regex::new(&format!(r"^(?P<city>.+?),? (?P<state>{})$", names.join("|")))
        .expect("valid state name pattern")
});

/// Washington DC spelled any of the ways the feed spells it.
static DISTRICT_OF_COLUMBIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:Washington,? (?:DC|D\.C\.)",
        r"|(?:Washington, )?(?:District|Dist\.?) [Oo]f Columbia(?: County)?)",
        r"(?:,? (?:DC|D\.C\.))?",
        r"(?:,? (?:District|Dist\.?) of Columbia)?",
        r"(?:,? (?:United States|US))?$",
    ))
    .expect("valid DC pattern")
});

static DC_METRO_AREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Washington,? DC Metro Area(?:, DC)?(?:,? (?:United States|US))?$")
        .expect("valid DC metro pattern")
});

static CENTRAL_OFFICE_DC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Central Office, Washington,? DC(?:,? (?:United States|US))?$")
        .expect("valid central office pattern")
});

static PUERTO_RICO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<city>.+?)(?:, PR)?,? Puerto Rico$").expect("valid Puerto Rico pattern")
});

static GUAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<city>.+?)(?:, (?:GQ|GU))?,? Guam$").expect("valid Guam pattern")
});

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)").expect("valid parenthesis pattern"));

static ARIZONA_STRIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<place>.+?)(?:,? (?:United States|US))?[,\s]*Arizona Strip$")
        .expect("valid Arizona Strip pattern")
});

/// "City, ST" followed by a country qualifier.
static COUNTRY_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<place>.+?, [A-Z]{2}),? (?:United States|US)$")
        .expect("valid country suffix pattern")
});

/// One self-contained rewrite. [`LocationRule::ALL`] fixes the order in
/// which the normalizer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRule {
    /// "Vancouver, Washington" -> "Vancouver, WA"
    StateName,
    /// "Washington DC, US", "Dist. of Columbia, DC United States", ... -> "Washington, DC"
    DistrictOfColumbia,
    /// "Washington DC Metro Area, DC" -> "Washington Metro Area, DC"
    DcMetroArea,
    /// "Central Office, Washington DC" -> "Central Office, Washington, DC"
    CentralOfficeDc,
    /// "City, PR Puerto Rico" -> "City, PR"
    PuertoRico,
    /// "City Guam" -> "City, GQ"
    Guam,
    /// "Suburb, (Suitland, MD)" -> "Suburb, Suitland, MD"
    Parenthetical,
    /// "Saint George, UT, US Arizona Strip" -> "Saint George, UT"
    ArizonaStrip,
    /// "Dyess AFB, TX, US" -> "Dyess AFB, TX"
    CountrySuffix,
}

impl LocationRule {
    /// Every rule in priority order.
    pub const ALL: [LocationRule; 9] = [
        LocationRule::StateName,
        LocationRule::DistrictOfColumbia,
        LocationRule::DcMetroArea,
        LocationRule::CentralOfficeDc,
        LocationRule::PuertoRico,
        LocationRule::Guam,
        LocationRule::Parenthetical,
        LocationRule::ArizonaStrip,
        LocationRule::CountrySuffix,
    ];

    /// Rewrite `raw` if this rule recognizes it.
    pub fn apply(self, raw: &str) -> Option<String> {
        match self {
            LocationRule::StateName => {
                let caps = STATE_NAME.captures(raw)?;
                let code = states::abbreviation(&caps["state"])?;
                Some(format!("{}, {}", &caps["city"], code))
            }
            LocationRule::DistrictOfColumbia => DISTRICT_OF_COLUMBIA
                .is_match(raw)
                .then(|| "Washington, DC".to_string()),
            LocationRule::DcMetroArea => DC_METRO_AREA
                .is_match(raw)
                .then(|| "Washington Metro Area, DC".to_string()),
            LocationRule::CentralOfficeDc => CENTRAL_OFFICE_DC
                .is_match(raw)
                .then(|| "Central Office, Washington, DC".to_string()),
            LocationRule::PuertoRico => territory(&PUERTO_RICO, raw, "PR"),
            LocationRule::Guam => territory(&GUAM, raw, "GQ"),
            LocationRule::Parenthetical => PARENTHESIZED
                .is_match(raw)
                .then(|| PARENTHESIZED.replace_all(raw, "$1").into_owned()),
            LocationRule::ArizonaStrip => {
                let caps = ARIZONA_STRIP.captures(raw)?;
                let place = caps["place"].trim_end_matches(|c: char| c == ',' || c.is_whitespace());
                (!place.is_empty()).then(|| place.to_string())
            }
            LocationRule::CountrySuffix => COUNTRY_SUFFIX
                .captures(raw)
                .map(|caps| caps["place"].to_string()),
        }
    }
}

/// "City[, XX] Territory" -> "City, XX".
fn territory(pattern: &Regex, raw: &str, code: &str) -> Option<String> {
    let caps = pattern.captures(raw)?;
    let city = caps["city"].trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    if city.is_empty() {
        return None;
    }
    Some(format!("{}, {}", city, code))
}
