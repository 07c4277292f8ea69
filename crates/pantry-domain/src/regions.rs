//! Countries and their first-level regions offered by the candidate form.

const USA: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "District of Columbia", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
    "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts",
    "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota",
    "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

const CANADA: &[&str] = &[
    "Alberta", "British Columbia", "Manitoba", "New Brunswick", "Newfoundland and Labrador",
    "Northwest Territories", "Nova Scotia", "Nunavut", "Ontario", "Prince Edward Island",
    "Quebec", "Saskatchewan", "Yukon",
];

const MEXICO: &[&str] = &[
    "Aguascalientes", "Baja California", "Baja California Sur", "Campeche", "Chiapas",
    "Chihuahua", "Coahuila", "Colima", "Durango", "Guanajuato", "Guerrero", "Hidalgo",
    "Jalisco", "Mexico City", "Michoacán", "Morelos", "Nayarit", "Nuevo León", "Oaxaca",
    "Puebla", "Querétaro", "Quintana Roo", "San Luis Potosí", "Sinaloa", "Sonora", "State of Mexico",
    "Tabasco", "Tamaulipas", "Tlaxcala", "Veracruz", "Yucatán", "Zacatecas",
];

const UNITED_KINGDOM: &[&str] = &["England", "Northern Ireland", "Scotland", "Wales"];

const AUSTRALIA: &[&str] = &[
    "Australian Capital Territory", "New South Wales", "Northern Territory", "Queensland",
    "South Australia", "Tasmania", "Victoria", "Western Australia",
];

/// Country names in display order
pub const COUNTRIES: &[&str] = &["Australia", "Canada", "Mexico", "USA", "United Kingdom"];

/// Regions for a country, empty for unknown countries
pub fn regions_for(country: &str) -> &'static [&'static str] {
    match country {
        "USA" => USA,
        "Canada" => CANADA,
        "Mexico" => MEXICO,
        "United Kingdom" => UNITED_KINGDOM,
        "Australia" => AUSTRALIA,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_regions() {
        for country in COUNTRIES {
            assert!(!regions_for(country).is_empty(), "{country} has no regions");
        }
        assert!(regions_for("Atlantis").is_empty());
    }
}
