use std::collections::BTreeMap;

/// Supported languages for localized text
pub const LANGUAGES: &[&str] = &["en", "pt", "es"];

/// Validated language -> text mapping.
///
/// Construct through `parser::localized_text`; the invariants (at least one
/// entry, supported keys, non-empty values) hold for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub(crate) fn new_unchecked(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: LocalizedText,
    pub coord: Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: LocalizedText,
    pub cities: BTreeMap<String, City>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: LocalizedText,
    pub regions: BTreeMap<String, Region>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confederation {
    pub name: LocalizedText,
    pub nickname: LocalizedText,
    pub countries: BTreeMap<String, Country>,
}

/// Root of the geography tree
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub name: LocalizedText,
    pub nickname: LocalizedText,
    pub confederations: BTreeMap<String, Confederation>,
}

impl World {
    /// Look up a city through all four levels
    pub fn city(&self, location: &Location) -> Option<&City> {
        self.confederations
            .get(&location.confederation)?
            .countries
            .get(&location.country)?
            .regions
            .get(&location.region)?
            .cities
            .get(&location.city)
    }

    pub fn country_count(&self) -> usize {
        self.confederations.values().map(|c| c.countries.len()).sum()
    }

    pub fn region_count(&self) -> usize {
        self.confederations
            .values()
            .flat_map(|c| c.countries.values())
            .map(|c| c.regions.len())
            .sum()
    }

    pub fn city_count(&self) -> usize {
        self.confederations
            .values()
            .flat_map(|c| c.countries.values())
            .flat_map(|c| c.regions.values())
            .map(|r| r.cities.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stadium {
    pub name: LocalizedText,
    pub nickname: LocalizedText,
    pub capacity: u64,
    pub coord: Coordinate,
}

/// Home of a team, as a path through the geography tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub confederation: String,
    pub country: String,
    pub region: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: LocalizedText,
    pub nickname: LocalizedText,
    pub acronym: LocalizedText,
    pub stadium: String,
    pub location: Location,
}

/// Where a competition's roster comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSpec {
    /// Explicit list of team keys
    Teams(Vec<String>),
    /// Concatenation of other competitions' resolved rosters
    Sourced(Vec<String>),
    /// Neither field present
    Unspecified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub name: LocalizedText,
    pub nickname: LocalizedText,
    pub mechanics: String,
    pub relegation: Option<String>,
    pub promotion: Option<String>,
    pub roster: RosterSpec,
}

/// competition key -> dates it is scheduled on, in lexical date order
pub type ScheduleIndex = BTreeMap<String, Vec<String>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> LocalizedText {
        LocalizedText::new_unchecked(BTreeMap::from([("en".to_string(), value.to_string())]))
    }

    #[test]
    fn test_world_lookup_and_counts() {
        let coord = Coordinate { lat: -22.9, lon: -43.2 };
        let region = Region {
            name: text("Rio de Janeiro"),
            cities: BTreeMap::from([
                ("rio".to_string(), City { name: text("Rio"), coord }),
                ("niteroi".to_string(), City { name: text("Niteroi"), coord }),
            ]),
        };
        let country = Country {
            name: text("Brazil"),
            regions: BTreeMap::from([("rj".to_string(), region)]),
        };
        let world = World {
            name: text("World"),
            nickname: text("Earth"),
            confederations: BTreeMap::from([(
                "conmebol".to_string(),
                Confederation {
                    name: text("CONMEBOL"),
                    nickname: text("South America"),
                    countries: BTreeMap::from([("brazil".to_string(), country)]),
                },
            )]),
        };

        assert_eq!(world.country_count(), 1);
        assert_eq!(world.region_count(), 1);
        assert_eq!(world.city_count(), 2);

        let mut location = Location {
            confederation: "conmebol".into(),
            country: "brazil".into(),
            region: "rj".into(),
            city: "rio".into(),
        };
        assert!(world.city(&location).is_some());
        location.region = "sp".into();
        assert!(world.city(&location).is_none());
    }
}
