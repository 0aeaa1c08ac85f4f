//! Known names by entity label
//!
//! The built-in lists cover common given names, well-known organizations and
//! places. Extra entries can be merged from a TOML file:
//!
//! ```toml
//! person = ["Kenneth Lay"]
//! org = ["Dynegy"]
//! gpe = ["Sugar Land"]
//! loc = []
//! fac = ["Enron Field"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use redactor_core::{EntityLabel, RedactorError, Result};
use serde::{Deserialize, Serialize};

const GIVEN_NAMES: &[&str] = &[
    "John", "Jane", "Mary", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven",
    "Andrew", "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy", "Jeffrey",
    "Jeff", "Ken", "Andy", "Mike", "Steve", "Tom", "Tim", "Bill", "Bob", "Jim", "Joe", "Dan",
    "Greg", "Vince", "Peter", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Sandra", "Ashley", "Emily", "Alice", "Laura",
    "Anna", "Emma", "Olivia", "Sophia", "Sally", "Louise", "Kate", "Rebecca", "Rachel", "Julia",
    "Maria", "Carlos", "Juan", "Luis", "Ahmed", "Mohammed", "Wei", "Li", "Raj", "Priya",
    "Lokesh",
];

const ORGS: &[&str] = &[
    "Enron", "Google", "Microsoft", "Apple", "Amazon", "IBM", "Intel", "Oracle", "Facebook",
    "Meta", "Netflix", "Tesla", "FBI", "CIA", "SEC", "FERC", "NASA", "IRS", "EPA", "NSA", "UN",
    "United Nations", "NATO", "Congress", "Senate", "Dynegy", "Arthur Andersen", "Andersen",
    "Goldman Sachs", "Bank of America", "Citibank", "Citigroup", "JPMorgan", "JP Morgan",
    "Merrill Lynch", "Morgan Stanley", "Reuters", "Bloomberg", "Walmart", "Exxon", "ExxonMobil",
    "Chevron", "Shell", "BP", "Harvard", "Stanford", "MIT", "Yale",
];

const GPES: &[&str] = &[
    // Countries
    "United States", "United States of America", "USA", "U.S.", "U.S.A.", "US", "America",
    "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru", "Colombia", "United Kingdom",
    "UK", "U.K.", "England", "Scotland", "Wales", "Ireland", "France", "Germany", "Spain",
    "Portugal", "Italy", "Netherlands", "Belgium", "Switzerland", "Austria", "Poland", "Sweden",
    "Norway", "Denmark", "Finland", "Greece", "Turkey", "Russia", "Ukraine", "India", "Pakistan",
    "China", "Japan", "Korea", "South Korea", "Vietnam", "Thailand", "Indonesia", "Philippines",
    "Australia", "New Zealand", "Nigeria", "Egypt", "Kenya", "South Africa", "Israel", "Iran",
    "Iraq", "Saudi Arabia", "Qatar",
    // US states
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah",
    "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
    // Cities
    "New York City", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "Austin", "San Francisco", "Seattle", "Denver",
    "Boston", "Atlanta", "Miami", "Orlando", "Tampa", "Gainesville", "Portland", "Detroit",
    "Las Vegas", "Jersey City", "Newark", "Springfield", "Omaha", "Calgary", "Toronto",
    "Vancouver", "Montreal", "London", "Paris", "Berlin", "Madrid", "Rome", "Amsterdam",
    "Brussels", "Zurich", "Moscow", "Tokyo", "Beijing", "Shanghai", "Hong Kong", "Singapore",
    "Mumbai", "Delhi", "New Delhi", "Sydney", "Dubai", "Cairo", "Lagos",
];

const LOCS: &[&str] = &[
    "Europe", "Asia", "Africa", "Antarctica", "North America", "South America",
    "Latin America", "Middle East", "Pacific", "Atlantic", "Pacific Ocean", "Atlantic Ocean",
    "Indian Ocean", "Arctic", "Gulf of Mexico", "Rocky Mountains", "Rockies", "Alps",
    "Himalayas", "Sahara", "Amazon River", "Mississippi River", "Great Lakes", "Silicon Valley",
    "Midwest", "West Coast", "East Coast",
];

const FACS: &[&str] = &[
    "Golden Gate Bridge", "Brooklyn Bridge", "Empire State Building", "White House",
    "Pentagon", "Eiffel Tower", "Enron Field", "JFK", "LaGuardia", "Heathrow",
];

/// Extra entries merged over the built-in lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerFile {
    #[serde(default)]
    pub person: Vec<String>,
    #[serde(default)]
    pub org: Vec<String>,
    #[serde(default)]
    pub gpe: Vec<String>,
    #[serde(default)]
    pub loc: Vec<String>,
    #[serde(default)]
    pub fac: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Gazetteer {
    given_names: HashSet<String>,
    person: HashSet<String>,
    org: HashSet<String>,
    gpe: HashSet<String>,
    loc: HashSet<String>,
    fac: HashSet<String>,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Gazetteer {
    /// Built-in lists only
    pub fn builtin() -> Self {
        Self {
            given_names: to_set(GIVEN_NAMES),
            person: HashSet::new(),
            org: to_set(ORGS),
            gpe: to_set(GPES),
            loc: to_set(LOCS),
            fac: to_set(FACS),
        }
    }

    /// Built-in lists extended with the entries of a TOML gazetteer file
    ///
    /// A missing or malformed file means the entity source is unavailable.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RedactorError::SourceUnavailable(format!(
                "cannot read gazetteer {}: {}",
                path.display(),
                e
            ))
        })?;
        let file: GazetteerFile = toml::from_str(&content).map_err(|e| {
            RedactorError::SourceUnavailable(format!(
                "invalid gazetteer {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut gazetteer = Self::builtin();
        gazetteer.extend(file);
        Ok(gazetteer)
    }

    pub fn extend(&mut self, file: GazetteerFile) {
        self.person.extend(file.person);
        self.org.extend(file.org);
        self.gpe.extend(file.gpe);
        self.loc.extend(file.loc);
        self.fac.extend(file.fac);
    }

    /// Label of a known phrase. Organizations win over places when a phrase is listed twice.
    pub fn lookup(&self, phrase: &str) -> Option<EntityLabel> {
        if self.org.contains(phrase) {
            Some(EntityLabel::Org)
        } else if self.fac.contains(phrase) {
            Some(EntityLabel::Fac)
        } else if self.loc.contains(phrase) {
            Some(EntityLabel::Loc)
        } else if self.gpe.contains(phrase) {
            Some(EntityLabel::Gpe)
        } else if self.person.contains(phrase) {
            Some(EntityLabel::Person)
        } else {
            None
        }
    }

    pub fn is_given_name(&self, word: &str) -> bool {
        self.given_names.contains(word)
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
