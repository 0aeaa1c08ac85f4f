//! Word lists used by the sentence splitter and entity recognizer

/// Lowercased abbreviations (without the final period) that do not end a sentence
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "ave", "rd", "blvd", "ln", "mt", "ft",
    "inc", "corp", "co", "ltd", "llc", "dept", "univ", "assn", "bros", "vs", "vol", "gen",
    "gov", "sen", "rep", "capt", "col", "lt", "sgt", "rev", "hon", "e.g", "i.e", "a.m", "p.m",
    "u.s", "u.k", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "mon", "tue", "wed", "thu", "fri",
];

/// Honorifics that mark the following name as a person and are not part of it
pub const TITLES: &[&str] = &[
    "Mr", "Mr.", "Mrs", "Mrs.", "Ms", "Ms.", "Miss", "Dr", "Dr.", "Prof", "Prof.", "Sir", "Madam",
    "Sen.", "Senator", "Gov.", "Governor", "Rep.", "President", "Judge", "Capt.", "Rev.",
];

/// Capitalized words that start sentences but never start a name
pub const FUNCTION_WORDS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "We", "I", "He", "She", "It", "They", "You",
    "Our", "My", "His", "Her", "Their", "Its", "Your", "In", "On", "At", "For", "From", "To",
    "With", "By", "And", "But", "Or", "If", "When", "While", "After", "Before", "As", "So",
    "Visit", "Contact", "Call", "Dear", "Hello", "Hi", "Please", "Thanks", "Thank", "Also", "Then",
    "There", "Here", "Regards", "Best", "Sincerely", "Subject", "Re", "Fw", "Fwd", "Yes", "No",
    "Not", "All", "Any", "Some", "Each", "Every", "Today", "Tomorrow", "Yesterday", "What", "Who",
    "Where", "Why", "How", "Which", "Meet", "Let", "Send", "Note", "See",
];

/// Lowercase words allowed inside a multi-word name
pub const CONNECTORS: &[&str] = &["of", "and", "&", "de", "del", "der", "van", "von", "la", "du"];

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep",
    "Sept", "Oct", "Nov", "Dec",
];

pub const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "Mon", "Tue",
    "Wed", "Thu", "Fri", "Sat", "Sun",
];

/// Final words that make a name an organization
pub const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Inc.", "Corp", "Corp.", "Corporation", "Company", "Co.", "LLC", "LLP", "Ltd",
    "Ltd.", "Group", "Partners", "Holdings", "Bank", "Association", "Institute", "Foundation",
    "Agency", "Committee", "Council", "Commission", "Department", "Services", "Energy",
    "Industries", "Enterprises", "Technologies", "Systems", "Airlines", "Capital", "Trust",
    "Society", "Club", "Union", "University", "College", "School", "Hospital", "Church",
];

/// First words that make an `X of Y` name an organization
pub const ORG_HEADS: &[&str] = &[
    "University", "Bank", "Department", "Ministry", "Institute", "College", "Board", "Bureau",
    "Office", "Museum", "Church", "School", "Commission",
];

/// Final words that make a name a facility
pub const FAC_SUFFIXES: &[&str] = &[
    "Street", "St.", "Avenue", "Ave.", "Road", "Rd.", "Boulevard", "Blvd.", "Lane", "Drive",
    "Highway", "Parkway", "Airport", "Bridge", "Building", "Tower", "Towers", "Hall", "Center",
    "Centre", "Stadium", "Arena", "Station", "Plaza", "Square", "Terminal", "Port",
];

/// Final words that make a name a non-political location
pub const LOC_SUFFIXES: &[&str] = &[
    "River", "Lake", "Mountain", "Mountains", "Ocean", "Sea", "Valley", "Island", "Islands",
    "Desert", "Bay", "Canyon", "Forest", "Gulf", "Peninsula", "Coast", "Falls",
];

pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

pub fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

/// `word` is a single letter followed by a period, like the `F.` in `John F. Kennedy`
pub fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_alphabetic()
    )
}

/// `word` ends with a period that belongs to it rather than to the sentence
pub fn keeps_period(word: &str) -> bool {
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    is_initial(word) || stem.contains('.') || contains(ABBREVIATIONS, &stem.to_lowercase())
}
