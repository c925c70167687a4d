//! Static lookup tables: nationality -> continent, position -> group, plus name folding.

use crate::models::{Continent, PositionGroup};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const NATIONALITY_CONTINENTS: &[(&str, Continent)] = &[
    // Africa
    ("Algeria", Continent::Africa),
    ("Angola", Continent::Africa),
    ("Burkina Faso", Continent::Africa),
    ("Cameroon", Continent::Africa),
    ("Cape Verde Islands", Continent::Africa),
    ("Congo DR", Continent::Africa),
    ("Côte d'Ivoire", Continent::Africa),
    ("Egypt", Continent::Africa),
    ("Gabon", Continent::Africa),
    ("Gambia", Continent::Africa),
    ("Ghana", Continent::Africa),
    ("Guinea", Continent::Africa),
    ("Mali", Continent::Africa),
    ("Morocco", Continent::Africa),
    ("Nigeria", Continent::Africa),
    ("Senegal", Continent::Africa),
    ("South Africa", Continent::Africa),
    ("Tunisia", Continent::Africa),
    // South America
    ("Argentina", Continent::SouthAmerica),
    ("Brazil", Continent::SouthAmerica),
    ("Chile", Continent::SouthAmerica),
    ("Colombia", Continent::SouthAmerica),
    ("Ecuador", Continent::SouthAmerica),
    ("Paraguay", Continent::SouthAmerica),
    ("Peru", Continent::SouthAmerica),
    ("Uruguay", Continent::SouthAmerica),
    ("Venezuela", Continent::SouthAmerica),
    // North / Central America & Caribbean
    ("Canada", Continent::NorthAmerica),
    ("Costa Rica", Continent::NorthAmerica),
    ("Jamaica", Continent::NorthAmerica),
    ("Mexico", Continent::NorthAmerica),
    ("United States", Continent::NorthAmerica),
    // Europe
    ("Albania", Continent::Europe),
    ("Armenia", Continent::Europe),
    ("Austria", Continent::Europe),
    ("Belgium", Continent::Europe),
    ("Bosnia and Herzegovina", Continent::Europe),
    ("Croatia", Continent::Europe),
    ("Czechia", Continent::Europe),
    ("Denmark", Continent::Europe),
    ("England", Continent::Europe),
    ("Finland", Continent::Europe),
    ("France", Continent::Europe),
    ("Georgia", Continent::Europe),
    ("Germany", Continent::Europe),
    ("Greece", Continent::Europe),
    ("Hungary", Continent::Europe),
    ("Iceland", Continent::Europe),
    ("Italy", Continent::Europe),
    ("Kosovo", Continent::Europe),
    ("Netherlands", Continent::Europe),
    ("North Macedonia", Continent::Europe),
    ("Northern Ireland", Continent::Europe),
    ("Norway", Continent::Europe),
    ("Poland", Continent::Europe),
    ("Portugal", Continent::Europe),
    ("Republic of Ireland", Continent::Europe),
    ("Romania", Continent::Europe),
    ("Scotland", Continent::Europe),
    ("Serbia", Continent::Europe),
    ("Slovakia", Continent::Europe),
    ("Slovenia", Continent::Europe),
    ("Spain", Continent::Europe),
    ("Sweden", Continent::Europe),
    ("Switzerland", Continent::Europe),
    ("Türkiye", Continent::Europe),
    ("Ukraine", Continent::Europe),
    ("Wales", Continent::Europe),
    // Asia
    ("Iran", Continent::Asia),
    ("Japan", Continent::Asia),
    ("Korea Republic", Continent::Asia),
    ("Saudi Arabia", Continent::Asia),
    ("Uzbekistan", Continent::Asia),
    // Oceania
    ("Australia", Continent::Oceania),
    ("New Zealand", Continent::Oceania),
];

const POSITION_GROUPS: &[(&str, PositionGroup)] = &[
    ("GK", PositionGroup::Goalkeeper),
    ("CB", PositionGroup::Defender),
    ("LB", PositionGroup::Defender),
    ("RB", PositionGroup::Defender),
    ("LWB", PositionGroup::Defender),
    ("RWB", PositionGroup::Defender),
    ("CDM", PositionGroup::Midfielder),
    ("CM", PositionGroup::Midfielder),
    ("CAM", PositionGroup::Midfielder),
    ("LM", PositionGroup::Midfielder),
    ("RM", PositionGroup::Midfielder),
    ("ST", PositionGroup::Forward),
    ("CF", PositionGroup::Forward),
    ("LW", PositionGroup::Forward),
    ("RW", PositionGroup::Forward),
    ("LF", PositionGroup::Forward),
    ("RF", PositionGroup::Forward),
];

/// Continent for a nationality name; `Unknown` when not in the table.
pub fn continent_of(nationality: &str) -> Continent {
    let nationality = nationality.trim();
    NATIONALITY_CONTINENTS
        .iter()
        .find(|(n, _)| *n == nationality)
        .map(|(_, c)| *c)
        .unwrap_or_default()
}

/// Group for a position code (case-insensitive); `Unknown` when not in the table.
pub fn position_group_of(position: &str) -> PositionGroup {
    let position = position.trim();
    POSITION_GROUPS
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(position))
        .map(|(_, g)| *g)
        .unwrap_or_default()
}

/// Letters NFKD leaves intact but users type as plain ASCII.
fn transliterate(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'ł' => Some("l"),
        'đ' | 'ð' => Some("d"),
        'ı' => Some("i"),
        'þ' => Some("th"),
        _ => None,
    }
}

/// Lowercase, accent-free, whitespace-collapsed form of a name.
///
/// "Kylian Mbappé  Lottin" -> "kylian mbappe lottin".
pub fn fold_name(name: &str) -> String {
    let lower: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    let mut folded = String::with_capacity(lower.len());
    for c in lower.chars() {
        match transliterate(c) {
            Some(s) => folded.push_str(s),
            None => folded.push(c),
        }
    }
    folded.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_lookup() {
        assert_eq!(continent_of("England"), Continent::Europe);
        assert_eq!(continent_of("Côte d'Ivoire"), Continent::Africa);
        assert_eq!(continent_of("Korea Republic"), Continent::Asia);
        assert_eq!(continent_of("Atlantis"), Continent::Unknown);
        assert_eq!(continent_of(""), Continent::Unknown);
    }

    #[test]
    fn test_position_group_lookup() {
        assert_eq!(position_group_of("GK"), PositionGroup::Goalkeeper);
        assert_eq!(position_group_of("rwb"), PositionGroup::Defender);
        assert_eq!(position_group_of("CAM"), PositionGroup::Midfielder);
        assert_eq!(position_group_of(" ST "), PositionGroup::Forward);
        assert_eq!(position_group_of("SW"), PositionGroup::Unknown);
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("Kylian Mbappé  Lottin"), "kylian mbappe lottin");
        assert_eq!(fold_name("  Martin Ødegaard "), "martin odegaard");
        assert_eq!(fold_name("Robert Lewandowski"), "robert lewandowski");
        assert_eq!(fold_name("Łukasz Fabiański"), "lukasz fabianski");
        assert_eq!(fold_name("Rúben Dias"), "ruben dias");
        assert_eq!(fold_name(""), "");
    }
}
