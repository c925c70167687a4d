//! PlayerRecord, radar stats, and the continent / position group categories.

use serde::{Deserialize, Serialize};

/// EA player id from the dataset (used for lookups by the client).
pub type PlayerId = u32;

/// Coarse geographic grouping of a nationality ("close" tier for nationality).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    #[default]
    Unknown,
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Coarse grouping of on-field positions ("close" tier for position).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    #[default]
    Unknown,
}

impl std::fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PositionGroup::Goalkeeper => "Goalkeeper",
            PositionGroup::Defender => "Defender",
            PositionGroup::Midfielder => "Midfielder",
            PositionGroup::Forward => "Forward",
            PositionGroup::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// The six face stats shown on the radar chart. Goalkeepers have zeros.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub pace: u32,
    pub shooting: u32,
    pub passing: u32,
    pub dribbling: u32,
    pub defending: u32,
    pub physic: u32,
}

/// A player from the dataset. Immutable after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Full name; the lookup key.
    pub name: String,
    /// Display name, e.g. "K. Mbappé".
    pub short_name: String,
    /// Lowercase ASCII form of `name` used by the matcher.
    pub search_name: String,
    pub nationality: String,
    pub continent: Continent,
    /// Primary position, e.g. "ST".
    pub position: String,
    pub position_group: PositionGroup,
    pub age: u32,
    pub overall: u32,
    pub club: String,
    pub league: String,
    pub face_url: String,
    pub stats: PlayerStats,
}

impl PlayerRecord {
    /// Build a record from its core attributes. Continent, position group and
    /// search name are derived; short name defaults to the full name.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        nationality: impl Into<String>,
        position: impl Into<String>,
        age: u32,
        overall: u32,
        club: impl Into<String>,
        league: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let nationality = nationality.into();
        let position = position.into();
        Self {
            id,
            short_name: name.clone(),
            search_name: crate::logic::fold_name(&name),
            continent: crate::logic::continent_of(&nationality),
            position_group: crate::logic::position_group_of(&position),
            name,
            nationality,
            position,
            age,
            overall,
            club: club.into(),
            league: league.into(),
            face_url: String::new(),
            stats: PlayerStats::default(),
        }
    }

    /// Same record with a different display name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Client-safe subset (revealed when a game ends).
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary::from_player(self)
    }
}

/// Summary view of a player (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub short_name: String,
    pub long_name: String,
    pub club_name: String,
    pub league_name: String,
    pub nationality_name: String,
    pub age: u32,
    pub overall: u32,
    pub primary_position: String,
    pub player_face_url: String,
    pub stats: PlayerStats,
}

impl PlayerSummary {
    pub fn from_player(p: &PlayerRecord) -> Self {
        Self {
            player_id: p.id,
            short_name: p.short_name.clone(),
            long_name: p.name.clone(),
            club_name: p.club.clone(),
            league_name: p.league.clone(),
            nationality_name: p.nationality.clone(),
            age: p.age,
            overall: p.overall,
            primary_position: p.position.clone(),
            player_face_url: p.face_url.clone(),
            stats: p.stats,
        }
    }
}
