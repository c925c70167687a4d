//! Player dataset: loaded once from CSV at startup, read-only afterwards.

use crate::logic::lookup::{continent_of, fold_name, position_group_of};
use crate::models::{PlayerId, PlayerRecord, PlayerStats};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Columns every dataset file must have.
const REQUIRED_COLUMNS: &[&str] = &[
    "player_id",
    "short_name",
    "long_name",
    "nationality_name",
    "age",
    "overall",
    "club_name",
    "league_name",
];

/// Errors that can occur while loading the dataset. All are fatal at startup.
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// The header row lacks a required column.
    MissingColumn(String),
    /// The file has a header but no usable rows.
    Empty,
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "Could not read dataset: {}", e),
            DatasetError::Csv(e) => write!(f, "Malformed dataset: {}", e),
            DatasetError::MissingColumn(c) => write!(f, "Dataset is missing column '{}'", c),
            DatasetError::Empty => write!(f, "Dataset contains no players"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        DatasetError::Csv(e)
    }
}

/// One CSV row as written by the cleaning script.
#[derive(Debug, Deserialize)]
struct PlayerRow {
    player_id: PlayerId,
    short_name: String,
    long_name: String,
    nationality_name: String,
    age: f64,
    overall: f64,
    club_name: String,
    league_name: String,
    #[serde(default)]
    primary_position: Option<String>,
    /// e.g. "CAM, CM"; the first entry is the primary position.
    #[serde(default)]
    player_positions: Option<String>,
    #[serde(default)]
    player_face_url: Option<String>,
    #[serde(default)]
    search_name: Option<String>,
    #[serde(default)]
    pace: Option<f64>,
    #[serde(default)]
    shooting: Option<f64>,
    #[serde(default)]
    passing: Option<f64>,
    #[serde(default)]
    dribbling: Option<f64>,
    #[serde(default)]
    defending: Option<f64>,
    #[serde(default)]
    physic: Option<f64>,
}

/// Blank or negative stats count as 0 (goalkeepers have no outfield stats).
fn stat(v: Option<f64>) -> u32 {
    v.filter(|x| x.is_finite() && *x > 0.0)
        .map(|x| x.round() as u32)
        .unwrap_or(0)
}

/// Whole-number column that may have been exported as a float ("88.0").
fn whole(v: f64) -> u32 {
    stat(Some(v))
}

impl PlayerRow {
    fn into_record(self) -> PlayerRecord {
        let position = self
            .primary_position
            .filter(|p| !p.trim().is_empty())
            .or_else(|| {
                self.player_positions
                    .as_deref()
                    .and_then(|ps| ps.split(',').next())
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
            })
            .unwrap_or_else(|| "Unknown".to_string());
        let search_name = self
            .search_name
            .map(|s| fold_name(&s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fold_name(&self.long_name));
        PlayerRecord {
            id: self.player_id,
            continent: continent_of(&self.nationality_name),
            position_group: position_group_of(&position),
            name: self.long_name.trim().to_string(),
            short_name: self.short_name.trim().to_string(),
            search_name,
            nationality: self.nationality_name.trim().to_string(),
            position,
            age: whole(self.age),
            overall: whole(self.overall),
            club: self.club_name.trim().to_string(),
            league: self.league_name.trim().to_string(),
            face_url: self.player_face_url.unwrap_or_default(),
            stats: PlayerStats {
                pace: stat(self.pace),
                shooting: stat(self.shooting),
                passing: stat(self.passing),
                dribbling: stat(self.dribbling),
                defending: stat(self.defending),
                physic: stat(self.physic),
            },
        }
    }
}

/// Ordered, immutable, never-empty collection of players.
#[derive(Clone, Debug)]
pub struct PlayerDataset {
    players: Vec<Arc<PlayerRecord>>,
}

impl PlayerDataset {
    /// Load the dataset from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        log::info!("Loaded {} players from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse CSV from any reader. The header row names the columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let has = |name: &str| headers.iter().any(|h| h == name);
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has(**c)) {
            return Err(DatasetError::MissingColumn(missing.to_string()));
        }
        if !has("primary_position") && !has("player_positions") {
            return Err(DatasetError::MissingColumn("primary_position".to_string()));
        }

        // Both the id and the folded full name must be unique.
        let mut seen_ids: HashSet<PlayerId> = HashSet::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut players = Vec::new();
        for row in rdr.deserialize::<PlayerRow>() {
            let record = row?.into_record();
            if !seen_ids.insert(record.id) {
                log::warn!("Skipping duplicate player_id {} ({})", record.id, record.name);
                continue;
            }
            if !seen_names.insert(record.search_name.clone()) {
                log::warn!("Skipping duplicate player name {} (id {})", record.name, record.id);
                continue;
            }
            players.push(record);
        }
        Self::from_records(players)
    }

    /// Build a dataset from records already in memory (dataset order = given order).
    pub fn from_records(players: Vec<PlayerRecord>) -> Result<Self, DatasetError> {
        if players.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self {
            players: players.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players in dataset order.
    pub fn players(&self) -> &[Arc<PlayerRecord>] {
        &self.players
    }

    /// Resolve a name: full name first, then display name, both case and accent insensitive.
    pub fn lookup(&self, name: &str) -> Option<&Arc<PlayerRecord>> {
        let folded = fold_name(name);
        if folded.is_empty() {
            return None;
        }
        self.players
            .iter()
            .find(|p| p.search_name == folded)
            .or_else(|| self.players.iter().find(|p| fold_name(&p.short_name) == folded))
    }

    pub fn lookup_by_id(&self, id: PlayerId) -> Option<&Arc<PlayerRecord>> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Full names in dataset order (autocomplete index).
    pub fn all_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}
