//! GameSession: one player's game against a fixed target, capped at eight guesses.

use crate::logic::{compare, PlayerDataset};
use crate::models::feedback::GuessFeedback;
use crate::models::player::{PlayerId, PlayerRecord, PlayerSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Guesses allowed per game.
pub const MAX_GUESSES: usize = 8;

/// Errors that can occur when submitting a guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// The guess does not resolve to a player in the dataset.
    UnknownPlayerName(String),
    /// The game is already won or lost.
    GameAlreadyOver,
    /// Eight guesses are already recorded.
    GuessLimitReached,
    /// This player was already guessed in this game.
    AlreadyGuessed(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnknownPlayerName(name) => write!(f, "Player not found: {}", name),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::GuessLimitReached => write!(f, "No guesses left ({} max)", MAX_GUESSES),
            GameError::AlreadyGuessed(name) => write!(f, "You already guessed {}", name),
        }
    }
}

impl std::error::Error for GameError {}

/// How the target was chosen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Same target for everyone on a calendar date.
    #[default]
    Daily,
    /// Fresh random target per game.
    Random,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Daily => f.write_str("daily"),
            GameMode::Random => f.write_str("random"),
        }
    }
}

/// Current status of a game. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One recorded guess.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub feedback: GuessFeedback,
}

/// A single game: fixed target, ordered guesses, status.
#[derive(Clone, Debug)]
pub struct GameSession {
    target: Arc<PlayerRecord>,
    mode: GameMode,
    /// Set in daily mode.
    date: Option<NaiveDate>,
    guesses: Vec<GuessEntry>,
    status: GameStatus,
}

impl GameSession {
    /// Start a new game in progress against `target`.
    pub fn new(target: Arc<PlayerRecord>, mode: GameMode) -> Self {
        Self {
            target,
            mode,
            date: None,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::InProgress,
        }
    }

    /// Daily game for `date`.
    pub fn daily(target: Arc<PlayerRecord>, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::new(target, GameMode::Daily)
        }
    }

    pub fn target(&self) -> &PlayerRecord {
        &self.target
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn guesses(&self) -> &[GuessEntry] {
        &self.guesses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Submit a guess by player name (case and accent insensitive).
    ///
    /// Rejected guesses leave the session unchanged.
    pub fn submit_guess(&mut self, dataset: &PlayerDataset, name: &str) -> Result<&GuessEntry, GameError> {
        self.check_open()?;
        let guess = dataset
            .lookup(name)
            .ok_or_else(|| GameError::UnknownPlayerName(name.trim().to_string()))?;
        self.record_guess(guess)
    }

    /// Submit a guess by player id. Same rules as [`GameSession::submit_guess`].
    pub fn submit_guess_by_id(&mut self, dataset: &PlayerDataset, id: PlayerId) -> Result<&GuessEntry, GameError> {
        self.check_open()?;
        let guess = dataset
            .lookup_by_id(id)
            .ok_or_else(|| GameError::UnknownPlayerName(id.to_string()))?;
        self.record_guess(guess)
    }

    fn check_open(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.guesses.len() >= MAX_GUESSES {
            return Err(GameError::GuessLimitReached);
        }
        Ok(())
    }

    fn record_guess(&mut self, guess: &PlayerRecord) -> Result<&GuessEntry, GameError> {
        if self.guesses.iter().any(|g| g.player_id == guess.id) {
            return Err(GameError::AlreadyGuessed(guess.name.clone()));
        }
        let feedback = compare(guess, &self.target);
        let won = feedback.is_correct;
        self.guesses.push(GuessEntry {
            player_id: guess.id,
            name: guess.name.clone(),
            feedback,
        });
        if won {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }
        log::debug!(
            "guess {}/{}: {} -> {:?}",
            self.guesses.len(),
            MAX_GUESSES,
            guess.name,
            self.status
        );
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    /// Serializable view; the target is only revealed once the game is over.
    pub fn view(&self) -> GameView {
        GameView {
            mode: self.mode,
            date: self.date,
            status: self.status,
            guesses: self.guesses.clone(),
            guess_number: self.guesses.len(),
            max_guesses: MAX_GUESSES,
            game_over: self.status.is_terminal(),
            won: self.status == GameStatus::Won,
            target: self
                .status
                .is_terminal()
                .then(|| self.target.summary()),
        }
    }
}

/// Snapshot of a game for the client.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub mode: GameMode,
    pub date: Option<NaiveDate>,
    pub status: GameStatus,
    pub guesses: Vec<GuessEntry>,
    pub guess_number: usize,
    pub max_guesses: usize,
    pub game_over: bool,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PlayerSummary>,
}
