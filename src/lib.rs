//! Footle web app: guess the football player. Library with models and game logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    compare, pick_daily, pick_random, suggest, suggest_names, DatasetError, PlayerDataset,
    Suggestion,
};
pub use models::{
    AttributeFeedback, Continent, Direction, GameError, GameMode, GameSession, GameStatus,
    GameView, GuessEntry, GuessFeedback, NumericFeedback, PlayerId, PlayerRecord, PlayerStats,
    PlayerSummary, PositionGroup, Verdict, MAX_GUESSES,
};
pub use store::{SessionId, SessionStore};
