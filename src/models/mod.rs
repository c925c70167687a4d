//! Data structures for the game: players, guess feedback, game sessions.

mod feedback;
mod player;
mod session;

pub use feedback::{AttributeFeedback, Direction, GuessFeedback, NumericFeedback, Verdict};
pub use player::{Continent, PlayerId, PlayerRecord, PlayerStats, PlayerSummary, PositionGroup};
pub use session::{GameError, GameMode, GameSession, GameStatus, GameView, GuessEntry, MAX_GUESSES};
