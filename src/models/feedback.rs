//! Per-attribute verdicts for a single guess.

use crate::models::player::PlayerStats;
use serde::{Deserialize, Serialize};

/// How close a guessed attribute is to the target's.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Exact,
    Close,
    Wrong,
}

/// Which way the target's value lies relative to the guess.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Higher,
    Lower,
    Equal,
}

/// Verdict for a categorical attribute, with the guessed value for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AttributeFeedback {
    pub value: String,
    pub status: Verdict,
}

/// Verdict plus direction hint for a numeric attribute (age, overall).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NumericFeedback {
    pub value: u32,
    pub status: Verdict,
    pub direction: Direction,
}

/// Result of comparing one guess against the target.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessFeedback {
    pub nationality: AttributeFeedback,
    pub position: AttributeFeedback,
    pub age: NumericFeedback,
    pub overall: NumericFeedback,
    pub club: AttributeFeedback,
    pub league: AttributeFeedback,
    pub guess_name: String,
    pub guess_face_url: String,
    pub guess_stats: PlayerStats,
    pub target_stats: PlayerStats,
    /// True when the guessed player is the target.
    pub is_correct: bool,
}

impl GuessFeedback {
    /// Verdicts in display order (nationality, position, age, overall, club, league).
    pub fn verdicts(&self) -> [Verdict; 6] {
        [
            self.nationality.status,
            self.position.status,
            self.age.status,
            self.overall.status,
            self.club.status,
            self.league.status,
        ]
    }
}
