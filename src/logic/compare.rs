//! Guess comparison: one verdict per attribute.
//!
//! - Nationality: exact, or close when both map to the same (known) continent.
//! - Position: exact, or close when both map to the same (known) position group.
//! - Age / overall: exact, close within [`NUMERIC_CLOSE_RANGE`], plus a direction hint.
//! - Club / league: exact or wrong.

use crate::models::{
    AttributeFeedback, Continent, Direction, GuessFeedback, NumericFeedback, PlayerRecord,
    PositionGroup, Verdict,
};

/// Max absolute difference for a "close" age or overall.
pub const NUMERIC_CLOSE_RANGE: u32 = 2;

/// Compare `guess` against `target`. Neither record is modified.
pub fn compare(guess: &PlayerRecord, target: &PlayerRecord) -> GuessFeedback {
    GuessFeedback {
        nationality: AttributeFeedback {
            value: guess.nationality.clone(),
            status: compare_nationality(guess, target),
        },
        position: AttributeFeedback {
            value: guess.position.clone(),
            status: compare_position(guess, target),
        },
        age: compare_numeric(guess.age, target.age),
        overall: compare_numeric(guess.overall, target.overall),
        club: AttributeFeedback {
            value: guess.club.clone(),
            status: exact_or_wrong(&guess.club, &target.club),
        },
        league: AttributeFeedback {
            value: guess.league.clone(),
            status: exact_or_wrong(&guess.league, &target.league),
        },
        guess_name: guess.short_name.clone(),
        guess_face_url: guess.face_url.clone(),
        guess_stats: guess.stats,
        target_stats: target.stats,
        is_correct: guess.name == target.name,
    }
}

fn exact_or_wrong(guess: &str, target: &str) -> Verdict {
    if guess == target {
        Verdict::Exact
    } else {
        Verdict::Wrong
    }
}

fn compare_nationality(guess: &PlayerRecord, target: &PlayerRecord) -> Verdict {
    if guess.nationality == target.nationality {
        Verdict::Exact
    } else if guess.continent != Continent::Unknown && guess.continent == target.continent {
        Verdict::Close
    } else {
        Verdict::Wrong
    }
}

fn compare_position(guess: &PlayerRecord, target: &PlayerRecord) -> Verdict {
    if guess.position == target.position {
        Verdict::Exact
    } else if guess.position_group != PositionGroup::Unknown
        && guess.position_group == target.position_group
    {
        Verdict::Close
    } else {
        Verdict::Wrong
    }
}

/// Verdict and direction for a numeric attribute.
pub fn compare_numeric(guess: u32, target: u32) -> NumericFeedback {
    let (status, direction) = if guess == target {
        (Verdict::Exact, Direction::Equal)
    } else {
        let status = if guess.abs_diff(target) <= NUMERIC_CLOSE_RANGE {
            Verdict::Close
        } else {
            Verdict::Wrong
        };
        let direction = if target > guess {
            Direction::Higher
        } else {
            Direction::Lower
        };
        (status, direction)
    };
    NumericFeedback {
        value: guess,
        status,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_verdicts_and_directions() {
        for g in 15..45u32 {
            for t in 15..45u32 {
                let fb = compare_numeric(g, t);
                let diff = g.abs_diff(t);
                let expected = match diff {
                    0 => Verdict::Exact,
                    1..=2 => Verdict::Close,
                    _ => Verdict::Wrong,
                };
                assert_eq!(fb.status, expected, "g={g} t={t}");
                let dir = match t.cmp(&g) {
                    std::cmp::Ordering::Greater => Direction::Higher,
                    std::cmp::Ordering::Less => Direction::Lower,
                    std::cmp::Ordering::Equal => Direction::Equal,
                };
                assert_eq!(fb.direction, dir, "g={g} t={t}");
                assert_eq!(fb.value, g);
            }
        }
    }

    #[test]
    fn test_unknown_categories_are_never_close() {
        let guess = PlayerRecord::new(1, "A", "Atlantis", "SW", 25, 85, "X", "Serie A");
        let target = PlayerRecord::new(2, "B", "Lemuria", "LIB", 25, 85, "Y", "Serie A");
        let fb = compare(&guess, &target);
        assert_eq!(fb.nationality.status, Verdict::Wrong);
        assert_eq!(fb.position.status, Verdict::Wrong);
        assert_eq!(fb.league.status, Verdict::Exact);
        assert_eq!(fb.club.status, Verdict::Wrong);
    }

    #[test]
    fn test_compare_does_not_touch_inputs() {
        let guess = PlayerRecord::new(1, "A", "Spain", "CM", 25, 85, "X", "La Liga");
        let target = PlayerRecord::new(2, "B", "Portugal", "CDM", 27, 86, "X", "La Liga");
        let (g0, t0) = (guess.clone(), target.clone());
        let _ = compare(&guess, &target);
        assert_eq!(guess, g0);
        assert_eq!(target, t0);
    }
}
